use beginpp::{translate, Diagnostic, Translator, SAMPLE_PROGRAM};

fn assert_golden(src: &str, expected: &str) {
    let got = translate(src).unwrap();
    assert_eq!(got, expected);
}

#[test]
fn golden_single_assignment() {
    assert_golden("begin x = 10; end", "int main(){\nx = 10;\n\n}");
}

#[test]
fn golden_print_keeps_end1() {
    assert_golden("begin print 5; end", "int main(){\ncout << 5 << end1;\n\n}");
}

#[test]
fn golden_repeat_body_is_not_braced() {
    assert_golden(
        "begin repeat 3 begin a = 1; end; end",
        "int main(){\nfor (int i = 0; i < 3; i++) a = 1;\n;\n\n}",
    );
}

#[test]
fn golden_repeat_with_several_statements() {
    assert_golden(
        "begin repeat 2 begin a = 1; print a; end; end",
        "int main(){\nfor (int i = 0; i < 2; i++) a = 1;\ncout << a << end1;\n;\n\n}",
    );
}

#[test]
fn golden_expression_keeps_source_order() {
    assert_golden(
        "begin x = a - b - c + 1; end",
        "int main(){\nx = a - b - c + 1;\n\n}",
    );
}

#[test]
fn golden_numbers_are_verbatim() {
    assert_golden(
        "begin x = 007 + 0; repeat 010 begin print 00; end; end",
        "int main(){\nx = 007 + 0;\nfor (int i = 0; i < 010; i++) cout << 00 << end1;\n;\n\n}",
    );
}

#[test]
fn golden_keywords_are_case_sensitive() {
    assert_golden(
        "begin Print = BEGIN; end",
        "int main(){\nPrint = BEGIN;\n\n}",
    );
}

#[test]
fn golden_layout_is_ignored() {
    assert_golden(
        "begin\n\tx\n=\n1 ;\n\n\n  y = x\t+ 2;end",
        "int main(){\nx = 1;\ny = x + 2;\n\n}",
    );
}

#[test]
fn golden_sample_program() {
    assert_golden(
        SAMPLE_PROGRAM,
        "int main(){\n\
         x = 10;\n\
         y = 20;\n\
         for (int i = 0; i < 100; i++) a = x + 10;\n\
         b = y + x + 100;\n\
         cout << a << end1;\n\
         ;\n\
         cout << x << end1;\n\
         \n\
         }",
    );
}

#[test]
fn one_wrapper_and_one_terminator_per_statement() {
    let output = translate(SAMPLE_PROGRAM).unwrap();
    assert_eq!(output.matches("int main(){").count(), 1);
    assert_eq!(output.matches(";\n").count(), 7);
}

#[test]
fn translation_is_deterministic() {
    let translator = Translator::new();
    let inputs = [SAMPLE_PROGRAM, "begin x = 1 @; end", "begin x = $; end"];
    for input in inputs {
        let mut first: Vec<Diagnostic> = Vec::new();
        let mut second: Vec<Diagnostic> = Vec::new();
        let a = translator.translate_with(input, &mut first);
        let b = translator.translate_with(input, &mut second);
        assert_eq!(a, b);
        assert_eq!(first, second);
    }
}

#[test]
fn shared_translator_serves_concurrent_calls() {
    let translator = Translator::shared();
    let inputs: Vec<String> = (0..8)
        .map(|n| format!("begin\n{}x{n} = {n};\nend", "\n".repeat(n)))
        .collect();
    let expected: Vec<_> = inputs
        .iter()
        .map(|input| translator.translate(input))
        .collect();
    let got: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| scope.spawn(move || translator.translate(input)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });
    assert_eq!(got, expected);
    assert_eq!(got[3].as_deref(), Ok("int main(){\nx3 = 3;\n\n}"));
}

#[test]
fn recoverable_diagnostics_do_not_block_output() {
    let translator = Translator::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let output = translator.translate_with("begin x = 10 @; end", &mut diagnostics);
    assert_eq!(output.as_deref(), Some("int main(){\nx = 10;\n\n}"));
    assert_eq!(
        diagnostics,
        vec![Diagnostic::IllegalCharacter {
            character: '@',
            line: 1
        }]
    );
}
