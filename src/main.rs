use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

use anyhow::Context;
use beginpp::{Diagnostic, Lexer, Reporter, Translator, SAMPLE_PROGRAM};

mod args;

struct Stderr;

impl Reporter for Stderr {
    fn report(&mut self, diagnostic: Diagnostic) {
        eprintln!("{diagnostic}");
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = {
        use clap::Parser;
        args::Args::parse()
    };
    let translator = Translator::shared();
    let source_content = read_source(&args)?;
    if args.tokens {
        let mut lexer = Lexer::new(&source_content);
        while let Some(token) = lexer.next_token(&mut Stderr) {
            println!("{}\t{}\t{}", token.line, token.kind, token.content);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let Some(program) = translator.translate_with(&source_content, &mut Stderr) else {
        return Ok(ExitCode::FAILURE);
    };
    match &args.output {
        Some(path) => fs::write(path, format!("{program}\n"))
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{program}"),
    }
    Ok(ExitCode::SUCCESS)
}

fn read_source(args: &args::Args) -> anyhow::Result<String> {
    if args.demo {
        return Ok(SAMPLE_PROGRAM.to_owned());
    }
    if let Some(text) = &args.eval {
        return Ok(text.clone());
    }
    match &args.source {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
