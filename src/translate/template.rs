pub const ENTRY_POINT_OPEN: &str = "int main(){";
pub const ENTRY_POINT_CLOSE: &str = "}";
// Emitted verbatim, not `endl`.
pub const END_OF_LINE_MARKER: &str = "end1";
