use std::io::Cursor;

use pretty_assertions::assert_eq;
use shadevec::repl;

const BANNER: &str = "Usage: at # prompt, enter 6-digit hex code or nothing to quit\n";

/// Run the loop over an in-memory transcript and capture its output.
fn run_repl(input: &str) -> (shadevec::Result<()>, String) {
    let mut output = Vec::new();
    let result = repl::run(Cursor::new(input), &mut output);
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn test_single_conversion() {
    let (result, output) = run_repl("FF8000\n\n");
    assert!(result.is_ok());
    assert_eq!(output, format!("{BANNER}#vec3(1.0, 0.502, 0.0)\n#"));
}

#[test]
fn test_conversions_in_order() {
    let (result, output) = run_repl("FFFFFF\n000000\nabcdef\n\n");
    assert!(result.is_ok());
    assert_eq!(
        output,
        format!(
            "{BANNER}#vec3(1.0, 1.0, 1.0)\n#vec3(0.0, 0.0, 0.0)\n#vec3(0.671, 0.804, 0.937)\n#"
        )
    );
}

#[test]
fn test_eof_without_trailing_newline() {
    let (result, output) = run_repl("FF8000");
    assert!(result.is_ok());
    assert_eq!(output, format!("{BANNER}#vec3(1.0, 0.502, 0.0)\n#"));
}

#[test]
fn test_immediate_eof_quits_cleanly() {
    let (result, output) = run_repl("");
    assert!(result.is_ok());
    assert_eq!(output, format!("{BANNER}#"));
}

#[test]
fn test_blank_line_quits_cleanly() {
    let (result, output) = run_repl("   \n");
    assert!(result.is_ok());
    assert_eq!(output, format!("{BANNER}#"));
}

#[test]
fn test_invalid_hex_aborts_loop() {
    let (result, output) = run_repl("zz\n");
    assert!(matches!(
        result,
        Err(shadevec::Error::InvalidHexCode { .. })
    ));
    // No vec3 line for the bad token; the banner and prompt were written
    assert_eq!(output, format!("{BANNER}#"));
}

#[test]
fn test_output_before_invalid_token_is_kept() {
    let (result, output) = run_repl("FFFFFF\nnope\n");
    assert!(result.is_err());
    assert_eq!(output, format!("{BANNER}#vec3(1.0, 1.0, 1.0)\n#"));
}
