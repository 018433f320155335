pub mod encoder;
pub mod error;
pub mod resolver;
pub mod symbols;

pub use encoder::encode;
pub use error::{AsmError, Result};
pub use resolver::resolve;

/// Strip `//` comments and surrounding whitespace, dropping blank lines.
/// The resolver and encoder only ever see the lines this keeps.
pub fn clean_lines(source: &str) -> Vec<&str> {
    source
        .lines()
        .map(|line| line.split("//").next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Assemble Hack assembly source to binary, one 16-bit word per line.
pub fn assemble(source: &str) -> Result<String> {
    let lines = clean_lines(source);
    let resolved = resolve(&lines)?;
    let words = encode(&resolved)?;
    Ok(words.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_program() {
        let source = r#"
            @2
            D=A
            @3
            D=D+A
            @0
            M=D
        "#;

        let result = assemble(source).unwrap();
        let lines: Vec<&str> = result.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "0000000000000010"); // @2
        assert_eq!(lines[1], "1110110000010000"); // D=A
        assert_eq!(lines[2], "0000000000000011"); // @3
        assert_eq!(lines[3], "1110000010010000"); // D=D+A
        assert_eq!(lines[4], "0000000000000000"); // @0
        assert_eq!(lines[5], "1110001100001000"); // M=D
    }

    #[test]
    fn test_with_labels() {
        let source = r#"
            @i
            M=1
        (LOOP)
            @i
            D=M
            @10
            D=D-A
            @END
            D;JGT
            @i
            M=M+1
            @LOOP
            0;JMP
        (END)
            @END
            0;JMP
        "#;

        let result = assemble(source).unwrap();
        let lines: Vec<&str> = result.lines().collect();

        // 14 instructions; the two labels produce none.
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[10], "0000000000000010"); // @LOOP = 2
        assert_eq!(lines[12], "0000000000001100"); // @END = 12
    }

    #[test]
    fn test_predefined_symbols() {
        let source = r#"
            @R0
            D=M
            @SP
            M=D
            @SCREEN
            D=A
            @KBD
            D=A
        "#;

        let result = assemble(source).unwrap();
        let lines: Vec<&str> = result.lines().collect();

        assert_eq!(lines[0], "0000000000000000"); // @R0 (0)
        assert_eq!(lines[2], "0000000000000000"); // @SP (0)
        assert_eq!(lines[4], "0100000000000000"); // @SCREEN (16384)
        assert_eq!(lines[6], "0110000000000000"); // @KBD (24576)
    }

    #[test]
    fn test_variable_allocation() {
        let source = r#"
            @i
            M=1
            @j
            M=1
            @i
            D=M
        "#;

        let result = assemble(source).unwrap();
        let lines: Vec<&str> = result.lines().collect();

        assert_eq!(lines[0], "0000000000010000"); // @i (16)
        assert_eq!(lines[2], "0000000000010001"); // @j (17)
        assert_eq!(lines[4], "0000000000010000"); // @i (16) again
    }

    #[test]
    fn test_comments_and_whitespace() {
        let source = r#"
            // This is a comment
            @2     // inline comment
            D=A    // another comment

            // Empty line above
        "#;

        let result = assemble(source).unwrap();
        assert_eq!(result.lines().count(), 2);
    }

    #[test]
    fn test_duplicate_label_takes_later_address() {
        let source = r#"
        (LOOP)
            @1
        (LOOP)
            @LOOP
        "#;

        let result = assemble(source).unwrap();
        let lines: Vec<&str> = result.lines().collect();

        assert_eq!(lines[1], "0000000000000001"); // @LOOP = 1, not 0
    }

    #[test]
    fn test_unknown_symbol_becomes_a_variable() {
        let source = "@NEVER_DECLARED_ANYWHERE\n0;JMP";
        let result = assemble(source).unwrap();
        assert_eq!(result.lines().next(), Some("0000000000010000")); // 16
    }

    #[test]
    fn test_garbage_line_fails() {
        match assemble("FOO") {
            Err(AsmError::UnrecognizedLine { text }) => assert_eq!(text, "FOO"),
            other => panic!("expected unrecognized line, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(assemble("").unwrap(), "");
        assert_eq!(assemble("// nothing\n\n  \t\n").unwrap(), "");
    }
}
