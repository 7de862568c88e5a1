//! Loader: program text → one token list per source line.

use bbvv_common::Opcode;

/// A token starting with this marker discards the rest of its line.
pub const COMMENT_MARKER: &str = "//";

/// Tokenize a single line of program text.
///
/// Blank and comment-only lines yield the single placeholder token `empty`,
/// so the token list count always equals the source line count.
pub(crate) fn tokenize_line(line: &str) -> Vec<&str> {
    let tokens: Vec<&str> = line
        .split_whitespace()
        .take_while(|word| !word.starts_with(COMMENT_MARKER))
        .collect();

    if tokens.is_empty() {
        vec![Opcode::Empty.mnemonic()]
    } else {
        tokens
    }
}

/// Split program text into token lists, one per line.
pub(crate) fn load(text: &str) -> Vec<Vec<&str>> {
    text.lines().map(tokenize_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line() {
        assert_eq!(tokenize_line(""), vec!["empty"]);
    }

    #[test]
    fn whitespace_only() {
        assert_eq!(tokenize_line("   \t  "), vec!["empty"]);
    }

    #[test]
    fn comment_only() {
        assert_eq!(tokenize_line("// count down"), vec!["empty"]);
    }

    #[test]
    fn trailing_comment() {
        assert_eq!(
            tokenize_line("add #1 #0 1 // bump"),
            vec!["add", "#1", "#0", "1"]
        );
    }

    #[test]
    fn comment_marker_glued_to_token() {
        assert_eq!(tokenize_line("print //done"), vec!["print"]);
    }

    #[test]
    fn marker_inside_token_is_not_a_comment() {
        assert_eq!(tokenize_line("print//x"), vec!["print//x"]);
    }

    #[test]
    fn leading_whitespace() {
        assert_eq!(tokenize_line("    exit"), vec!["exit"]);
    }

    #[test]
    fn load_preserves_line_alignment() {
        let lines = load("set #1 #0 1\n\n// note\nexit\n");
        assert_eq!(
            lines,
            vec![
                vec!["set", "#1", "#0", "1"],
                vec!["empty"],
                vec!["empty"],
                vec!["exit"],
            ]
        );
    }

    #[test]
    fn load_accepts_crlf() {
        assert_eq!(load("print\r\nexit\r\n"), vec![vec!["print"], vec!["exit"]]);
    }

    #[test]
    fn load_empty_text() {
        assert!(load("").is_empty());
    }
}
