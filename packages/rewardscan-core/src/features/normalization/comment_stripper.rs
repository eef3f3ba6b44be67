//! Comment stripping
//!
//! Two regex passes, in this order:
//! 1. `#` up to end of line
//! 2. `'''...'''` / `"""..."""` blocks, non-greedy, across lines
//!
//! The passes are purely lexical. A `#` inside a string literal is treated
//! as a comment start, and a lone unterminated triple quote is left in place
//! because the pair pattern cannot match it.

use once_cell::sync::Lazy;
use regex::Regex;

// Constant patterns, exercised by the tests below
static LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#.*").expect("line comment pattern is valid"));

static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"('''[\s\S]*?'''|"""[\s\S]*?""")"#).expect("block comment pattern is valid")
});

/// Strip single-line comments and triple-quoted blocks from `code`
///
/// # Example
///
/// ```rust
/// use rewardscan_core::features::normalization::strip_comments;
///
/// assert_eq!(strip_comments("code # comment"), "code ");
/// assert_eq!(strip_comments("x = 1"), "x = 1");
/// ```
pub fn strip_comments(code: &str) -> String {
    let without_line_comments = LINE_COMMENT.replace_all(code, "");
    BLOCK_COMMENT
        .replace_all(&without_line_comments, "")
        .into_owned()
}
