//! Lexer for layout descriptions using logos
//!
//! Descriptions are free-form text; the only lexical structure the
//! generator cares about is standalone digit runs ("8 rows"). A digit
//! run glued to word characters ("24px", "item_3") is not a count and
//! must never surface as one, so those lex as separate tokens.

use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[^A-Za-z0-9_]+")]
pub enum Token {
    /// A standalone digit run, parsed as a base-10 count
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u64>().ok())]
    Number(u64),

    /// A word; may contain digits after the first character ("item_3")
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,

    /// A digit run glued to a following word ("24px")
    #[regex(r"[0-9]+[A-Za-z_][A-Za-z0-9_]*")]
    Embedded,
}

/// Extract the first standalone digit run from the text.
///
/// Returns `None` when the text contains no such run.
pub fn extract_number(text: &str) -> Option<u64> {
    Token::lexer(text)
        .filter_map(Result::ok)
        .find_map(|token| match token {
            Token::Number(value) => Some(value),
            _ => None,
        })
}
