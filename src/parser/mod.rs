//! Parser for Hijri format patterns.

pub mod lexer;
pub mod tokens;

use crate::ast::{Pattern, PatternPart};
use crate::error::ParseError;
use lexer::Lexer;
use tokens::Token;

/// Parse a pattern string into a [`Pattern`].
///
/// Adjacent literal characters and quoted text are merged into a single
/// literal part. An empty pattern is valid and formats to an empty string.
pub fn parse(pattern: &str) -> Result<Pattern, ParseError> {
    let mut lexer = Lexer::new(pattern);
    let mut parts = Vec::new();
    let mut literal = String::new();

    loop {
        match lexer.next_token()? {
            Token::Eof => break,
            Token::Literal(c) => literal.push(c),
            Token::QuotedString(text) => literal.push_str(&text),
            Token::Field(field) => {
                if !literal.is_empty() {
                    parts.push(PatternPart::Literal(std::mem::take(&mut literal)));
                }
                parts.push(PatternPart::Field(field));
            }
        }
    }

    if !literal.is_empty() {
        parts.push(PatternPart::Literal(literal));
    }

    Ok(Pattern::from_parts(parts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Field;

    #[test]
    fn test_parse_merges_literals() {
        let pattern = parse("iD 'of' iMMMM").unwrap();
        assert_eq!(
            pattern.parts(),
            &[
                PatternPart::Field(Field::Day),
                PatternPart::Literal(" of ".to_string()),
                PatternPart::Field(Field::MonthLong),
            ]
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("").unwrap().parts().is_empty());
    }
}
