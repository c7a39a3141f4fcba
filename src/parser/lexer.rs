//! Lexer for tokenizing pattern strings.
//!
//! Field spellings are matched greedily, longest first, at every position:
//! `iYYYY` is one field, `iYYY` is `iYY` followed by a literal `Y`. Text in
//! single quotes is never matched against fields, and `''` stands for an
//! apostrophe both inside and outside quotes. Anything else is literal.

use crate::error::ParseError;
use crate::parser::tokens::{Token, FIELD_TOKENS};

const QUOTE: char = '\'';

/// A lexer for pattern strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        let start = self.position;
        let rest = &self.input[start..];

        let Some(c) = rest.chars().next() else {
            return Ok(Token::Eof);
        };

        if c == QUOTE {
            return self.lex_quoted(start);
        }

        if let Some((spelling, field)) = FIELD_TOKENS
            .iter()
            .find(|(spelling, _)| rest.starts_with(spelling))
        {
            self.position += spelling.len();
            return Ok(Token::Field(*field));
        }

        self.position += c.len_utf8();
        Ok(Token::Literal(c))
    }

    /// Tokenizes the whole input, excluding the final `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token == Token::Eof {
                return Ok(tokens);
            }
            tokens.push(token);
        }
    }

    /// Lexes a quoted literal starting at the opening quote at `start`.
    fn lex_quoted(&mut self, start: usize) -> Result<Token, ParseError> {
        let body = start + QUOTE.len_utf8();

        // '' outside quotes is a lone apostrophe
        if self.input[body..].starts_with(QUOTE) {
            self.position = body + QUOTE.len_utf8();
            return Ok(Token::Literal(QUOTE));
        }

        let mut text = String::new();
        let mut pos = body;
        loop {
            let rest = &self.input[pos..];
            let close = rest
                .find(QUOTE)
                .ok_or(ParseError::UnterminatedQuote { position: start })?;
            text.push_str(&rest[..close]);
            pos += close + QUOTE.len_utf8();

            if self.input[pos..].starts_with(QUOTE) {
                text.push(QUOTE);
                pos += QUOTE.len_utf8();
            } else {
                break;
            }
        }

        self.position = pos;
        Ok(Token::QuotedString(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Field, TimeField};

    fn tokens(input: &str) -> Vec<Token> {
        Lexer::new(input).tokenize().unwrap()
    }

    #[test]
    fn test_longest_match_first() {
        assert_eq!(tokens("iYYYY"), vec![Token::Field(Field::Year4)]);
        assert_eq!(
            tokens("iYYY"),
            vec![Token::Field(Field::Year2), Token::Literal('Y')]
        );
        assert_eq!(tokens("iMMMM"), vec![Token::Field(Field::MonthLong)]);
        assert_eq!(tokens("iEEE"), vec![Token::Field(Field::WeekdayShort)]);
    }

    #[test]
    fn test_time_tokens() {
        assert_eq!(
            tokens("HH:mm"),
            vec![
                Token::Field(Field::Time(TimeField::Hour24Padded)),
                Token::Literal(':'),
                Token::Field(Field::Time(TimeField::Minute2)),
            ]
        );
        assert_eq!(tokens("zzz"), vec![Token::Field(Field::Time(TimeField::ZoneName))]);
        assert_eq!(
            tokens("ZZZ"),
            vec![
                Token::Field(Field::Time(TimeField::OffsetFull)),
                Token::Field(Field::Time(TimeField::OffsetNarrow)),
            ]
        );
    }

    #[test]
    fn test_quoted_literal() {
        assert_eq!(
            tokens("'day' iD"),
            vec![
                Token::QuotedString("day".to_string()),
                Token::Literal(' '),
                Token::Field(Field::Day),
            ]
        );
        assert_eq!(tokens("'it''s'"), vec![Token::QuotedString("it's".to_string())]);
        assert_eq!(tokens("''"), vec![Token::Literal('\'')]);
    }

    #[test]
    fn test_unterminated_quote() {
        let err = Lexer::new("iD 'open").tokenize().unwrap_err();
        assert_eq!(err, ParseError::UnterminatedQuote { position: 3 });
    }

    #[test]
    fn test_non_ascii_literals() {
        assert_eq!(
            tokens("iD–é"),
            vec![
                Token::Field(Field::Day),
                Token::Literal('–'),
                Token::Literal('é'),
            ]
        );
    }
}
