//! CSS rule syntax checks and serialization helpers using the `cssparser` crate.
//!
//! Rule buckets accept rule *text*, the same way a browser stylesheet's
//! `insertRule` does, so they need the same guard: the text must be exactly
//! one `selector { declarations }` rule. The check is structural only; it does
//! not interpret selectors or property values.

use cssparser::{Delimiter, ParseError, ParseErrorKind, Parser, ParserInput, Token};

use crate::{Error, Result};

type CheckResult<'i, T> = std::result::Result<T, ParseError<'i, &'static str>>;

/// Verify that `css` is a single well-formed qualified rule.
///
/// # Example
///
/// ```
/// use fileglyph_style::parser::check_rule;
///
/// assert!(check_rule(".file_id_3::before{color:red;}").is_ok());
/// assert!(check_rule(".file_id_3::before").is_err());
/// ```
pub fn check_rule(css: &str) -> Result<()> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    check_qualified_rule(&mut parser).map_err(|e| Error::invalid_rule(css, describe(&e)))
}

fn check_qualified_rule<'i>(parser: &mut Parser<'i, '_>) -> CheckResult<'i, ()> {
    let prelude_tokens = parser.parse_until_before(
        Delimiter::CurlyBracketBlock,
        |p| -> CheckResult<'i, usize> {
            let mut count = 0usize;
            while let Ok(token) = p.next() {
                if is_invalid_token(token) || matches!(token, Token::Semicolon) {
                    return Err(p.new_custom_error("unexpected token in selector"));
                }
                count += 1;
            }
            Ok(count)
        },
    )?;

    if prelude_tokens == 0 {
        return Err(parser.new_custom_error("missing selector"));
    }

    let opens_block = matches!(parser.next(), Ok(Token::CurlyBracketBlock));
    if !opens_block {
        return Err(parser.new_custom_error("expected '{' after selector"));
    }

    parser.parse_nested_block(|p| -> CheckResult<'i, ()> {
        while let Ok(token) = p.next() {
            if is_invalid_token(token) {
                return Err(p.new_custom_error("unexpected token in declaration block"));
            }
        }
        Ok(())
    })?;

    if !parser.is_exhausted() {
        return Err(parser.new_custom_error("unexpected content after rule"));
    }

    Ok(())
}

fn is_invalid_token(token: &Token<'_>) -> bool {
    matches!(
        token,
        Token::BadString(_)
            | Token::BadUrl(_)
            | Token::CloseCurlyBracket
            | Token::CloseParenthesis
            | Token::CloseSquareBracket
    )
}

fn describe(err: &ParseError<'_, &'static str>) -> String {
    let message = match &err.kind {
        ParseErrorKind::Custom(message) => (*message).to_string(),
        ParseErrorKind::Basic(basic) => format!("{:?}", basic),
    };
    format!(
        "{} at line {}, column {}",
        message,
        err.location.line + 1,
        err.location.column
    )
}

/// Serialize `value` as a quoted CSS string.
pub fn css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    cssparser::serialize_string(value, &mut out).ok();
    out
}

/// Serialize `value` as a CSS identifier, escaping as needed.
pub fn css_identifier(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    cssparser::serialize_identifier(value, &mut out).ok();
    out
}
