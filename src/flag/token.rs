use crate::error::{Error, Result};

/// What a single command line argument turned out to be
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token {
    /// `--` on its own. Flag parsing stops and the terminator is dropped.
    Terminator,
    /// `-name`, `--name`, `-name=value` or `--name=value`
    Flag { name: String, value: Option<String> },
    /// Anything that is not a flag. Flag parsing stops here.
    Operand,
}

/// check if a string is a double dash flag
pub fn is_long(text: &str) -> bool {
    text.starts_with("--") && text.len() > 2
}

/// check if a string is a flag at all
pub fn is_flag(text: &str) -> bool {
    text.starts_with('-') && text.len() > 1
}

/// Classify one argument. One or two leading dashes mean the same thing;
/// a value may be attached with '='.
pub fn classify(text: &str) -> Result<Token> {
    if !is_flag(text) {
        return Ok(Token::Operand);
    }
    if text == "--" {
        return Ok(Token::Terminator);
    }

    let body = if is_long(text) { &text[2..] } else { &text[1..] };
    if body.starts_with('-') || body.starts_with('=') {
        return Err(Error::BadSyntax(text.to_owned()));
    }

    Ok(match body.split_once('=') {
        Some((name, value)) => Token::Flag {
            name: name.to_owned(),
            value: Some(value.to_owned()),
        },
        None => Token::Flag {
            name: body.to_owned(),
            value: None,
        },
    })
}
