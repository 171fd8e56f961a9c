//! Server gump layout language.
//!
//! A layout is a sequence of brace-delimited commands such as
//! `{button 10 20 100 101 1 0 5}{page 1}{text 5 5 0 0}`. Each command is a
//! name followed by space-separated positional parameters; text parameters
//! index into a separate array of lines sent alongside the layout.

mod commands;
mod interpreter;

pub use commands::{CommandHandler, COMMANDS};
pub use interpreter::{build_gump, LayoutBuilder};

use crate::error::LayoutError;

/// Split a layout into commands. Brace groups are one command each; text
/// outside braces splits on whitespace. An unterminated group runs to the end.
pub fn tokenize_commands(layout: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = layout;
    while !rest.is_empty() {
        match rest.find('{') {
            Some(open) => {
                out.extend(rest[..open].split_whitespace());
                let body = &rest[open + 1..];
                match body.find('}') {
                    Some(close) => {
                        out.push(body[..close].trim());
                        rest = &body[close + 1..];
                    }
                    None => {
                        out.push(body.trim());
                        rest = "";
                    }
                }
            }
            None => {
                out.extend(rest.split_whitespace());
                rest = "";
            }
        }
    }
    out.retain(|c| !c.is_empty());
    out
}

/// Split one command into its parameters. Only spaces separate; tabs are
/// kept because localized argument lists use them.
pub fn tokenize_params(command: &str) -> Vec<&str> {
    command.split(' ').filter(|t| !t.is_empty()).collect()
}

/// Positional parameters of one command; index 0 is the command name.
#[derive(Debug, Clone)]
pub struct Params<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> Params<'a> {
    pub fn parse(command: &'a str) -> Self {
        Self { tokens: tokenize_params(command) }
    }

    pub fn name(&self) -> &'a str {
        self.tokens.first().copied().unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied()
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn str(&self, index: usize) -> Result<&'a str, LayoutError> {
        self.get(index).ok_or_else(|| LayoutError::MissingParam {
            command: self.name().to_string(),
            index,
        })
    }

    /// Integer parameter, decimal or `0x` hex.
    pub fn num<T: TryFrom<i64>>(&self, index: usize) -> Result<T, LayoutError> {
        let raw = self.str(index)?;
        parse_number(raw)
            .and_then(|n| T::try_from(n).ok())
            .ok_or_else(|| LayoutError::BadNumber {
                command: self.name().to_string(),
                index,
                value: raw.to_string(),
            })
    }

    /// Like [`Params::num`] but `None` when the parameter is absent.
    pub fn opt_num<T: TryFrom<i64>>(&self, index: usize) -> Result<Option<T>, LayoutError> {
        if index < self.tokens.len() {
            self.num(index).map(Some)
        } else {
            Ok(None)
        }
    }
}

fn parse_number(raw: &str) -> Option<i64> {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    let value = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        Some(hex) => i64::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<i64>().ok()?,
    };
    Some(if negative { -value } else { value })
}
