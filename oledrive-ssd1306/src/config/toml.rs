//! Minimal TOML reader for the display section
//!
//! Reads only the `[display]` table of a larger config file. Outside it,
//! lines are only checked for `[table]` / `[[array]]` headers, so other
//! tables may use any TOML (multi-line arrays, nested rows). This is NOT a
//! general TOML parser.
//!
//! Supported inside `[display]`:
//! - `key = value` pairs (integer, string)
//! - Integers in decimal or `0x` hex
//! - Comments (# ...), including trailing ones
//!
//! Recognised keys under `[display]`:
//! - `address` / `addr` - 7-bit I2C address
//! - `draw_color` / `color` - `"on"`, `"off"`, `"white"`, `"black"`, `1`, `0`
//! - `font_scale` / `fontsize` - 0-255

use core::fmt;

use super::types::{DrawColor, SessionConfig};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Malformed section header
    InvalidSection,
    /// Line is neither a header nor `key = value`
    InvalidLine,
    /// Key not known in the display section
    UnknownKey,
    /// Value has the wrong type or is out of range
    InvalidValue,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParseError::InvalidSection => "invalid section header",
            ParseError::InvalidLine => "expected `key = value`",
            ParseError::UnknownKey => "unknown key in [display]",
            ParseError::InvalidValue => "invalid value",
        };
        f.write_str(msg)
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    Other,
}

/// Parse the `[display]` section into a [`SessionConfig`]
///
/// Keys that are absent keep their defaults. Lines outside `[display]` are
/// only checked for table headers, so other tables may hold any TOML.
pub fn parse_config(input: &str) -> Result<SessionConfig, ParseError> {
    let mut config = SessionConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = table_name(line) {
            section = match name {
                "display" => Section::Display,
                _ => Section::Other,
            };
            continue;
        }

        if section != Section::Display {
            continue;
        }

        if line.starts_with('[') {
            return Err(ParseError::InvalidSection);
        }
        let (key, value) = split_entry(line).ok_or(ParseError::InvalidLine)?;
        apply_value(key, value, &mut config)?;
    }

    Ok(config)
}

/// Drop a trailing `#` comment that is not inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in line.char_indices() {
        match ch {
            '\\' if in_string => escaped = !escaped,
            '"' if !escaped => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => escaped = false,
        }
    }
    line
}

/// Name of a `[table]` or `[[array]]` header, `None` for anything else
///
/// Array rows such as `[1, 2],` are not headers.
fn table_name(line: &str) -> Option<&str> {
    let depth = line.len() - line.trim_start_matches('[').len();
    if depth == 0 || depth > 2 {
        return None;
    }

    let inner = &line[depth..];
    let name_end = inner.find(']')?;
    let closing = &inner[name_end..];
    if closing.len() != depth || closing.bytes().any(|b| b != b']') {
        return None;
    }

    let name = inner[..name_end].trim();
    let valid = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b'"' | b' '));
    valid.then_some(name.trim_matches('"'))
}

/// Split a comment-free `key = value` entry
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim().trim_matches('"');
    let value = value.trim();
    (!key.is_empty() && !value.is_empty()).then_some((key, value))
}

fn apply_value(key: &str, value: &str, config: &mut SessionConfig) -> Result<(), ParseError> {
    match key {
        "address" | "addr" => {
            let address = parse_int(value)?;
            if address > 0x7F {
                return Err(ParseError::InvalidValue);
            }
            config.address = address as u8;
        }
        "draw_color" | "color" => {
            config.draw_color = parse_color(value)?;
        }
        "font_scale" | "fontsize" => {
            config.font_scale =
                u8::try_from(parse_int(value)?).map_err(|_| ParseError::InvalidValue)?;
        }
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Parse a decimal or 0x-prefixed hex integer
fn parse_int(value: &str) -> Result<u32, ParseError> {
    let value = strip_quotes(value).trim();
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse::<u32>(),
    };
    parsed.map_err(|_| ParseError::InvalidValue)
}

fn parse_color(value: &str) -> Result<DrawColor, ParseError> {
    let value = strip_quotes(value).trim();
    let is = |name: &str| value.eq_ignore_ascii_case(name);

    if is("on") || is("white") || value == "1" {
        Ok(DrawColor::On)
    } else if is("off") || is("black") || value == "0" {
        Ok(DrawColor::Off)
    } else {
        Err(ParseError::InvalidValue)
    }
}
