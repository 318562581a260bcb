use serde::Deserialize;

pub mod orders;
pub mod products;
pub mod users;

/// A numeric field that clients may send either as a JSON number or as a
/// numeric string (`5`, `"5"`, `" 12.50 "`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// The finite value carried by the input, if any.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            NumericInput::Number(value) => *value,
            NumericInput::Text(raw) => raw.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// The value as a whole `i32`, rejecting fractions and out-of-range input.
    pub fn as_whole(&self) -> Option<i32> {
        let value = self.as_f64()?;
        if value.fract() != 0.0 || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
            return None;
        }
        Some(value as i32)
    }
}

/// A record identifier sent either as a JSON number or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IdInput {
    Number(i64),
    Text(String),
}

impl IdInput {
    pub fn as_record_id(&self) -> Option<i32> {
        match self {
            IdInput::Number(value) => i32::try_from(*value).ok().filter(|id| *id > 0),
            IdInput::Text(raw) => parse_record_id(raw),
        }
    }
}

/// Parse a path or body identifier into a store row id.
pub fn parse_record_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|id| *id > 0)
}

pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

pub(crate) fn sanitize_multiline_text(input: &str) -> String {
    let mut lines: Vec<String> = input.lines().map(sanitize_inline_text).collect();

    while matches!(lines.first(), Some(line) if line.is_empty()) {
        lines.remove(0);
    }

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    let mut result = Vec::with_capacity(lines.len());
    let mut previous_empty = false;
    for line in lines {
        if line.is_empty() {
            if previous_empty {
                continue;
            }
            previous_empty = true;
            result.push(String::new());
        } else {
            previous_empty = false;
            result.push(line);
        }
    }

    result.join("\n")
}
