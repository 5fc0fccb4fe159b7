use thiserror::Error;

/// Why a duration string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDurationError {
    #[error("duration is empty")]
    Empty,
    #[error("expected a number at position {position} in {input:?}")]
    ExpectedNumber { input: String, position: usize },
    #[error("number too large in {input:?}")]
    Overflow { input: String },
    #[error("unknown unit {unit:?} in {input:?} (use h, hr, m, min, s or sec)")]
    UnknownUnit { input: String, unit: String },
    #[error("duration {input:?} adds up to zero")]
    Zero { input: String },
}

/// Parse a duration like `5m`, `90`, `1h30m` or `2min30sec` into seconds.
///
/// The string is a sequence of `<integer><unit>` tokens that are summed.
/// Units are case-insensitive: `h`/`hr` hours, `m`/`min` minutes,
/// `s`/`sec` seconds, and a bare number counts as seconds. Whitespace between
/// tokens is allowed.
pub fn parse_duration(input: &str) -> Result<f64, ParseDurationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseDurationError::Empty);
    }

    let bytes = trimmed.as_bytes();
    let mut pos = 0;
    let mut total: u64 = 0;

    while pos < bytes.len() {
        if bytes[pos].is_ascii_whitespace() {
            pos += 1;
            continue;
        }

        let digits_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == digits_start {
            return Err(ParseDurationError::ExpectedNumber {
                input: input.to_string(),
                position: digits_start,
            });
        }
        let value: u64 = trimmed[digits_start..pos]
            .parse()
            .map_err(|_| ParseDurationError::Overflow { input: input.to_string() })?;

        let unit_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }
        let unit = trimmed[unit_start..pos].to_ascii_lowercase();
        let multiplier = match unit.as_str() {
            "h" | "hr" => 3600,
            "m" | "min" => 60,
            "s" | "sec" | "" => 1,
            _ => {
                return Err(ParseDurationError::UnknownUnit {
                    input: input.to_string(),
                    unit: trimmed[unit_start..pos].to_string(),
                })
            }
        };

        total = value
            .checked_mul(multiplier)
            .and_then(|secs| total.checked_add(secs))
            .ok_or_else(|| ParseDurationError::Overflow { input: input.to_string() })?;
    }

    if total == 0 {
        return Err(ParseDurationError::Zero { input: input.to_string() });
    }

    Ok(total as f64)
}
