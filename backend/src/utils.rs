use crate::error::PipelineError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,

    #[error("duration {0:?} does not start with 'P'")]
    MissingDesignator(String),

    #[error("duration {0:?} has no components")]
    NoComponents(String),

    #[error("invalid number in duration {0:?}")]
    InvalidNumber(String),

    #[error("unsupported designator '{unit}' in duration {input:?}")]
    UnsupportedUnit { unit: char, input: String },
}

/// Parse ISO8601 duration string (P1DT2H3M4.5S) to total seconds.
///
/// Weeks and days are fixed-length. Years and months have no fixed length
/// and are rejected, as is anything that is not a well-formed duration.
pub fn parse_iso8601_duration(duration_str: &str) -> Result<f64, DurationError> {
    let input = duration_str.trim();
    if input.is_empty() {
        return Err(DurationError::Empty);
    }

    let body = input
        .strip_prefix('P')
        .ok_or_else(|| DurationError::MissingDesignator(input.to_string()))?;

    let mut total_seconds = 0.0;
    let mut current_number = String::new();
    let mut in_time = false;
    let mut components = 0;
    let mut time_components = 0;

    for ch in body.chars() {
        if ch.is_ascii_digit() || ch == '.' || ch == ',' {
            current_number.push(if ch == ',' { '.' } else { ch });
            continue;
        }

        if ch == 'T' {
            if in_time || !current_number.is_empty() {
                return Err(DurationError::InvalidNumber(input.to_string()));
            }
            in_time = true;
            continue;
        }

        let multiplier = match (in_time, ch) {
            (false, 'W') => 604_800.0,
            (false, 'D') => 86_400.0,
            (true, 'H') => 3_600.0,
            (true, 'M') => 60.0,
            (true, 'S') => 1.0,
            _ => {
                return Err(DurationError::UnsupportedUnit {
                    unit: ch,
                    input: input.to_string(),
                })
            }
        };

        let value: f64 = current_number
            .parse()
            .map_err(|_| DurationError::InvalidNumber(input.to_string()))?;
        total_seconds += value * multiplier;
        current_number.clear();
        components += 1;
        if in_time {
            time_components += 1;
        }
    }

    if !current_number.is_empty() {
        return Err(DurationError::InvalidNumber(input.to_string()));
    }
    if components == 0 || (in_time && time_components == 0) {
        return Err(DurationError::NoComponents(input.to_string()));
    }

    Ok(total_seconds)
}

/// Platform counters arrive as decimal strings and may be absent
/// (hidden subscriber counts, disabled likes).
pub fn parse_count(value: Option<&str>, field: &str) -> Result<u64, PipelineError> {
    match value {
        None => Ok(0),
        Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
            PipelineError::MalformedData(format!("{field} is not a count: {raw:?}"))
        }),
    }
}
