//! Parsing of `--record` arguments.
//!
//! A record is written `AMOUNT;NOTE[;DD.MM.YYYY]`, e.g. `250;lunch` or
//! `12,50;taxi;31.12.2023`. The date is handed to the engine unparsed so the
//! engine stays the single judge of the date format.

#[derive(Clone, Debug, PartialEq)]
pub struct RecordInput {
    pub amount: f64,
    pub note: String,
    pub date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("empty record")]
    Empty,
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("invalid limit: {0}")]
    InvalidLimit(String),
    #[error("missing note in \"{0}\"")]
    MissingNote(String),
    #[error("too many fields in \"{0}\"")]
    TooManyFields(String),
}

/// Parses one `--record` value.
pub fn parse_record(input: &str) -> Result<RecordInput, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let mut parts = trimmed.split(';').map(str::trim);
    let amount = parse_amount(parts.next().unwrap_or(""))?;
    let note = match parts.next() {
        Some(note) => note.to_string(),
        None => return Err(InputError::MissingNote(trimmed.to_string())),
    };
    let date = parts
        .next()
        .filter(|date| !date.is_empty())
        .map(str::to_string);
    if parts.next().is_some() {
        return Err(InputError::TooManyFields(trimmed.to_string()));
    }

    Ok(RecordInput { amount, note, date })
}

/// Parses a non-negative amount, accepting `.` or `,` as decimal separator.
pub fn parse_amount(raw: &str) -> Result<f64, InputError> {
    let invalid = || InputError::InvalidAmount(raw.to_string());

    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty()
        || !normalized
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.')
    {
        return Err(invalid());
    }

    let amount: f64 = normalized.parse().map_err(|_| invalid())?;
    if !amount.is_finite() {
        return Err(invalid());
    }
    Ok(amount)
}

/// Parses a `--limit` value: same rules as an amount.
pub fn parse_limit(raw: &str) -> Result<f64, InputError> {
    let limit = parse_amount(raw).map_err(|_| InputError::InvalidLimit(raw.to_string()))?;
    engine::validate_limit(limit).map_err(|_| InputError::InvalidLimit(raw.to_string()))
}
