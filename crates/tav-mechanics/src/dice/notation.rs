//! Dice notation parser.
//!
//! Grammar: `[count] "d" size [("+" | "-") modifier]`, digits only, the `d`
//! in either case, no whitespace inside the expression. Surrounding
//! whitespace is ignored.

use thiserror::Error;

use super::DiceSpec;

/// Upper bound on the number of dice in one expression.
pub const MAX_DICE: u32 = 1000;

/// Why a piece of dice notation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// Nothing to parse.
    #[error("empty dice notation")]
    Empty,
    /// No `d` between count and size.
    #[error("missing 'd' separator in '{0}'")]
    MissingSeparator(String),
    /// The dice count is present but not a positive integer.
    #[error("invalid dice count '{0}'")]
    InvalidCount(String),
    /// The die size is missing, not an integer, or below 2.
    #[error("invalid die size '{0}'")]
    InvalidSize(String),
    /// The trailing modifier is not a sign followed by digits.
    #[error("invalid modifier '{0}'")]
    InvalidModifier(String),
    /// More dice than [`MAX_DICE`].
    #[error("too many dice: {0} (at most {MAX_DICE})")]
    TooManyDice(u32),
    /// A number does not fit the integer type that holds it.
    #[error("number out of range: '{0}'")]
    Overflow(String),
}

/// Parse notation such as `2d6+3`, `d20`, or `3D6-1` into a [`DiceSpec`].
///
/// Never returns a partial result: any malformed part fails the whole parse.
pub fn parse(input: &str) -> Result<DiceSpec, NotationError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(NotationError::Empty);
    }

    let d_pos = text
        .find(['d', 'D'])
        .ok_or_else(|| NotationError::MissingSeparator(text.to_string()))?;

    let count_str = &text[..d_pos];
    let count = if count_str.is_empty() {
        1
    } else {
        parse_digits::<u32>(count_str, NotationError::InvalidCount)?
    };
    if count == 0 {
        return Err(NotationError::InvalidCount(count_str.to_string()));
    }

    let after_d = &text[d_pos + 1..];
    let (size_str, modifier_str) = match after_d.find(['+', '-']) {
        Some(pos) => (&after_d[..pos], Some(&after_d[pos..])),
        None => (after_d, None),
    };

    let size = parse_digits::<u32>(size_str, NotationError::InvalidSize)?;
    let modifier = modifier_str.map(parse_modifier).transpose()?.unwrap_or(0);

    DiceSpec::new(count, size, modifier)
}

/// Parse a non-empty run of ASCII digits. `invalid` builds the error for
/// anything that is not digits.
fn parse_digits<T: std::str::FromStr>(
    s: &str,
    invalid: impl Fn(String) -> NotationError,
) -> Result<T, NotationError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(s.to_string()));
    }
    s.parse()
        .map_err(|_| NotationError::Overflow(s.to_string()))
}

/// Parse `+N` or `-N`.
fn parse_modifier(s: &str) -> Result<i32, NotationError> {
    let (negative, digits) = match s.split_at(1) {
        ("+", rest) => (false, rest),
        ("-", rest) => (true, rest),
        _ => return Err(NotationError::InvalidModifier(s.to_string())),
    };
    let magnitude =
        parse_digits::<i64>(digits, |_| NotationError::InvalidModifier(s.to_string()))?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).map_err(|_| NotationError::Overflow(s.to_string()))
}
