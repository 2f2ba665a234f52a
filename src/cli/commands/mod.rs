pub mod check;
pub mod init;
pub mod list;
pub mod plural;
pub mod print;

use crate::core::Arg;

/// Interpret a command-line value as a formatting argument.
///
/// Integers become [`Arg::Int`], other numbers [`Arg::Float`], everything
/// else stays a string (so a namespace name can act as a language override).
/// A purely numeric namespace such as `2024` therefore never overrides.
pub fn parse_value(raw: &str) -> Arg {
    if let Ok(n) = raw.parse::<i64>() {
        return Arg::Int(n);
    }
    if raw.bytes().any(|b| b.is_ascii_digit())
        && let Ok(x) = raw.parse::<f64>()
    {
        return Arg::Float(x);
    }
    Arg::Str(raw.to_string())
}
