//! Duration text → seconds.
//!
//! Two grammars, chosen up front:
//!
//! - **Colon notation** (`H:MM` or `H:MM:SS`) whenever the trimmed input contains
//!   a `:`. A malformed colon string is an error; it is never retried as words.
//! - **Unit phrases** otherwise: `2h30m`, `1.5 hours`, `1 day, 2 hours, and 30 minutes`.
//!   A single left-to-right scan pairs each unsigned number with the unit word
//!   that follows it. Commas, whitespace and the word `and` separate pairs.

use tracing::debug;

use crate::error::{Result, WhenError};

/// Recognised unit words (lowercase) and their length in seconds.
const UNIT_MULTIPLIERS: [(&str, f64); 23] = [
    ("s", 1.0),
    ("sec", 1.0),
    ("secs", 1.0),
    ("second", 1.0),
    ("seconds", 1.0),
    ("m", 60.0),
    ("min", 60.0),
    ("mins", 60.0),
    ("minute", 60.0),
    ("minutes", 60.0),
    ("h", 3_600.0),
    ("hr", 3_600.0),
    ("hrs", 3_600.0),
    ("hour", 3_600.0),
    ("hours", 3_600.0),
    ("d", 86_400.0),
    ("day", 86_400.0),
    ("days", 86_400.0),
    ("w", 604_800.0),
    ("wk", 604_800.0),
    ("wks", 604_800.0),
    ("week", 604_800.0),
    ("weeks", 604_800.0),
];

fn unit_multiplier(word: &str) -> Option<f64> {
    UNIT_MULTIPLIERS
        .iter()
        .find(|(name, _)| word.eq_ignore_ascii_case(name))
        .map(|&(_, seconds)| seconds)
}

fn invalid(input: &str, reason: &str) -> WhenError {
    debug!(input, reason, "rejecting duration text");
    WhenError::InvalidFormat(format!("{}: {:?}", reason, input))
}

/// Parse human-written duration text into a number of seconds.
///
/// ```
/// use whenwords::parse_duration;
///
/// assert_eq!(parse_duration("2h30m").unwrap(), 9000.0);
/// assert_eq!(parse_duration("2 hours and 30 minutes").unwrap(), 9000.0);
/// assert_eq!(parse_duration("2:30").unwrap(), 9000.0);
/// assert!(parse_duration("42").is_err());
/// ```
///
/// # Errors
/// Returns `WhenError::InvalidFormat` for empty text, unknown words, numbers without
/// a unit, signed numbers, malformed colon notation, or totals too large for an `f64`.
pub fn parse_duration(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid(input, "empty duration"));
    }
    let seconds = if trimmed.contains(':') {
        parse_colon(trimmed)?
    } else {
        parse_units(trimmed)?
    };
    if !seconds.is_finite() {
        return Err(invalid(input, "duration too large"));
    }
    Ok(seconds)
}

/// `H:MM` or `H:MM:SS`, every field an unsigned decimal integer.
fn parse_colon(input: &str) -> Result<f64> {
    let fields = input
        .split(':')
        .map(|field| {
            let field = field.trim();
            if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            field.parse::<u64>().ok()
        })
        .collect::<Option<Vec<u64>>>()
        .ok_or_else(|| invalid(input, "non-numeric field in colon notation"))?;

    let (hours, minutes, seconds) = match fields[..] {
        [h, m] => (h, m, 0),
        [h, m, s] => (h, m, s),
        _ => return Err(invalid(input, "colon notation needs 2 or 3 fields")),
    };
    Ok(hours as f64 * 3_600.0 + minutes as f64 * 60.0 + seconds as f64)
}

/// Scanner over the unit-phrase grammar.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn skip_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    /// Consume bytes matching `pred` and return them as a slice.
    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        self.skip_while(pred);
        &self.input[start..self.pos]
    }

    /// `digits [ '.' digits ]` or `'.' digits`; at least one digit overall.
    fn number(&mut self) -> Option<f64> {
        let start = self.pos;
        self.skip_while(|b| b.is_ascii_digit());
        if self.peek() == Some(b'.') {
            self.pos += 1;
            self.skip_while(|b| b.is_ascii_digit());
        }
        let literal = &self.input[start..self.pos];
        if !literal.bytes().any(|b| b.is_ascii_digit()) {
            self.pos = start;
            return None;
        }
        literal.parse().ok()
    }
}

fn parse_units(input: &str) -> Result<f64> {
    let mut scanner = Scanner::new(input);
    let mut total = 0.0;
    let mut pairs = 0usize;

    loop {
        scanner.skip_while(|b| b.is_ascii_whitespace() || b == b',');
        let Some(next) = scanner.peek() else {
            break;
        };

        if next.is_ascii_alphabetic() {
            let word = scanner.take_while(|b| b.is_ascii_alphabetic());
            if word.eq_ignore_ascii_case("and") {
                continue;
            }
            return Err(invalid(input, "unexpected word"));
        }

        let value = scanner
            .number()
            .ok_or_else(|| invalid(input, "expected a number"))?;

        scanner.skip_while(|b| b.is_ascii_whitespace());
        let unit = scanner.take_while(|b| b.is_ascii_alphabetic());
        if unit.is_empty() {
            return Err(invalid(input, "number without a unit"));
        }
        let multiplier = unit_multiplier(unit).ok_or_else(|| invalid(input, "unknown unit"))?;

        total += value * multiplier;
        pairs += 1;
    }

    if pairs == 0 {
        return Err(invalid(input, "no duration found"));
    }
    Ok(total)
}
