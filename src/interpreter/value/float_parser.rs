use std::{iter::Peekable, str::Chars};

/// Reads a float from text using the expression language's numeric grammar.
///
/// Grammar:
/// ```text
///     float    := ws* sign? digits? ("." digits?)? exponent? ws*
///     exponent := ("E" | "e") sign? digits
/// ```
/// At least one digit must appear in the integer or the fractional part, and
/// an exponent marker must be followed by at least one digit.
///
/// The digits are not handed to the standard library. Each non-zero digit is
/// scaled by its own positional power of ten, built by repeated
/// multiplication: positive positions multiply by it, negative positions
/// divide by it. The terms are summed from the most significant digit down. Very long digit strings or very large exponents
/// therefore saturate to infinity (or fade to zero) instead of failing.
///
/// # Parameters
/// - `text`: The text to read.
///
/// # Returns
/// `Some(f64)` if the whole text matches the grammar, `None` otherwise.
///
/// # Example
/// ```
/// use asmexpr::interpreter::value::float_parser::parse_float;
///
/// assert_eq!(parse_float("1.5E3"), Some(1500.0));
/// assert_eq!(parse_float(" 1 "), Some(1.0));
/// assert_eq!(parse_float("-.5"), Some(-0.5));
/// assert_eq!(parse_float(""), None);
/// assert_eq!(parse_float("1e"), None);
/// ```
#[must_use]
pub fn parse_float(text: &str) -> Option<f64> {
    let mut scanner = Scanner { rest: text.chars().peekable() };

    let number = scanner.number()?;
    scanner.allow_whitespace();
    if !scanner.at_end() {
        return None;
    }

    Some(number.accumulate())
}

/// The digits and exponent collected by a successful scan.
struct ScannedNumber {
    negative: bool,
    integer:  Vec<u8>,
    fraction: Vec<u8>,
    exponent: i64,
}

impl ScannedNumber {
    fn accumulate(&self) -> f64 {
        let integer_len = i64::try_from(self.integer.len()).unwrap_or(i64::MAX);
        let mut value = 0.0;

        for (position, digit) in (0_i64..).zip(&self.integer) {
            let power = (integer_len - 1 - position).saturating_add(self.exponent);
            value += positional(*digit, power);
        }
        for (position, digit) in (1_i64..).zip(&self.fraction) {
            let power = self.exponent.saturating_sub(position);
            value += positional(*digit, power);
        }

        if self.negative { -value } else { value }
    }
}

/// Returns `digit * 10^power`; zero digits contribute nothing, even at
/// infinite magnitudes.
///
/// Negative powers divide by `10^-power`; a lone digit like `0.3` is then
/// correctly rounded.
fn positional(digit: u8, power: i64) -> f64 {
    if digit == 0 {
        return 0.0;
    }

    if power >= 0 {
        f64::from(digit) * power_of_ten(power.unsigned_abs())
    } else {
        f64::from(digit) / power_of_ten(power.unsigned_abs())
    }
}

/// `10^power` by repeated multiplication, saturating to infinity.
fn power_of_ten(power: u64) -> f64 {
    let mut result = 1.0_f64;
    for _ in 0..power {
        result *= 10.0;
        if result.is_infinite() {
            break;
        }
    }
    result
}

/// Recursive-descent scanner where every step is an optional allowance: it
/// consumes input only if the input matches.
struct Scanner<'a> {
    rest: Peekable<Chars<'a>>,
}

impl Scanner<'_> {
    fn number(&mut self) -> Option<ScannedNumber> {
        self.allow_whitespace();
        let negative = self.allow_sign();
        let integer = self.allow_digits();
        let fraction = if self.allow('.').is_some() {
            self.allow_digits()
        } else {
            Vec::new()
        };

        if integer.is_empty() && fraction.is_empty() {
            return None;
        }

        let exponent = if self.allow_any(&['E', 'e']).is_some() {
            self.exponent()?
        } else {
            0
        };

        Some(ScannedNumber { negative,
                             integer,
                             fraction,
                             exponent })
    }

    fn exponent(&mut self) -> Option<i64> {
        let negative = self.allow_sign();
        let digits = self.allow_digits();
        if digits.is_empty() {
            return None;
        }

        let magnitude = digits.iter()
                              .fold(0_i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(*d)));

        Some(if negative { -magnitude } else { magnitude })
    }

    /// Consumes an optional sign and returns `true` if it was `-`.
    fn allow_sign(&mut self) -> bool {
        match self.allow_any(&['+', '-']) {
            Some('-') => true,
            _ => false,
        }
    }

    fn allow_digits(&mut self) -> Vec<u8> {
        let mut digits = Vec::new();
        while let Some(c) = self.allow_if(|c| c.is_ascii_digit()) {
            digits.push(c as u8 - b'0');
        }
        digits
    }

    fn allow_whitespace(&mut self) {
        while self.allow_if(char::is_whitespace).is_some() {}
    }

    fn allow(&mut self, expected: char) -> Option<char> {
        self.allow_if(|c| c == expected)
    }

    fn allow_any(&mut self, expected: &[char]) -> Option<char> {
        self.allow_if(|c| expected.contains(&c))
    }

    fn allow_if(&mut self, predicate: impl Fn(char) -> bool) -> Option<char> {
        self.rest.next_if(|c| predicate(*c))
    }

    fn at_end(&mut self) -> bool {
        self.rest.peek().is_none()
    }
}
