/// Smallest unsigned value whose top bit is set (`2^63`).
pub const UNSIGNED_SIGN_BIT: u64 = 1 << 63;

/// Converts a `u64` to the nearest `f64` the conversion can reach without
/// reinterpreting the top bit as a sign.
///
/// Values below `2^63` go through a plain signed cast. Larger values are
/// halved first (dropping the lowest bit, which `f64` cannot hold at that
/// magnitude anyway), converted, and doubled again.
///
/// ## Parameters
/// - `value`: The unsigned integer to convert.
///
/// ## Returns
/// The converted floating-point value.
///
/// ## Example
/// ```
/// use asmexpr::util::num::unsigned_to_float;
///
/// assert_eq!(unsigned_to_float(42), 42.0);
/// assert_eq!(unsigned_to_float(u64::MAX), 1.8446744073709552E19);
/// ```
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub const fn unsigned_to_float(value: u64) -> f64 {
    if value < UNSIGNED_SIGN_BIT {
        return value as i64 as f64;
    }

    ((value >> 1) as i64 as f64) * 2.0
}

/// Reinterprets the bits of an unsigned integer as a signed one.
///
/// ## Example
/// ```
/// use asmexpr::util::num::unsigned_as_signed;
///
/// assert_eq!(unsigned_as_signed(u64::MAX), -1);
/// ```
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub const fn unsigned_as_signed(value: u64) -> i64 {
    value as i64
}

/// Reinterprets the bits of a signed integer as an unsigned one.
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub const fn signed_as_unsigned(value: i64) -> u64 {
    value as u64
}

/// Converts a signed integer to `f64` with the native cast.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn signed_to_float(value: i64) -> f64 {
    value as f64
}

/// Truncates a float toward zero into a signed integer.
///
/// The cast saturates at the `i64` bounds and maps `NaN` to zero.
///
/// ## Example
/// ```
/// use asmexpr::util::num::float_to_signed;
///
/// assert_eq!(float_to_signed(-2.9), -2);
/// assert_eq!(float_to_signed(f64::NAN), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn float_to_signed(value: f64) -> i64 {
    value as i64
}

/// Truncates a float toward zero and widens the result to 64 unsigned bits.
///
/// Negative values keep their two's complement bit pattern, so `-1.0`
/// becomes `u64::MAX`.
///
/// ## Example
/// ```
/// use asmexpr::util::num::float_to_unsigned;
///
/// assert_eq!(float_to_unsigned(7.8), 7);
/// assert_eq!(float_to_unsigned(-1.0), u64::MAX);
/// ```
#[must_use]
pub const fn float_to_unsigned(value: f64) -> u64 {
    signed_as_unsigned(float_to_signed(value))
}

/// Renders a float in its canonical text form.
///
/// Magnitudes in `[1e-3, 1e7)` (and zero) use plain decimal notation with at
/// least one fractional digit. Everything else uses scientific notation with
/// an upper-case `E`. Non-finite values render as `NaN`, `Infinity` and
/// `-Infinity`. Digits are always the shortest round-trip representation.
///
/// ## Parameters
/// - `value`: The float to render.
///
/// ## Returns
/// The canonical text.
///
/// ## Example
/// ```
/// use asmexpr::util::num::float_to_string;
///
/// assert_eq!(float_to_string(1500.0), "1500.0");
/// assert_eq!(float_to_string(0.5), "0.5");
/// assert_eq!(float_to_string(1.8446744073709552E19), "1.8446744073709552E19");
/// assert_eq!(float_to_string(1e-5), "1.0E-5");
/// assert_eq!(float_to_string(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn float_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        // Debug keeps the trailing `.0` on integral values.
        return format!("{value:?}");
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => scientific,
    }
}
