//! Number parsing, rounding and display with browser-compatible semantics.
//!
//! Report text has to be reproducible byte-for-byte against the web client,
//! so rounding and formatting follow ECMAScript rather than Rust defaults:
//! - `Math.round` rounds ties toward positive infinity
//! - `toFixed` rounds ties away from zero and prints `NaN`/`Infinity`
//! - `parseFloat` accepts the longest numeric prefix of a string

use std::fmt;

/// Round to the nearest integer, ties toward positive infinity.
///
/// Non-finite input is returned unchanged.
pub fn js_round(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Format with exactly one decimal place.
///
/// Rounds the exact stored value. The only doubles sitting exactly halfway
/// between two tenths are odd multiples of 0.25, and those round away from
/// zero.
pub fn to_fixed_1(x: f64) -> String {
    if !x.is_finite() || x.abs() >= 1e21 {
        return JsNumber(x).to_string();
    }
    let sign = if x < 0.0 { "-" } else { "" };
    let magnitude = x.abs();
    let quarters = magnitude * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        // magnitude = q/4 with q odd, so 10 * magnitude = 5q/2 sits on a tie
        let tenths = (5 * quarters as u128 + 1) / 2;
        return format!("{}{}.{}", sign, tenths / 10, tenths % 10);
    }
    format!("{}{:.1}", sign, magnitude)
}

/// Parse the longest numeric prefix of `s`, or NaN when there is none.
pub fn parse_float(s: &str) -> f64 {
    let t = s.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = t.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if t[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    t[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Display wrapper printing an `f64` the way `Number#toString` does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JsNumber(pub f64);

impl fmt::Display for JsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x.is_nan() {
            return f.write_str("NaN");
        }
        if x.is_infinite() {
            return f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if x == 0.0 {
            return f.write_str("0");
        }

        let magnitude = x.abs();
        if magnitude >= 1e21 || magnitude < 1e-6 {
            let exp = format!("{:e}", x);
            return match exp.split_once('e') {
                Some((mantissa, power)) if !power.starts_with('-') => {
                    write!(f, "{}e+{}", mantissa, power)
                }
                _ => f.write_str(&exp),
            };
        }

        write!(f, "{}", x)
    }
}
