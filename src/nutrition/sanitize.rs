use tracing::warn;

/// Coerce a numeric input to a finite, non-negative value.
///
/// NaN, infinities and negatives become 0.
#[inline]
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse a user-entered number, falling back to 0 when it is missing,
/// unparsable, or not a valid non-negative quantity.
pub fn parse_number(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.replace(',', ".").parse::<f64>() {
        Ok(v) => {
            let clean = sanitize(v);
            if clean != v {
                warn!(input = trimmed, "numeric input out of range, using 0");
            }
            clean
        }
        Err(_) => {
            warn!(input = trimmed, "numeric input not a number, using 0");
            0.0
        }
    }
}

/// Round half up to the nearest integer (2.5 -> 3, -2.5 -> -2).
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize(12.5), 12.5);
        assert_eq!(sanitize(-3.0), 0.0);
        assert_eq!(sanitize(f64::NAN), 0.0);
        assert_eq!(sanitize(f64::INFINITY), 0.0);
        assert_eq!(sanitize(0.0), 0.0);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("72.5"), 72.5);
        assert_eq!(parse_number(" 80 "), 80.0);
        assert_eq!(parse_number("1,5"), 1.5);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("-4"), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(1673.75), 1674.0);
        assert_eq!(round_half_up(513.333), 513.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }
}
