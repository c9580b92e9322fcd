/// Parses the leading integer of `s` the way a lenient form field reads.
///
/// Leading whitespace and one sign are allowed; parsing stops at the first
/// non-digit. No digits at all means "not a number".
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Rounds to the nearest integer, halves towards positive infinity.
pub(crate) fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// `obtained / total` as a rounded percentage.
///
/// Non-numeric input and a zero total both yield `0`.
pub fn percentage(obtained: &str, total: &str) -> i64 {
    match (leading_integer(obtained), leading_integer(total)) {
        (Some(o), Some(t)) if t != 0 => round_half_up(o as f64 / t as f64 * 100.0),
        _ => 0,
    }
}

/// Performance band of a percentage, used to colour the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl GradeTier {
    pub fn of(percentage: i64) -> Self {
        match percentage {
            p if p >= 90 => GradeTier::Excellent,
            p if p >= 80 => GradeTier::Good,
            p if p >= 70 => GradeTier::Fair,
            _ => GradeTier::Poor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_examples() {
        assert_eq!(percentage("0", "100"), 0);
        assert_eq!(percentage("85", "100"), 85);
        assert_eq!(percentage("x", "100"), 0);
        assert_eq!(percentage("50", "100"), 50);
    }

    #[test]
    fn percentage_edge_cases() {
        assert_eq!(percentage("1", "3"), 33);
        assert_eq!(percentage("1", "8"), 13); // 12.5 rounds up
        assert_eq!(percentage(" 45 marks", "50"), 90);
        assert_eq!(percentage("10", "0"), 0);
        assert_eq!(percentage("", ""), 0);
        assert_eq!(percentage("120", "100"), 120);
        assert_eq!(percentage("-1", "8"), -12); // -12.5 rounds towards +inf
    }

    #[test]
    fn grade_tiers() {
        assert_eq!(GradeTier::of(95), GradeTier::Excellent);
        assert_eq!(GradeTier::of(90), GradeTier::Excellent);
        assert_eq!(GradeTier::of(89), GradeTier::Good);
        assert_eq!(GradeTier::of(70), GradeTier::Fair);
        assert_eq!(GradeTier::of(0), GradeTier::Poor);
    }
}
