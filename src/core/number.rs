//! Number rendering shared by the axis and table formatters.

/// Rounds half-way cases towards positive infinity (`-2.5` becomes `-2`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds to one decimal place, half-way cases towards positive infinity.
pub fn round_one_decimal(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Shortest decimal text for `value` without a trailing `.0`.
///
/// Negative zero renders as `0`.
pub fn shortest(value: f64, decimal: &str) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let text = value.to_string();
    if decimal == "." {
        text
    } else {
        text.replacen('.', decimal, 1)
    }
}

/// Fixed-point text with `decimals` digits, optionally with thousands groups.
pub fn fixed(value: f64, decimals: usize, decimal: &str, thousands: Option<(&str, &[usize])>) -> String {
    let text = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let integer = match thousands {
        Some((separator, grouping)) => group_digits(integer, separator, grouping),
        None => integer.to_string(),
    };

    let negative = value < 0.0 && text.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let mut out = String::with_capacity(text.len() + 4);
    if negative {
        out.push('-');
    }
    out.push_str(&integer);
    if let Some(fraction) = fraction {
        out.push_str(decimal);
        out.push_str(fraction);
    }
    out
}

/// Inserts `separator` between digit groups, right to left.
///
/// `grouping` lists the group sizes from the right; the last size repeats.
fn group_digits(digits: &str, separator: &str, grouping: &[usize]) -> String {
    if grouping.is_empty() || grouping.contains(&0) {
        return digits.to_string();
    }

    let chars: Vec<char> = digits.chars().collect();
    let mut groups: Vec<String> = Vec::new();
    let mut end = chars.len();
    let mut sizes = grouping.iter().copied();
    let mut size = sizes.next().unwrap_or(3);

    while end > 0 {
        let start = end.saturating_sub(size);
        groups.push(chars[start..end].iter().collect());
        end = start;
        if let Some(next) = sizes.next() {
            size = next;
        }
    }

    groups.reverse();
    groups.join(separator)
}
