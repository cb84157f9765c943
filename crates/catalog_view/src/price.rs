pub const CURRENCY_PREFIX: &str = "$";

const FRACTION_SCALE: u128 = 1_000;
/// From here on an f64 step is at least 1/8, so whole and fraction parts
/// are exact and need no rounding.
const EXACT_MAGNITUDE: f64 = 1e15;

/// Currency prefix plus the amount with en-US digit grouping and at most
/// three fraction digits, trailing zeros dropped.
pub fn format_price(amount: f64) -> String {
    format!("{CURRENCY_PREFIX}{}", group_amount(amount))
}

pub fn group_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let magnitude = amount.abs();
    let (whole, fraction) = if magnitude < EXACT_MAGNITUDE {
        let scaled = (magnitude * FRACTION_SCALE as f64).round() as u128;
        ((scaled / FRACTION_SCALE).to_string(), scaled % FRACTION_SCALE)
    } else {
        let fraction = (magnitude.fract() * FRACTION_SCALE as f64) as u128;
        (format!("{:.0}", magnitude.trunc()), fraction)
    };

    let mut out = String::new();
    if amount.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_digits(&whole));
    if fraction > 0 {
        let digits = format!("{fraction:03}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
