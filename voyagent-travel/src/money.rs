//! Dollar formatting.

/// Formats a dollar amount rounded to whole dollars with thousands
/// separators, e.g. `$3,500` or `-$120`.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}${}", group_digits(&digits))
}

/// Inserts `,` between every group of three digits.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
