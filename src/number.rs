//! Decimal rounding and thousands grouping for numeric cells.

use crate::locale::LocaleConfig;

/// Rounds to two decimal places and groups the integer digits with the
/// locale's separators. A leading sign stays in front of the first group.
pub(crate) fn grouped_two_decimals(value: f64, locale: &LocaleConfig) -> String {
    let fixed = format!("{value:.2}");
    let Some((whole, fraction)) = fixed.split_once('.') else {
        // Non-finite input has no decimal point; pass it through untouched.
        return fixed;
    };
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", whole),
    };
    let mut out = String::with_capacity(fixed.len() + digits.len() / 3);
    out.push_str(sign);
    out.push_str(&group_thousands(digits, locale.grouping_separator));
    out.push(locale.decimal_separator);
    out.push_str(fraction);
    out
}

/// Inserts `separator` every three digits, counting from the right.
fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, digit) in digits.chars().rev().enumerate() {
        if idx != 0 && idx % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped.chars().rev().collect()
}
