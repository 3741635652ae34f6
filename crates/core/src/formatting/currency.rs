//! Currency-aware money formatting.
//!
//! Amounts are always shown with two decimals, rounded half away from zero. The
//! Indian Rupee uses lakh/crore grouping (`12,34,567.89`); every other currency
//! uses en-US thousands grouping with that currency's symbol.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{DISPLAY_DECIMAL_PRECISION, INR_CURRENCY_CODE};

const RUPEE_SIGN: &str = "\u{20B9}";
const NBSP: char = '\u{00A0}';

/// Symbol used in en-US display for well-known currency codes.
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    let symbol = match code {
        "USD" => "$",
        "EUR" => "\u{20AC}",
        "GBP" => "\u{00A3}",
        "JPY" => "\u{00A5}",
        "INR" => RUPEE_SIGN,
        "CNY" => "CN\u{00A5}",
        "CAD" => "CA$",
        "AUD" => "A$",
        "HKD" => "HK$",
        "NZD" => "NZ$",
        "MXN" => "MX$",
        "BRL" => "R$",
        "KRW" => "\u{20A9}",
        "ILS" => "\u{20AA}",
        "VND" => "\u{20AB}",
        "PHP" => "\u{20B1}",
        "TWD" => "NT$",
        _ => return None,
    };
    Some(symbol)
}

/// Formats `value` as money in `currency`.
///
/// Unknown codes are written as the code followed by a non-breaking space; an
/// empty code yields the bare number.
pub fn format_currency(value: Decimal, currency: &str) -> String {
    let code = currency.trim().to_ascii_uppercase();
    let rounded = value
        .round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let fixed = format!("{:.2}", rounded.abs());
    let (int_digits, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    if code == INR_CURRENCY_CODE {
        return format!(
            "{}{}{}.{}",
            sign,
            RUPEE_SIGN,
            group_indian_digits(int_digits),
            fraction
        );
    }

    let grouped = group_thousands(int_digits);
    match currency_symbol(&code) {
        Some(symbol) => format!("{}{}{}.{}", sign, symbol, grouped, fraction),
        None if code.is_empty() => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}{}{}.{}", sign, code, NBSP, grouped, fraction),
    }
}

/// Groups a run of ASCII digits the Indian way: the last three digits form one
/// group, then groups of two going left. `"1234567"` becomes `"12,34,567"`.
/// Input that is not all ASCII digits is returned unchanged.
pub fn group_indian_digits(digits: &str) -> String {
    if digits.len() <= 3 || !is_digit_run(digits) {
        return digits.to_string();
    }

    let (rest, last_three) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);

    let lead = match rest.len() % 2 {
        0 => 2,
        odd => odd,
    };
    out.push_str(&rest[..lead]);
    let mut idx = lead;
    while idx < rest.len() {
        out.push(',');
        out.push_str(&rest[idx..idx + 2]);
        idx += 2;
    }

    out.push(',');
    out.push_str(last_three);
    out
}

/// Groups a run of ASCII digits in threes: `"1234567"` becomes `"1,234,567"`.
/// Input that is not all ASCII digits is returned unchanged.
pub fn group_thousands(digits: &str) -> String {
    if !is_digit_run(digits) {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = match digits.len() % 3 {
        0 => 3.min(digits.len()),
        n => n,
    };
    out.push_str(&digits[..lead]);
    let mut idx = lead;
    while idx < digits.len() {
        out.push(',');
        out.push_str(&digits[idx..idx + 3]);
        idx += 3;
    }
    out
}

// Grouping slices by byte offset, so anything but ASCII digits is passed through.
fn is_digit_run(digits: &str) -> bool {
    digits.bytes().all(|b| b.is_ascii_digit())
}
