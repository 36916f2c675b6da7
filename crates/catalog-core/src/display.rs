//! # Display Helpers
//!
//! Formatting used when rendering the product table.
//!
//! ```text
//!  Name                            Price        Stock
//!  Super Deluxe Ergonomic Widge... $1,234.50    12
//!  Spare Cable                     $3.00        0   ← out of stock
//! ```

use crate::DISPLAY_TEXT_LIMIT;

/// Placeholder for a price the backend did not send as a number.
pub const MISSING_PRICE: &str = "—";

/// Formats a price as US dollars with thousands separators.
///
/// Cents round half up on the shortest decimal form of `price`, so `0.125`
/// shows as `$0.13` and `1.005` as `$1.01`.
///
/// ## Example
/// ```rust
/// use catalog_core::display::format_price;
///
/// assert_eq!(format_price(1234.5), "$1,234.50");
/// assert_eq!(format_price(0.0), "$0.00");
/// assert_eq!(format_price(-3.0), "-$3.00");
/// ```
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return MISSING_PRICE.to_string();
    }

    let digits = cents_digits(price.abs());
    let (whole, cents) = digits.split_at(digits.len() - 2);

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // "-0.00" would read oddly, so the sign follows the rounded value
    let sign = if price < 0.0 && digits.bytes().any(|d| d != b'0') { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Whole-cent digits of a non-negative finite amount, at least three long.
fn cents_digits(amount: f64) -> String {
    let shortest = amount.to_string();
    let (whole, frac) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(frac.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();

    let mut carry = frac.as_bytes().get(2).is_some_and(|d| *d >= b'5');
    for d in digits.iter_mut().rev() {
        if !carry {
            break;
        }
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            carry = false;
        }
    }
    if carry {
        digits.insert(0, b'1');
    }

    digits.into_iter().map(char::from).collect()
}

/// Formats an optional price, using a placeholder when it is missing.
pub fn format_optional_price(price: Option<f64>) -> String {
    price.map_or_else(|| MISSING_PRICE.to_string(), format_price)
}

/// Shortens `text` to `limit` characters, appending `...` when cut.
pub fn truncate_text(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// [`truncate_text`] at the list table's column width.
pub fn truncate_for_table(text: &str) -> String {
    truncate_text(text, DISPLAY_TEXT_LIMIT)
}
