//! Text formatting for money and line lists

use rf_reels::{Line, Money};

/// `$12.50`, or `-$12.50` when negative
pub fn money(amount: Money) -> String {
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount.abs())
    }
}

/// Space-separated line numbers
pub fn lines(lines: &[Line]) -> String {
    lines
        .iter()
        .map(Line::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
