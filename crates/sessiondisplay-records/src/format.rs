//! Display formatting for money, latency and counts

use rust_decimal::Decimal;

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Integer with `,` thousands separators
pub fn format_thousands(n: u64) -> String {
    group_digits(&n.to_string())
}

/// Dollar amount for display
///
/// Amounts of a cent or more are shown to the cent; smaller amounts keep
/// up to six decimals so per-call costs stay readable.
pub fn format_decimal_dollars(amount: Decimal) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    let abs = amount.abs();

    if abs < Decimal::new(1, 2) {
        let small = abs.round_dp(6).normalize();
        if !small.is_zero() {
            return format!("{sign}${small}");
        }
    }

    let rounded = format!("{:.2}", abs.round_dp(2));
    let (whole, cents) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    format!("{sign}${}.{cents}", group_digits(whole))
}

/// Latency in seconds, two decimals
pub fn format_latency(seconds: Decimal) -> String {
    format!("{:.2}s", seconds.round_dp(2))
}
