//! Price display formatting for the admin tables

/// Format a whole-Rupiah price the way the dashboard shows it: "Rp" prefix,
/// dot thousands separators, no decimals.
pub fn format_price(price: i64) -> String {
    let negative = price < 0;
    let digits = price.unsigned_abs().to_string();

    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}
