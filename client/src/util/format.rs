//! Display formatting for dashboard values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format `value` as Brazilian reais, e.g. `R$ 1.234,56`.
///
/// Matches the `pt-BR` currency style: `.` groups thousands, `,` separates
/// cents, a non-breaking space follows the symbol, and negatives lead with `-`.
pub fn format_brl(value: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}R$\u{a0}{},{:02}", group_thousands(cents / 100), cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
