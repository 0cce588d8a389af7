//! Display formatting for record fields.

/// Placeholder campus photo used when a record has no image or it fails to load.
pub const FALLBACK_IMAGE_URL: &str = "https://images.unsplash.com/photo-1562774053-701939374585?w=800&auto=format&fit=crop";

pub const NOT_AVAILABLE: &str = "N/A";

/// Group digits in thousands: `450000` -> `"450,000"`.
#[must_use]
pub fn format_fee(fee: u64) -> String {
    let digits = fee.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"PKR 450,000"`.
#[must_use]
pub fn format_fee_pkr(fee: u64) -> String {
    format!("PKR {}", format_fee(fee))
}

/// Percentage with trailing zeros dropped: `92.0` -> `"92%"`, `88.5` -> `"88.5%"`.
#[must_use]
pub fn format_merit(merit: f64) -> String {
    let rounded = (merit * 100.0).round() / 100.0;
    let text = format!("{rounded:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text}%")
}

#[must_use]
pub fn or_na(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(NOT_AVAILABLE)
}

#[must_use]
pub fn deadline_or_tba(deadline: Option<&str>) -> &str {
    deadline.filter(|v| !v.trim().is_empty()).unwrap_or("TBA")
}

#[must_use]
pub fn status_label(active: bool) -> &'static str {
    if active { "Active" } else { "Inactive" }
}

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;
