/// Returns "$12.5000" style currency text (4 decimal places).
pub fn format_usd(amount: f64) -> String {
    format!("${:.4}", amount)
}

/// Returns "2.0000 GB" style size text.
pub fn format_gb(gb: f64) -> String {
    format!("{:.4} GB", gb)
}
