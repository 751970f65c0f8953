/// Render an aggregated quantity for display.
///
/// Whole numbers print without decimals. Anything else prints with two
/// decimals, then a trailing `.00` (rounding up to a whole number) or a single
/// trailing zero is dropped: `1.5 -> "1.5"`, `2.333 -> "2.33"`,
/// `0.9999999 -> "1"`.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{:.0}", value);
    }

    let fixed = format!("{:.2}", value);
    if let Some(whole) = fixed.strip_suffix(".00") {
        return whole.to_string();
    }
    match fixed.strip_suffix('0') {
        Some(trimmed) => trimmed.to_string(),
        None => fixed,
    }
}
