//! Innings pitched from recorded outs.

/// Innings pitched as a decimal: whole innings plus .33 / .67 for partial
/// innings. Negative input is treated as zero.
pub fn innings_pitched(outs: i64) -> f64 {
    let outs = outs.max(0);
    let whole = (outs / 3) as f64;
    let partial = match outs % 3 {
        1 => 0.33,
        2 => 0.67,
        _ => 0.0,
    };
    whole + partial
}

/// Innings pitched formatted with two decimals (e.g. "4.67").
pub fn format_innings_pitched(outs: i64) -> String {
    format!("{:.2}", innings_pitched(outs))
}
