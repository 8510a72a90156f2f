//! Report formatting utilities for terminal output
//!
//! Amount, bar and column helpers shared by the other display modules.

/// Format an amount with a currency symbol and two decimals
pub fn format_amount(symbol: &str, amount: f64) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, -amount)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Format a signed amount with color hints for terminal display
pub fn format_amount_colored(symbol: &str, amount: f64) -> String {
    let text = format_amount(symbol, amount);
    if amount < 0.0 {
        format!("\x1b[31m{}\x1b[0m", text)
    } else if amount > 0.0 {
        format!("\x1b[32m{}\x1b[0m", text)
    } else {
        text
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
