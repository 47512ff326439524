//! Formatting of prices, calories and category badges.

/// Format an order total.
///
/// # Examples
///
/// ```
/// use kumpir_cli::ui::format_price;
///
/// assert_eq!(format_price(289, "₹"), "₹289");
/// ```
pub fn format_price(amount: u64, currency: &str) -> String {
    format!("{}{}", currency, amount)
}

/// Format an item's surcharge: `Free` for zero, `+₹30` otherwise.
///
/// # Examples
///
/// ```
/// use kumpir_cli::ui::format_item_price;
///
/// assert_eq!(format_item_price(0, "₹"), "Free");
/// assert_eq!(format_item_price(30, "₹"), "+₹30");
/// ```
pub fn format_item_price(price: u32, currency: &str) -> String {
    if price == 0 {
        "Free".to_string()
    } else {
        format!("+{}{}", currency, price)
    }
}

/// ```
/// use kumpir_cli::ui::format_calories;
///
/// assert_eq!(format_calories(350), "350 cal");
/// ```
pub fn format_calories(calories: u64) -> String {
    format!("{} cal", calories)
}

/// Category header badge, e.g. `1/3`.
pub fn progress_badge(selected: usize, total: usize) -> String {
    format!("{}/{}", selected, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_uses_currency_symbol() {
        assert_eq!(format_price(199, "₹"), "₹199");
        assert_eq!(format_price(0, "TRY "), "TRY 0");
    }

    #[test]
    fn test_format_item_price() {
        assert_eq!(format_item_price(0, "₹"), "Free");
        assert_eq!(format_item_price(15, "₹"), "+₹15");
        assert_eq!(format_item_price(90, "$"), "+$90");
    }

    #[test]
    fn test_progress_badge() {
        assert_eq!(progress_badge(0, 4), "0/4");
        assert_eq!(progress_badge(1, 3), "1/3");
    }
}
