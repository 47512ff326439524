//! Accordion menu and order summary rendering.
//!
//! The `render_*` functions build the text so tests can inspect it; the
//! `print_*` wrappers write it to stdout.

use console::{Alignment, measure_text_width, pad_str};
use kumpir::{Catalog, CategoryProgress, Item, OrderSummary, SelectionSet, category_progress};
use owo_colors::Style;

use super::format::{format_calories, format_item_price, format_price, progress_badge};
use super::paint;

/// Render the catalog as an accordion. Categories for which `is_open`
/// returns true list their items; the rest show only their header.
pub fn render_menu(
    catalog: &Catalog,
    selection: &SelectionSet,
    is_open: impl Fn(&str) -> bool,
    currency: &str,
) -> String {
    let id_width = column_width(catalog.items().map(|i| i.id.as_str()));
    let name_width = column_width(catalog.items().map(|i| i.name.as_str()));

    let mut out = String::new();
    for (category, progress) in catalog
        .categories()
        .iter()
        .zip(category_progress(catalog, selection))
    {
        let open = is_open(&category.name);
        out.push_str(&render_header(&progress, open));
        out.push('\n');

        if open {
            for item in &category.items {
                out.push_str(&render_item(
                    item,
                    selection.contains(item.id.as_str()),
                    id_width,
                    name_width,
                    currency,
                ));
                out.push('\n');
            }
        }
    }
    out
}

fn render_header(progress: &CategoryProgress, open: bool) -> String {
    let marker = if open { "▾" } else { "▸" };
    format!(
        "{} {}  {}",
        paint(marker, Style::new().dimmed()),
        paint(&progress.name, Style::new().bold()),
        paint(
            progress_badge(progress.selected, progress.total),
            Style::new().dimmed()
        )
    )
}

fn render_item(
    item: &Item,
    selected: bool,
    id_width: usize,
    name_width: usize,
    currency: &str,
) -> String {
    let check = if selected {
        paint("[x]", Style::new().green().bold())
    } else {
        "[ ]".to_string()
    };

    let price = pad_str(
        &format_item_price(item.price, currency),
        6,
        Alignment::Right,
        None,
    )
    .into_owned();
    let price = if item.is_free() {
        paint(price, Style::new().green())
    } else {
        price
    };

    let calories = pad_str(
        &format_calories(u64::from(item.calories)),
        8,
        Alignment::Right,
        None,
    )
    .into_owned();

    let mut line = format!(
        "    {} {}  {}  {}  {}",
        check,
        paint(
            pad_str(item.id.as_str(), id_width, Alignment::Left, None),
            Style::new().dimmed()
        ),
        pad_str(&item.name, name_width, Alignment::Left, None),
        price,
        paint(calories, Style::new().dimmed()),
    );

    if !item.allergens.is_empty() {
        let tags = item.allergens.iter().cloned().collect::<Vec<_>>().join(", ");
        line.push_str("  ");
        line.push_str(&paint(tags, Style::new().yellow()));
    }
    if item.is_included() {
        line.push_str("  ");
        line.push_str(&paint("INCLUDED", Style::new().bright_green().bold()));
    }

    line.trim_end().to_string()
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(measure_text_width).max().unwrap_or(0)
}

/// Render selected item chips, total, calories and allergens.
pub fn render_summary(summary: &OrderSummary, currency: &str) -> String {
    let chips = if summary.selected_items.is_empty() {
        paint("plain potato", Style::new().dimmed())
    } else {
        summary
            .item_names()
            .map(|name| paint(name, Style::new().blue()))
            .collect::<Vec<_>>()
            .join(" · ")
    };

    let allergens = if summary.allergens.is_empty() {
        "none".to_string()
    } else {
        summary.allergens.iter().cloned().collect::<Vec<_>>().join(", ")
    };

    let mut out = String::new();
    out.push_str(&format!("{}\n", paint("Your Kumpir", Style::new().bold().underline())));
    out.push_str(&format!("  {}\n", chips));
    out.push_str(&format!(
        "  {}  {}\n",
        pad_str("Total", 13, Alignment::Left, None),
        paint(format_price(summary.total_price, currency), Style::new().bold())
    ));
    out.push_str(&format!(
        "  {}  {}\n",
        pad_str("Est. Calories", 13, Alignment::Left, None),
        paint(format_calories(summary.total_calories), Style::new().yellow())
    ));
    out.push_str(&format!(
        "  {}  {}\n",
        pad_str("Allergens", 13, Alignment::Left, None),
        allergens
    ));
    out
}

/// One `name  selected/total` line per category.
pub fn render_progress(progress: &[CategoryProgress]) -> String {
    let width = column_width(progress.iter().map(|p| p.name.as_str()));
    progress
        .iter()
        .map(|p| {
            format!(
                "  {}  {}\n",
                pad_str(&p.name, width, Alignment::Left, None),
                progress_badge(p.selected, p.total)
            )
        })
        .collect()
}

pub fn print_menu(
    catalog: &Catalog,
    selection: &SelectionSet,
    is_open: impl Fn(&str) -> bool,
    currency: &str,
) {
    print!("{}", render_menu(catalog, selection, is_open, currency));
}

pub fn print_summary(summary: &OrderSummary, currency: &str) {
    print!("{}", render_summary(summary, currency));
}

pub fn print_progress(progress: &[CategoryProgress]) {
    print!("{}", render_progress(progress));
}

#[cfg(test)]
mod tests {
    use super::*;
    use kumpir::{builtin, summarize};
    use serial_test::serial;

    fn launch_selection(ids: &[&str]) -> SelectionSet {
        ids.iter().copied().collect()
    }

    #[test]
    #[serial]
    fn menu_lists_only_open_categories() {
        crate::ui::init_colors(true);
        let catalog = builtin::menu().unwrap();
        let text = render_menu(&catalog, &launch_selection(&["butter"]), |name| name == "Base", "₹");

        assert!(text.contains("▾ Base  1/3"));
        assert!(text.contains("▸ Classics  0/4"));
        assert!(text.contains("Whipped Butter"));
        assert!(text.contains("INCLUDED"));
        assert!(text.contains("+₹30"));
        assert!(!text.contains("Sweet Corn"));
    }

    #[test]
    #[serial]
    fn selected_items_are_checked() {
        crate::ui::init_colors(true);
        let catalog = builtin::menu().unwrap();
        let text = render_menu(&catalog, &launch_selection(&["butter"]), |_| true, "₹");

        let butter = text.lines().find(|l| l.contains("Whipped Butter")).unwrap();
        assert!(butter.trim_start().starts_with("[x]"));
        assert!(butter.contains("Free"));
        let corn = text.lines().find(|l| l.contains("Sweet Corn")).unwrap();
        assert!(corn.trim_start().starts_with("[ ]"));
    }

    #[test]
    #[serial]
    fn summary_shows_total_calories_and_allergens() {
        crate::ui::init_colors(true);
        let catalog = builtin::menu().unwrap();
        let summary = summarize(&catalog, &launch_selection(&["butter", "cheese", "paneer"]));
        let text = render_summary(&summary, "₹");

        assert!(text.contains("Whipped Butter · Kasar Cheese · Spiced Paneer"));
        assert!(text.contains("₹289"));
        assert!(text.contains("Est. Calories  620 cal"));
        assert!(text.contains("dairy"));
    }

    #[test]
    #[serial]
    fn empty_order_is_a_plain_potato() {
        crate::ui::init_colors(true);
        let catalog = builtin::menu().unwrap();
        let text = render_summary(&summarize(&catalog, &SelectionSet::new()), "₹");
        assert!(text.contains("plain potato"));
        assert!(text.contains("₹199"));
        assert!(text.contains("Allergens      none"));
    }

    #[test]
    fn progress_lines_align_badges() {
        let progress = vec![
            CategoryProgress {
                name: "Base".to_string(),
                selected: 1,
                total: 3,
            },
            CategoryProgress {
                name: "Crunch".to_string(),
                selected: 0,
                total: 3,
            },
        ];
        assert_eq!(render_progress(&progress), "  Base    1/3\n  Crunch  0/3\n");
    }
}
