//! Output formatting for the CLI.

use beanmarket_commerce::cart::{CartEvent, CartSummary};
use beanmarket_commerce::catalog::{CatalogItem, MAX_RATING};
use console::style;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  ").trim_end());
    }

    /// Print the toast for a cart event, if it has one.
    pub fn event(&self, event: &CartEvent) {
        match event.notification() {
            Some(message) => self.success(&message),
            None => {
                if let CartEvent::QuantityChanged { name, to, .. } = event {
                    self.debug(&format!("{} quantity set to {}", name, to));
                }
            }
        }
    }

    /// Print a list of catalog items.
    pub fn items(&self, items: &[&CatalogItem]) {
        if self.json {
            return;
        }
        let widths = [4, 24, 26, 8, 7, 12];
        self.table_row(&["ID", "NAME", "ROASTER", "PRICE", "RATING", "STOCK"], &widths);
        for item in items {
            self.table_row(
                &[
                    item.id.as_str(),
                    &item.name,
                    &item.roaster_name,
                    &item.unit_price.display(),
                    &stars(item.rating),
                    &stock_badge(item.in_stock),
                ],
                &widths,
            );
        }
    }

    /// Print the cart contents and total.
    pub fn cart(&self, summary: &CartSummary) {
        if self.json {
            self.json(summary);
            return;
        }
        if summary.is_empty() {
            self.info("Your cart is empty");
            return;
        }
        let widths = [4, 24, 8, 4, 10];
        self.table_row(&["ID", "NAME", "PRICE", "QTY", "SUBTOTAL"], &widths);
        for line in &summary.lines {
            self.table_row(
                &[
                    line.item_id.as_str(),
                    &line.name,
                    &line.unit_price.display(),
                    &line.quantity.to_string(),
                    &line.subtotal.display(),
                ],
                &widths,
            );
        }
        println!(
            "  {} {} ({} items)",
            style("Total:").bold(),
            style(summary.total.display()).bold(),
            summary.item_count
        );
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Rating as filled and empty stars.
pub fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// Stock badge.
pub fn stock_badge(in_stock: bool) -> String {
    if in_stock {
        style("In Stock").green().to_string()
    } else {
        style("Out of Stock").red().to_string()
    }
}
