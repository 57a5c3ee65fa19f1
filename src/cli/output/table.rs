//! Table output formatting for CLI commands
//!
//! Formats monkeys using comfy-table, with optional colors.

use comfy_table::{presets, Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::env;

use super::truncate;
use crate::domain::models::Monkey;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Create a new table formatter with custom settings
    pub fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format a list of monkeys as a table
    pub fn format_monkeys(&self, monkeys: &[Monkey]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Location").add_attribute(Attribute::Bold),
            Cell::new("Population").add_attribute(Attribute::Bold),
            Cell::new("Coordinates").add_attribute(Attribute::Bold),
        ]);

        for monkey in monkeys {
            let name_cell = if self.use_colors {
                Cell::new(&monkey.name).fg(Color::Cyan)
            } else {
                Cell::new(&monkey.name)
            };

            table.add_row(vec![
                name_cell,
                Cell::new(truncate(&monkey.location, 40)),
                Cell::new(format_population(monkey.population))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format_coordinates(monkey.latitude, monkey.longitude)),
            ]);
        }

        table.to_string()
    }

    /// Format a single monkey as a two-column detail table
    pub fn format_monkey_detail(&self, monkey: &Monkey) -> String {
        let mut table = self.create_base_table();

        let rows = [
            ("Name", monkey.name.clone()),
            ("Location", monkey.location.clone()),
            ("Population", format_population(monkey.population)),
            (
                "Coordinates",
                format_coordinates(monkey.latitude, monkey.longitude),
            ),
            ("Image", monkey.image.clone()),
            ("Details", monkey.details.clone()),
        ];

        for (label, value) in rows {
            table.add_row(vec![Cell::new(label).add_attribute(Attribute::Bold), Cell::new(value)]);
        }

        table.to_string()
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if terminal supports colors
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}

/// Group digits in thousands: 23000 -> "23,000"
fn format_population(population: i64) -> String {
    let digits = population.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if population < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!("{latitude:.4}, {longitude:.4}")
}
