/// Standard output utilities for consistent command formatting
use colored::*;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color as TableColor, ContentArrangement, Table};

use crate::bio::sequence::SequenceType;
use crate::core::validator::{display_id, RecordClassification};

/// Display a section header
pub fn section_header(title: &str) {
    println!("\n{}", title.bold().cyan());
}

/// Display a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Display an info message
pub fn info(message: &str) {
    println!("{} {}", "●".blue(), message);
}

/// Display a warning message
pub fn warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Display an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Create a standard table with our preferred styling
pub fn create_standard_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Create a standard header cell
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .add_attribute(Attribute::Bold)
        .fg(TableColor::Cyan)
}

/// Cell showing a classification, colored by outcome
pub fn type_cell(kind: Option<SequenceType>) -> Cell {
    let cell = Cell::new(SequenceType::label(kind));
    match kind {
        Some(SequenceType::Protein) => cell.fg(TableColor::Magenta),
        Some(_) => cell.fg(TableColor::Green),
        None => cell.fg(TableColor::Red).add_attribute(Attribute::Bold),
    }
}

/// One row per classified record: id (or position), length and label
pub fn records_table(records: &[RecordClassification]) -> Table {
    let mut table = create_standard_table();
    table.set_header(vec![header_cell("Record"), header_cell("Length"), header_cell("Type")]);
    for (i, record) in records.iter().enumerate() {
        table.add_row(vec![
            Cell::new(display_id(i, &record.id)),
            Cell::new(format_number(record.length)),
            type_cell(record.sequence_type),
        ]);
    }
    table
}

/// Format a number with thousands separator
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}
