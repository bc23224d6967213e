//! Fixed text of the interactive menu.

use std::io::{self, Write};

use calc_core::{DimensionSpec, MenuChoice};

const RULE: &str = "-------------------------------------";
const TITLE: &str = "      3D Shape Calculator Menu";

pub const CHOICE_PROMPT: &str = "Enter your choice (1-7): ";
pub const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 7.";
pub const GOODBYE: &str = "Exiting the program. Goodbye!";

/// Write the menu, preceded by a blank line.
pub fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", RULE)?;
    for choice in MenuChoice::all() {
        writeln!(out, "{}. {}", choice.menu_key(), choice.menu_label())?;
    }
    writeln!(out, "{}", RULE)
}

pub fn dimension_prompt(spec: &DimensionSpec) -> String {
    format!("Enter the {}: ", spec.description)
}
