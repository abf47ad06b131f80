//! Sources command for checking the configured source table.

use std::io::Write;

use anyhow::Result;
use timetable_core::SourceTable;

/// Prints each source and its priority in display order.
pub fn run<W: Write>(writer: &mut W, sources: &SourceTable) -> Result<()> {
    for entry in sources.display_entries() {
        writeln!(writer, "{:<16} priority {}", entry.name, entry.priority)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;
    use timetable_core::SourceEntry;

    #[test]
    fn lists_default_sources() {
        let mut output = Vec::new();
        run(&mut output, &SourceTable::default()).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        Posh             priority 0
        Grotty           priority 1
        ");
    }

    #[test]
    fn follows_display_order() {
        let sources = SourceTable::new(
            vec![
                SourceEntry::new("Posh", 0),
                SourceEntry::new("Grotty", 1),
                SourceEntry::new("Shiny", 2),
            ],
            Some(vec![
                "Shiny".to_string(),
                "Posh".to_string(),
                "Grotty".to_string(),
            ]),
        )
        .unwrap();

        let mut output = Vec::new();
        run(&mut output, &sources).unwrap();

        let output = String::from_utf8(output).unwrap();
        let names: Vec<&str> = output
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(names, ["Shiny", "Posh", "Grotty"]);
    }
}
