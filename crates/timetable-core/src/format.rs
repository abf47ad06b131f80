//! Rendering of resolved timetables grouped by source.

use std::fmt::Write as _;
use std::io;

use crate::sources::SourceTable;
use crate::store::ResultStore;

/// Writes every source group in display order.
///
/// Each group lists that source's intervals by start time and is followed
/// by one empty line, even when the group has no intervals.
pub fn write_timetable<W: io::Write>(
    writer: &mut W,
    store: &ResultStore,
    sources: &SourceTable,
) -> io::Result<()> {
    writer.write_all(render_timetable(store, sources).as_bytes())
}

/// Renders the grouped timetable into a string.
pub fn render_timetable(store: &ResultStore, sources: &SourceTable) -> String {
    let mut output = String::new();
    for source in sources.display_order() {
        for interval in store.iter().filter(|i| i.source() == source) {
            writeln!(output, "{interval}").unwrap();
        }
        output.push('\n');
    }
    output
}
