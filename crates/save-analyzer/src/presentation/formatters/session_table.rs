use crate::presentation::formatters::{format_duration, format_stamp};
use crate::presentation::view_models::SessionRow;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table, presets::UTF8_FULL};
use std::fmt;

const HEADERS: [&str; 6] = [
    "#",
    "duration",
    "saves",
    "saves rate",
    "session start",
    "session stop",
];

pub struct SessionTableView<'a> {
    rows: &'a [SessionRow],
}

impl<'a> SessionTableView<'a> {
    pub fn new(rows: &'a [SessionRow]) -> Self {
        Self { rows }
    }

    fn build(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(HEADERS.iter().map(|h| Cell::new(h).fg(Color::White)));

        for row in self.rows {
            table.add_row(vec![
                Cell::new(row.ordinal).set_alignment(CellAlignment::Right),
                Cell::new(format_duration(row.duration_secs)).fg(Color::Cyan),
                Cell::new(row.saves).set_alignment(CellAlignment::Right),
                Cell::new(format_duration(row.save_rate_secs)),
                Cell::new(format_stamp(row.start_ts)).fg(Color::DarkGrey),
                Cell::new(format_stamp(row.end_ts)).fg(Color::DarkGrey),
            ]);
        }

        table
    }
}

impl fmt::Display for SessionTableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.build())
    }
}
