//! Rendering: a pure line model, then a crossterm pass that draws it.
//!
//! Keeping the layout as plain data means the interesting assertions
//! (blank clock before the first tick, exactly one selected marker, the
//! labeled-style heading) never have to parse escape sequences.

use std::io;
use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::style::Stylize;
use crossterm::terminal::Clear;
use crossterm::terminal::ClearType;

use tzclock_core::ZoneId;

use crate::app::picker::Picker;
use crate::app::picker::PickerRow;
use crate::commands::PickerStyle;

const HELP: &str = "Up/Down move   PgUp/PgDn page   Enter select   q quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// The live clock label; empty before the first tick.
    Clock(String),
    Blank,
    /// "Time Zone" heading, labeled style only.
    Heading(String),
    /// Group label row: the offset's string form.
    OffsetLabel(String),
    Zone {
        id: String,
        selected: bool,
        at_cursor: bool,
    },
    Help(String),
}

/// Rows spent outside the zone list: clock, spacer, optional heading, help.
fn overhead(style: PickerStyle) -> usize {
    match style {
        PickerStyle::Plain => 3,
        PickerStyle::Labeled => 4,
    }
}

pub fn render(
    clock_label: &str,
    picker: &Picker,
    selected: &ZoneId,
    style: PickerStyle,
    rows_available: usize,
) -> Vec<Line> {
    let mut lines = vec![Line::Clock(clock_label.to_string()), Line::Blank];
    if style == PickerStyle::Labeled {
        lines.push(Line::Heading("Time Zone".to_string()));
    }

    let list_height = rows_available.saturating_sub(overhead(style));
    let (start, end) = picker.window(list_height);
    for (offset_in_window, row) in picker.rows()[start..end].iter().enumerate() {
        let index = start + offset_in_window;
        match row {
            PickerRow::Offset(offset) => lines.push(Line::OffsetLabel(offset.to_string())),
            PickerRow::Zone(zone) => lines.push(Line::Zone {
                id: zone.to_string(),
                selected: zone == selected,
                at_cursor: index == picker.cursor(),
            }),
        }
    }

    lines.push(Line::Help(HELP.to_string()));
    lines
}

pub fn draw(out: &mut impl Write, lines: &[Line]) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for (row, line) in lines.iter().enumerate() {
        queue!(out, MoveTo(0, row as u16))?;
        match line {
            Line::Clock(label) => queue!(out, Print(label.as_str().bold()))?,
            Line::Blank => {}
            Line::Heading(text) => queue!(out, Print(text.as_str().bold().underlined()))?,
            Line::OffsetLabel(text) => queue!(out, Print(text.as_str().dark_cyan()))?,
            Line::Zone {
                id,
                selected,
                at_cursor,
            } => {
                let marker = if *selected { '*' } else { ' ' };
                let text = format!(" {marker} {id}");
                if *at_cursor {
                    queue!(out, Print(text.as_str().reverse()))?;
                } else if *selected {
                    queue!(out, Print(text.as_str().green()))?;
                } else {
                    queue!(out, Print(text))?;
                }
            }
            Line::Help(text) => queue!(out, Print(text.as_str().dim()))?,
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use tzclock_core::OffsetGroups;
    use tzclock_core::test_support::MockDatabase;

    fn picker(selected: &str) -> Picker {
        let db = MockDatabase::new()
            .with_zone("Test/Utc", 0)
            .with_zone("Test/London", 0)
            .with_zone("Test/Paris", 3600)
            .with_zone("Test/Kolkata", 5 * 3600 + 30 * 60);
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        Picker::new(&OffsetGroups::compute(&db, at), &ZoneId::from(selected))
    }

    #[test]
    fn test_clock_line_is_blank_before_first_tick() {
        let selected = ZoneId::from("Test/Utc");
        let lines = render("", &picker("Test/Utc"), &selected, PickerStyle::Plain, 40);
        assert_eq!(lines[0], Line::Clock(String::new()));
    }

    #[test]
    fn test_heading_appears_only_in_labeled_style() {
        let selected = ZoneId::from("Test/Utc");
        let p = picker("Test/Utc");

        let plain = render("9:05:03", &p, &selected, PickerStyle::Plain, 40);
        assert!(!plain.iter().any(|l| matches!(l, Line::Heading(_))));

        let labeled = render("9:05:03", &p, &selected, PickerStyle::Labeled, 40);
        assert_eq!(labeled[2], Line::Heading("Time Zone".to_string()));
    }

    #[test]
    fn test_exactly_one_zone_is_marked_selected() {
        let selected = ZoneId::from("Test/Paris");
        let lines = render("9:05:03", &picker("Test/Paris"), &selected, PickerStyle::Plain, 40);

        let marked: Vec<&Line> = lines
            .iter()
            .filter(|l| matches!(l, Line::Zone { selected: true, .. }))
            .collect();
        assert_eq!(marked.len(), 1);
        assert!(matches!(marked[0], Line::Zone { id, .. } if id == "Test/Paris"));
    }

    #[test]
    fn test_selection_marker_follows_the_store_not_the_cursor() {
        // Cursor on Kolkata, selection on Utc: marker stays with Utc.
        let mut p = picker("Test/Utc");
        p.jump_last();
        let selected = ZoneId::from("Test/Utc");
        let lines = render("", &p, &selected, PickerStyle::Plain, 40);

        for line in &lines {
            if let Line::Zone {
                id,
                selected: marked,
                at_cursor,
            } = line
            {
                assert_eq!(*marked, id == "Test/Utc");
                assert_eq!(*at_cursor, id == "Test/Kolkata");
            }
        }
    }

    #[test]
    fn test_render_fits_the_available_rows() {
        let selected = ZoneId::from("Test/Utc");
        let lines = render("", &picker("Test/Utc"), &selected, PickerStyle::Plain, 6);
        assert_eq!(lines.len(), 6);
        assert!(matches!(lines.last(), Some(Line::Help(_))));
    }

    #[test]
    fn test_draw_emits_the_visible_text() {
        let selected = ZoneId::from("Test/Paris");
        let lines = render("9:05:03", &picker("Test/Paris"), &selected, PickerStyle::Labeled, 40);

        let mut out = Vec::new();
        draw(&mut out, &lines).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("9:05:03"));
        assert!(text.contains("Time Zone"));
        assert!(text.contains("+01:00"));
        assert!(text.contains("Test/Kolkata"));
    }
}
