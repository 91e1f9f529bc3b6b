//! # Calendar Export
//!
//! Serializes the show catalog into an iCalendar (RFC 5545) document and
//! writes it as `<band-slug>-shows.ics` — the terminal stand-in for the
//! website's "add to calendar" download.
//!
//! Shows are whole-day events, so each `VEVENT` carries `VALUE=DATE` start
//! and (exclusive) end dates and no time-of-day. Event UIDs mix the export
//! timestamp with the show's display index: unique within one export, not
//! stable across exports.
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`) for crash safety.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::core::show::Show;

/// Content lines longer than this many octets are folded (RFC 5545 §3.1).
const FOLD_WIDTH: usize = 75;

#[derive(Debug)]
pub enum ExportError {
    /// Nothing to export — a user-facing empty state, not a fault.
    NoShows,
    Io(io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::NoShows => write!(f, "there are no shows to export"),
            ExportError::Io(e) => write!(f, "calendar write failed: {e}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        ExportError::Io(e)
    }
}

/// Render the catalog as an iCalendar document.
///
/// `stamp` is the export timestamp used for `DTSTAMP` and the UIDs; callers
/// pass `Utc::now()`, tests pass a fixed instant.
pub fn render_calendar(
    shows: &[Show],
    band: &str,
    stamp: DateTime<Utc>,
) -> Result<String, ExportError> {
    if shows.is_empty() {
        return Err(ExportError::NoShows);
    }

    let stamp_str = stamp.format("%Y%m%dT%H%M%SZ").to_string();
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//marquee//tour dates//EN".to_string(),
        "CALSCALE:GREGORIAN".to_string(),
    ];

    for (index, show) in shows.iter().enumerate() {
        let dtend = show.date.succ_opt().unwrap_or(show.date);

        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:{stamp_str}-{index}@marquee"));
        lines.push(format!("DTSTAMP:{stamp_str}"));
        lines.push(format!("DTSTART;VALUE=DATE:{}", show.date.format("%Y%m%d")));
        lines.push(format!("DTEND;VALUE=DATE:{}", dtend.format("%Y%m%d")));
        lines.push(format!(
            "SUMMARY:{}",
            escape_text(&format!("{} at {}", band, show.venue))
        ));
        lines.push(format!("DESCRIPTION:{}", escape_text(&description(band, show))));
        lines.push(format!("LOCATION:{}", escape_text(&show.location())));
        if let Some(c) = show.coordinates {
            // GEO is a float pair, not TEXT — no escaping.
            lines.push(format!("GEO:{:.6};{:.6}", c.lat, c.lng));
        }
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());

    let mut out = String::new();
    for line in &lines {
        out.push_str(&fold_line(line));
        out.push_str("\r\n");
    }
    Ok(out)
}

fn description(band: &str, show: &Show) -> String {
    let mut desc = format!("{} live at {}, {}.", band, show.venue, show.location());
    if show.sold_out {
        desc.push_str(" Sold out.");
    } else if let Some(url) = show.ticket_url.as_deref() {
        desc.push_str(&format!(" Tickets: {url}"));
    }
    desc
}

/// Escape a TEXT value per RFC 5545 §3.3.11: backslash, semicolon, comma,
/// and line breaks.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            other => out.push(other),
        }
    }
    out
}

/// Fold a content line at 75 octets; continuation lines start with a single
/// space. Splits only at char boundaries so multibyte text stays intact.
fn fold_line(line: &str) -> String {
    if line.len() <= FOLD_WIDTH {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + line.len() / FOLD_WIDTH * 3);
    let mut limit = FOLD_WIDTH;
    let mut used = 0usize;
    for ch in line.chars() {
        let ch_len = ch.len_utf8();
        if used + ch_len > limit {
            out.push_str("\r\n ");
            // Continuation lines spend one octet on the leading space.
            limit = FOLD_WIDTH - 1;
            used = 0;
        }
        out.push(ch);
        used += ch_len;
    }
    out
}

/// Lowercase-hyphen slug of the band name for the download filename.
fn slug(band: &str) -> String {
    let mut out = String::with_capacity(band.len());
    let mut pending_dash = false;
    for ch in band.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if out.is_empty() {
        out.push_str("band");
    }
    out
}

/// Deterministic download name, e.g. "the-headliners-shows.ics".
pub fn export_filename(band: &str) -> String {
    format!("{}-shows.ics", slug(band))
}

/// Render and write the calendar into `dir`. Returns the written path.
pub fn export_to_dir(shows: &[Show], band: &str, dir: &Path) -> Result<PathBuf, ExportError> {
    let body = render_calendar(shows, band, Utc::now())?;
    fs::create_dir_all(dir)?;

    let path = dir.join(export_filename(band));
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, &body)?;
    fs::rename(&tmp_path, &path)?;
    Ok(path)
}
