//! CSV export of the current result list.
//!
//! Column order is fixed (see `CSV_HEADER`). Every cell is quoted and
//! embedded quotes are doubled, RFC 4180 style. Multi-valued fields are
//! joined with `|` inside one cell. Output is UTF-8 with CRLF line endings.

use std::io::{self, Write};

use candidate_store::Candidate;
use chrono::{NaiveDate, SecondsFormat};

/// Header row, in output order
pub const CSV_HEADER: [&str; 10] = [
    "Name",
    "Title",
    "Location",
    "Experience",
    "Skills",
    "Languages",
    "Availability",
    "Remote Preference",
    "Last Active",
    "Date Added",
];

/// Separator for multi-valued cells
pub const MULTI_VALUE_DELIMITER: &str = "|";

/// Quote one cell, doubling any embedded quote characters
fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

fn write_row<W: Write>(writer: &mut W, cells: &[&str]) -> io::Result<()> {
    let line = cells.iter().map(|cell| quote(cell)).collect::<Vec<_>>().join(",");
    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\r\n")
}

/// Write the header and one row per candidate, in list order.
pub fn write_csv<W: Write>(writer: &mut W, candidates: &[&Candidate]) -> io::Result<()> {
    write_row(writer, &CSV_HEADER)?;
    for candidate in candidates {
        let skills = candidate.skills.join(MULTI_VALUE_DELIMITER);
        let languages = candidate.languages.join(MULTI_VALUE_DELIMITER);
        let last_active = candidate
            .last_active_at
            .to_rfc3339_opts(SecondsFormat::Secs, true);
        let date_added = candidate.date_added.to_rfc3339_opts(SecondsFormat::Secs, true);

        write_row(
            writer,
            &[
                candidate.name.as_str(),
                candidate.title.as_str(),
                candidate.location.as_str(),
                candidate.experience_band.as_str(),
                skills.as_str(),
                languages.as_str(),
                candidate.availability.as_str(),
                candidate.remote_preference.as_str(),
                last_active.as_str(),
                date_added.as_str(),
            ],
        )?;
    }
    Ok(())
}

/// Serialize the list to CSV bytes
pub fn export_csv(candidates: &[&Candidate]) -> Vec<u8> {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_csv(&mut buffer, candidates);
    tracing::debug!("Exported {} candidates ({} bytes)", candidates.len(), buffer.len());
    buffer
}

/// File name for an export made on `date`
pub fn export_filename(date: NaiveDate) -> String {
    format!("candidates-{}.csv", date.format("%Y-%m-%d"))
}
