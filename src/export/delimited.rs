//! Delimited text encodings (CSV and TSV)
//!
//! Every contest becomes a block: a `Contest: <name>` line, the header row,
//! then one line per row. Blocks are separated by a blank line and lines by
//! CRLF.

use super::rows::{ExportRow, ExportSection};

/// Column headings of every delimited export
pub const HEADERS: [&str; 7] = [
    "Contest",
    "Age Group",
    "Rank",
    "Name",
    "Score",
    "Time (min)",
    "Note",
];

const BOM: &str = "\u{feff}";
const LINE_ENDING: &str = "\r\n";

/// CSV with a leading byte-order mark
///
/// Only the contestant name is quoted, with embedded quotes doubled.
pub fn to_csv(sections: &[ExportSection]) -> String {
    let body = encode(sections, ",", |row| {
        format!("\"{}\"", row.contestant.replace('"', "\"\""))
    });
    format!("{}{}", BOM, body)
}

/// Tab-separated text without a byte-order mark, as put on the clipboard
pub fn to_tsv(sections: &[ExportSection]) -> String {
    encode(sections, "\t", |row| row.contestant.clone())
}

/// Tab-separated spreadsheet file content, prefixed with a byte-order mark
pub fn to_spreadsheet(sections: &[ExportSection]) -> String {
    format!("{}{}", BOM, to_tsv(sections))
}

fn encode<F>(sections: &[ExportSection], delimiter: &str, contestant: F) -> String
where
    F: Fn(&ExportRow) -> String,
{
    let mut lines: Vec<String> = Vec::new();

    for (index, section) in sections.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(format!("Contest: {}", section.contest_name));
        lines.push(HEADERS.join(delimiter));

        for row in &section.rows {
            let fields = [
                row.contest.clone(),
                row.age_group.clone(),
                row.rank.to_string(),
                contestant(row),
                row.score.to_string(),
                row.time.clone(),
                row.note.clone(),
            ];
            lines.push(fields.join(delimiter));
        }
    }

    lines.join(LINE_ENDING)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rank: usize, contestant: &str, score: f64, time: &str, note: &str) -> ExportRow {
        ExportRow {
            contest: "IQ Quiz Contest".into(),
            age_group: "Group 1".into(),
            rank,
            contestant: contestant.into(),
            score,
            time: time.into(),
            note: note.into(),
        }
    }

    fn sections() -> Vec<ExportSection> {
        vec![
            ExportSection {
                contest_id: "iq".into(),
                contest_name: "IQ Quiz Contest".into(),
                rows: vec![
                    row(1, "Asha \"Ace\" Rao", 15.5, "12", ""),
                    row(2, "Ravi, Jr", 9.0, "30", "Over 23 min"),
                ],
            },
            ExportSection {
                contest_id: "maths".into(),
                contest_name: "Maths Quiz Contest".into(),
                rows: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_csv_layout() {
        let csv = to_csv(&sections());
        let expected = "\u{feff}Contest: IQ Quiz Contest\r\n\
            Contest,Age Group,Rank,Name,Score,Time (min),Note\r\n\
            IQ Quiz Contest,Group 1,1,\"Asha \"\"Ace\"\" Rao\",15.5,12,\r\n\
            IQ Quiz Contest,Group 1,2,\"Ravi, Jr\",9,30,Over 23 min\r\n\
            \r\n\
            Contest: Maths Quiz Contest\r\n\
            Contest,Age Group,Rank,Name,Score,Time (min),Note";
        assert_eq!(csv, expected);
    }

    #[test]
    fn test_csv_parses_with_standard_reader() {
        let csv = to_csv(&sections());
        let body = csv.trim_start_matches('\u{feff}');

        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(body.as_bytes());
        let records: Vec<::csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        // Contest line, header, two rows, contest line, header
        assert_eq!(records.len(), 6);
        assert_eq!(&records[2][3], "Asha \"Ace\" Rao");
        assert_eq!(&records[3][3], "Ravi, Jr");
        assert_eq!(&records[3][6], "Over 23 min");
    }

    #[test]
    fn test_tsv_has_no_bom_and_no_quoting() {
        let tsv = to_tsv(&sections());
        assert!(tsv.starts_with("Contest: IQ Quiz Contest\r\n"));
        assert!(tsv.contains("IQ Quiz Contest\tGroup 1\t1\tAsha \"Ace\" Rao\t15.5\t12\t"));
        assert!(tsv.contains("\r\n\r\nContest: Maths Quiz Contest\r\n"));
    }

    #[test]
    fn test_spreadsheet_is_tsv_with_bom() {
        let sections = sections();
        assert_eq!(
            to_spreadsheet(&sections),
            format!("\u{feff}{}", to_tsv(&sections))
        );
    }

    #[test]
    fn test_encodings_are_deterministic() {
        let sections = sections();
        assert_eq!(to_csv(&sections), to_csv(&sections));
        assert_eq!(to_tsv(&sections), to_tsv(&sections));
    }

    #[test]
    fn test_no_sections_is_empty() {
        assert_eq!(to_csv(&[]), "\u{feff}");
        assert_eq!(to_tsv(&[]), "");
    }
}
