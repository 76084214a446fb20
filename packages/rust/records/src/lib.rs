//! Meeting record loading.
//!
//! Input is CSV with exactly two fields per record:
//! - the meeting title (opaque, may contain the delimiter when quoted)
//! - the participant list, names separated by `participant_separator`
//!
//! Records are numbered from zero in file order (after the optional header),
//! and that number becomes the meeting's [`MeetingId`](meetslot_shared::MeetingId).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, instrument};

use meetslot_shared::{InputConfig, Meeting, MeetslotError, Result};

/// Load meetings from a CSV file on disk.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_meetings(path: &Path, config: &InputConfig) -> Result<Vec<Meeting>> {
    let file = File::open(path).map_err(|e| MeetslotError::io(path, e))?;
    let meetings = read_meetings(file, config).map_err(|e| match e {
        MeetslotError::Parse { message } => {
            MeetslotError::parse(format!("{}: {message}", path.display()))
        }
        other => other,
    })?;

    debug!(count = meetings.len(), "meetings loaded");
    Ok(meetings)
}

/// Read meetings from any CSV source.
///
/// Fails on the first record whose field count is not two; nothing after a
/// bad record is read.
pub fn read_meetings<R: Read>(reader: R, config: &InputConfig) -> Result<Vec<Meeting>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(config.has_headers)
        .delimiter(config.delimiter_byte()?)
        .flexible(true)
        .from_reader(reader);

    let mut meetings = Vec::new();
    for (line, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| MeetslotError::parse(e.to_string()))?;
        if record.len() != 2 {
            return Err(MeetslotError::format(line, record.len()));
        }

        meetings.push(Meeting::new(
            line,
            &record[0],
            split_participants(&record[1], &config.participant_separator),
        ));
    }

    Ok(meetings)
}

/// Split a participant field into trimmed names.
///
/// Blank pieces are kept as `""`, so a blank field is one participant named
/// `""` and two blank-field meetings conflict.
fn split_participants<'a>(field: &'a str, separator: &'a str) -> impl Iterator<Item = &'a str> {
    field.split(separator).map(str::trim)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use meetslot_shared::MeetingId;

    fn read(input: &str) -> Result<Vec<Meeting>> {
        read_meetings(input.as_bytes(), &InputConfig::default())
    }

    #[test]
    fn reads_titles_and_participants() {
        let meetings = read("Planning,\"alice, bob\"\nReview,carol\n").expect("read");
        assert_eq!(meetings.len(), 2);
        assert_eq!(meetings[0].id, MeetingId(0));
        assert_eq!(meetings[0].title, "Planning");
        assert_eq!(meetings[0].participants, vec!["alice", "bob"]);
        assert_eq!(meetings[1].id, MeetingId(1));
        assert_eq!(meetings[1].participants, vec!["carol"]);
    }

    #[test]
    fn quoted_title_may_contain_commas() {
        let meetings = read("\"Budget, Q3\",\"dave,erin\"\n").expect("read");
        assert_eq!(meetings[0].title, "Budget, Q3");
        assert_eq!(meetings[0].participants, vec!["dave", "erin"]);
    }

    #[test]
    fn blank_names_are_kept() {
        let meetings = read("A,\"x, ,y\"\nB,\nC,\"  \"\n").expect("read");
        assert_eq!(meetings[0].participants, vec!["x", "", "y"]);
        assert_eq!(meetings[0].participant_list(), "x, , y");
        assert_eq!(meetings[1].participants, vec![""]);
        assert_eq!(meetings[2].participants, vec![""]);
    }

    #[test]
    fn wrong_field_count_reports_line() {
        let err = read("A,\"x,y\"\nB\nC,z\n").unwrap_err();
        match err {
            MeetslotError::Format { line, found } => {
                assert_eq!(line, 1);
                assert_eq!(found, 1);
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn three_fields_rejected() {
        let err = read("A,b,c\n").unwrap_err();
        assert!(matches!(err, MeetslotError::Format { line: 0, found: 3 }));
    }

    #[test]
    fn header_row_skipped_when_configured() {
        let config = InputConfig {
            has_headers: true,
            ..InputConfig::default()
        };
        let meetings =
            read_meetings("title,participants\nSync,\"a,b\"\n".as_bytes(), &config).expect("read");
        assert_eq!(meetings.len(), 1);
        assert_eq!(meetings[0].id, MeetingId(0));
        assert_eq!(meetings[0].title, "Sync");
    }

    #[test]
    fn custom_delimiters() {
        let config = InputConfig {
            delimiter: ";".into(),
            participant_separator: "|".into(),
            has_headers: false,
        };
        let meetings = read_meetings("Sync;a | b|c\n".as_bytes(), &config).expect("read");
        assert_eq!(meetings[0].participants, vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_input_yields_no_meetings() {
        assert!(read("").expect("read").is_empty());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("meetings.csv");
        std::fs::write(&path, "Kickoff,\"ann, ben\"\n").expect("write");

        let meetings = load_meetings(&path, &InputConfig::default()).expect("load");
        assert_eq!(meetings.len(), 1);
        assert_eq!(meetings[0].participant_list(), "ann, ben");
    }

    #[test]
    fn missing_file_names_path() {
        let err = load_meetings(Path::new("/nonexistent/meetings.csv"), &InputConfig::default())
            .unwrap_err();
        assert!(matches!(err, MeetslotError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/meetings.csv"));
    }
}
