use crate::domain::NotePath;
use crate::utils::error::{MdNoteError, Result};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

pub const DEFAULT_NOTES_ROOT: &str = "notes";

/// Note of the day for `now`, under the default `notes` root.
pub fn generate_note_path<Tz: TimeZone>(now: &DateTime<Tz>) -> NotePath {
    note_path_under(DEFAULT_NOTES_ROOT, now)
}

pub fn note_path_under<Tz: TimeZone>(root: impl AsRef<Path>, now: &DateTime<Tz>) -> NotePath {
    note_path_for_date(root, now.date_naive())
}

/// `<root>/<YYYY-MM>-w<W>/<YYYY-MM-DD>.md`
///
/// The month folder uses the calendar year while `W` is the ISO-8601 week, so
/// 2024-12-30 lands in `2024-12-w1`.
pub fn note_path_for_date(root: impl AsRef<Path>, date: NaiveDate) -> NotePath {
    let week = date.iso_week().week();
    let directory = root
        .as_ref()
        .join(format!("{}-w{}", date.format("%Y-%m"), week));
    let file = directory.join(format!("{}.md", date.format("%Y-%m-%d")));
    NotePath { directory, file }
}

/// Appends `payload` to the note, creating its directory and the file as
/// needed. Existing content is never truncated.
pub fn append_note(path: &NotePath, payload: &[u8]) -> Result<()> {
    if !path.directory.as_os_str().is_empty() {
        fs::create_dir_all(&path.directory)
            .map_err(|e| MdNoteError::io("creating directory", &path.directory, e))?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path.file)
        .map_err(|e| MdNoteError::io("opening", &path.file, e))?;

    file.write_all(payload)
        .map_err(|e| MdNoteError::io("writing", &path.file, e))?;

    tracing::debug!("Appended {} bytes to {}", payload.len(), path.file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_generate_note_path_layout() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap();
        let path = generate_note_path(&now);

        assert_eq!(path.directory, PathBuf::from("notes/2024-03-w10"));
        assert_eq!(path.file, PathBuf::from("notes/2024-03-w10/2024-03-05.md"));
        assert!(path.file.starts_with(&path.directory));
    }

    #[test]
    fn test_week_is_not_zero_padded() {
        let path = note_path_for_date("notes", date(2023, 1, 2));
        assert_eq!(path.directory, PathBuf::from("notes/2023-01-w1"));
    }

    #[test]
    fn test_year_end_falls_into_next_iso_week_one() {
        let path = note_path_for_date("notes", date(2024, 12, 31));
        assert_eq!(path.directory, PathBuf::from("notes/2024-12-w1"));
        assert_eq!(path.file, PathBuf::from("notes/2024-12-w1/2024-12-31.md"));
    }

    #[test]
    fn test_year_start_can_belong_to_previous_iso_year() {
        // 2021-01-01 is a Friday, part of week 53 of 2020.
        let path = note_path_for_date("notes", date(2021, 1, 1));
        assert_eq!(path.directory, PathBuf::from("notes/2021-01-w53"));
    }

    #[test]
    fn test_same_day_yields_same_path() {
        let morning = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let night = Utc.with_ymd_and_hms(2024, 6, 1, 23, 59, 59).unwrap();
        assert_eq!(generate_note_path(&morning), generate_note_path(&night));
    }

    #[test]
    fn test_local_calendar_day_is_used() {
        // 23:30 UTC on May 31st is already June 1st at UTC+02:00.
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = Utc
            .with_ymd_and_hms(2024, 5, 31, 23, 30, 0)
            .unwrap()
            .with_timezone(&offset);
        let path = generate_note_path(&now);
        assert!(path.file.ends_with("2024-06-01.md"));
    }

    #[test]
    fn test_custom_root() {
        let path = note_path_for_date("/tmp/journal", date(2024, 3, 5));
        assert_eq!(path.file, PathBuf::from("/tmp/journal/2024-03-w10/2024-03-05.md"));
    }

    #[test]
    fn test_append_creates_directories_and_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = note_path_for_date(temp_dir.path(), date(2024, 3, 5));

        append_note(&path, b"first\n").unwrap();
        append_note(&path, b"second\n").unwrap();

        assert!(path.directory.is_dir());
        assert_eq!(fs::read(&path.file).unwrap(), b"first\nsecond\n");
    }

    #[test]
    fn test_append_never_truncates_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = NotePath::from_file(temp_dir.path().join("existing.md"));
        fs::write(&path.file, b"# Log\n").unwrap();

        append_note(&path, b"- entry\n").unwrap();

        assert_eq!(fs::read(&path.file).unwrap(), b"# Log\n- entry\n");
    }

    #[test]
    fn test_append_empty_payload_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = NotePath::from_file(temp_dir.path().join("nested/dir/empty.md"));

        append_note(&path, b"").unwrap();

        assert!(path.file.is_file());
        assert_eq!(fs::read(&path.file).unwrap(), b"");
    }

    #[test]
    fn test_append_fails_when_directory_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("notes");
        fs::write(&blocker, b"not a directory").unwrap();
        let path = note_path_for_date(&blocker, date(2024, 3, 5));

        let err = append_note(&path, b"lost\n").unwrap_err();

        assert!(err.to_string().starts_with("creating directory"));
        assert_eq!(err.exit_code(), 1);
    }
}
