//! Wordlist persistence.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Local};
use tracing::info;

use crate::core::errors::{Result, SkaldError};

/// Write the wordlist to `path`, one candidate per line, and return the
/// number of lines written.
pub fn write_wordlist(path: &Path, words: &[String]) -> Result<usize> {
    let file = File::create(path).map_err(|e| {
        SkaldError::io(format!("Failed to create wordlist file: {}", path.display()), e)
    })?;
    let mut writer = BufWriter::new(file);

    for word in words {
        writeln!(writer, "{word}").map_err(|e| {
            SkaldError::io(format!("Failed to write wordlist: {}", path.display()), e)
        })?;
    }
    writer.flush().map_err(|e| {
        SkaldError::io(format!("Failed to flush wordlist: {}", path.display()), e)
    })?;

    info!(path = %path.display(), count = words.len(), "wordlist saved");
    Ok(words.len())
}

/// File name of the form `wordlist_YYYYMMDD_HHMMSS.txt` for the given
/// moment.
pub fn timestamped_filename(now: DateTime<Local>) -> String {
    format!("wordlist_{}.txt", now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_write_and_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let words = vec!["alpha".to_string(), "beta".to_string()];

        let count = write_wordlist(&path, &words).unwrap();
        assert_eq!(count, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "alpha\nbeta\n");
    }

    #[test]
    fn test_write_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");

        assert_eq!(write_wordlist(&path, &[]).unwrap(), 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_timestamped_filename() {
        let moment = Local.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap();
        assert_eq!(timestamped_filename(moment), "wordlist_20250314_150926.txt");
    }
}
