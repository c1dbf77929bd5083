//! High-score ledger resource.
//!
//! Keeps the ranked list of best historical run scores: descending by score,
//! stable for ties, capped at [`MAX_ENTRIES`]. The in-memory resource is the
//! authoritative copy during a session; the JSON file on disk is a best-effort
//! mirror maintained by the background persistence thread
//! (`crate::resources::ledger`).
//!
//! Load and save never interrupt the simulation: an absent or corrupt file
//! reads as an empty ledger, and write failures are logged and dropped.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Maximum number of entries the ledger keeps.
pub const MAX_ENTRIES: usize = 5;

/// One completed run in the ledger.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub score: u32,
    /// ISO-8601 UTC timestamp of the commit.
    pub date: String,
}

impl ScoreEntry {
    pub fn new(score: u32, date: impl Into<String>) -> Self {
        Self {
            score,
            date: date.into(),
        }
    }

    /// Entry stamped with the current wall-clock time.
    pub fn now(score: u32) -> Self {
        Self::new(score, iso8601_now())
    }
}

/// Ranked ledger of best historical scores.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScores {
    pub entries: Vec<ScoreEntry>,
}

impl HighScores {
    /// Build a ledger from loaded entries, restoring the ranking invariant
    /// on whatever the file contained.
    pub fn from_entries(mut entries: Vec<ScoreEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_ENTRIES);
        Self { entries }
    }

    /// Insert a completed run, keeping the list sorted descending by score
    /// and capped at [`MAX_ENTRIES`]. The sort is stable, so equal scores
    /// keep their submission order.
    pub fn submit(&mut self, entry: ScoreEntry) {
        self.entries.push(entry);
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
    }

    /// Empty the ledger.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read ledger entries from a JSON file.
///
/// Returns an error string if the file cannot be read or parsed; callers
/// treat that as an empty ledger.
pub fn read_entries(path: &Path) -> Result<Vec<ScoreEntry>, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("failed to parse {}: {}", path.display(), e))
}

/// Write the full entry sequence to a JSON file, replacing prior contents.
pub fn write_entries(path: &Path, entries: &[ScoreEntry]) -> Result<(), String> {
    let contents = serde_json::to_string_pretty(entries)
        .map_err(|e| format!("failed to serialize high scores: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| format!("failed to write {}: {}", path.display(), e))
}

/// Current wall-clock time as an ISO-8601 UTC string.
pub fn iso8601_now() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format_iso8601(secs)
}

/// Format seconds since the Unix epoch as `YYYY-MM-DDTHH:MM:SSZ`.
fn format_iso8601(unix_secs: u64) -> String {
    let days = (unix_secs / 86_400) as i64;
    let secs_of_day = unix_secs % 86_400;
    let (year, month, day) = civil_from_days(days);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        day,
        secs_of_day / 3_600,
        (secs_of_day % 3_600) / 60,
        secs_of_day % 60
    )
}

// Howard Hinnant's civil_from_days.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = if month <= 2 { year + 1 } else { year };
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // ==================== RANKING TESTS ====================

    #[test]
    fn test_submit_sorts_descending() {
        let mut scores = HighScores::default();
        scores.submit(ScoreEntry::new(5, "a"));
        scores.submit(ScoreEntry::new(9, "b"));
        scores.submit(ScoreEntry::new(7, "c"));
        let ranked: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(ranked, vec![9, 7, 5]);
    }

    #[test]
    fn test_submit_truncates_to_cap() {
        let mut scores = HighScores::default();
        for (i, s) in [5, 3, 8, 1, 9, 2].into_iter().enumerate() {
            scores.submit(ScoreEntry::new(s, format!("run-{i}")));
        }
        let ranked: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(ranked, vec![9, 8, 5, 3, 2]);
    }

    #[test]
    fn test_ties_keep_submission_order() {
        let mut scores = HighScores::default();
        scores.submit(ScoreEntry::new(4, "first"));
        scores.submit(ScoreEntry::new(4, "second"));
        assert_eq!(scores.entries[0].date, "first");
        assert_eq!(scores.entries[1].date, "second");
    }

    #[test]
    fn test_clear() {
        let mut scores = HighScores::default();
        scores.submit(ScoreEntry::new(1, "a"));
        scores.clear();
        assert!(scores.is_empty());
    }

    #[test]
    fn test_from_entries_restores_invariant() {
        let scores = HighScores::from_entries(vec![
            ScoreEntry::new(1, "a"),
            ScoreEntry::new(9, "b"),
            ScoreEntry::new(3, "c"),
            ScoreEntry::new(7, "d"),
            ScoreEntry::new(5, "e"),
            ScoreEntry::new(8, "f"),
        ]);
        let ranked: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(ranked, vec![9, 8, 7, 5, 3]);
    }

    // ==================== FILE TESTS ====================

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.json");
        let entries = vec![
            ScoreEntry::new(42, "2026-01-01T00:00:00Z"),
            ScoreEntry::new(7, "2026-01-02T00:00:00Z"),
        ];

        write_entries(&path, &entries).unwrap();
        let loaded = read_entries(&path).unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_read_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_entries(&dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn test_read_corrupt_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"not json at all").unwrap();
        assert!(read_entries(&path).is_err());
    }

    // ==================== TIMESTAMP TESTS ====================

    #[test]
    fn test_format_iso8601_epoch() {
        assert_eq!(format_iso8601(0), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_format_iso8601_leap_day() {
        assert_eq!(format_iso8601(951_782_400), "2000-02-29T00:00:00Z");
    }

    #[test]
    fn test_format_iso8601_billennium() {
        assert_eq!(format_iso8601(1_000_000_000), "2001-09-09T01:46:40Z");
    }

    #[test]
    fn test_iso8601_now_shape() {
        let now = iso8601_now();
        assert_eq!(now.len(), 20);
        assert!(now.ends_with('Z'));
        assert_eq!(&now[4..5], "-");
        assert_eq!(&now[10..11], "T");
    }
}
