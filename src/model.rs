// src/model.rs

use std::collections::HashMap;

/// Index of a path inside a `PathVisitLog`, in first-seen order
pub type PathId = usize;

/// A single parsed log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord<'a> {
    pub path: &'a str,
    pub address: &'a str,
}

/// Every address that requested one path, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathVisits {
    pub path: String,
    /// Duplicates are kept; one entry per input line
    pub addresses: Vec<String>,
}

/// Maps each requested path to the addresses that hit it.
///
/// Iteration follows the order in which paths first appeared in the log,
/// which is what ties in a ranking fall back to.
#[derive(Debug, Default, Clone)]
pub struct PathVisitLog {
    index: HashMap<String, PathId>,
    entries: Vec<PathVisits>,
}

impl PathVisitLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: LogRecord<'_>) {
        let id = match self.index.get(record.path) {
            Some(&id) => id,
            None => {
                let id = self.entries.len();
                self.index.insert(record.path.to_string(), id);
                self.entries.push(PathVisits {
                    path: record.path.to_string(),
                    addresses: Vec::new(),
                });
                id
            }
        };
        self.entries[id].addresses.push(record.address.to_string());
    }

    pub fn get(&self, path: &str) -> Option<&[String]> {
        self.index
            .get(path)
            .map(|&id| self.entries[id].addresses.as_slice())
    }

    pub fn entries(&self) -> &[PathVisits] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|e| (e.path.as_str(), e.addresses.as_slice()))
    }

    /// Number of distinct paths
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of records, duplicates included
    pub fn record_count(&self) -> usize {
        self.entries.iter().map(|e| e.addresses.len()).sum()
    }
}

impl<'a> FromIterator<LogRecord<'a>> for PathVisitLog {
    fn from_iter<I: IntoIterator<Item = LogRecord<'a>>>(iter: I) -> Self {
        let mut log = PathVisitLog::new();
        for record in iter {
            log.record(record);
        }
        log
    }
}

/// One row of a ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCount {
    pub path: String,
    pub count: usize,
}

impl PathCount {
    pub fn new(path: impl Into<String>, count: usize) -> Self {
        Self { path: path.into(), count }
    }
}

/// Paths ordered by count, highest first
pub type RankedMetric = Vec<PathCount>;

/// Counters gathered while reading a log file
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub lines: usize,
    pub records: usize,
    pub skipped_lines: usize,
    pub bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rec<'a>(path: &'a str, address: &'a str) -> LogRecord<'a> {
        LogRecord { path, address }
    }

    #[test]
    fn keeps_first_seen_path_order() {
        let log: PathVisitLog = [
            rec("/b", "1.1.1.1"),
            rec("/a", "2.2.2.2"),
            rec("/b", "3.3.3.3"),
        ]
        .into_iter()
        .collect();

        let paths: Vec<&str> = log.iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["/b", "/a"]);
    }

    #[test]
    fn keeps_duplicate_addresses() {
        let log: PathVisitLog = [rec("/a", "1.1.1.1"), rec("/a", "1.1.1.1")]
            .into_iter()
            .collect();

        assert_eq!(log.get("/a").unwrap(), ["1.1.1.1", "1.1.1.1"]);
        assert_eq!(log.record_count(), 2);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn unknown_path_is_none() {
        let log = PathVisitLog::new();
        assert!(log.get("/missing").is_none());
        assert!(log.is_empty());
    }
}
