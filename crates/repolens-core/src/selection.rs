//! File ordering ahead of chunking.

use crate::models::FileEntry;
use std::cmp::Reverse;

/// Order a path -> content map for summarization.
///
/// Entry-point files come first, then shorter files, then lexical path order.
/// `detailed` does not change the ordering; callers hand in a reduced map for
/// quick runs and the full map for detailed runs.
pub fn select_files<I, P, C>(files: I, detailed: bool) -> Vec<FileEntry>
where
    I: IntoIterator<Item = (P, C)>,
    P: Into<String>,
    C: Into<String>,
{
    let mut entries: Vec<FileEntry> = files
        .into_iter()
        .map(|(path, content)| FileEntry::new(path, content))
        .collect();

    entries.sort_by(|a, b| {
        (Reverse(a.is_entry_point()), a.content.len(), &a.path).cmp(&(
            Reverse(b.is_entry_point()),
            b.content.len(),
            &b.path,
        ))
    });

    tracing::debug!(files = entries.len(), detailed, "selected files");
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn paths(entries: &[FileEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn test_entry_points_first_then_shorter() {
        let files = vec![
            ("util.go", "b".repeat(2000)),
            ("main.go", "a".repeat(10)),
            ("lib.go", "c".repeat(5)),
            ("web/index.js", "d".repeat(50)),
        ];
        let selected = select_files(files, true);
        assert_eq!(
            paths(&selected),
            vec!["main.go", "web/index.js", "lib.go", "util.go"]
        );
    }

    #[test]
    fn test_ties_broken_by_path() {
        let mut files = HashMap::new();
        files.insert("z.rs".to_string(), "xx".to_string());
        files.insert("a.rs".to_string(), "yy".to_string());
        files.insert("m.rs".to_string(), "zz".to_string());
        let selected = select_files(files, false);
        assert_eq!(paths(&selected), vec!["a.rs", "m.rs", "z.rs"]);
    }

    #[test]
    fn test_entry_points_precede_everything_regardless_of_size() {
        let files = vec![
            ("tiny.txt", String::new()),
            ("cmd/main.rs", "x".repeat(10_000)),
        ];
        let selected = select_files(files, true);
        assert_eq!(paths(&selected), vec!["cmd/main.rs", "tiny.txt"]);
    }

    #[test]
    fn test_empty_input() {
        let files: Vec<(String, String)> = Vec::new();
        assert!(select_files(files, true).is_empty());
    }
}
