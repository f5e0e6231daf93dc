//! Result types produced by the scan engine.
//!
//! Offsets inside a [`Match`] are byte offsets into `line_content`, so
//! `&m.line_content[m.start..m.end]` is always valid.
use serde::Serialize;
use std::path::PathBuf;

/// One hit of the needle inside one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// 1-based
    pub line_number: usize,
    /// The whole line, without its terminator
    pub line_content: String,
    pub start: usize,
    /// Exclusive
    pub end: usize,
}

impl Match {
    /// The matched window of the line
    pub fn matched_text(&self) -> &str {
        &self.line_content[self.start..self.end]
    }
}

/// Matches from one input, in line order
#[derive(Debug, Clone, Serialize)]
pub struct FileResult {
    /// The path to the file, `None` for standard input
    pub path: Option<PathBuf>,
    /// Number of lines read
    pub lines_scanned: usize,
    pub matches: Vec<Match>,
}

/// Totals over every input of a scan
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanOutput {
    pub file_results: Vec<FileResult>,
    pub total_matches: usize,
    /// Lines holding at least one match
    pub lines_with_matches: usize,
    pub files_scanned: usize,
    pub files_with_matches: usize,
}

impl ScanOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_file_result(&mut self, input: FileResult) {
        self.files_scanned += 1;
        let hits = input.matches.len();
        if hits > 0 {
            self.total_matches += hits;
            self.lines_with_matches += count_distinct_lines(&input.matches);
            self.files_with_matches += 1;
        }
        self.file_results.push(input);
    }
}

/// Matches arrive sorted by line, so counting line changes is enough
fn count_distinct_lines(matches: &[Match]) -> usize {
    let mut count = 0;
    let mut last = None;
    for m in matches {
        if last != Some(m.line_number) {
            count += 1;
            last = Some(m.line_number);
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_match(line_number: usize, line: &str, start: usize, end: usize) -> Match {
        Match {
            line_number,
            line_content: line.into(),
            start,
            end,
        }
    }

    #[test]
    fn test_matched_text_uses_byte_offsets() {
        let m = line_match(7, "überall needle", 9, 15);
        assert_eq!(m.matched_text(), "needle");
    }

    #[test]
    fn test_totals_follow_added_inputs() {
        let mut output = ScanOutput::new();

        output.add_file_result(FileResult {
            path: Some(PathBuf::from("test1.txt")),
            lines_scanned: 3,
            matches: vec![
                line_match(1, "Hello Hello", 0, 5),
                line_match(1, "Hello Hello", 6, 11),
                line_match(3, "Hello again", 0, 5),
            ],
        });

        assert_eq!(output.total_matches, 3);
        assert_eq!(output.lines_with_matches, 2);
        assert_eq!(output.files_scanned, 1);
        assert_eq!(output.files_with_matches, 1);

        output.add_file_result(FileResult {
            path: Some(PathBuf::from("test2.txt")),
            lines_scanned: 10,
            matches: vec![],
        });

        assert_eq!(output.total_matches, 3);
        assert_eq!(output.files_scanned, 2);
        assert_eq!(output.files_with_matches, 1);
    }

    #[test]
    fn test_serializes_to_json() {
        let mut result = ScanOutput::new();
        result.add_file_result(FileResult {
            path: Some(PathBuf::from("a.txt")),
            lines_scanned: 1,
            matches: vec![line_match(1, "needle", 0, 6)],
        });

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["total_matches"], 1);
        assert_eq!(json["file_results"][0]["matches"][0]["line_number"], 1);
        assert_eq!(json["file_results"][0]["path"], "a.txt");
    }
}
