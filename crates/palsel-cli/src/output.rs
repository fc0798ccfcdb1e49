//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

/// Format selected numbers for display, potentially truncating.
#[must_use]
pub fn format_selection(values: &[i32], verbose: bool) -> String {
    const HEAD: usize = 10;
    if !verbose && values.len() > 2 * HEAD {
        let head = join(&values[..HEAD]);
        let tail = join(&values[values.len() - HEAD..]);
        format!("{head} ... {tail} ({} values)", values.len())
    } else {
        join(values)
    }
}

fn join(values: &[i32]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a count with thousand separators.
#[must_use]
pub fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write selected numbers to a file, one per line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, values: &[i32]) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    for value in values {
        writeln!(file, "{value}")?;
    }
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_micro() {
        assert!(format_duration(Duration::from_nanos(500)).contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        assert!(format_duration(Duration::from_millis(42)).contains("ms"));
    }

    #[test]
    fn format_duration_minutes() {
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    #[test]
    fn format_count_thousands() {
        assert_eq!(format_count(1_000_000), "1,000,000");
        assert_eq!(format_count(42), "42");
        assert_eq!(format_count(1234), "1,234");
    }

    #[test]
    fn format_selection_short() {
        assert_eq!(format_selection(&[121, 0, 7], false), "121 0 7");
        assert_eq!(format_selection(&[], false), "");
    }

    #[test]
    fn format_selection_truncates() {
        let values: Vec<i32> = (0..30).collect();
        let s = format_selection(&values, false);
        assert!(s.starts_with("0 1 2"));
        assert!(s.ends_with("29 (30 values)"));
        assert!(!s.contains(" 15 "));
    }

    #[test]
    fn format_selection_verbose_keeps_all() {
        let values: Vec<i32> = (0..30).collect();
        assert!(format_selection(&values, true).contains(" 15 "));
    }

    #[test]
    fn write_to_file_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let path = path.to_str().unwrap();
        write_to_file(path, &[11, 22]).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "11\n22\n");
    }
}
