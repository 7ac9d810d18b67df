//! Formatting and file-name helpers for the upload UI.

/// Human-readable file size, binary units.
pub fn format_file_size(bytes: f64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    if bytes < KB {
        format!("{} B", bytes as u64)
    } else if bytes < MB {
        format!("{:.2} KB", bytes / KB)
    } else {
        format!("{:.2} MB", bytes / MB)
    }
}

/// Client-side upload validation: only the extension is checked.
pub fn is_csv_file(name: &str) -> bool {
    name.to_lowercase().ends_with(".csv")
}

/// Extension of `name` (without the dot), if it has one.
pub fn file_extension(name: &str) -> Option<&str> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

/// Millisecond duration as shown in the metrics panel.
pub fn format_duration(ms: u64) -> String {
    if ms < 1_000 {
        format!("{}ms", ms)
    } else {
        format!("{:.2}s", ms as f64 / 1_000.0)
    }
}

/// Thousands-separated rendering of a row count.
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0.0), "0 B");
        assert_eq!(format_file_size(512.0), "512 B");
        assert_eq!(format_file_size(1024.0), "1.00 KB");
        assert_eq!(format_file_size(1536.0), "1.50 KB");
        assert_eq!(format_file_size(5.0 * 1024.0 * 1024.0), "5.00 MB");
    }

    #[test]
    fn test_is_csv_file() {
        assert!(is_csv_file("data.csv"));
        assert!(is_csv_file("DATA.CSV"));
        assert!(is_csv_file("q3 report.Csv"));
        assert!(!is_csv_file("data.txt"));
        assert!(!is_csv_file("datacsv"));
        assert!(!is_csv_file("data.csv.bak"));
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("data.csv"), Some("csv"));
        assert_eq!(file_extension("archive.tar.gz"), Some("gz"));
        assert_eq!(file_extension("noext"), None);
        assert_eq!(file_extension("trailing."), None);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0ms");
        assert_eq!(format_duration(999), "999ms");
        assert_eq!(format_duration(1_000), "1.00s");
        assert_eq!(format_duration(1_543), "1.54s");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(1_234_567), "1,234,567");
    }
}
