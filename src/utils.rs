use chrono::{NaiveDate, Utc};

/// Today's date in UTC, the calendar the archive is organized by.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Keeps only the ASCII characters of `text` (`"°C"` becomes `"C"`).
pub(crate) fn ascii_only(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

pub(crate) fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_only() {
        assert_eq!(ascii_only("°C"), "C");
        assert_eq!(ascii_only("km/h"), "km/h");
        assert_eq!(ascii_only(""), "");
    }

    #[test]
    fn test_with_trailing_slash() {
        assert_eq!(with_trailing_slash("http://a/b"), "http://a/b/");
        assert_eq!(with_trailing_slash("http://a/b/"), "http://a/b/");
    }
}
