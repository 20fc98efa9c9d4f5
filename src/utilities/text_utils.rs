pub trait TruncateWithEllipsis {
    fn truncate_with_ellipsis(self, max_len: usize) -> Self;
}

impl TruncateWithEllipsis for String {
    fn truncate_with_ellipsis(mut self, max_len: usize) -> Self {
        if max_len == 0 {
            self.clear();
        } else if self.chars().count() > max_len {
            let end = self.char_indices().nth(max_len - 1).map_or(self.len(), |(index, _)| index);
            self.truncate(end);
            self.push('…');
        }

        self
    }
}

pub fn format_duration(duration: u64) -> String {
    let hours = duration / 3600;
    let minutes = (duration / 60) % 60;
    let seconds = duration % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

pub fn check_title<S: AsRef<str>>(title: S) -> Option<&'static str> {
    let title = title.as_ref();
    if title.trim().is_empty() {
        Some("Title is required")
    } else if title.chars().count() > 128 {
        Some("this title is too long (>128).")
    } else if title.lines().count() > 1 {
        Some("the title has to fit on one line.")
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!("short".to_string().truncate_with_ellipsis(8), "short");
        assert_eq!("exactly8".to_string().truncate_with_ellipsis(8), "exactly8");
        assert_eq!("much too long".to_string().truncate_with_ellipsis(8), "much to…");
        assert_eq!("żółćżółć!".to_string().truncate_with_ellipsis(5), "żółć…");
        assert_eq!("anything".to_string().truncate_with_ellipsis(0), "");
        assert_eq!(String::new().truncate_with_ellipsis(0), "");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(7), "7s");
        assert_eq!(format_duration(65), "1m 5s");
        assert_eq!(format_duration(3720), "1h 2m");
        assert_eq!(format_duration(90 * 3600 + 60), "90h 1m");
    }

    #[test]
    fn test_check_title() {
        assert_eq!(check_title("Verde Vivo"), None);
        assert_eq!(check_title(""), Some("Title is required"));
        assert_eq!(check_title("   "), Some("Title is required"));
        assert!(check_title("a".repeat(129)).is_some());
        assert!(check_title("two\nlines").is_some());
    }
}
