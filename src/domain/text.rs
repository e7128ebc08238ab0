use chrono::NaiveDateTime;
use unicode_width::UnicodeWidthStr;

/// Formats a note creation time as `"Mar 3, 3:58 PM"`
pub fn format_note_timestamp(at: &NaiveDateTime) -> String {
    at.format("%b %-d, %-I:%M %p").to_string()
}

pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(s.len() + s.len() / width);
    let mut current_line_width = 0;

    for c in s.chars() {
        if c == '\n' {
            result.push(c);
            current_line_width = 0;
            continue;
        }

        let char_width = UnicodeWidthStr::width(c.encode_utf8(&mut [0; 4]));
        if current_line_width + char_width > width {
            result.push('\n');
            current_line_width = char_width;
        } else {
            current_line_width += char_width;
        }

        result.push(c);
    }

    result
}

pub fn truncate_text(s: &str, max_height: usize) -> String {
    if max_height == 0 {
        return String::new();
    }

    let lines: Vec<&str> = s.lines().collect();
    if lines.len() > max_height {
        if max_height == 1 {
            String::from("...")
        } else {
            format!("{}\n...", lines[..max_height - 1].join("\n"))
        }
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 3)
            .and_then(|d| d.and_hms_opt(h, m, 0))
            .expect("valid datetime")
    }

    #[test]
    fn test_format_note_timestamp_afternoon() {
        assert_eq!(format_note_timestamp(&at(15, 58)), "Mar 3, 3:58 PM");
    }

    #[test]
    fn test_format_note_timestamp_morning_pads_minutes() {
        assert_eq!(format_note_timestamp(&at(9, 5)), "Mar 3, 9:05 AM");
    }

    #[test]
    fn test_format_note_timestamp_midnight_and_noon() {
        assert_eq!(format_note_timestamp(&at(0, 0)), "Mar 3, 12:00 AM");
        assert_eq!(format_note_timestamp(&at(12, 30)), "Mar 3, 12:30 PM");
    }

    #[test]
    fn test_wrap_text_no_wrap_alnum() {
        assert_eq!(wrap_text("hello, world!", 13), "hello, world!");
    }

    #[test]
    fn test_wrap_text_wrap_alnum() {
        assert_eq!(wrap_text("hello, world!", 4), "hell\no, w\norld\n!");
    }

    #[test]
    fn test_wrap_text_keeps_existing_newlines() {
        assert_eq!(wrap_text("abc\ndefgh", 4), "abc\ndefg\nh");
    }

    #[test]
    fn test_wrap_text_wrap_double_width() {
        assert_eq!(wrap_text("こんにちは、世界！", 7), "こんに\nちは、\n世界！");
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert_eq!(wrap_text("hello, world!", 0), "");
    }

    #[test]
    fn test_truncate_text_no_truncate() {
        assert_eq!(truncate_text("foo\nbar\nbaz", 3), "foo\nbar\nbaz");
    }

    #[test]
    fn test_truncate_text_truncate() {
        assert_eq!(truncate_text("foo\nbar\nbaz", 2), "foo\n...");
    }

    #[test]
    fn test_truncate_text_single_line() {
        assert_eq!(truncate_text("foo\nbar", 1), "...");
    }

    #[test]
    fn test_truncate_text_zero_height() {
        assert_eq!(truncate_text("foo\nbar\nbaz", 0), "");
    }
}
