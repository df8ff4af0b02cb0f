pub const DEFAULT_TRUNCATE_CHARS: usize = 25;

const ELLIPSIS: &str = "...";

/// Shorten `text` to at most `max_chars` characters, cutting at a word boundary.
///
/// Text at or below the limit comes back unchanged. Longer text is cut to the
/// first `max_chars` characters of `text + " "`, backed off to the last
/// whitespace in that cut, and suffixed with `...`. A cut without any
/// whitespace is kept as is rather than collapsing to a bare ellipsis.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text
        .chars()
        .chain(std::iter::once(' '))
        .take(max_chars)
        .collect();

    match cut.rfind(char::is_whitespace) {
        Some(idx) => format!("{}{}", &cut[..idx], ELLIPSIS),
        None => format!("{}{}", cut, ELLIPSIS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuts_at_last_space() {
        assert_eq!(truncate("The quick brown fox", 10), "The quick...");
    }

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate("short", DEFAULT_TRUNCATE_CHARS), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn test_no_whitespace_keeps_hard_cut() {
        assert_eq!(truncate("Supercalifragilistic", 5), "Super...");
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(truncate("héllo wörld again", 12), "héllo wörld...");
        assert_eq!(truncate("héllo", 5), "héllo");
    }

    #[test]
    fn test_default_limit() {
        let text = "A fairly long post title that needs shortening";
        assert_eq!(truncate(text, DEFAULT_TRUNCATE_CHARS), "A fairly long post title...");
    }
}
