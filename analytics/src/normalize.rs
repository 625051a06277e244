use regex::Regex;
use std::sync::OnceLock;

static URL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn url_pattern() -> &'static Regex {
    // Matches from a URL marker to the next whitespace, so a URL glued to
    // trailing punctuation disappears with it.
    URL_PATTERN.get_or_init(|| {
        Regex::new(r"http\S+|www\S+|https\S+").expect("URL pattern must compile")
    })
}

/// Remove URLs from post text, leaving all other content untouched,
/// including case and punctuation. Pure; any input yields a string,
/// possibly empty.
pub fn strip_urls(text: &str) -> String {
    url_pattern().replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_http_and_https() {
        assert_eq!(
            strip_urls("check http://example.com/a out"),
            "check  out"
        );
        assert_eq!(strip_urls("see https://rust-lang.org now"), "see  now");
    }

    #[test]
    fn test_strips_www() {
        assert_eq!(strip_urls("go to www.example.com today"), "go to  today");
    }

    #[test]
    fn test_leaves_other_text_untouched() {
        let text = "Mixed CASE, punctuation! #hashtag stays.";
        assert_eq!(strip_urls(text), text);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_urls(""), "");
    }

    #[test]
    fn test_url_only_input() {
        assert_eq!(strip_urls("https://only.example.com"), "");
    }
}
