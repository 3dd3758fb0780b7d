use {
    once_cell::sync::Lazy,
    regex::Regex,
};

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+|www\S+").unwrap());
static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").unwrap());
static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Canonical cleaned form of a raw comment. Missing text cleans to an empty string.
pub fn normalize(raw: Option<&str>) -> String {
    let text = match raw {
        Some(v) => v.to_lowercase(),
        None => return String::new(),
    };

    // markers first: `@` and `#` are punctuation themselves
    let text = URL.replace_all(&text, " ");
    let text = MENTION.replace_all(&text, " ");
    let text = HASHTAG.replace_all(&text, " ");
    let text = strip_punctuation(&text);

    // `h.ttpx` only reads as a url once the dot is gone
    let text = URL.replace_all(&text, " ");

    WHITESPACE.replace_all(&text, " ").trim().to_owned()
}

pub fn normalize_all<'a>(raw: impl IntoIterator<Item = Option<&'a str>>) -> Vec<String> {
    raw.into_iter().map(normalize).collect()
}

fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(input: &str) -> String {
        normalize(Some(input))
    }

    #[test]
    fn missing_text_is_empty() {
        assert_eq!(normalize(None), "");
        assert_eq!(norm(""), "");
        assert_eq!(norm("   \t\n "), "");
    }

    #[test]
    fn lowercases_and_collapses_whitespace() {
        assert_eq!(norm("  Hello   WORLD\t\nAgain "), "hello world again");
    }

    #[test]
    fn strips_urls_mentions_and_hashtags() {
        let cleaned = norm("Check http://a.co @bob #great!!");

        assert_eq!(cleaned, "check");
        assert!(!cleaned.contains("http"));
        assert!(!cleaned.contains("@bob"));
        assert!(!cleaned.contains("#great"));
        assert!(!cleaned.chars().any(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn strips_bare_www_and_https() {
        assert_eq!(norm("see www.example.com/page and https://x.io/a?b=c now"), "see and now");
    }

    #[test]
    fn mention_removal_keeps_trailing_text() {
        assert_eq!(norm("@brand's new phone"), "s new phone");
        assert_eq!(norm("love it#blessed"), "love it");
    }

    #[test]
    fn strips_ascii_punctuation_only() {
        assert_eq!(norm("It's okay, I guess..."), "its okay i guess");
        assert_eq!(norm("café — naïve"), "café — naïve");
    }

    #[test]
    fn is_idempotent() {
        let samples = [
            "Check http://a.co @bob #great!!",
            "h.ttpx is sneaky w.wwfoo too",
            "It's okay I guess.",
            "Terrible, never buying again.",
            "MiXeD   case\twith\nnewlines!!!",
            "@@double ##tags and emails me@mail.com",
            "",
            "ÉCLAIR Über straße",
        ];

        for sample in samples {
            let once = norm(sample);
            assert_eq!(norm(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn normalizes_a_collection_in_order() {
        let cleaned = normalize_all(vec![Some("Great!"), None, Some("Bad product")]);
        assert_eq!(cleaned, vec!["great".to_owned(), String::new(), "bad product".to_owned()]);
    }
}
