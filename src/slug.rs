use lazy_static::lazy_static;
use regex::Regex;

/// Turns a free-text title into a url safe slug: lowercase ascii letters and
/// digits, words joined by a single `-`.
///
/// Anything that is not a letter, a decimal digit or whitespace is dropped
/// first, symbols like `©` or `½` included. When `transliterate` is set, the
/// remaining accented and non-latin letters are converted to their ascii
/// counterparts (`á` -> `a`), otherwise they are dropped as well.
pub fn slugify(title: &str, transliterate: bool) -> String {
    lazy_static! {
        static ref NON_WORD_CHARS: Regex = Regex::new(r"[^\p{L}\p{Nd}\s]").unwrap();
        static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9\s]").unwrap();
    }

    let words = NON_WORD_CHARS.replace_all(title, "");
    let words = if transliterate {
        unidecode::unidecode(&words)
    } else {
        words.into_owned()
    };

    let lower = words.to_lowercase();
    let clean = NON_SLUG_CHARS.replace_all(&lower, "");

    clean.split_whitespace().collect::<Vec<&str>>().join("-")
}

pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
