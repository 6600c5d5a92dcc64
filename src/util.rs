use regex::Regex;

/// Returns the first capture group of `re` in `haystack`, or an empty string if
/// `re` doesn't match.
pub fn regex_search<S>(re: &Regex, haystack: S) -> String
where
    S: AsRef<str>,
{
    re.captures(haystack.as_ref())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
        .unwrap_or_default()
}

/// Returns `true` if every one of `words` is a substring of `input`.
pub fn has_all<S, V>(input: S, words: V) -> bool
where
    S: AsRef<str>,
    V: AsRef<[String]>,
{
    let input = input.as_ref();

    words.as_ref().iter().all(|word| input.contains(word.as_str()))
}

/// Wraps `s` in single quotes for `sh`, escaping any single quotes inside.
pub fn shell_quote<S>(s: S) -> String
where
    S: AsRef<str>,
{
    format!("'{}'", s.as_ref().replace('\'', r"'\''"))
}

/// Parses the truthy spellings Alfred's checkbox and text variables produce.
pub fn parse_bool<S>(value: S) -> bool
where
    S: AsRef<str>,
{
    matches!(
        value.as_ref().trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
