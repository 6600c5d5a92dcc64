use crate::entry::Entry;
use crate::util::has_all;

/// Lowercased words a strict query requires, split on single spaces.
pub fn query_words<S>(query: S) -> Vec<String>
where
    S: AsRef<str>,
{
    query
        .as_ref()
        .to_lowercase()
        .split(' ')
        .map(ToOwned::to_owned)
        .collect()
}

/// The text a strict query is matched against.
pub fn searchable(entry: &Entry) -> String {
    [
        entry.id.as_str(),
        entry.name.as_str(),
        entry.folder.as_str(),
        entry.url.as_str(),
        entry.username.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

/// In fuzzy mode everything passes; ranking happens when the results are
/// presented. Otherwise every word of `query` must occur somewhere in the
/// entry, in any order.
pub fn matches<S>(entry: &Entry, query: S, fuzzy: bool) -> bool
where
    S: AsRef<str>,
{
    if fuzzy {
        return true;
    }

    matches_words(entry, query_words(query))
}

/// Strict matching against words already split by [`query_words`], for
/// checking many entries against one query.
pub fn matches_words<V>(entry: &Entry, words: V) -> bool
where
    V: AsRef<[String]>,
{
    has_all(searchable(entry), words)
}
