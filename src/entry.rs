//! Records parsed from `lpass ls`
//!
//! # entry
//!
//! `lpass ls` prints every entry on one line using [`ENTRY_FORMAT`]: a
//! slash-delimited path, then bracket-tagged fields, then the bare password.
//! Each field is pulled out on its own so that a missing tag only blanks that
//! one field.
//!
//! [`ENTRY_FORMAT`]: crate::consts::ENTRY_FORMAT

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::consts::GROUP_URL;
use crate::util::regex_search;

static ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[id: ([0-9]+)\]").expect("id pattern"));
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[url: (.*?)\]").expect("url pattern"));
static PATH_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s\[").expect("path end pattern"));
static USERNAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[username: (.*?)\]").expect("username pattern"));
static PASSWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r".*\] (.*)$").expect("password pattern"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub name: String,
    pub folder: String,
    pub url: String,
    pub username: String,
    pub password: String,
}

impl Entry {
    /// Extracts every field of `line` independently. Fields whose pattern
    /// doesn't match are left empty; a line that isn't an entry at all comes
    /// back with an empty `id`.
    pub fn parse<S>(line: S) -> Entry
    where
        S: AsRef<str>,
    {
        let line = line.as_ref();

        Entry {
            id: regex_search(&ID, line),
            name: name_of(line),
            folder: folder_of(line),
            url: regex_search(&URL, line),
            username: regex_search(&USERNAME, line),
            password: regex_search(&PASSWORD, line),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.id.is_empty()
    }

    /// Folders show up in `lpass ls` as entries carrying the group URL.
    pub fn is_group(&self) -> bool {
        self.url == GROUP_URL
    }

    /// `<folder>/<name>`, the way `lpass` addresses the entry.
    pub fn fullname(&self) -> String {
        format!("{}/{}", self.folder, self.name)
    }
}

/// The slash-delimited path at the start of `line`: everything before the
/// first ` [`. Brackets without a space in front belong to the path.
fn path_of(line: &str) -> Option<&str> {
    PATH_END.find(line).map(|m| &line[..m.start()])
}

/// Leaf after the last `/` of the path.
fn name_of(line: &str) -> String {
    path_of(line)
        .and_then(|path| path.rsplit_once('/'))
        .map(|(_, name)| name.to_owned())
        .unwrap_or_default()
}

/// Text before the first `/` of the path, or of the whole line if it has no
/// tags at all.
fn folder_of(line: &str) -> String {
    path_of(line)
        .unwrap_or(line)
        .split_once('/')
        .map(|(folder, _)| folder.to_owned())
        .unwrap_or_default()
}

/// Prints the entry back out in the shape `lpass ls` uses.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}/{} [id: {}] [url: {}] [username: {}] {}",
            self.folder, self.name, self.id, self.url, self.username, self.password
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
}

impl Folder {
    /// One folder per non-empty line of `output`.
    pub fn parse_all<S>(output: S) -> Vec<Folder>
    where
        S: AsRef<str>,
    {
        output
            .as_ref()
            .lines()
            .filter(|line| !line.is_empty())
            .map(|name| Folder {
                name: name.to_owned(),
            })
            .collect()
    }
}
