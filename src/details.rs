//! Fields of a single item, parsed from `lpass show`
//!
//! # details
//!
//! `lpass show` prints a header naming the item, followed by one `Key: Value`
//! line per field. Notes are printed last and may span several lines that look
//! like fields themselves, so nothing after the `Notes` key is read.

use std::collections::HashMap;

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::consts::NOTES_KEY;
use crate::util::regex_search;

static KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\S.+?):").expect("key pattern"));
static VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S.+?: (.*)").expect("value pattern"));

/// Keys in the order `lpass` printed them, alongside their values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailSet {
    pub keys: Vec<String>,
    pub values: HashMap<String, String>,
}

impl DetailSet {
    pub fn parse<S>(output: S) -> DetailSet
    where
        S: AsRef<str>,
    {
        let mut details = DetailSet::default();

        // the first line is the header, e.g. `Work/Site [id: 123]`
        for line in output.as_ref().lines().skip(1) {
            if line.is_empty() {
                continue;
            }

            let key = regex_search(&KEY, line);
            let value = regex_search(&VALUE, line);
            let is_notes = key == NOTES_KEY;

            details.insert(key, value);

            if is_notes {
                break;
            }
        }

        details
    }

    /// Records `key` unless it was already seen; the first value wins.
    fn insert(&mut self, key: String, value: String) {
        if self.values.contains_key(&key) {
            trace!("ignoring repeated detail key {:?}", key);
            return;
        }

        self.keys.push(key.clone());
        self.values.insert(key, value);
    }

    pub fn get<S>(&self, key: S) -> Option<&str>
    where
        S: AsRef<str>,
    {
        self.values.get(key.as_ref()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// `(key, value)` pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.keys
            .iter()
            .map(move |key| (key.as_str(), self.values[key].as_str()))
    }
}
