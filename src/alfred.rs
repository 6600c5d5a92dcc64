//! Alfred script filter output
//!
//! # alfred
//!
//! Results are collected into a [`Feedback`] and written to stdout as the JSON
//! document Alfred's script filters expect:
//!
//! ```json
//! {"items": [{"title": "...", "subtitle": "...", "valid": true, "variables": {}}]}
//! ```

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::consts::{ICON_DEFAULT, ICON_DIR, MAX_RESULTS};
use crate::fuzzy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub path: String,
}

impl Icon {
    pub fn new<S>(path: S) -> Icon
    where
        S: Into<String>,
    {
        Icon { path: path.into() }
    }

    /// `icons/<key>.png` if the workflow ships one, the default icon otherwise.
    pub fn for_key<S>(key: S) -> Icon
    where
        S: AsRef<str>,
    {
        let path = Path::new(ICON_DIR).join(format!("{}.png", key.as_ref().to_lowercase()));

        if path.is_file() {
            Icon::new(path.display().to_string())
        } else {
            Icon::new(ICON_DEFAULT)
        }
    }
}

/// Modifier keys a result can have an alternate action for. Alfred calls the
/// option key `alt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Ctrl,
    Alt,
    Cmd,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Modifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    arg: Option<String>,
    valid: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    variables: BTreeMap<String, String>,
}

impl Modifier {
    pub fn new() -> Modifier {
        Modifier::default()
    }

    pub fn subtitle<S: Into<String>>(mut self, subtitle: S) -> Modifier {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Modifier {
        self.arg = Some(arg.into());
        self
    }

    pub fn valid(mut self, valid: bool) -> Modifier {
        self.valid = valid;
        self
    }

    pub fn var<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Modifier {
        self.variables.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    arg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uid: Option<String>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    match_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<Icon>,
    valid: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    variables: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    mods: BTreeMap<Key, Modifier>,
}

impl Item {
    pub fn new<S: Into<String>>(title: S) -> Item {
        Item {
            title: title.into(),
            subtitle: None,
            arg: None,
            uid: None,
            match_on: None,
            icon: None,
            valid: false,
            variables: BTreeMap::new(),
            mods: BTreeMap::new(),
        }
    }

    pub fn subtitle<S: Into<String>>(mut self, subtitle: S) -> Item {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Item {
        self.arg = Some(arg.into());
        self
    }

    pub fn uid<S: Into<String>>(mut self, uid: S) -> Item {
        self.uid = Some(uid.into());
        self
    }

    /// Text fuzzy filtering looks at instead of the title.
    pub fn match_on<S: Into<String>>(mut self, text: S) -> Item {
        self.match_on = Some(text.into());
        self
    }

    pub fn icon(mut self, icon: Icon) -> Item {
        self.icon = Some(icon);
        self
    }

    pub fn valid(mut self, valid: bool) -> Item {
        self.valid = valid;
        self
    }

    pub fn var<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Item {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn modifier(mut self, key: Key, modifier: Modifier) -> Item {
        self.mods.insert(key, modifier);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle_text(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn arg_text(&self) -> Option<&str> {
        self.arg.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn variable<S: AsRef<str>>(&self, key: S) -> Option<&str> {
        self.variables.get(key.as_ref()).map(String::as_str)
    }

    pub fn modifier_for(&self, key: Key) -> Option<&Modifier> {
        self.mods.get(&key)
    }

    fn filter_text(&self) -> &str {
        self.match_on.as_deref().unwrap_or(&self.title)
    }
}

impl Modifier {
    pub fn subtitle_text(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn variable<S: AsRef<str>>(&self, key: S) -> Option<&str> {
        self.variables.get(key.as_ref()).map(String::as_str)
    }
}

#[derive(Serialize)]
struct Document<'a> {
    items: Vec<&'a Item>,
}

/// The list of results a single run of the script filter produces.
#[derive(Debug, Clone)]
pub struct Feedback {
    items: Vec<Item>,
    emit_uids: bool,
    max_results: usize,
}

impl Default for Feedback {
    fn default() -> Feedback {
        Feedback {
            items: Vec::new(),
            emit_uids: false,
            max_results: MAX_RESULTS,
        }
    }
}

impl Feedback {
    pub fn new() -> Feedback {
        Feedback::default()
    }

    /// Alfred only learns from selections (and reorders by them) when items
    /// carry UIDs, so they are dropped unless asked for.
    pub fn emit_uids(mut self, emit: bool) -> Feedback {
        self.emit_uids = emit;
        self
    }

    pub fn max_results(mut self, max: usize) -> Feedback {
        self.max_results = max;
        self
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Keeps only the items fuzzily matching `query`, best match first.
    pub fn filter<S: AsRef<str>>(&mut self, query: S) {
        let texts: Vec<&str> = self.items.iter().map(Item::filter_text).collect();
        let keep = fuzzy::filter(&texts, query);

        let mut slots: Vec<Option<Item>> = self.items.drain(..).map(Some).collect();
        self.items = keep.into_iter().filter_map(|idx| slots[idx].take()).collect();
    }

    /// Single invalid item describing `err`, for when a command fails outright.
    pub fn error(err: &anyhow::Error) -> Feedback {
        let mut chain = err.chain();
        let title = chain
            .next()
            .map(ToString::to_string)
            .unwrap_or_else(|| String::from("Error"));
        let causes: Vec<String> = chain.map(ToString::to_string).collect();

        let mut item = Item::new(title).valid(false);
        if !causes.is_empty() {
            item = item.subtitle(causes.join(": "));
        }

        let mut feedback = Feedback::new();
        feedback.push(item);
        feedback
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let placeholder;
        let mut items: Vec<&Item> = self.items.iter().take(self.max_results).collect();
        if items.is_empty() {
            placeholder = Item::new("No results found").valid(false);
            items.push(&placeholder);
        }

        if self.emit_uids {
            return serde_json::to_string(&Document { items });
        }

        let stripped: Vec<Item> = items
            .into_iter()
            .map(|item| Item {
                uid: None,
                ..item.clone()
            })
            .collect();

        serde_json::to_string(&Document {
            items: stripped.iter().collect(),
        })
    }

    pub fn send<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "{}", self.to_json()?)?;
        out.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn parsed(feedback: &Feedback) -> Value {
        serde_json::from_str(&feedback.to_json().unwrap()).unwrap()
    }

    #[test]
    fn serializes_items_and_mods() {
        let mut feedback = Feedback::new().emit_uids(true);
        feedback.push(
            Item::new("GitHub")
                .subtitle("Work  •  ID: 1")
                .uid("1")
                .match_on("1 Work GitHub")
                .icon(Icon::new("icons/group.png"))
                .valid(true)
                .var("item_id", "1")
                .modifier(
                    Key::Alt,
                    Modifier::new()
                        .subtitle("Copy Username")
                        .valid(true)
                        .var("action", "Copy Username"),
                ),
        );

        assert_eq!(
            parsed(&feedback),
            json!({"items": [{
                "title": "GitHub",
                "subtitle": "Work  •  ID: 1",
                "uid": "1",
                "match": "1 Work GitHub",
                "icon": {"path": "icons/group.png"},
                "valid": true,
                "variables": {"item_id": "1"},
                "mods": {"alt": {
                    "subtitle": "Copy Username",
                    "valid": true,
                    "variables": {"action": "Copy Username"}
                }}
            }]})
        );
    }

    #[test]
    fn uids_suppressed_by_default() {
        let mut feedback = Feedback::new();
        feedback.push(Item::new("a").uid("1"));

        assert_eq!(parsed(&feedback), json!({"items": [{"title": "a", "valid": false}]}));
    }

    #[test]
    fn empty_feedback_has_placeholder() {
        let value = parsed(&Feedback::new());

        assert_eq!(value["items"][0]["title"], "No results found");
        assert_eq!(value["items"][0]["valid"], false);
    }

    #[test]
    fn caps_results() {
        let mut feedback = Feedback::new().max_results(2);
        for i in 0..5 {
            feedback.push(Item::new(i.to_string()));
        }

        assert_eq!(parsed(&feedback)["items"].as_array().unwrap().len(), 2);
        assert_eq!(feedback.items().len(), 5);
    }

    #[test]
    fn filter_uses_match_text() {
        let mut feedback = Feedback::new();
        feedback.push(Item::new("Select folder").match_on("*"));
        feedback.push(Item::new("Personal/"));
        feedback.push(Item::new("Shown as this").match_on("Work/"));

        feedback.filter("work");
        let titles: Vec<&str> = feedback.items().iter().map(Item::title).collect();
        assert_eq!(titles, vec!["Shown as this"]);
    }

    #[test]
    fn error_item_carries_chain() {
        let err = anyhow::anyhow!("exited with status 1").context("Error: item id is empty");
        let feedback = Feedback::error(&err);
        let item = &feedback.items()[0];

        assert_eq!(item.title(), "Error: item id is empty");
        assert_eq!(item.subtitle_text(), Some("exited with status 1"));
        assert!(!item.is_valid());
    }

    #[test]
    fn icon_falls_back_to_default() {
        assert_eq!(Icon::for_key("no-such-icon-here").path, ICON_DEFAULT);
    }
}
