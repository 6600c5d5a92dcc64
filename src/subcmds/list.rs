use anyhow::{Context, Result};

use crate::alfred::{Feedback, Item, Key, Modifier};
use crate::config::Config;
use crate::entry::Entry;
use crate::lastpass::{check_validity, LastPass};
use crate::runner::Runner;

pub fn list<R, S>(lastpass: &LastPass<R>, config: &Config, query: &str, folders: &[S]) -> Result<Feedback>
where
    R: Runner,
    S: AsRef<str>,
{
    let entries = lastpass
        .entries(query, folders, config.fuzzy_search)
        .with_context(|| "Failed to list entries")?;

    let mut feedback = Feedback::new().emit_uids(config.intelligent_ordering);
    for entry in &entries {
        feedback.push(entry_item(entry, config, query));
    }

    // strict matching already happened while listing
    if config.fuzzy_search && !query.is_empty() {
        feedback.filter(query);
    }

    Ok(feedback)
}

fn entry_item(entry: &Entry, config: &Config, query: &str) -> Item {
    let mut item = Item::new(entry.name.as_str())
        .subtitle(format!("{}  •  ID: {}", entry.folder, entry.id))
        .match_on(format!(
            "{} {} {} {}",
            entry.id, entry.folder, entry.name, entry.url
        ))
        .uid(entry.id.as_str())
        .var("item_id", entry.id.as_str())
        .var("item_name", entry.name.as_str())
        .var("item_url", entry.url.as_str())
        .var("item_folder", entry.folder.as_str())
        .var("query", query)
        .var("action", config.modifier_return.as_str())
        .valid(check_validity(entry, &config.modifier_return));

    let modifiers = [
        (Key::Ctrl, &config.modifier_ctrl),
        (Key::Alt, &config.modifier_opt),
        (Key::Cmd, &config.modifier_cmd),
    ];
    for (key, action) in modifiers {
        if !check_validity(entry, action) {
            continue;
        }

        item = item.modifier(
            key,
            Modifier::new()
                .subtitle(action.as_str())
                .var("action", action.as_str())
                .valid(true),
        );
    }

    item
}
