use anyhow::{Context, Result};

use crate::alfred::{Feedback, Icon, Item};
use crate::consts::{EXCLUDED_KEYS, ICON_BACK, ICON_DELETE, ICON_EDIT, NOTES_KEY, REDACTED_KEYS};
use crate::lastpass::LastPass;
use crate::runner::Runner;

const REDACTION: &str = "••••••••••••••••••••••••••••••••";

/// Lists the fields of `item_id`. `folder` and `name` come from the entry the
/// user picked, since `lpass show` only prints the full name in its header.
pub fn show<R>(
    lastpass: &LastPass<R>,
    item_id: &str,
    folder: &str,
    name: &str,
) -> Result<Feedback>
where
    R: Runner,
{
    let details = lastpass
        .details(item_id)
        .with_context(|| format!("Failed to show item {}", item_id))?;
    let fullname = format!("{}/{}", folder, name);

    // results are laid out in a fixed order, so UIDs would only get in the way
    let mut feedback = Feedback::new().emit_uids(false);

    feedback.push(
        Item::new("Go back")
            .icon(Icon::new(ICON_BACK))
            .arg("go_back")
            .valid(true),
    );
    feedback.push(
        Item::new("Name")
            .icon(Icon::for_key("name"))
            .subtitle(fullname.as_str())
            .arg(fullname.as_str())
            .var("sensitive", "false")
            .valid(true),
    );

    for (key, value) in details.iter() {
        let lower = key.to_lowercase();
        if EXCLUDED_KEYS.contains(&lower.as_str()) || value.is_empty() {
            continue;
        }

        let sensitive = REDACTED_KEYS.contains(&lower.as_str());
        let subtitle = if sensitive { REDACTION } else { value };

        if key == NOTES_KEY {
            feedback.push(
                Item::new(key)
                    .icon(Icon::for_key(key))
                    .subtitle("Press ⏎ to show notes")
                    .arg("notes")
                    .var("sensitive", sensitive.to_string())
                    .valid(true),
            );
            continue;
        }

        feedback.push(
            Item::new(key)
                .icon(Icon::for_key(key))
                .subtitle(subtitle)
                .arg(value)
                .var("sensitive", sensitive.to_string())
                .var("field", key)
                .valid(true),
        );
    }

    feedback.push(
        Item::new("Edit entry")
            .icon(Icon::new(ICON_EDIT))
            .arg("edit")
            .valid(true),
    );
    feedback.push(
        Item::new("Delete entry")
            .icon(Icon::new(ICON_DELETE))
            .arg("delete")
            .var(
                "msg",
                format!(
                    "Are you sure you want to delete this entry?\nName: {}\nID: {}",
                    fullname, item_id
                ),
            )
            .valid(true),
    );

    Ok(feedback)
}
