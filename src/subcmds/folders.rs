use anyhow::{Context, Result};

use crate::alfred::{Feedback, Icon, Item};
use crate::config::Config;
use crate::consts::ICON_FOLDER;
use crate::lastpass::LastPass;
use crate::runner::Runner;

pub fn folders<R>(lastpass: &LastPass<R>, config: &Config, query: &str) -> Result<Feedback>
where
    R: Runner,
{
    let folders = lastpass
        .folders()
        .with_context(|| "Failed to list folders")?;

    let mut feedback = Feedback::new().emit_uids(config.intelligent_ordering);
    // "*" never fuzzy-matches a real query, so this disappears once typing starts
    feedback.push(
        Item::new("Select folder")
            .match_on("*")
            .subtitle("Type to search")
            .valid(false),
    );

    for folder in &folders {
        feedback.push(
            Item::new(folder.name.as_str())
                .uid(folder.name.as_str())
                .icon(Icon::new(ICON_FOLDER))
                .var("folder", folder.name.as_str())
                .valid(true),
        );
    }

    feedback.filter(query);

    Ok(feedback)
}
