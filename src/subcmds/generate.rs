use rand::Rng;

use crate::alfred::{Feedback, Item, Key, Modifier};
use crate::config::Config;
use crate::generate;

/// Offers two fresh passwords of `length`: one with the configured symbols and
/// one without any.
pub fn generate<R>(rng: &mut R, config: &Config, length: usize) -> Feedback
where
    R: Rng,
{
    let with_symbols = generate::password(rng, length, Some(config.allowed_symbols.as_str()));
    let without_symbols = generate::password(rng, length, None);

    let subtitle = format!(
        "⏎ to copy to clipboard  •  ⌘⏎ to add to LastPass  •  Length: {}",
        length
    );

    let mut feedback = Feedback::new();
    feedback.push(password_item(with_symbols, subtitle.clone()));
    feedback.push(password_item(
        without_symbols,
        format!("{}  •  No symbols", subtitle),
    ));

    feedback
}

fn password_item(password: String, subtitle: String) -> Item {
    Item::new(password.as_str())
        .subtitle(subtitle)
        .var("password", password.as_str())
        .arg("copy")
        .valid(true)
        .modifier(
            Key::Cmd,
            Modifier::new()
                .arg("add")
                .var("password", password)
                .valid(true),
        )
}
