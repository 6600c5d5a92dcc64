use crate::alfred::{Feedback, Item};

pub mod folders;
pub mod generate;
pub mod list;
pub mod show;

/// Shown instead of any results while `lpass` has no active session.
pub fn login_prompt() -> Feedback {
    let mut feedback = Feedback::new();
    feedback.push(
        Item::new("You're not logged in to Lastpass.")
            .subtitle("Press ⏎ to login.")
            .arg("auth")
            .valid(true),
    );

    feedback
}
