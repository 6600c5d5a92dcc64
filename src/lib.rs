pub mod alfred;
pub mod cli;
pub mod config;
pub mod consts;
pub mod details;
pub mod entry;
pub mod error;
pub mod fuzzy;
pub mod generate;
pub mod lastpass;
pub mod matcher;
pub mod runner;
pub mod subcmds;
pub mod util;

pub use config::Config;
pub use details::DetailSet;
pub use entry::{Entry, Folder};
pub use error::LastPassError;
pub use lastpass::LastPass;
pub use runner::{Captured, Runner, SystemRunner};
