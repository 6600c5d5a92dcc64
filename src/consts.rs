//! Runtime constants
//!
//! # consts
//!
//! This module houses constants used throughout the code: the `lpass` output
//! formats we rely on, the defaults for workflow variables, and the lists of
//! detail keys that get special treatment when shown.

pub const DIGITS: &[u8] = b"0123456789"; // [:digit:]
pub const ALPHA_UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ"; // [:upper:]
pub const ALPHA_LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz"; // [:lower:]
pub const SPECIAL: &str = "!#$%&*+-=?@^_";

pub const VERSION: &str = env!("LASTPASS_ALFRED_VERSION");

pub const DEFAULT_BIN_PATH: &str = "lpass";
pub const DEFAULT_PASSWORD_LENGTH: usize = 32;
pub const MAX_RESULTS: usize = 25;

/// `lpass ls` format producing one line per entry, parsed by `Entry::parse`.
pub const ENTRY_FORMAT: &str = "%aN [id: %ai] [url: %al] [username: %au] %ap";
/// `lpass ls` format producing the share/group path of every entry.
pub const FOLDER_FORMAT: &str = "%/as%/ag";
/// URL `lpass` assigns to the pseudo-entries that represent folders.
pub const GROUP_URL: &str = "http://group";
/// Once this detail key is read, everything after it is free-text notes.
pub const NOTES_KEY: &str = "Notes";

pub const ACTION_COPY_PASSWORD: &str = "Copy Password";
pub const ACTION_COPY_USERNAME: &str = "Copy Username";
pub const ACTION_SHOW_DETAILS: &str = "Show Details";
pub const ACTION_OPEN_URL: &str = "Open URL";

// lowercased
pub const EXCLUDED_KEYS: &[&str] = &[
    "id",
    "name",
    "fullname",
    "last_modified_gmt",
    "last_touch",
    "extra_fields",
    "folder",
    "notetype",
    "language",
    "bit strength",
    "format",
    "date",
];

// lowercased
pub const REDACTED_KEYS: &[&str] = &[
    "password",
    "passphrase",
    "private key",
    "license key",
    "rootkey",
    "unsealkey",
];

pub const ICON_DIR: &str = "icons";
pub const ICON_DEFAULT: &str = "icons/default.png";
pub const ICON_FOLDER: &str = "icons/group.png";
pub const ICON_BACK: &str = "icons/go_back.png";
pub const ICON_EDIT: &str = "icons/edit.png";
pub const ICON_DELETE: &str = "icons/trash.png";
