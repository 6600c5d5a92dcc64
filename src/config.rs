//! Workflow configuration
//!
//! Alfred hands workflow variables to the script filter as environment
//! variables. They are read once, into a [`Config`] that is passed down to
//! everything that needs it.

use std::collections::HashMap;
use std::env;

use crate::consts::{
    ACTION_COPY_PASSWORD, ACTION_COPY_USERNAME, ACTION_OPEN_URL, ACTION_SHOW_DETAILS,
    DEFAULT_BIN_PATH, SPECIAL,
};
use crate::util::parse_bool;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the `lpass` binary.
    pub bin_path: String,
    /// Symbols allowed in generated passwords.
    pub allowed_symbols: String,
    /// Leave filtering to the fuzzy ranker instead of strict word matching.
    pub fuzzy_search: bool,
    /// Emit UIDs so Alfred can reorder results by usage.
    pub intelligent_ordering: bool,
    pub modifier_return: String,
    pub modifier_ctrl: String,
    pub modifier_opt: String,
    pub modifier_cmd: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            bin_path: DEFAULT_BIN_PATH.to_owned(),
            allowed_symbols: SPECIAL.to_owned(),
            fuzzy_search: false,
            intelligent_ordering: false,
            modifier_return: ACTION_COPY_PASSWORD.to_owned(),
            modifier_ctrl: ACTION_SHOW_DETAILS.to_owned(),
            modifier_opt: ACTION_COPY_USERNAME.to_owned(),
            modifier_cmd: ACTION_OPEN_URL.to_owned(),
        }
    }
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_vars(env::vars())
    }

    /// Builds a config from `(name, value)` pairs. Unset or empty variables
    /// keep their defaults.
    pub fn from_vars<I, K, V>(vars: I) -> Config
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(_, v)| !v.is_empty())
            .collect();
        let mut config = Config::default();

        let strings = [
            ("lpass_bin", &mut config.bin_path),
            ("allowed_symbols", &mut config.allowed_symbols),
            ("modifier_return", &mut config.modifier_return),
            ("modifier_ctrl", &mut config.modifier_ctrl),
            ("modifier_opt", &mut config.modifier_opt),
            ("modifier_cmd", &mut config.modifier_cmd),
        ];
        for (name, field) in strings {
            if let Some(value) = vars.get(name) {
                *field = value.clone();
            }
        }

        if let Some(value) = vars.get("fuzzy_search") {
            config.fuzzy_search = parse_bool(value);
        }
        if let Some(value) = vars.get("intelligent_ordering") {
            config.intelligent_ordering = parse_bool(value);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_vars() {
        let config = Config::from_vars(Vec::<(String, String)>::new());

        assert_eq!(config, Config::default());
        assert_eq!(config.bin_path, "lpass");
        assert!(!config.fuzzy_search);
    }

    #[test]
    fn reads_workflow_vars() {
        let config = Config::from_vars(vec![
            ("lpass_bin", "/opt/homebrew/bin/lpass"),
            ("fuzzy_search", "1"),
            ("intelligent_ordering", "True"),
            ("modifier_return", "Copy Username"),
            ("modifier_cmd", ""),
            ("allowed_symbols", "!?"),
            ("unrelated", "x"),
        ]);

        assert_eq!(config.bin_path, "/opt/homebrew/bin/lpass");
        assert!(config.fuzzy_search);
        assert!(config.intelligent_ordering);
        assert_eq!(config.modifier_return, "Copy Username");
        assert_eq!(config.modifier_cmd, ACTION_OPEN_URL);
        assert_eq!(config.allowed_symbols, "!?");
    }

    #[test]
    fn falsy_booleans() {
        for value in &["0", "false", "no", "off", "nope"] {
            let config = Config::from_vars(vec![("fuzzy_search", *value)]);
            assert!(!config.fuzzy_search, "{} should be false", value);
        }
    }
}
