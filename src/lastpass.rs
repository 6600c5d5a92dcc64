//! Talking to `lpass`
//!
//! # lastpass
//!
//! [`LastPass`] runs the `lpass` subcommands the workflow needs and turns their
//! output into [`Entry`], [`Folder`] and [`DetailSet`] values. Calls are
//! blocking and made one after another; a failing invocation fails the whole
//! operation.

use log::{debug, trace, warn};

use crate::config::Config;
use crate::consts::{ACTION_COPY_PASSWORD, ACTION_COPY_USERNAME, ENTRY_FORMAT, FOLDER_FORMAT};
use crate::details::DetailSet;
use crate::entry::{Entry, Folder};
use crate::error::LastPassError;
use crate::matcher;
use crate::runner::{Captured, Runner, SystemRunner};
use crate::util::shell_quote;

pub type Result<T> = std::result::Result<T, LastPassError>;

#[derive(Debug)]
pub struct LastPass<R = SystemRunner> {
    bin_path: String,
    runner: R,
}

impl LastPass<SystemRunner> {
    pub fn new(config: &Config) -> LastPass<SystemRunner> {
        LastPass::with_runner(config, SystemRunner)
    }
}

impl<R> LastPass<R>
where
    R: Runner,
{
    pub fn with_runner(config: &Config, runner: R) -> LastPass<R> {
        LastPass {
            bin_path: config.bin_path.clone(),
            runner,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Runs `lpass` with `args`, turning a spawn failure or non-zero exit into
    /// a reason string for the caller's error.
    fn lpass(&self, args: &[&str]) -> std::result::Result<String, String> {
        self.run(&self.bin_path, args)
    }

    fn run(&self, program: &str, args: &[&str]) -> std::result::Result<String, String> {
        let captured: Captured = self
            .runner
            .run(program, args)
            .map_err(|e| format!("failed to run {}: {}", program, e))?;

        if captured.success() {
            Ok(captured.stdout)
        } else {
            Err(captured.reason())
        }
    }

    /// `lpass status --quiet` exits zero only when a session is active.
    pub fn is_logged_in(&self) -> bool {
        match self.lpass(&["status", "--quiet"]) {
            Ok(_) => true,
            Err(reason) => {
                debug!("not logged in: {}", reason);
                false
            }
        }
    }

    /// Every folder in the vault, sorted and deduplicated by the shell
    /// pipeline.
    pub fn folders(&self) -> Result<Vec<Folder>> {
        let script = format!(
            "{} ls --format={} --sync=no | sort -u",
            shell_quote(&self.bin_path),
            shell_quote(FOLDER_FORMAT)
        );

        let out = self.run("bash", &["-c", &script]).map_err(|reason| {
            warn!("listing folders failed: {}", reason);
            LastPassError::FoldersFailed { reason }
        })?;

        Ok(Folder::parse_all(out.trim_end_matches('\n')))
    }

    /// Entries in `folders` (the whole vault if none are given) that match
    /// `query`. Order is `lpass`'s listing order, folder by folder.
    pub fn entries<S>(&self, query: &str, folders: &[S], fuzzy: bool) -> Result<Vec<Entry>>
    where
        S: AsRef<str>,
    {
        let default = [""];
        let folders: Vec<&str> = if folders.is_empty() {
            default.to_vec()
        } else {
            folders.iter().map(|folder| folder.as_ref()).collect()
        };

        let mut output = String::new();
        for folder in folders {
            let out = self
                .lpass(&["ls", "--format", ENTRY_FORMAT, "--sync=no", folder])
                .map_err(|reason| {
                    warn!("lpass ls failed for folder {:?}: {}", folder, reason);
                    LastPassError::ListFailed {
                        folder: folder.to_owned(),
                        reason,
                    }
                })?;

            output.push_str(&out);
            if !out.is_empty() && !out.ends_with('\n') {
                output.push('\n');
            }
        }

        let words = if fuzzy {
            None
        } else {
            Some(matcher::query_words(query))
        };

        let entries = output
            .lines()
            .filter(|line| !line.is_empty())
            .map(Entry::parse)
            .filter(|entry| {
                if !entry.is_valid() {
                    trace!("dropping line without an id");
                    return false;
                }
                if entry.is_group() {
                    trace!("dropping group marker {}", entry.id);
                    return false;
                }

                // fuzzy mode ranks later, when the results are presented
                words
                    .as_ref()
                    .map_or(true, |words| matcher::matches_words(entry, words))
            })
            .collect::<Vec<_>>();

        debug!("{} entries for query {:?}", entries.len(), query);

        Ok(entries)
    }

    /// Fields of the item with `item_id`, in the order `lpass show` prints them.
    pub fn details(&self, item_id: &str) -> Result<DetailSet> {
        if item_id.is_empty() {
            return Err(LastPassError::EmptyItemId);
        }

        let out = self
            .lpass(&["show", item_id, "--sync=no"])
            .map_err(|reason| {
                warn!("lpass show failed for {}: {}", item_id, reason);
                LastPassError::ShowFailed {
                    id: item_id.to_owned(),
                    reason,
                }
            })?;

        Ok(DetailSet::parse(out))
    }
}

/// Whether `action` makes sense for `entry`: there is nothing to copy from an
/// empty field.
pub fn check_validity<S>(entry: &Entry, action: S) -> bool
where
    S: AsRef<str>,
{
    match action.as_ref() {
        ACTION_COPY_PASSWORD => !entry.password.is_empty(),
        ACTION_COPY_USERNAME => !entry.username.is_empty(),
        _ => true,
    }
}
