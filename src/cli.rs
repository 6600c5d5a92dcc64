use std::env;
use std::io;

use anyhow::Result;
use clap::Parser;
use log::debug;
use rand::Rng;

use crate::alfred::Feedback;
use crate::config::Config;
use crate::consts::{DEFAULT_PASSWORD_LENGTH, VERSION};
use crate::lastpass::LastPass;
use crate::runner::Runner;
use crate::subcmds::{self, folders, generate, list, show};
use crate::util::parse_bool;

#[derive(Debug, Parser)]
#[clap(
    name = "lastpass-alfred",
    version = VERSION,
    about = "Search your LastPass vault from Alfred",
    term_width = 80
)]
enum LastPassAlfred {
    /// List entries matching query
    List {
        query: Option<String>,
        /// Only list entries in these folders
        #[clap(long, short = 'f', value_delimiter = ',')]
        folders: Vec<String>,
    },
    /// List folders matching query
    Folders { query: Option<String> },
    /// Show the fields of an entry
    Show {
        item_id: String,
        /// Folder of the entry, as listed
        #[clap(long, env = "item_folder", default_value = "")]
        folder: String,
        /// Name of the entry, as listed
        #[clap(long, env = "item_name", default_value = "")]
        name: String,
    },
    /// Generate a new password, with and without symbols
    Generate {
        #[clap(long, short = 'l', default_value_t = DEFAULT_PASSWORD_LENGTH)]
        length: usize,
    },
}

/// Logs go to stderr, which Alfred shows in its debugger; stdout is reserved
/// for the JSON feedback.
fn init_logger() {
    let level = match env::var("alfred_debug") {
        Ok(debug) if parse_bool(&debug) => "debug",
        _ => "warn",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

pub fn opt() -> Result<()> {
    init_logger();

    let matches = LastPassAlfred::parse();
    let config = Config::from_env();
    debug!("{:?}", matches);
    debug!("{:?}", config);

    let lastpass = LastPass::new(&config);
    let feedback = dispatch(matches, &lastpass, &config, &mut rand::thread_rng())?;

    send(&feedback)
}

/// Runs `command`. Everything but `generate` needs an active `lpass` session
/// and is answered with the login prompt without one.
fn dispatch<R, G>(
    command: LastPassAlfred,
    lastpass: &LastPass<R>,
    config: &Config,
    rng: &mut G,
) -> Result<Feedback>
where
    R: Runner,
    G: Rng,
{
    let feedback = match command {
        LastPassAlfred::Generate { length } => generate::generate(rng, config, length),
        _ if !lastpass.is_logged_in() => subcmds::login_prompt(),
        LastPassAlfred::List { query, folders } => {
            list::list(lastpass, config, &query.unwrap_or_default(), &folders)?
        }
        LastPassAlfred::Folders { query } => {
            folders::folders(lastpass, config, &query.unwrap_or_default())?
        }
        LastPassAlfred::Show {
            item_id,
            folder,
            name,
        } => show::show(lastpass, &item_id, &folder, &name)?,
    };

    Ok(feedback)
}

pub fn send(feedback: &Feedback) -> Result<()> {
    let stdout = io::stdout();
    feedback.send(stdout.lock())
}
