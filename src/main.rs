//! The `lastpass-alfred` binary

use lastpass_alfred::alfred::Feedback;
use lastpass_alfred::cli;

fn main() {
    if let Err(err) = cli::opt() {
        eprint!("{}", err);
        err.chain().skip(1).for_each(|e| eprint!(": {}", e));
        eprintln!();

        // Alfred only displays what arrives on stdout
        let _ = cli::send(&Feedback::error(&err));

        std::process::exit(1);
    }
}
