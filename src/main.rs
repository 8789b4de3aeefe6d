#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! pancheck — print OK when the first argument is `panca`, NOPE otherwise.
//!
//! Exit status: 0 on a match, 1 for a wrong-length input, 2 for a same-length
//! mismatch. -1 is reserved for a missing input reference, which the command
//! line never produces.

mod check;
mod cli;
mod commands;
mod types;

use check::CheckError;
use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

fn main() {
    let ctx = OutputCtx::from_env();

    let result = Cli::parse_verbatim(std::env::args_os())
        .map_err(CheckError::from)
        .and_then(|cli| {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            commands::run(&cli, &ctx, &mut out)
        });

    match result {
        Ok(outcome) => std::process::exit(outcome.status()),
        Err(err) => {
            write_error(&ErrorOutput::from_check_error(&err), &ctx);
            std::process::exit(err.exit_code());
        }
    }
}
