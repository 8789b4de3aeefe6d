/// CLI argument definitions via clap derive.
use std::ffi::{OsStr, OsString};

use clap::Parser;

/// pancheck — print OK if the first argument is the expected token, NOPE otherwise.
///
/// Every argument is treated as data, so there are no flags: `--help` is just
/// another wrong-length input. Parse through [`Cli::parse_verbatim`].
#[derive(Debug, Parser)]
#[command(
    name = "pancheck",
    about = "Check the first argument against a fixed token",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Candidate input. Only the first value is inspected; the rest are ignored.
    #[arg(
        value_name = "INPUT",
        num_args = 1..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Parse `argv` with every argument after the program name kept verbatim.
    ///
    /// An end-of-options marker is injected after the program name, so clap
    /// consumes that one and a user-supplied `--` stays data.
    ///
    /// # Errors
    ///
    /// Returns the clap error if parsing fails.
    pub fn parse_verbatim<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::<OsString>::into);
        let bin = argv.next().unwrap_or_else(|| OsString::from("pancheck"));
        Self::try_parse_from(
            std::iter::once(bin)
                .chain(std::iter::once(OsString::from("--")))
                .chain(argv),
        )
    }

    /// The inspected input: the first argument, or empty when none was given.
    #[must_use]
    pub fn input(&self) -> &OsStr {
        self.args
            .first()
            .map_or_else(|| OsStr::new(""), OsString::as_os_str)
    }
}
