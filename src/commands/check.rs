/// The check command: classify the first argument and print the verdict.
use std::io::Write;

use crate::check::{CheckError, Outcome, classify};
use crate::cli::{Cli, OutputCtx, write_outcome, write_report};
use crate::types::OutcomeReport;

/// Run `pancheck [INPUT]`, writing the verdict line to `out`.
///
/// The command line always supplies some input (empty when no argument is
/// given), so this path never yields [`Outcome::NullInput`].
///
/// # Errors
///
/// Returns `CheckError::Output` if the verdict cannot be written.
pub fn run<W: Write>(cli: &Cli, ctx: &OutputCtx, out: &mut W) -> Result<Outcome, CheckError> {
    let input = cli.input().as_encoded_bytes();

    let outcome = {
        let _t = ctx.timer("classify");
        classify(Some(input))
    };

    if ctx.debug {
        write_report(
            &mut std::io::stderr().lock(),
            &OutcomeReport::new(input.len(), outcome),
        );
    }

    write_outcome(out, outcome)?;
    Ok(outcome)
}
