//! Print command implementation

use std::io::{self, BufWriter};

use miette::{IntoDiagnostic, Result};
use tracing::{error, info};

use declscope_core::{Driver, NameFilter, PrintAction, PrintOptions};

use super::{Input, decode, warn_if_unsupported};

/// Runs the print action over every input.
///
/// Returns `Ok(true)` if any input failed to parse.
pub fn run_print(inputs: &[Input], options: PrintOptions) -> Result<bool> {
    // A malformed filter is fatal before anything is read.
    NameFilter::new(&options.filter).map_err(|e| miette::miette!("{}", e))?;

    let driver = Driver::new();
    let stdout = io::stdout().lock();
    let mut action = PrintAction::new(BufWriter::new(stdout), options);
    let mut failed = 0;

    for input in inputs {
        let bytes = input.read()?;
        let name = input.display_name();
        warn_if_unsupported(&driver, input);
        let result = decode(bytes).and_then(|source| driver.execute(&mut action, &source, &name));

        if let Err(e) = result {
            if e.is_fatal() {
                return Err(miette::miette!("{}: {}", name, e));
            }
            error!("{}: {}", name, e);
            failed += 1;
        }
    }

    let lines = action.lines_written();
    action.into_inner().into_diagnostic()?;
    info!(
        "Processed {} inputs ({} failed), printed {} lines",
        inputs.len(),
        failed,
        lines
    );

    Ok(failed > 0)
}
