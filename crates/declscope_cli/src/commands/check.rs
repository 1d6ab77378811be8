//! Check command implementation

use std::io::{self, Write};

use miette::{IntoDiagnostic, Result};
use tracing::info;

use declscope_core::{Driver, SyntaxOnlyAction};

use super::{Input, decode, warn_if_unsupported};

/// Parses every input and prints one `ok` or `error` line per input.
///
/// Returns `Ok(true)` if any input failed to parse.
pub fn run_check(inputs: &[Input]) -> Result<bool> {
    let driver = Driver::new();
    let mut action = SyntaxOnlyAction::new();
    let mut stdout = io::stdout().lock();
    let mut failed = 0;

    for input in inputs {
        let bytes = input.read()?;
        let name = input.display_name();
        warn_if_unsupported(&driver, input);
        let result = decode(bytes).and_then(|source| driver.execute(&mut action, &source, &name));

        match result {
            Ok(()) => writeln!(stdout, "ok\t{}", name).into_diagnostic()?,
            Err(e) => {
                writeln!(stdout, "error\t{}\t{}", name, e).into_diagnostic()?;
                failed += 1;
            }
        }
    }

    info!(
        "Checked {} inputs, {} parsed, {} failed",
        inputs.len(),
        action.units_checked(),
        failed
    );
    Ok(failed > 0)
}
