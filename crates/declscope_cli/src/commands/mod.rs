//! Subcommand implementations

mod check;
mod init;
mod print;

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use miette::Result;
use tracing::warn;

use declscope_core::{Driver, ParseError, ToolError};

pub use check::run_check;
pub use init::run_init;
pub use print::run_print;

/// A source to run an action over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Maps command-line paths to inputs; no paths means stdin.
    pub fn from_args(files: &[PathBuf]) -> Vec<Input> {
        if files.is_empty() {
            return vec![Input::Stdin];
        }
        files
            .iter()
            .map(|path| {
                if path.as_os_str() == "-" {
                    Input::Stdin
                } else {
                    Input::File(path.clone())
                }
            })
            .collect()
    }

    /// Name used in reports and logs.
    pub fn display_name(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    /// Reads the raw bytes of the input. Only I/O failures are errors here.
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            Input::Stdin => {
                let mut bytes = Vec::new();
                io::stdin()
                    .read_to_end(&mut bytes)
                    .map_err(|e| miette::miette!("Failed to read stdin: {}", e))?;
                Ok(bytes)
            }
            Input::File(path) => std::fs::read(path)
                .map_err(|e| miette::miette!("Failed to read {}: {}", path.display(), e)),
        }
    }

    fn path(&self) -> Option<&Path> {
        match self {
            Input::Stdin => None,
            Input::File(path) => Some(path),
        }
    }
}

/// Decodes source bytes. Text that is not UTF-8 fails the input like a parse error.
fn decode(bytes: Vec<u8>) -> std::result::Result<String, ToolError> {
    String::from_utf8(bytes).map_err(|e| {
        let offset = e.utf8_error().valid_up_to();
        ParseError::invalid_source_at(format!("not valid UTF-8 at byte {offset}"), offset).into()
    })
}

/// Warns about files whose extension the front end does not claim.
///
/// They are still parsed.
fn warn_if_unsupported(driver: &Driver, input: &Input) {
    if let Some(path) = input.path().filter(|path| !driver.supports(path)) {
        warn!(
            "{} does not look like a C++ source, parsing it anyway",
            path.display()
        );
    }
}
