//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod render;

use std::io::Read;
use std::path::Path;

pub(crate) use check::CheckArgs;
pub(crate) use render::RenderArgs;

use crate::error::CliError;

/// Read source text from a file, or stdin when `input` is absent or `-`.
pub(crate) fn read_input(input: Option<&Path>) -> Result<String, CliError> {
    match input {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
