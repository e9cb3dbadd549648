//! Prerequisite checker
//!
//! Validates that every required binary resolves on PATH before anything
//! touches the cluster. Stops at the first one that doesn't.

use crate::bootstrap::error::{BootstrapError, MissingPrerequisiteSnafu};
use crate::bootstrap::runner::CommandRunner;
use std::path::PathBuf;
use tracing::debug;

/// Check if binary exists in PATH
///
/// A failing `which`, or no `which` at all, both count as not found.
pub async fn find_binary<R: CommandRunner>(runner: &R, name: &str) -> Option<PathBuf> {
    match runner.output("which", &[name]).await {
        Ok(output) if output.success => Some(PathBuf::from(output.stdout.trim())),
        Ok(_) => None,
        Err(e) => {
            debug!("unable to run which for {name}: {e}");
            None
        }
    }
}

/// Check all required binaries, in order
pub async fn check_prerequisites<R, S>(runner: &R, required: &[S]) -> Result<(), BootstrapError>
where
    R: CommandRunner,
    S: AsRef<str>,
{
    for tool in required {
        let tool = tool.as_ref();
        match find_binary(runner, tool).await {
            Some(path) => debug!("{tool} found at {}", path.display()),
            None => return MissingPrerequisiteSnafu { tool }.fail(),
        }
    }
    Ok(())
}
