//! k3d cluster lifecycle and kubectl connectivity probe

use crate::bootstrap::error::{BootstrapError, Step};
use crate::bootstrap::runner::{CommandRunner, run_checked};
use tracing::debug;

const K3D: &str = "k3d";
const KUBECTL: &str = "kubectl";

/// Delete the cluster if it already exists
///
/// The outcome is never checked; a missing cluster is the common case.
pub async fn delete_cluster<R: CommandRunner>(runner: &R, name: &str) {
    match runner.status(K3D, &["cluster", "delete", name]).await {
        Ok(true) => debug!("removed previous cluster {name}"),
        Ok(false) => debug!("k3d cluster delete {name} exited non-zero, ignoring"),
        Err(e) => debug!("failed to execute k3d cluster delete {name}: {e}, ignoring"),
    }
}

/// Create the cluster with the given agent count
pub async fn create_cluster<R: CommandRunner>(
    runner: &R,
    name: &str,
    agents: &str,
) -> Result<(), BootstrapError> {
    run_checked(
        runner,
        Step::CreateCluster,
        K3D,
        &["cluster", "create", name, "--agents", agents],
    )
    .await
}

/// Check if kubectl can talk to the newly created cluster
pub async fn check_connectivity<R: CommandRunner>(runner: &R) -> Result<(), BootstrapError> {
    run_checked(runner, Step::Connectivity, KUBECTL, &["cluster-info"]).await
}
