//! Helm steps for the dashboard chart

use crate::bootstrap::error::{BootstrapError, Step};
use crate::bootstrap::plan::ChartSpec;
use crate::bootstrap::runner::{CommandRunner, run_checked};

const HELM: &str = "helm";

/// Add helm repo for the chart
pub async fn add_repo<R: CommandRunner>(runner: &R, spec: &ChartSpec) -> Result<(), BootstrapError> {
    run_checked(
        runner,
        Step::RepoAdd,
        HELM,
        &["repo", "add", &spec.repo_name, &spec.repo_url],
    )
    .await
}

/// Install the chart with no extra values
pub async fn install_chart<R: CommandRunner>(
    runner: &R,
    spec: &ChartSpec,
) -> Result<(), BootstrapError> {
    run_checked(
        runner,
        Step::InstallChart,
        HELM,
        &["install", &spec.release, &spec.chart],
    )
    .await
}
