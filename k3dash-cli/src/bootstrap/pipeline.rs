//! The bootstrap sequence
//!
//! Prerequisites, cluster delete, cluster create, connectivity probe, helm repo
//! add, helm install. Each gate either passes or ends the run; nothing already
//! done is rolled back and nothing is retried.

use crate::bootstrap::chart::{add_repo, install_chart};
use crate::bootstrap::cluster::{check_connectivity, create_cluster, delete_cluster};
use crate::bootstrap::error::BootstrapError;
use crate::bootstrap::plan::DeploymentPlan;
use crate::bootstrap::prereq::check_prerequisites;
use crate::bootstrap::runner::CommandRunner;
use tracing::info;

pub async fn run_bootstrap<R: CommandRunner>(
    runner: &R,
    plan: &DeploymentPlan,
) -> Result<(), BootstrapError> {
    check_prerequisites(runner, &plan.required_bins).await?;

    delete_cluster(runner, &plan.cluster_name).await;

    info!(
        "Creating cluster... name: {}, nodes: {}",
        plan.cluster_name, plan.num_nodes
    );
    create_cluster(runner, &plan.cluster_name, &plan.num_nodes).await?;

    check_connectivity(runner).await?;
    info!("Cluster created!");

    info!("Deploying kubernetes dashboard to cluster...");
    add_repo(runner, &plan.chart).await?;
    install_chart(runner, &plan.chart).await?;
    info!("Dashboard deployed!");

    Ok(())
}
