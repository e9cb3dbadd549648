//! Deploy command: recreate the local cluster and install the dashboard

use crate::bootstrap::plan::{DEFAULT_CLUSTER_NAME, DEFAULT_NUM_NODES};
use crate::bootstrap::{CommandRunner, DeploymentPlan, PlanFile, SystemRunner};
use crate::bootstrap::{load_plan_file, run_bootstrap};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "k3dash",
    version,
    about = "Creates a local k8s cluster using k3d and deploys k8s dashboard service."
)]
pub struct DeployArgs {
    /// Name of the k8s cluster to create.
    #[clap(short, long, env = "K3DASH_CLUSTER_NAME", default_value = DEFAULT_CLUSTER_NAME)]
    pub cluster_name: String,

    /// Number of worker nodes in the cluster.
    #[clap(short, long, env = "K3DASH_NUM_NODES", default_value = DEFAULT_NUM_NODES)]
    pub num_nodes: String,

    /// TOML file adding tools to check and overriding the dashboard chart
    #[clap(long, env = "K3DASH_CONFIG")]
    pub config: Option<PathBuf>,
}

impl DeployArgs {
    /// Build the run's plan, reading `--config` if given
    pub fn plan(&self) -> Result<DeploymentPlan> {
        let file = match &self.config {
            Some(path) => load_plan_file(path)?,
            None => PlanFile::default(),
        };
        Ok(DeploymentPlan::from_file(
            self.cluster_name.clone(),
            self.num_nodes.clone(),
            file,
        ))
    }
}

/// Handle the deploy command against real processes
pub async fn handle_deploy(args: DeployArgs) -> Result<()> {
    deploy_with(&SystemRunner, &args).await
}

pub async fn deploy_with<R: CommandRunner>(runner: &R, args: &DeployArgs) -> Result<()> {
    let plan = args.plan()?;
    run_bootstrap(runner, &plan).await?;
    Ok(())
}
