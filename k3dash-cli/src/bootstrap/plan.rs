//! Deployment plan for a bootstrap run
//!
//! Holds the two runtime parameters (cluster name, node count) together with
//! the tool list and dashboard chart coordinates. An optional TOML file may
//! append tools to check and swap the chart; it can never drop one of
//! [`REQUIRED_BINS`]. Any key left out keeps its default.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CLUSTER_NAME: &str = "local-k8s";
pub const DEFAULT_NUM_NODES: &str = "1";

/// Tools that must resolve on PATH, checked in this order
pub const REQUIRED_BINS: [&str; 4] = ["docker", "k3d", "kubectl", "helm"];

/// Helm coordinates of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChartSpec {
    pub repo_name: String,
    pub repo_url: String,
    pub release: String,
    pub chart: String,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            repo_name: "kubernetes-dashboard".to_string(),
            repo_url: "https://kubernetes.github.io/dashboard".to_string(),
            release: "dashboard".to_string(),
            chart: "kubernetes-dashboard/kubernetes-dashboard".to_string(),
        }
    }
}

/// On-disk overrides, e.g.
///
/// ```toml
/// [bootstrap]
/// extra_bins = ["jq"]
///
/// [chart]
/// release = "dashboard"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlanFile {
    pub bootstrap: BootstrapSection,
    pub chart: ChartSpec,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapSection {
    /// Checked after [`REQUIRED_BINS`]
    pub extra_bins: Vec<String>,
}

/// Everything one run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentPlan {
    pub cluster_name: String,
    /// Passed to k3d as-is; k3d rejects anything it can't parse
    pub num_nodes: String,
    /// Always starts with [`REQUIRED_BINS`], in order
    pub required_bins: Vec<String>,
    pub chart: ChartSpec,
}

impl DeploymentPlan {
    pub fn new(cluster_name: impl Into<String>, num_nodes: impl Into<String>) -> Self {
        Self::from_file(cluster_name, num_nodes, PlanFile::default())
    }

    pub fn from_file(
        cluster_name: impl Into<String>,
        num_nodes: impl Into<String>,
        file: PlanFile,
    ) -> Self {
        let mut required_bins: Vec<String> =
            REQUIRED_BINS.iter().map(ToString::to_string).collect();
        for extra in file.bootstrap.extra_bins {
            if !required_bins.contains(&extra) {
                required_bins.push(extra);
            }
        }

        Self {
            cluster_name: cluster_name.into(),
            num_nodes: num_nodes.into(),
            required_bins,
            chart: file.chart,
        }
    }
}

impl Default for DeploymentPlan {
    fn default() -> Self {
        Self::new(DEFAULT_CLUSTER_NAME, DEFAULT_NUM_NODES)
    }
}

/// Load plan overrides from TOML file
pub fn load_plan_file(config_path: &Path) -> Result<PlanFile> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))
}
