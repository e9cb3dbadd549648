//! Failure kinds of a bootstrap run
//!
//! Every variant is fatal: the pipeline stops at the first one and the
//! binary exits with status 1 after logging its display text once.

use snafu::Snafu;
use std::fmt;

/// A pipeline step whose failure aborts the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CreateCluster,
    Connectivity,
    RepoAdd,
    InstallChart,
}

impl Step {
    /// The line logged when this step's command exits non-zero
    pub fn failure_message(self) -> &'static str {
        match self {
            Step::CreateCluster => "Unable to create cluster.",
            Step::Connectivity => "kubectl unable to connect to cluster.",
            Step::RepoAdd => "Unable to add k8s helm repo",
            Step::InstallChart => "Unable to install k8s dashboard chart.",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::CreateCluster => "create-cluster",
            Step::Connectivity => "connectivity",
            Step::RepoAdd => "repo-add",
            Step::InstallChart => "install-chart",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum BootstrapError {
    /// A required tool is not resolvable on PATH
    #[snafu(display("{tool} is missing! Please install before running."))]
    MissingPrerequisite { tool: String },

    /// An invoked tool exited non-zero or could not be started
    #[snafu(display("{}", step.failure_message()))]
    CommandFailed { step: Step },
}

impl BootstrapError {
    /// The step that failed, if the failure came from an external command
    pub fn step(&self) -> Option<Step> {
        match self {
            BootstrapError::CommandFailed { step } => Some(*step),
            BootstrapError::MissingPrerequisite { .. } => None,
        }
    }
}
