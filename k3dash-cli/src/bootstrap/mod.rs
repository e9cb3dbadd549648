//! Local cluster bootstrap
//!
//! - Prerequisite checking (required binaries on PATH)
//! - k3d cluster recreate + kubectl connectivity probe
//! - Helm repo registration and dashboard chart install

pub mod chart;
pub mod cluster;
pub mod error;
pub mod pipeline;
pub mod plan;
pub mod prereq;
pub mod runner;

pub use error::{BootstrapError, Step};
pub use pipeline::run_bootstrap;
pub use plan::{ChartSpec, DeploymentPlan, PlanFile, load_plan_file};
pub use prereq::check_prerequisites;
pub use runner::{CommandRunner, SystemRunner};
