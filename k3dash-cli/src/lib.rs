//! Creates a local k8s cluster using k3d and deploys the k8s dashboard service.

pub mod bootstrap;
pub mod commands;
