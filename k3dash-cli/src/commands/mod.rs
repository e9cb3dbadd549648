pub mod deploy;

pub use deploy::{DeployArgs, handle_deploy};
