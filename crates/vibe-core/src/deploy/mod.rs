//! Deployment pipeline: load, expand, filter, encode, write.

mod executor;

pub use executor::{DeployOutcome, DeployReport, deploy_all, deploy_to_target};
