//! Vibe Core Library
//!
//! Provides the domain logic for deploying one canonical MCP server
//! configuration to the config files of multiple AI coding assistants,
//! each with its own path and serialization format.

pub mod deploy;
pub mod encode;
pub mod error;
pub mod expand;
pub mod filter;
pub mod fs;
pub mod settings;
pub mod target;

pub use error::{Error, Result};

/// Re-exports of commonly used types
pub mod prelude {
    // Pipeline
    pub use crate::deploy::{DeployOutcome, DeployReport, deploy_all, deploy_to_target};

    // Settings
    pub use crate::settings::{MCP_SERVERS_KEY, load_settings, settings_path};

    // Targets
    pub use crate::target::{
        ConfigFormat, DeployContext, TargetAdapter, TargetCapabilities, TargetRegistry,
    };

    // Errors
    pub use crate::error::{Error, Result};
}
