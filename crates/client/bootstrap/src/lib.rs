//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, content assembly and the [`DuelSession`]
//! that front-ends drive.
pub mod builder;
pub mod config;
pub mod session;

pub use builder::SessionBuilder;
pub use config::ClientConfig;
pub use session::DuelSession;
