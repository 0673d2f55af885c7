//! Shared bootstrap utilities for front-ends.
//!
//! Reads client configuration from the environment, discovers scenarios,
//! and builds new or resumed sessions together with their save store.
pub mod builder;
pub mod config;
pub mod session;

pub use builder::SessionBuilder;
pub use config::ClientConfig;
pub use session::{describe_session, new_session_id};
