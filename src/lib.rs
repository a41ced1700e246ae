//! DevOps CI/CD demo HTTP service.
//!
//! A minimal stateless service with three static JSON endpoints, built to
//! exercise a build/test/deploy pipeline rather than to solve a systems
//! problem:
//!
//! ```text
//! GET /            -> welcome message
//! GET /health      -> health status with uptime
//! GET /api/status  -> application and runtime details
//! anything else    -> 404 with the requested path
//! ```
//!
//! Every request passes through permissive CORS and security-header
//! middleware; unhandled handler faults become 500 responses whose detail
//! is disclosed only in development.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Error types and the fault-disclosure policy
//! - [`api`]: Router, handlers, and middleware
//! - [`utils`]: Shutdown signal handling

pub mod api;
pub mod config;
pub mod error;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
