//! # schoolauth-core
//!
//! Core crate for SchoolAuth. Contains the configuration schema and loader,
//! and the unified error system shared by every other crate.
//!
//! This crate has **no** internal dependencies on other SchoolAuth crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorCode, ErrorKind};
pub use result::AppResult;
