//! # schoolauth-entity
//!
//! Domain entity models for SchoolAuth. Database entities derive
//! `sqlx::FromRow`; the session types describe what the session backend
//! stores and what clients receive back.

pub mod school;
pub mod session;
pub mod user;
