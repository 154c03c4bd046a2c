//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod analyze_answers;
pub mod deploy_service;
