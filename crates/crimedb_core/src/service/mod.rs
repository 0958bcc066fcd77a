//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into command-level operations.
//! - Keep the command surface decoupled from storage details.

pub mod case_service;
pub mod seed;
