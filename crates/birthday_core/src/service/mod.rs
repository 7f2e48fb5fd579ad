//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the menu shell decoupled from storage details.

pub mod birthday_service;
