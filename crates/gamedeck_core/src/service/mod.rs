//! Core use-case services.
//!
//! # Responsibility
//! - Translate transport DTOs into store calls.
//! - Keep CLI/transport layers decoupled from storage details.

pub mod dto;
pub mod game_service;
