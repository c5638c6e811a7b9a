//! Presentation Layer
//!
//! HTTP handlers, DTOs, presenters, and routing.

pub mod dto;
pub mod handlers;
pub mod presenter;
pub mod router;
