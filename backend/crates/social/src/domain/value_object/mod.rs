//! Domain Value Objects

pub mod slug;
