//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations with no domain
//! knowledge:
//! - Password hashing (Argon2id)
//! - Signed bearer tokens (HS256 JWT)
//! - `Authorization` header parsing

pub mod bearer;
pub mod password;
pub mod token;
