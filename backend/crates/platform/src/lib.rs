//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations, free of any domain vocabulary:
//! - Cryptographic utilities (HMAC-SHA256, URL-safe Base64, secure random)
//! - Password hashing (Argon2id)

pub mod crypto;
pub mod password;
