//! Entity Module

pub mod user_record;
