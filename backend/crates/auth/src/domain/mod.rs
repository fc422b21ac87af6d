//! Domain Layer
//!
//! Entities, value objects, and the collaborator traits the login use case
//! depends on. Implementations live in the infrastructure layer.

pub mod entity;
pub mod repository;
pub mod services;
pub mod value_object;

// Re-exports
pub use entity::user_record::UserRecord;
pub use repository::{TokenStore, UserLookup};
pub use services::{EmailSyntax, PasswordComparer, TokenIssuer};
pub use value_object::{access_token::AccessToken, email::Email, user_id::UserId};
