//! Infrastructure Layer
//!
//! Database implementations and concrete credential/token algorithms.

pub mod database;
pub mod email_syntax;
pub mod password;
pub mod postgres;
pub mod token;

pub use database::Database;
pub use email_syntax::BasicEmailSyntax;
pub use password::Argon2Encrypter;
pub use postgres::PgUserRepository;
pub use token::HmacTokenGenerator;
