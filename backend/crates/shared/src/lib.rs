//! Shared Kernel
//!
//! Vocabulary shared by every backend crate:
//! - [`error::app_error::AppError`] and the [`error::app_error::AppResult`] alias
//! - [`error::kind::ErrorKind`], the HTTP-facing error classification
//! - `From` conversions for std, serde_json and (feature-gated) sqlx errors
//!
//! Only things with the same meaning in every domain belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
