//! Presentation Layer
//!
//! HTTP adapter, handlers, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod http;
pub mod login_router;
pub mod router;

pub use handlers::AuthAppState;
pub use http::{HttpRequest, HttpResponse};
pub use login_router::LoginRouter;
pub use router::{auth_router, auth_router_generic};
