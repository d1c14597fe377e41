//! Admin authentication: stateless cookie/JWT sessions.
//!
//! Flow Overview:
//! 1) Login checks credentials, signs a 7-day token, and sets the cookie.
//! 2) The edge gate bounces cookieless `/admin/*` page loads to the login
//!    page using presence alone.
//! 3) Every admin data route re-verifies the token and resolves the admin
//!    record through [`principal::require_admin`].
//!
//! Sessions are stateless by design: there is no server-side session table,
//! one admin may hold any number of concurrent sessions, and logout only
//! clears the client cookie.

pub mod cookie;
pub mod gate;
pub mod login;
pub mod logout;
pub mod principal;
pub mod session;
mod state;
mod storage;
mod token;
pub mod types;

pub use cookie::AUTH_COOKIE_NAME;
pub use principal::{require_admin, AdminPrincipal};
pub use state::{AuthConfig, AuthState};
pub use token::{Claims, TokenCodec, TokenRejection};
