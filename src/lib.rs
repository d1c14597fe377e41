//! # Vetrina
//!
//! `vetrina` is the backend for a marketing website with a lightweight admin
//! back-office. It serves the public JSON APIs consumed by the site frontend
//! (contact-inquiry intake, events listing) and an admin surface for managing
//! events and inquiries.
//!
//! ## Admin authentication
//!
//! Sessions are stateless: a successful login issues an HS256-signed token
//! carrying the admin id and a 7-day expiry, transported in a single
//! `HttpOnly` cookie. No session record is kept server-side; validity is
//! derived entirely from the token signature and expiry.
//!
//! The admin surface is protected in two tiers:
//!
//! - **Request gate** — a cheap, presence-only cookie check on `/admin/*`
//!   pages that redirects unauthenticated page loads to the login page. It
//!   does not verify the token and is not authoritative.
//! - **Route guard** — every admin data route re-verifies the token signature
//!   and expiry and resolves the admin record before touching data.

pub mod api;
pub mod cli;
