//! HTTP middleware for request processing and protection.
//!
//! Provides caller authentication, rate limiting, and observability middleware.

pub mod auth;
pub mod rate_limit;
pub mod tracing;
