//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and wraps every
//! `/api` result in the [`response::ApiResponse`] envelope.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Validating request extractors
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication and request processing middleware
//! - [`response`] - Success/failure envelope
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
