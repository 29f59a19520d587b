//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Queries are bound at runtime (`query_as` + `FromRow` row structs) and rows
//! are converted into domain entities, rejecting out-of-range enum columns.
//!
//! # Repositories
//!
//! - [`PgLostAndFoundRepository`] - Lost-and-found board queries
//! - [`PgQrcodeRepository`] - QR code read and save
//! - [`PgSessionRepository`] - Bearer-token sessions
//! - [`PgHealthRepository`] - Liveness check

pub mod pg_health_repository;
pub mod pg_lost_and_found_repository;
pub mod pg_qrcode_repository;
pub mod pg_session_repository;

pub use pg_health_repository::PgHealthRepository;
pub use pg_lost_and_found_repository::PgLostAndFoundRepository;
pub use pg_qrcode_repository::PgQrcodeRepository;
pub use pg_session_repository::PgSessionRepository;
