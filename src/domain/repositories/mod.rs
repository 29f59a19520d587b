//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern. They are
//! implemented by PostgreSQL repositories in `crate::infrastructure::persistence`.
//!
//! # Lookup contract
//!
//! Lookups by key return `Result<Option<T>, AppError>`:
//!
//! - `Ok(Some(record))` - found
//! - `Ok(None)` - no matching row
//! - `Err(AppError::Internal { .. })` - storage fault
//!
//! Services match on all three cases explicitly.
//!
//! # Available Repositories
//!
//! - [`LostAndFoundRepository`] - Lost-and-found board queries
//! - [`QrcodeRepository`] - QR code read and save
//! - [`SessionRepository`] - Bearer-token sessions
//! - [`HealthRepository`] - Storage liveness check
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` under `cfg(test)`.
//! See `tests/repository_*.rs` for the PostgreSQL implementations.

pub mod health_repository;
pub mod lost_and_found_repository;
pub mod qrcode_repository;
pub mod session_repository;

pub use health_repository::HealthRepository;
pub use lost_and_found_repository::LostAndFoundRepository;
pub use qrcode_repository::QrcodeRepository;
pub use session_repository::SessionRepository;

#[cfg(test)]
pub use health_repository::MockHealthRepository;
#[cfg(test)]
pub use lost_and_found_repository::MockLostAndFoundRepository;
#[cfg(test)]
pub use qrcode_repository::MockQrcodeRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
