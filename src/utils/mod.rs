//! Helpers shared across layers.
//!
//! - [`string_list`] - Codec for delimiter-joined list columns

pub mod string_list;
