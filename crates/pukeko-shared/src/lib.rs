//! # Pukeko Shared
//!
//! Wire types shared between the dashboard frontend and the backend.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
