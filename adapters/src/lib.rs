//! Core `adapters` crate for talking to the coursechat backend API.
//!
//! This crate defines the `Backend` trait, which outlines every upstream call
//! the web gateway makes (authentication, group membership, course lookup,
//! chat history), and provides the concrete HTTP implementation over reqwest.

pub mod client;
pub mod errors;
pub mod models;

pub use client::{Backend, BackendClient, TOKEN_COOKIE};
pub use errors::ApiError;
pub use models::*;
