//! Novaxis contact backend — validates and forwards contact-form submissions.

pub mod config;
pub mod contact;
pub mod delivery;
pub mod error;
pub mod routes;
