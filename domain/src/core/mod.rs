//! Core domain concepts shared across all subdomains.
//!
//! - [`user::UserId`]: identifier issued by the identity collaborator
//! - [`error::DomainError`]: boundary validation errors

pub mod error;
pub mod user;
