//! # Domain Vocabulary
//!
//! This crate contains the plain types every other conference crate speaks in:
//! payment types, the category taxonomy with its closure policy, opaque identifiers,
//! and configuration structs. Keep it lean: no I/O and no construction logic.

pub mod config;
pub mod error;
pub mod identity;
pub mod payment;
pub mod taxonomy;

pub use crate::error::{PersonError, PersonErrorExt};
