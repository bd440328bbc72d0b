//! Kernel utilities shared across the conference crates.
//! Keep this crate lightweight; it provides ID generation, config loading and the logger.
//!
//! ## ID generation
//! Use `safe_nanoid!` for URL-safe, unambiguous IDs:
//! ```rust
//! # use conf_kernel::safe_nanoid;
//! let id = safe_nanoid!();
//! assert_eq!(id.len(), 12);
//! ```
//!
//! Constructors in the people crate take an [`IdGenerator`](conf_domain::identity::IdGenerator);
//! [`NanoIdGenerator`] is the production one:
//! ```rust
//! use conf_kernel::NanoIdGenerator;
//! use conf_kernel::domain::identity::IdGenerator;
//!
//! let id = NanoIdGenerator::default().generate();
//! assert_eq!(id.as_str().len(), 12);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use conf_kernel::config::load_config;
//! use conf_kernel::domain::config::ConfConfig;
//!
//! let cfg: ConfConfig = load_config(Some("conf")).unwrap_or_default();
//! ```
pub mod config;
mod ids;
pub mod logger;

// Alphabet excludes visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub use crate::ids::NanoIdGenerator;
pub use conf_domain as domain;
pub use nanoid::nanoid;

/// Generates an unambiguous `NanoID` (no visually confusing characters).
#[macro_export]
macro_rules! safe_nanoid {
    () => {
        // 2-9, A-Z (minus I, O), a-z (minus l)
        $crate::nanoid!(12, $crate::SAFE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::SAFE_ALPHABET)
    };
}
