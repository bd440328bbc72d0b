#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the conference crates.
//! At the moment this is a single attribute, [`macro@conf_error`], which turns a plain enum
//! into a `thiserror` error with context plumbing.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! conf-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context()`
///   to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source error.
/// * **Standard Conversions**: Implements `From<Source>` for variants with a source field,
///   so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant is present.
///
/// # Requirements
///
/// 1. Applied to an **enum**.
/// 2. Every variant uses named fields; tuple and unit variants are rejected.
/// 3. Variants with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust
/// use conf_derive::conf_error;
/// use std::borrow::Cow;
///
/// #[conf_error]
/// pub enum ParseError {
///     #[error("Bad number{}: {source}", format_context(.context))]
///     Number { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn port(raw: &str) -> Result<u16, ParseError> {
///     let value = raw.parse::<u16>().context("Reading port")?;
///     if value == 0 {
///         return Err("port must be non-zero".into());
///     }
///     Ok(value)
/// }
///
/// fn main() {
///     assert_eq!(port("8080").ok(), Some(8080));
///     assert!(port("http").unwrap_err().to_string().starts_with("Bad number (Reading port)"));
///     assert_eq!(port("0").unwrap_err().to_string(), "Internal fault: port must be non-zero");
/// }
/// ```
///
/// # Rejected input
///
/// Tuple variants:
///
/// ```rust,compile_fail
/// use conf_derive::conf_error;
///
/// #[conf_error]
/// pub enum SeatError {
///     #[error("Seat {0} is taken")]
///     Taken(u32),
/// }
///
/// fn main() {}
/// ```
///
/// Unit variants:
///
/// ```rust,compile_fail
/// use conf_derive::conf_error;
///
/// #[conf_error]
/// pub enum SeatError {
///     #[error("Sold out")]
///     SoldOut,
/// }
///
/// fn main() {}
/// ```
///
/// A source without a context slot:
///
/// ```rust,compile_fail
/// use conf_derive::conf_error;
///
/// #[conf_error]
/// pub enum SeatError {
///     #[error("Bad seat number: {source}")]
///     Number { source: std::num::ParseIntError },
/// }
///
/// fn main() {}
/// ```
///
/// A context of any other type:
///
/// ```rust,compile_fail
/// use conf_derive::conf_error;
///
/// #[conf_error]
/// pub enum SeatError {
///     #[error("Bad seat number: {source}")]
///     Number { source: std::num::ParseIntError, context: Option<String> },
/// }
///
/// fn main() {}
/// ```
///
/// Anything that is not an enum:
///
/// ```rust,compile_fail
/// use conf_derive::conf_error;
/// use std::borrow::Cow;
///
/// #[conf_error]
/// pub struct SeatError {
///     message: Cow<'static, str>,
///     context: Option<Cow<'static, str>>,
/// }
///
/// fn main() {}
/// ```
#[proc_macro_attribute]
pub fn conf_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
