//! core
//!
//! Command schemas, tokenizing, parsing and the types they share.
//!
//! # Modules
//!
//! - [`value`] - Value types and coercion of raw tokens
//! - [`tokenize`] - Quote-aware line splitting
//! - [`schema`] - Argument, flag and command specs
//! - [`parse`] - Matching tokens against a command spec
//! - [`sink`] - Output destinations
//! - [`errors`] - The dispatch error taxonomy
//! - [`version`] - Validated semantic versions
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Specs are validated as a whole before they can be registered
//! - Parsing and coercion are pure
//! - Every failure is a [`errors::DispatchError`] value

pub mod config;
pub mod errors;
pub mod parse;
pub mod schema;
pub mod sink;
pub mod tokenize;
pub mod value;
pub mod version;
