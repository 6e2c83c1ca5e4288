//! engine
//!
//! Command registration and dispatch.
//!
//! # Architecture
//!
//! The [`Registry`] is the only component that invokes handlers. It is owned
//! by the composition root (see [`crate::cli::Shell`]) and passed by reference
//! wherever dispatch is needed; there is no global command table.
//!
//! Dispatch is synchronous and run-to-completion: one token sequence in, at
//! most one handler call, one result out.

pub mod registry;

pub use registry::Registry;
