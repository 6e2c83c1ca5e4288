//! Commandant - a command-dispatch engine for line-oriented interfaces
//!
//! Commands declare a name, a description, typed positional arguments and
//! typed flags. The engine tokenizes raw input, matches it against the
//! declared shape, coerces values and calls the command's handler with the
//! parsed input and an output sink.
//!
//! # Architecture
//!
//! - [`core`] - Value coercion, tokenizer, command schemas, parser, errors
//! - [`engine`] - The registry: registration, lookup and dispatch
//! - [`cli`] - The shell (dispatch loop), built-in commands and binary glue
//! - [`ui`] - Process-level output helpers
//!
//! # Example
//!
//! ```
//! use commandant::core::schema::{ArgumentSpec, CommandSpec, FlagSpec};
//! use commandant::core::sink::BufferSink;
//! use commandant::core::value::ValueType;
//! use commandant::engine::Registry;
//!
//! let mut registry = Registry::new();
//! registry
//!     .register(
//!         "greet",
//!         CommandSpec::new("greet", "Greet someone by name.")
//!             .argument(ArgumentSpec::new("name", "Who to greet", 0, ValueType::String))
//!             .flag(FlagSpec::presence("loud", "Shout the greeting", 'l', "loud"))
//!             .handler(|inv, out| {
//!                 let name: String = inv.input().argument("name")?;
//!                 let greeting = format!("Hello, {}!", name);
//!                 if inv.input().is_set("loud") {
//!                     out.write(&greeting.to_uppercase())
//!                 } else {
//!                     out.write(&greeting)
//!                 }
//!             }),
//!     )
//!     .unwrap();
//!
//! let mut out = BufferSink::new();
//! registry.run_line("greet world -l", &mut out).unwrap();
//! assert_eq!(out.contents(), "HELLO, WORLD!");
//! ```
//!
//! # Concurrency
//!
//! Dispatch is synchronous and single-threaded. A [`engine::Registry`] may be
//! moved between threads, but concurrent registration and dispatch need an
//! external lock.

pub mod cli;
pub mod core;
pub mod engine;
pub mod ui;
