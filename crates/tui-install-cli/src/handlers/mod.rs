//! Command handlers.
//!
//! Handlers take a `&CliContext`, drive the runtime stages through the
//! context's ports, and report every user-visible line through its sink.

pub mod install;
