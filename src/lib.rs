//! FontShelf command-line shell.
//!
//! Wires the application layer to the on-disk store and in-process
//! rendering adapters, and exposes the user operations as subcommands.

pub mod adapters;
pub mod bootstrap;
pub mod cli;
