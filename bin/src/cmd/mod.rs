//! CLI subcommand modules.
//!
//! This module contains the implementations for all sieve CLI subcommands.

pub(crate) mod rules;
pub(crate) mod screen;
