//! Command line interface for the phonolex binary.

pub mod args;
pub mod commands;
