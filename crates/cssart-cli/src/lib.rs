//! CSS Art CLI library.
//!
//! This crate provides the studio controller behind the `cssart` binary:
//! configuration loading, the generate/export state machine, the HTML page
//! writer and the command implementations.

pub mod commands;
pub mod config;
pub mod html;
pub mod studio;
