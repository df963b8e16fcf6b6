// This is free and unencumbered software released into the public domain.

//! Camera preview sizing for host-driven preview surfaces.
//!
//! The heart of the crate is [`shared::select_optimal`], which picks the
//! supported resolution that best fits a target box. Everything else wires
//! that selection into a view's measure pass and a surface's lifecycle.

pub mod cli;
pub mod ffi;
pub mod shared;
