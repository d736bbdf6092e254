// file: src/cli/mod.rs
// version: 1.0.0
// guid: 1a84f6d0-b92c-4e37-85a1-d40c7e3f9b58

//! Command line interface module

pub mod args;
pub mod commands;
