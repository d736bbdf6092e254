// file: src/logging/mod.rs
// version: 1.0.0
// guid: 5b09c7d2-31e8-4a6f-9d14-80f2c5a7e396

//! Logging module

pub mod logger;
