// wordstrip-core/src/engines/mod.rs
//! Concrete implementations of the `SanitizationEngine` trait.
//!
//! # License
//! MIT OR Apache-2.0

pub mod regex_engine;
