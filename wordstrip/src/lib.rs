// wordstrip/src/lib.rs
//! # wordstrip CLI
//!
//! Terminal front end for `wordstrip-core`: loads a forbidden-word list and a
//! product CSV, strips the words from the product names and writes the result.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
