//! Matcher construction for the sanitization engine.
//!
//! The term set is user data, never pattern syntax: every term is escaped
//! before it reaches the regex builder.

pub mod compiler;
