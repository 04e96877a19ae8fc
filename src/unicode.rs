//! Unicode code point helpers.

pub mod codepoint;
