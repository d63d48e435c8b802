//! ui
//!
//! User interaction utilities: console output and interactive prompts.

pub mod output;
pub mod prompts;
