//! no-en - flag hardcoded English text in JavaScript and TypeScript
//!
//! The `no-en` rule reports string and template literals that look like
//! English prose (a capitalized word followed by whitespace) in assignments,
//! logical fallbacks, call arguments, return values and variable initializers.
//! Calls to logging, assertion and test helpers, plus user-configured
//! `excludes`, are left alone.
//!
//! ## Module Structure
//!
//! - `rule`: the rule itself (heuristic, exemptions, swc visitor)
//! - `config`: rule options (`excludes`)
//! - `parser`: JS/TS parsing with swc
//! - `scanner`: source file discovery
//! - `checker`: running the rule over files
//! - `issues`: issue types and ordering
//! - `reporter`: cargo-style output
//! - `cli`: command-line interface

pub mod checker;
pub mod cli;
pub mod config;
pub mod issues;
pub mod parser;
pub mod reporter;
pub mod rule;
pub mod scanner;
