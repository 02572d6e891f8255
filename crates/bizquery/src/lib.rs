//! Bizquery - fluent queries over business datasets.
//!
//! This crate provides both a CLI application and a library for loading a
//! JSONL dataset of businesses and narrowing it down with chained filters.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod domain;
pub mod error;
pub mod loader;
pub mod query;

// Public CLI module (needed by binary)
pub mod app;
pub mod cli;
pub mod config;
pub mod output;
