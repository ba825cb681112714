//! Interactive navigation over an in-memory directory tree.
//!
//! [`filesystem`] holds the tree model, [`navigator`] the session cursor and
//! size formatting, and [`shell`] the line based prompt driving both.

#![allow(clippy::enum_variant_names)]

pub mod application;
pub mod cli;
pub mod filesystem;
pub mod navigator;
pub mod shell;
