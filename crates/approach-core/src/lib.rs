//! Core types and definitions for the APPROACH air-traffic simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! airspace geometry, components, commands, state snapshots, events,
//! constants and error types. It has no dependency on any runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geometry;
pub mod rules;
pub mod state;
pub mod types;
