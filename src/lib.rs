//! Scoutbook - Player Profile Manager
//!
//! This crate implements a small record-management service: create a player
//! profile, persist it in SQLite, and serve it back through a generated URL
//! derived from the player's name.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
