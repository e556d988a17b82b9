//! # Connect Four
//!
//! Rules engine for the two-player vertical-drop game on a 6 × 7 grid, with an
//! automated opponent that looks one move ahead.
//!
//! ## Modules
//!
//! - [`game`] — Tokens, board and four-in-a-row scans, players, turn adjudication
//! - [`ai`] — Win / block / random decision procedure and the automated player
//! - [`config`] — TOML configuration of the two seats
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
