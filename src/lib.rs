//! # floodit
//!
//! A terminal Flood-It puzzle: repeatedly recolor the region anchored at the
//! top-left cell until the whole board is one color, in as few moves as you
//! can. The game core is a plain library; the binary wraps it in a
//! Crossterm/Ratatui shell.
//!
//! ## Modules
//!
//! - [`game`] — Core logic: colors, board + flood fill, game session
//! - [`input`] — Raw input tokens and their mapping to selections
//! - [`app`] — Screen state and key dispatch for the terminal shell
//! - [`ui`] — Ratatui rendering of the menu, board, and overlays
//! - [`constants`] — Board-size defaults and bounds

pub mod app;
pub mod constants;
pub mod game;
pub mod input;
pub mod ui;
