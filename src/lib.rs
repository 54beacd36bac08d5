//! RoomCraft Library
//!
//! This library provides the core functionality for the RoomCraft room
//! design wizard: the step state machine and its aggregated design record,
//! the layout and style editing components, a preview projection, and the
//! client that turns a finished design into a generated room image.

// Module declarations
pub mod config;
pub mod generate;
pub mod models;
pub mod preview;
pub mod web;
pub mod wizard;
