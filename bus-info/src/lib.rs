//! Live UK bus departures in the terminal.
//!
//! Looks up stops on TransportAPI by ATCO code, groups their departures by
//! route and formats how long until each bus leaves.

pub mod config;
pub mod domain;
pub mod logging;
pub mod render;
pub mod transportapi;
