//! Presentation-state layer of a login/home screen flow.
//!
//! Controllers own the state the screens render, guarantee that each user
//! action runs at most once at a time, turn service failures into alerts,
//! and tell the host when to navigate.

pub mod config;
pub mod entities;
pub mod error;
pub mod host;
pub mod logging;
pub mod services;
pub mod ui;
