//! Presentation state of the login and home screens.
//!
//! Rendering is left to the host; this layer owns what the screens show,
//! which actions they accept, and when they navigate.

pub mod alert;
pub mod home;
pub mod login;
pub mod mvi;
pub mod navigation;
pub mod operation;
