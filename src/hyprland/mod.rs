//! Hyprland-specific implementations.
//!
//! This module provides the concrete backend for the
//! [`ActiveWindowSource`](crate::traits::ActiveWindowSource) and
//! [`WindowPositioner`](crate::traits::WindowPositioner) traits, powered by
//! Hyprland's IPC socket.
//!
//! Nothing outside this module should reference Hyprland directly.

pub mod wm;
