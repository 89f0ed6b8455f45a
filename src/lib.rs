//! **hyprsnap** — hotkey-driven half and quadrant window snapping.
//!
//! Each press of a directional hotkey moves the focused window one step
//! through a fixed set of layouts: maximized, four halves and four
//! quadrants.  Where the window goes depends on the layout it is *already*
//! in, so pressing Left then Up lands in the top-left quadrant, and
//! pressing Right from the left half maximizes again.
//!
//! # Architecture
//!
//! * [`layout`] — the nine [`LayoutState`](layout::LayoutState)s and the
//!   pure transition table.
//! * [`geometry`] — maps a layout state onto the work area.
//! * [`registry`] — remembers the last layout of every window.
//! * [`controller`] — runs one snap end to end.
//!
//! The controller talks to the outside world only through the traits in
//! [`traits`]: [`ActiveWindowSource`](traits::ActiveWindowSource) and
//! [`WindowPositioner`](traits::WindowPositioner) abstract the window
//! manager, [`CommandSource`](traits::CommandSource) abstracts hotkey
//! delivery.  Concrete implementations live in [`hyprland`] (Hyprland IPC)
//! and [`ipc`] (Unix-socket command listener and client).

pub mod command;
pub mod config;
pub mod controller;
pub mod geometry;
pub mod hyprland;
pub mod ipc;
pub mod layout;
pub mod registry;
pub mod traits;
