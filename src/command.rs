//! Commands and types used throughout hyprsnap.
//!
//! This module defines the vocabulary that all components share:
//! [`Command`] describes every action the controller can perform,
//! [`Direction`] is the meaning of one of the four snap hotkeys, and
//! [`WindowId`] is the opaque handle the window manager hands out for a
//! top-level window.
//!
//! Directions are parsed leniently ("left", "LEFT", " Up ") so the same
//! parser serves the JSON wire format and the `--send` command line.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a snap hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// All four directions, in table column order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Column of this direction in the transition table.
    pub(crate) fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Up => write!(f, "up"),
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Parse a direction string (case-insensitive, surrounding whitespace ignored).
fn parse_direction(s: &str) -> Option<Direction> {
    match s.trim().to_lowercase().as_str() {
        "left" => Some(Direction::Left),
        "up" => Some(Direction::Up),
        "right" => Some(Direction::Right),
        "down" => Some(Direction::Down),
        _ => None,
    }
}

/// Error returned when a string does not name a [`Direction`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction: {0:?}")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_direction(s).ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_direction(&s).ok_or_else(|| DeError::custom(format!("invalid direction: {:?}", s)))
    }
}

/// Opaque identity of one top-level window.
///
/// On Hyprland this is the client address (e.g. `"0x55d1c3a0"`).  Only
/// equality and hashing are meaningful; the registry never interprets the
/// value and never owns the window behind it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Every action the snap controller can perform.
///
/// Commands are produced by [`CommandSource`](crate::traits::CommandSource)
/// implementations and consumed by the
/// [`SnapController`](crate::controller::SnapController).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Snap the currently focused window one step in the given direction.
    Snap(Direction),

    /// Drop registry entries for windows the window manager no longer
    /// reports.
    ///
    /// On the wire this is encoded as the JSON string `"Prune"`.
    Prune,

    /// Re-query the usable work area (e.g. after a bar was started).
    RefreshWorkArea,

    /// Forget the remembered layout of one window.  Its next snap starts
    /// from the maximized state again.
    Forget(WindowId),
}
