//! Core traits that decouple hyprsnap from any specific window manager or
//! transport mechanism.
//!
//! Every concrete backend (Hyprland, a Unix-socket listener, a test harness,
//! …) implements one of these traits.  The
//! [`SnapController`](crate::controller::SnapController) only depends on
//! these abstractions.

use crate::command::{Command, WindowId};
use crate::geometry::{Geometry, ScreenBounds};
use std::sync::mpsc;

/// Something that can tell which window currently has keyboard focus.
pub trait ActiveWindowSource {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Return the focused top-level window, or `None` if nothing is
    /// focused (e.g. an empty workspace).
    fn active_window(&self) -> Result<Option<WindowId>, Self::Error>;
}

/// Something that can place windows on screen.
///
/// An implementation might talk to Hyprland via IPC, or it might be a
/// recorder used in tests.
pub trait WindowPositioner {
    /// The error type produced by this positioner.
    type Error: std::error::Error + Send + 'static;

    /// Move and resize `window` to `geometry`.
    ///
    /// Implementations must change geometry only and must not focus or
    /// raise the window.  Where the compositor can only pixel-position
    /// windows on a separate layer (Hyprland's floating layer), moving the
    /// window onto that layer is the one permitted stacking side effect and
    /// the implementation documents it.
    fn set_bounds(&self, window: &WindowId, geometry: Geometry) -> Result<(), Self::Error>;

    /// Usable work area of the primary display.
    fn work_area(&self) -> Result<ScreenBounds, Self::Error>;

    /// Every top-level window that currently exists.
    ///
    /// Used to evict registry entries for windows that have been closed.
    fn live_windows(&self) -> Result<Vec<WindowId>, Self::Error>;
}

//  Command Source

/// A source of [`Command`]s, typically hotkey presses.
///
/// Implementations listen on some transport — a Unix socket fed by the
/// compositor's key binds, an in-memory channel, … — and forward parsed
/// commands into the provided [`mpsc::Sender`].
///
/// # Contract
///
/// * [`run`](CommandSource::run) **blocks** until the source is exhausted or
///   an unrecoverable error occurs.
/// * Each received command must be sent through `sink` exactly once.
/// * Implementations must be [`Send`] so they can run on a dedicated thread.
///   The single receiving end serialises commands for the controller.
pub trait CommandSource: Send {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Start listening and forward every incoming [`Command`] into `sink`.
    ///
    /// This method blocks the calling thread.  To run multiple sources
    /// concurrently, spawn each one on its own thread.
    fn run(&mut self, sink: mpsc::Sender<Command>) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Direction;
    use std::cell::RefCell;

    #[derive(Debug, thiserror::Error)]
    #[error("mock error")]
    struct MockError;

    //  Mock positioner

    /// A test double that records every call made to it.
    #[derive(Debug, Default)]
    struct MockWm {
        bounds_log: RefCell<Vec<(WindowId, Geometry)>>,
    }

    impl WindowPositioner for MockWm {
        type Error = MockError;

        fn set_bounds(&self, window: &WindowId, geometry: Geometry) -> Result<(), MockError> {
            self.bounds_log.borrow_mut().push((window.clone(), geometry));
            Ok(())
        }

        fn work_area(&self) -> Result<ScreenBounds, MockError> {
            Ok(ScreenBounds::new(1920, 1080))
        }

        fn live_windows(&self) -> Result<Vec<WindowId>, MockError> {
            Ok(Vec::new())
        }
    }

    impl ActiveWindowSource for MockWm {
        type Error = MockError;

        fn active_window(&self) -> Result<Option<WindowId>, MockError> {
            Ok(Some(WindowId::new("0xdead")))
        }
    }

    #[test]
    fn mock_wm_records_bounds() {
        let wm = MockWm::default();
        let id = ActiveWindowSource::active_window(&wm).unwrap().unwrap();
        wm.set_bounds(&id, Geometry::new(0, 0, 960, 1080)).unwrap();
        let log = wm.bounds_log.borrow();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0], (WindowId::new("0xdead"), Geometry::new(0, 0, 960, 1080)));
    }

    //  Mock CommandSource

    /// A test double that emits a fixed sequence of commands.
    struct MockSource {
        commands: Vec<Command>,
    }

    impl CommandSource for MockSource {
        type Error = MockError;

        fn run(&mut self, sink: mpsc::Sender<Command>) -> Result<(), MockError> {
            for cmd in self.commands.drain(..) {
                let _ = sink.send(cmd);
            }
            Ok(())
        }
    }

    #[test]
    fn mock_source_emits_commands() {
        let mut src = MockSource {
            commands: vec![Command::Snap(Direction::Left), Command::Prune],
        };
        let (tx, rx) = mpsc::channel();
        src.run(tx).unwrap();
        let cmds: Vec<Command> = rx.try_iter().collect();
        assert_eq!(cmds, vec![Command::Snap(Direction::Left), Command::Prune]);
    }
}
