//! The orchestrator that ties the registry, the transition table and the
//! window manager together.
//!
//! [`SnapController`] owns the [`WindowRegistry`] and reacts to
//! [`Command`]s.  A snap runs end to end before the next command is taken:
//! look up the window, compute the next state, place the window, remember
//! the state.

use crate::command::{Command, Direction, WindowId};
use crate::geometry::{geometry_for, ScreenBounds};
use crate::layout::{transition, LayoutState};
use crate::registry::WindowRegistry;
use crate::traits::{ActiveWindowSource, WindowPositioner};
use log::{debug, info, warn};

/// Possible errors from the controller.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// The window manager returned an error.
    #[error("window manager error: {0}")]
    WindowManager(String),
    /// The window manager reported a work area no window fits in.
    #[error("unusable work area {width}x{height} at ({x}, {y})")]
    UnusableWorkArea {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

/// Orchestrates snapping.
///
/// The controller is generic over the window manager, making it
/// independent of Hyprland or any other concrete backend.
///
/// # Typical usage
///
/// ```ignore
/// let wm = HyprlandWm::new();
/// let area = wm.work_area()?;
/// let mut controller = SnapController::new(wm, area);
/// controller.handle_command(Command::Snap(Direction::Left))?;
/// ```
pub struct SnapController<W> {
    wm: W,
    registry: WindowRegistry,
    work_area: ScreenBounds,
    /// Prune the registry after this many snaps.  `0` disables it.
    prune_every: u32,
    snaps_since_prune: u32,
}

impl<W> SnapController<W>
where
    W: ActiveWindowSource + WindowPositioner,
{
    /// Create a controller with an empty registry.
    pub fn new(wm: W, work_area: ScreenBounds) -> Self {
        Self {
            wm,
            registry: WindowRegistry::new(),
            work_area,
            prune_every: 0,
            snaps_since_prune: 0,
        }
    }

    /// Evict closed windows from the registry after every `n` snaps.
    /// `0` turns automatic pruning off.
    pub fn set_prune_every(&mut self, n: u32) {
        self.prune_every = n;
        self.snaps_since_prune = 0;
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn work_area(&self) -> ScreenBounds {
        self.work_area
    }

    /// Process a single [`Command`].
    ///
    /// Snap failures while placing the window are logged and swallowed
    /// (see [`handle`](Self::handle)); an error is only returned when the
    /// window manager cannot be queried at all.
    pub fn handle_command(&mut self, cmd: Command) -> Result<(), ControllerError> {
        match cmd {
            Command::Snap(dir) => {
                let active = ActiveWindowSource::active_window(&self.wm)
                    .map_err(|e| ControllerError::WindowManager(e.to_string()))?;
                match active {
                    Some(id) => {
                        self.handle(&id, dir);
                        self.maybe_prune();
                    }
                    None => debug!("no active window, nothing to snap"),
                }
            }

            Command::Prune => {
                self.prune()?;
            }

            Command::RefreshWorkArea => {
                let area = self
                    .wm
                    .work_area()
                    .map_err(|e| ControllerError::WindowManager(e.to_string()))?;
                if !area.is_usable() {
                    return Err(ControllerError::UnusableWorkArea {
                        x: area.x,
                        y: area.y,
                        width: area.width,
                        height: area.height,
                    });
                }
                info!(
                    "work area {}x{} at ({}, {})",
                    area.width, area.height, area.x, area.y
                );
                self.work_area = area;
            }

            Command::Forget(id) => match self.registry.forget(&id) {
                Some(state) => info!("forgot {} (was {})", id, state),
                None => debug!("forget {}: not tracked", id),
            },
        }
        Ok(())
    }

    /// Snap `id` one step in `dir`.
    ///
    /// The new state is committed even when placing the window fails: the
    /// next press recomputes geometry from the stored state anyway, and a
    /// window that vanished simply fails again.
    pub fn handle(&mut self, id: &WindowId, dir: Direction) {
        let current = self.registry.get_or_init(id);
        let next = transition(current, dir);
        let geometry = geometry_for(next, self.work_area);
        info!("snap {} {}: {} -> {}", id, dir, current, next);
        debug!(
            "  bounds ({}, {}) {}x{}",
            geometry.x, geometry.y, geometry.width, geometry.height
        );

        if let Err(e) = self.wm.set_bounds(id, geometry) {
            warn!("failed to place {} (state kept as {}): {}", id, next, e);
        }
        self.registry.set(id, next);
    }

    /// Remembered state of `id`, without recording it.
    pub fn state_of(&self, id: &WindowId) -> Option<LayoutState> {
        self.registry.get(id)
    }

    /// Drop registry entries for windows the window manager no longer
    /// reports.  Returns the number of evicted entries.
    pub fn prune(&mut self) -> Result<usize, ControllerError> {
        let live = self
            .wm
            .live_windows()
            .map_err(|e| ControllerError::WindowManager(e.to_string()))?;
        let evicted = self.registry.retain_live(&live);
        self.snaps_since_prune = 0;
        if evicted > 0 {
            info!("pruned {} closed window(s), {} tracked", evicted, self.registry.len());
        } else {
            debug!("prune: nothing to evict, {} tracked", self.registry.len());
        }
        Ok(evicted)
    }

    fn maybe_prune(&mut self) {
        if self.prune_every == 0 {
            return;
        }
        self.snaps_since_prune += 1;
        if self.snaps_since_prune >= self.prune_every {
            if let Err(e) = self.prune() {
                warn!("automatic prune failed: {}", e);
                self.snaps_since_prune = 0;
            }
        }
    }
}
