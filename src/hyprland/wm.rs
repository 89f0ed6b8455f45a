//! Window-manager backend for Hyprland.
//!
//! Communicates directly with Hyprland through its Unix socket at
//! `$XDG_RUNTIME_DIR/hypr/$HYPRLAND_INSTANCE_SIGNATURE/.socket.sock`,
//! avoiding any shell command invocation or third-party crate for socket
//! discovery.

use crate::command::WindowId;
use crate::geometry::{Geometry, ScreenBounds};
use crate::traits::{ActiveWindowSource, WindowPositioner};
use log::debug;
use serde::Deserialize;
use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

/// Hyprland-backed window manager.
///
/// All communication happens over Hyprland's IPC socket
/// (`$XDG_RUNTIME_DIR/hypr/<instance>/.socket.sock`).  No child processes
/// are spawned.
#[derive(Debug, Default)]
pub struct HyprlandWm;

/// Errors that can occur when talking to Hyprland.
#[derive(Debug, thiserror::Error)]
#[error("hyprland IPC error: {0}")]
pub struct HyprlandWmError(String);

impl HyprlandWm {
    /// Create a new handle.
    ///
    /// No connection is opened eagerly; each method call opens a short-lived
    /// IPC request.
    pub fn new() -> Self {
        Self
    }
}

//  Direct Hyprland IPC helpers

/// Resolve the Hyprland command socket path.
///
/// Hyprland ≥ 0.40 stores its sockets at
/// `$XDG_RUNTIME_DIR/hypr/$HYPRLAND_INSTANCE_SIGNATURE/.socket.sock`.
fn socket_path() -> Result<PathBuf, HyprlandWmError> {
    let runtime_dir = std::env::var("XDG_RUNTIME_DIR")
        .map_err(|_| HyprlandWmError("XDG_RUNTIME_DIR not set".into()))?;
    let his = std::env::var("HYPRLAND_INSTANCE_SIGNATURE")
        .map_err(|_| HyprlandWmError("HYPRLAND_INSTANCE_SIGNATURE not set".into()))?;
    Ok(PathBuf::from(format!(
        "{}/hypr/{}/.socket.sock",
        runtime_dir, his
    )))
}

/// Send a raw command to the Hyprland command socket and return the
/// response as a string.
fn ipc_request(command: &str) -> Result<String, HyprlandWmError> {
    let path = socket_path()?;
    let mut stream = UnixStream::connect(&path)
        .map_err(|e| HyprlandWmError(format!("connect to {}: {}", path.display(), e)))?;

    stream
        .write_all(command.as_bytes())
        .map_err(|e| HyprlandWmError(format!("write: {}", e)))?;

    let mut response = Vec::new();
    stream
        .read_to_end(&mut response)
        .map_err(|e| HyprlandWmError(format!("read: {}", e)))?;

    String::from_utf8(response).map_err(|e| HyprlandWmError(format!("utf-8: {}", e)))
}

/// Send a JSON data query (`j/<command>`) and return the raw JSON string.
fn ipc_json(data_command: &str) -> Result<String, HyprlandWmError> {
    ipc_request(&format!("j/{}", data_command))
}

/// Send a dispatch command and check for `"ok"`.
fn ipc_dispatch(args: &str) -> Result<(), HyprlandWmError> {
    debug!("dispatch {}", args);
    let response = ipc_request(&format!("/dispatch {}", args))?;
    if response.trim() == "ok" {
        Ok(())
    } else {
        Err(HyprlandWmError(format!("dispatch error: {}", response)))
    }
}

//  Minimal serde structs for the JSON we care about

/// Subset of the JSON object returned by `j/monitors`.
#[derive(Deserialize)]
struct MonitorJson {
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    #[serde(default = "unit_scale")]
    scale: f64,
    /// Output transform; odd values rotate by 90° or 270°.
    #[serde(default)]
    transform: u8,
    /// Space held by bars and docks: `[left, top, right, bottom]`.
    #[serde(default)]
    reserved: [i32; 4],
}

fn unit_scale() -> f64 {
    1.0
}

/// Subset of the JSON object returned by `j/activewindow` and `j/clients`.
#[derive(Deserialize)]
struct ClientJson {
    address: String,
    #[serde(default = "mapped_default")]
    mapped: bool,
}

fn mapped_default() -> bool {
    true
}

fn parse_err(e: serde_json::Error) -> HyprlandWmError {
    HyprlandWmError(format!("parse: {}", e))
}

/// Work area of the first monitor in a `j/monitors` response, in logical
/// pixels with reserved edges removed.
fn parse_work_area(json: &str) -> Result<ScreenBounds, HyprlandWmError> {
    let monitors: Vec<MonitorJson> = serde_json::from_str(json).map_err(parse_err)?;
    let m = monitors
        .first()
        .ok_or_else(|| HyprlandWmError("no monitors reported".into()))?;

    let scale = if m.scale > 0.0 { m.scale } else { 1.0 };
    let (phys_w, phys_h) = if m.transform % 2 == 1 {
        (m.height, m.width)
    } else {
        (m.width, m.height)
    };
    let width = (f64::from(phys_w) / scale).round() as i32;
    let height = (f64::from(phys_h) / scale).round() as i32;
    let [left, top, right, bottom] = m.reserved;

    Ok(ScreenBounds {
        x: m.x + left,
        y: m.y + top,
        width: (width - left - right).max(0),
        height: (height - top - bottom).max(0),
    })
}

/// Address of the focused window in a `j/activewindow` response.
fn parse_active_window(json: &str) -> Result<Option<WindowId>, HyprlandWmError> {
    // Hyprland returns an empty object `{}` when no window is focused.
    if json.trim() == "{}" {
        return Ok(None);
    }
    let w: ClientJson = serde_json::from_str(json).map_err(parse_err)?;
    Ok(Some(WindowId::new(w.address)))
}

/// Addresses of all mapped windows in a `j/clients` response.
fn parse_clients(json: &str) -> Result<Vec<WindowId>, HyprlandWmError> {
    let clients: Vec<ClientJson> = serde_json::from_str(json).map_err(parse_err)?;
    Ok(clients
        .into_iter()
        .filter(|c| c.mapped)
        .map(|c| WindowId::new(c.address))
        .collect())
}

/// Dispatches that place `window` at `geometry`.
///
/// Tiled windows ignore pixel moves, so the window is made floating first.
/// On Hyprland that moves a tiled window onto the floating layer, which is
/// drawn above tiled windows; there is no way to position a tiled window
/// by pixels without it.  Windows that already float keep their stacking.
/// None of these dispatches focuses the window or uses `alterzorder`.
fn placement_dispatches(window: &WindowId, geometry: Geometry) -> [String; 3] {
    let target = format!("address:{}", window.as_str());
    [
        format!("setfloating {}", target),
        format!(
            "movewindowpixel exact {} {},{}",
            geometry.x, geometry.y, target
        ),
        format!(
            "resizewindowpixel exact {} {},{}",
            geometry.width, geometry.height, target
        ),
    ]
}

//  Trait implementations

impl ActiveWindowSource for HyprlandWm {
    type Error = HyprlandWmError;

    fn active_window(&self) -> Result<Option<WindowId>, Self::Error> {
        parse_active_window(&ipc_json("activewindow")?)
    }
}

impl WindowPositioner for HyprlandWm {
    type Error = HyprlandWmError;

    /// Float, move and resize `window`.
    ///
    /// A tiled window changes layer when it is made floating and ends up
    /// above the tiled windows of its workspace; see
    /// [`placement_dispatches`].  Focus and the order among floating
    /// windows are left alone.
    fn set_bounds(&self, window: &WindowId, geometry: Geometry) -> Result<(), Self::Error> {
        for dispatch in placement_dispatches(window, geometry) {
            ipc_dispatch(&dispatch)?;
        }
        Ok(())
    }

    fn work_area(&self) -> Result<ScreenBounds, Self::Error> {
        parse_work_area(&ipc_json("monitors")?)
    }

    fn live_windows(&self) -> Result<Vec<WindowId>, Self::Error> {
        parse_clients(&ipc_json("clients")?)
    }
}
