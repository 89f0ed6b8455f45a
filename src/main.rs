//! Entry point for the **hyprsnap** daemon.
//!
//! Without arguments the daemon starts: it spawns the Unix-socket
//! [`CommandSource`](hyprsnap::traits::CommandSource) on a background
//! thread and processes incoming commands one at a time on the main thread.
//!
//! `hyprsnap --send <left|up|right|down|refresh|prune>` and
//! `hyprsnap --forget <address>` are the client side used by compositor
//! key binds; they forward one command to the running daemon and exit.
//! `--config <path>` overrides the configuration file location.

use hyprsnap::command::Command;
use hyprsnap::config::Config;
use hyprsnap::controller::SnapController;
use hyprsnap::hyprland::wm::HyprlandWm;
use hyprsnap::ipc::client::{command_from_args, default_socket_path, send_command, ClientError};
use hyprsnap::ipc::listener::UnixSocketListener;
use hyprsnap::traits::{CommandSource, WindowPositioner};
use log::{error, info};
use std::path::PathBuf;
use std::sync::mpsc;

/// Resolve the config directory (`$XDG_CONFIG_HOME/hyprsnap`).
fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("hyprsnap")
}

/// Load the config from `path` (or `$XDG_CONFIG_HOME/hyprsnap/config.json`),
/// falling back to compiled-in defaults.
fn load_config(path: Option<PathBuf>) -> Config {
    let path = path.unwrap_or_else(|| config_dir().join("config.json"));
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("config not loaded ({}), using defaults", e);
            Config::default()
        }
    }
}

/// Value following `flag` on the command line, if present.
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn socket_path(config: &Config) -> PathBuf {
    config
        .socket_path
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(default_socket_path)
}

//  Main

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let config = load_config(flag_value(&args, "--config").map(PathBuf::from));

    match command_from_args(&args) {
        Some(cmd) => run_client(cmd, &config),
        None => run_daemon(config),
    }
}

/// `--send <...>` / `--forget <address>`: forward one command to the daemon.
fn run_client(cmd: Result<Command, ClientError>, config: &Config) {
    let result = cmd.and_then(|cmd| send_command(&socket_path(config), &cmd));
    if let Err(e) = result {
        error!("{}", e);
        let code = if matches!(e, ClientError::Usage(_)) { 2 } else { 1 };
        std::process::exit(code);
    }
}

/// Normal daemon mode.
fn run_daemon(config: Config) {
    let wm = HyprlandWm::new();
    let work_area = match config.work_area {
        Some(area) => area,
        None => match wm.work_area() {
            Ok(area) if area.is_usable() => area,
            Ok(area) => {
                error!(
                    "window manager reported an empty work area {}x{}",
                    area.width, area.height
                );
                std::process::exit(1);
            }
            Err(e) => {
                error!("failed to query work area: {}", e);
                std::process::exit(1);
            }
        },
    };
    info!(
        "work area {}x{} at ({}, {})",
        work_area.width, work_area.height, work_area.x, work_area.y
    );

    let mut controller = SnapController::new(wm, work_area);
    controller.set_prune_every(config.prune_every);

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    spawn_command_sources(socket_path(&config), cmd_tx);

    info!("hyprsnap running");
    for cmd in cmd_rx {
        if let Err(e) = controller.handle_command(cmd) {
            error!("command error: {}", e);
        }
    }
    info!("all command sources closed, exiting");
}

//  Helpers

fn spawn_command_sources(path: PathBuf, tx: mpsc::Sender<Command>) {
    std::thread::spawn(move || {
        let mut source = UnixSocketListener::new(&path);
        if let Err(e) = source.run(tx) {
            error!("socket listener error: {}", e);
        }
    });
}
