//! Client side of the command socket.
//!
//! Compositor key binds run `hyprsnap --send <direction>`, which connects
//! to the daemon's socket, writes one JSON line and exits.  This is how the
//! four snap hotkeys reach the daemon:
//!
//! ```text
//! bind = CTRL SUPER, left,  exec, hyprsnap --send left
//! bind = CTRL SUPER, up,    exec, hyprsnap --send up
//! bind = CTRL SUPER, right, exec, hyprsnap --send right
//! bind = CTRL SUPER, down,  exec, hyprsnap --send down
//! ```
//!
//! Maintenance commands go through the same client: `--send refresh`
//! re-reads the work area (e.g. after a bar started), `--send prune`
//! evicts closed windows and `--forget <address>` resets one window.

use crate::command::{Command, Direction, WindowId};
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};

/// Errors produced while sending a command to the daemon.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("cannot reach daemon at {path}: {source}")]
    Connect {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json encode error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("usage: {0}")]
    Usage(String),
}

/// Command named by a `--send` argument: a direction, `refresh` or `prune`.
pub fn parse_send_target(word: &str) -> Result<Command, ClientError> {
    match word.trim().to_lowercase().as_str() {
        "refresh" => Ok(Command::RefreshWorkArea),
        "prune" => Ok(Command::Prune),
        other => other.parse::<Direction>().map(Command::Snap).map_err(|_| {
            ClientError::Usage(format!(
                "--send expects left, up, right, down, refresh or prune, got {:?}",
                word
            ))
        }),
    }
}

/// Client command encoded in the process arguments.
///
/// Returns `None` when neither `--send` nor `--forget` is present, i.e.
/// the process should run as the daemon.
pub fn command_from_args(args: &[String]) -> Option<Result<Command, ClientError>> {
    let value_of = |flag: &str| {
        args.iter()
            .position(|a| a == flag)
            .map(|i| args.get(i + 1).cloned())
    };
    if let Some(value) = value_of("--send") {
        return Some(match value {
            Some(word) => parse_send_target(&word),
            None => Err(ClientError::Usage("--send requires an argument".into())),
        });
    }
    if let Some(value) = value_of("--forget") {
        return Some(match value {
            Some(addr) if !addr.trim().is_empty() => Ok(Command::Forget(WindowId::new(addr.trim()))),
            _ => Err(ClientError::Usage("--forget requires a window address".into())),
        });
    }
    None
}

/// Default socket path (`$XDG_RUNTIME_DIR/hyprsnap.sock`, falling back to
/// `/tmp`).
pub fn default_socket_path() -> PathBuf {
    let runtime = std::env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(runtime).join("hyprsnap.sock")
}

/// Send a single command to the daemon listening on `path`.
pub fn send_command(path: &Path, cmd: &Command) -> Result<(), ClientError> {
    let mut stream = UnixStream::connect(path).map_err(|source| ClientError::Connect {
        path: path.to_path_buf(),
        source,
    })?;
    let mut line = serde_json::to_string(cmd)?;
    line.push('\n');
    stream.write_all(line.as_bytes())?;
    stream.shutdown(std::net::Shutdown::Write)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipc::listener::UnixSocketListener;
    use crate::traits::CommandSource;
    use std::sync::mpsc;

    fn tmp_socket_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "hyprsnap-client-{}-{}.sock",
            std::process::id(),
            tag
        ))
    }

    #[test]
    fn sent_commands_reach_listener() {
        let path = tmp_socket_path("send");
        let path2 = path.clone();
        let (tx, rx) = mpsc::channel();

        let _handle = std::thread::spawn(move || {
            let mut listener = UnixSocketListener::new(&path2);
            let _ = listener.run(tx);
        });

        std::thread::sleep(std::time::Duration::from_millis(150));

        send_command(&path, &Command::Snap(Direction::Up)).unwrap();
        send_command(&path, &Command::Forget(WindowId::new("0x1"))).unwrap();

        std::thread::sleep(std::time::Duration::from_millis(150));
        let cmds: Vec<Command> = rx.try_iter().collect();
        assert_eq!(
            cmds,
            vec![
                Command::Snap(Direction::Up),
                Command::Forget(WindowId::new("0x1"))
            ]
        );

        let _ = std::fs::remove_file(&path);
    }

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("hyprsnap")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn send_accepts_directions_and_maintenance_words() {
        assert_eq!(parse_send_target("left").unwrap(), Command::Snap(Direction::Left));
        assert_eq!(parse_send_target("DOWN").unwrap(), Command::Snap(Direction::Down));
        assert_eq!(parse_send_target("refresh").unwrap(), Command::RefreshWorkArea);
        assert_eq!(parse_send_target("Prune").unwrap(), Command::Prune);
        assert!(matches!(
            parse_send_target("sideways"),
            Err(ClientError::Usage(_))
        ));
    }

    #[test]
    fn command_from_args_picks_client_mode() {
        assert!(command_from_args(&args(&[])).is_none());
        assert!(command_from_args(&args(&["--config", "/tmp/c.json"])).is_none());
        assert_eq!(
            command_from_args(&args(&["--config", "/tmp/c.json", "--send", "up"])).unwrap().unwrap(),
            Command::Snap(Direction::Up)
        );
        assert_eq!(
            command_from_args(&args(&["--send", "refresh"])).unwrap().unwrap(),
            Command::RefreshWorkArea
        );
        assert_eq!(
            command_from_args(&args(&["--forget", "0x55aa"])).unwrap().unwrap(),
            Command::Forget(WindowId::new("0x55aa"))
        );
    }

    #[test]
    fn command_from_args_requires_values() {
        assert!(matches!(
            command_from_args(&args(&["--send"])),
            Some(Err(ClientError::Usage(_)))
        ));
        assert!(matches!(
            command_from_args(&args(&["--forget"])),
            Some(Err(ClientError::Usage(_)))
        ));
    }

    #[test]
    fn refresh_reaches_listener() {
        let path = tmp_socket_path("refresh");
        let path2 = path.clone();
        let (tx, rx) = mpsc::channel();

        let _handle = std::thread::spawn(move || {
            let mut listener = UnixSocketListener::new(&path2);
            let _ = listener.run(tx);
        });

        std::thread::sleep(std::time::Duration::from_millis(150));

        let cmd = command_from_args(&args(&["--send", "refresh"])).unwrap().unwrap();
        send_command(&path, &cmd).unwrap();

        std::thread::sleep(std::time::Duration::from_millis(150));
        let cmds: Vec<Command> = rx.try_iter().collect();
        assert_eq!(cmds, vec![Command::RefreshWorkArea]);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_daemon_is_a_connect_error() {
        let path = tmp_socket_path("absent");
        let _ = std::fs::remove_file(&path);
        let err = send_command(&path, &Command::Prune).unwrap_err();
        assert!(matches!(err, ClientError::Connect { .. }));
    }

    #[test]
    fn default_socket_lives_in_runtime_dir() {
        assert_eq!(
            default_socket_path().file_name().and_then(|n| n.to_str()),
            Some("hyprsnap.sock")
        );
    }
}
