//! Unix-socket [`CommandSource`] implementation.
//!
//! Binds a Unix stream socket and accepts one connection at a time.
//! Each line received is parsed as a JSON-encoded [`Command`].
//!
//! # Wire format
//!
//! Every message is a single line of JSON followed by `\n`:
//!
//! ```json
//! {"Snap":"Left"}
//! {"Snap":"up"}
//! "Prune"
//! "RefreshWorkArea"
//! {"Forget":"0x55d1c3a0"}
//! ```

use crate::command::Command;
use crate::traits::CommandSource;
use log::{debug, error, info};
use std::io::{BufRead, BufReader};
use std::os::unix::net::UnixListener;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

/// A [`CommandSource`] that listens on a Unix stream socket for
/// JSON-encoded commands.
///
/// Each accepted connection can send multiple newline-delimited JSON
/// commands.  When the connection closes, the listener waits for the
/// next one.
pub struct UnixSocketListener {
    path: PathBuf,
}

/// Errors produced by the Unix socket listener.
#[derive(Debug, thiserror::Error)]
pub enum UnixSocketError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl UnixSocketListener {
    /// Create a new listener bound to `path`.
    ///
    /// The socket file is created when [`run`](CommandSource::run) is called
    /// and removed when the source shuts down.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CommandSource for UnixSocketListener {
    type Error = UnixSocketError;

    /// Bind the socket and start accepting connections.
    ///
    /// This method **blocks** indefinitely.  Run it on a dedicated thread.
    fn run(&mut self, sink: mpsc::Sender<Command>) -> Result<(), Self::Error> {
        // Remove stale socket if present.
        let _ = std::fs::remove_file(&self.path);

        let listener = UnixListener::bind(&self.path)?;
        info!("listening on {}", self.path.display());

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    debug!("client connected");
                    let reader = BufReader::new(stream);
                    for line in reader.split(b'\n') {
                        let bytes = match line {
                            Ok(bytes) => bytes,
                            Err(e) => {
                                error!("read error: {}", e);
                                break;
                            }
                        };
                        match std::str::from_utf8(&bytes) {
                            Ok(text) if text.trim().is_empty() => continue,
                            Ok(text) => match serde_json::from_str::<Command>(text) {
                                Ok(cmd) => {
                                    debug!("received {:?}", cmd);
                                    if sink.send(cmd).is_err() {
                                        info!("sink closed, shutting down");
                                        let _ = std::fs::remove_file(&self.path);
                                        return Ok(());
                                    }
                                }
                                Err(e) => {
                                    error!("bad command {:?}: {}", text, e);
                                }
                            },
                            Err(e) => {
                                error!("skipping line that is not utf-8: {}", e);
                            }
                        }
                    }
                    debug!("client disconnected");
                }
                Err(e) => {
                    error!("accept error: {}", e);
                }
            }
        }
        Ok(())
    }
}

//  Tests 

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Direction, WindowId};
    use std::io::Write;
    use std::os::unix::net::UnixStream;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Monotonic counter to generate unique socket paths per test.
    static TEST_ID: AtomicU32 = AtomicU32::new(0);

    /// Helper: create a unique temporary socket path for each test.
    fn tmp_socket_path() -> PathBuf {
        let id = TEST_ID.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir();
        dir.join(format!(
            "hyprsnap-test-{}-{}.sock",
            std::process::id(),
            id
        ))
    }

    #[test]
    fn commands_arrive_in_order() {
        let path = tmp_socket_path();
        let path_clone = path.clone();

        let (tx, rx) = mpsc::channel();

        // Run listener in a background thread.
        let _handle = std::thread::spawn(move || {
            let mut listener = UnixSocketListener::new(&path_clone);
            let _ = listener.run(tx);
        });

        // Give the listener a moment to bind.
        std::thread::sleep(std::time::Duration::from_millis(150));

        {
            let mut stream = UnixStream::connect(&path).expect("connect");
            writeln!(stream, r#"{{"Snap":"Left"}}"#).unwrap();
            writeln!(stream, r#"{{"Snap":"up"}}"#).unwrap();
            writeln!(stream).unwrap();
            writeln!(stream, r#""Prune""#).unwrap();
            writeln!(stream, r#"{{"Forget":"0xbeef"}}"#).unwrap();
            stream.shutdown(std::net::Shutdown::Write).unwrap();
        }

        std::thread::sleep(std::time::Duration::from_millis(150));
        let cmds: Vec<Command> = rx.try_iter().collect();

        assert_eq!(
            cmds,
            vec![
                Command::Snap(Direction::Left),
                Command::Snap(Direction::Up),
                Command::Prune,
                Command::Forget(WindowId::new("0xbeef")),
            ]
        );

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn malformed_json_does_not_crash() {
        let path = tmp_socket_path();
        let path2 = path.clone();
        let (tx, rx) = mpsc::channel();

        let _handle = std::thread::spawn(move || {
            let mut listener = UnixSocketListener::new(&path2);
            let _ = listener.run(tx);
        });

        std::thread::sleep(std::time::Duration::from_millis(150));

        {
            let mut stream = UnixStream::connect(&path).expect("connect");
            writeln!(stream, "not json at all").unwrap();
            writeln!(stream, r#"{{"Snap":"diagonal"}}"#).unwrap();
            writeln!(stream, r#"{{"Snap":"Right"}}"#).unwrap();
            stream.shutdown(std::net::Shutdown::Write).unwrap();
        }

        std::thread::sleep(std::time::Duration::from_millis(150));
        let cmds: Vec<Command> = rx.try_iter().collect();
        // Only the valid command should have arrived.
        assert_eq!(cmds, vec![Command::Snap(Direction::Right)]);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn invalid_utf8_line_is_skipped() {
        let path = tmp_socket_path();
        let path2 = path.clone();
        let (tx, rx) = mpsc::channel();

        let _handle = std::thread::spawn(move || {
            let mut listener = UnixSocketListener::new(&path2);
            let _ = listener.run(tx);
        });

        std::thread::sleep(std::time::Duration::from_millis(150));

        {
            let mut stream = UnixStream::connect(&path).expect("connect");
            writeln!(stream, r#"{{"Snap":"Left"}}"#).unwrap();
            stream.write_all(b"\xff\xfe{\"Snap\"}\n").unwrap();
            writeln!(stream, r#"{{"Snap":"Down"}}"#).unwrap();
            stream.shutdown(std::net::Shutdown::Write).unwrap();
        }

        std::thread::sleep(std::time::Duration::from_millis(150));
        let cmds: Vec<Command> = rx.try_iter().collect();
        // The line after the undecodable one still arrives.
        assert_eq!(
            cmds,
            vec![Command::Snap(Direction::Left), Command::Snap(Direction::Down)]
        );

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn client_connections_are_served_one_after_another() {
        let path = tmp_socket_path();
        let path2 = path.clone();
        let (tx, rx) = mpsc::channel();

        let _handle = std::thread::spawn(move || {
            let mut listener = UnixSocketListener::new(&path2);
            let _ = listener.run(tx);
        });

        std::thread::sleep(std::time::Duration::from_millis(150));

        for dir in ["Left", "Down"] {
            let mut stream = UnixStream::connect(&path).expect("connect");
            writeln!(stream, r#"{{"Snap":"{}"}}"#, dir).unwrap();
            stream.shutdown(std::net::Shutdown::Write).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(50));
        }

        std::thread::sleep(std::time::Duration::from_millis(150));
        let cmds: Vec<Command> = rx.try_iter().collect();
        assert_eq!(
            cmds,
            vec![Command::Snap(Direction::Left), Command::Snap(Direction::Down)]
        );

        let _ = std::fs::remove_file(&path);
    }
}
