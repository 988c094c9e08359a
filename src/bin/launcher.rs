//! Tiny HTTP launcher
//!
//! Serves `GET /run_game`, which starts the game binary in a separate
//! process and answers immediately. Meant for a local web page with a
//! "play" button, so every response allows any origin.

use log::{error, info, warn};
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::process::Command;
use std::thread;
use std::time::Duration;

const DEFAULT_ADDR: &str = "0.0.0.0:5000";
const GAME_BINARY: &str = "super_mario_game";
/// Idle clients are dropped after this long without sending a request
const READ_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Response {
    status: u16,
    reason: &'static str,
    body: String,
}

impl Response {
    fn new(status: u16, reason: &'static str, body: impl Into<String>) -> Self {
        Response {
            status,
            reason,
            body: body.into(),
        }
    }

    fn to_bytes(&self) -> Vec<u8> {
        format!(
            "HTTP/1.1 {} {}\r\n\
             Content-Type: text/plain; charset=utf-8\r\n\
             Content-Length: {}\r\n\
             Access-Control-Allow-Origin: *\r\n\
             Access-Control-Allow-Methods: GET, OPTIONS\r\n\
             Connection: close\r\n\
             \r\n\
             {}",
            self.status,
            self.reason,
            self.body.len(),
            self.body
        )
        .into_bytes()
    }
}

/// Split `GET /path?query HTTP/1.1` into method and path (query dropped)
fn parse_request_line(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split_whitespace();
    let method = parts.next()?;
    let target = parts.next()?;
    parts.next()?.strip_prefix("HTTP/")?;
    let path = target.split('?').next().unwrap_or(target);
    Some((method, path))
}

/// Decide the response for a request; `launch` starts the game
fn route<F>(method: &str, path: &str, launch: F) -> Response
where
    F: FnOnce() -> std::io::Result<()>,
{
    match (method, path) {
        ("GET", "/run_game") => match launch() {
            Ok(()) => Response::new(200, "OK", "Game started, check the window!"),
            Err(e) => Response::new(200, "OK", format!("Failed to start game: {}", e)),
        },
        ("OPTIONS", _) => Response::new(204, "No Content", ""),
        (_, "/run_game") => Response::new(405, "Method Not Allowed", "Method not allowed"),
        _ => Response::new(404, "Not Found", "Not found"),
    }
}

/// Game executable next to this launcher
fn game_path() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe.with_file_name(format!("{}{}", GAME_BINARY, std::env::consts::EXE_SUFFIX)))
}

/// Start `command` and reap it on a background thread once it exits
fn spawn_reaped(mut command: Command) -> std::io::Result<thread::JoinHandle<()>> {
    let mut child = command.spawn()?;
    let pid = child.id();
    info!("Started {:?} (pid {})", command.get_program(), pid);

    let reaper = thread::Builder::new()
        .name(format!("reap-{}", pid))
        .spawn(move || match child.wait() {
            Ok(status) => info!("Game (pid {}) exited: {}", pid, status),
            Err(e) => warn!("Could not wait for game (pid {}): {}", pid, e),
        })?;
    Ok(reaper)
}

fn launch_game() -> std::io::Result<()> {
    spawn_reaped(Command::new(game_path()?)).map(|_| ())
}

fn handle_connection(stream: TcpStream, read_timeout: Duration) -> std::io::Result<()> {
    stream.set_read_timeout(Some(read_timeout))?;
    let peer = stream.peer_addr()?;
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;

    // Drain headers; the body (if any) is ignored
    let mut header = String::new();
    while reader.read_line(&mut header)? > 2 {
        header.clear();
    }

    let response = match parse_request_line(&request_line) {
        Some((method, path)) => {
            info!("{} {} from {}", method, path, peer);
            route(method, path, launch_game)
        }
        None => {
            warn!("Malformed request from {}: {:?}", peer, request_line.trim_end());
            Response::new(400, "Bad Request", "Bad request")
        }
    };

    if response.body.starts_with("Failed") {
        error!("{}", response.body);
    }

    let mut stream = stream;
    stream.write_all(&response.to_bytes())?;
    stream.flush()
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let addr = std::env::var("LAUNCHER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = TcpListener::bind(&addr).map_err(|e| format!("Failed to bind {}: {}", addr, e))?;
    info!("Launcher listening on http://{}/run_game", addr);

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                let spawned = thread::Builder::new().spawn(move || {
                    if let Err(e) = handle_connection(stream, READ_TIMEOUT) {
                        warn!("Connection error: {}", e);
                    }
                });
                if let Err(e) = spawned {
                    warn!("Failed to start connection thread: {}", e);
                }
            }
            Err(e) => warn!("Failed to accept connection: {}", e),
        }
    }

    Ok(())
}
