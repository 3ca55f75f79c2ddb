//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Driver binary: wires one local byte stream (the controlling TTY, or a
//! spawned child process's stdio) to a [`gateway_core::Server`].

mod local_io;
mod signals;

use gateway_core::{GatewayConfig, Server};
use std::env;
use std::process::ExitCode;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Mirrors the original's `atoi`-then-validate behavior: anything that
/// doesn't parse to a positive `u16` (including non-numeric input) is
/// reported as port `0`, which the caller rejects uniformly.
fn parse_waitport(raw: &str) -> u16 {
    raw.parse::<i64>()
        .ok()
        .filter(|&v| v > 0 && v <= u16::MAX as i64)
        .map(|v| v as u16)
        .unwrap_or(0)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() == 1 {
        tracing::error!("Usage: {} <waitport> [<cmd> [-- [<args>]]]", args[0]);
        return ExitCode::FAILURE;
    }

    let waitport = parse_waitport(&args[1]);
    if waitport == 0 {
        tracing::error!("Invalid wait port.");
        return ExitCode::FAILURE;
    }

    let command = match parse_command(&args[2..]) {
        Ok(command) => command,
        Err(message) => {
            tracing::error!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    match run(waitport, command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            tracing::error!("{}", message);
            ExitCode::FAILURE
        }
    }
}

struct SpawnCommand {
    program: String,
    args: Vec<String>,
}

/// Parse `[<cmd> [-- [<args>]]]`: a bare `cmd` is fine, but any argument
/// following `cmd` must be introduced by a literal `--`.
fn parse_command(rest: &[String]) -> Result<Option<SpawnCommand>, String> {
    let Some((program, rest)) = rest.split_first() else {
        return Ok(None);
    };
    if rest.is_empty() {
        return Ok(Some(SpawnCommand {
            program: program.clone(),
            args: Vec::new(),
        }));
    }
    if rest[0] != "--" {
        return Err("Expected '--' before command arguments.".to_string());
    }
    Ok(Some(SpawnCommand {
        program: program.clone(),
        args: rest[1..].to_vec(),
    }))
}

async fn run(waitport: u16, command: Option<SpawnCommand>) -> Result<(), String> {
    let linemode_disabled = env::var_os("TELNET_TELOPT_LINEMODE").is_some();
    let echo_disabled = env::var_os("TELNET_TELOPT_ECHO").is_some();
    let motd = env::var("TELNET_MOTD").ok();

    let config = GatewayConfig::new(waitport)
        .with_linemode_disabled(linemode_disabled)
        .with_echo_disabled(echo_disabled)
        .with_motd(motd);

    let mut server = Server::init(config).await.map_err(|e| format!("Cannot start server: {e}"))?;

    let (mut local, mut child, mut tty_guard) = match command {
        Some(cmd) => {
            let (child, local) = local_io::spawn_child(&cmd.program, &cmd.args)
                .map_err(|_| "Could not execute your command.".to_string())?;
            (local, Some(child), None)
        }
        None => {
            let guard = if !linemode_disabled {
                local_io::enter_raw_mode().ok()
            } else {
                None
            };
            (local_io::LocalStream::from_tty(), None, guard)
        }
    };

    let mut signals = signals::SignalSet::new().map_err(|_| "Cannot arm signals.".to_string())?;

    let mut scratch = vec![0u8; server.ring_capacity()];
    let mut pending_local_write: Vec<u8> = Vec::new();
    let mut retval: Result<(), String> = Ok(());

    'driver: loop {
        tokio::select! {
            biased;
            _ = signals.terminate() => {
                tracing::info!("termination signal received");
                break 'driver;
            }
            _ = tokio::time::sleep(server.step_poll_timeout()) => {}
        }

        match local.try_read(&mut scratch) {
            Ok(0) => {
                tracing::info!("local stream closed");
                break 'driver;
            }
            Ok(n) => {
                if let Err(e) = server.enqueue_outbound(&scratch[..n]) {
                    retval = Err(format!("Ringbuf failure (OUT): {e}"));
                    break 'driver;
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {}
            Err(e) => {
                retval = Err(format!("Read error: {e}"));
                break 'driver;
            }
        }

        if let Err(e) = server.step().await {
            if e.is_process_fatal() {
                retval = Err(format!("Emergency exit: {e}"));
                break 'driver;
            }
        }

        match server.drain_inbound() {
            Ok(bytes) => pending_local_write.extend_from_slice(&bytes),
            Err(e) => {
                retval = Err(format!("Ringbuf failure (IN): {e}"));
                break 'driver;
            }
        }

        if !pending_local_write.is_empty() {
            match local.try_write(&pending_local_write) {
                Ok(n) => {
                    pending_local_write.drain(..n);
                }
                Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {}
                Err(e) => {
                    retval = Err(format!("Write error: {e}"));
                    break 'driver;
                }
            }
        }
    }

    if let Some(child) = child.as_mut() {
        let _ = local_io::kill_child(child, retval.is_err());
    }
    if let Some(guard) = tty_guard.take() {
        drop(guard);
    }
    server.stop();

    retval
}
