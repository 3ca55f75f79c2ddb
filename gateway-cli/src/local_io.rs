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

//! The gateway's "local stream" endpoint: either the controlling TTY, or a
//! spawned child process's piped stdio.

use nix::sys::termios::{self, SetArg, Termios};
use std::io;
use std::os::fd::AsFd;
use std::pin::Pin;
use std::process::Stdio;
use std::task::{Context, Poll, Waker};
use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};
use tokio::process::{Child, ChildStdin, ChildStdout};

/// Either endpoint the local stream can be: a raw-mode TTY (stdin/stdout)
/// or a spawned child's piped stdio.
pub enum LocalStream {
    Tty {
        stdin: tokio::io::Stdin,
        stdout: tokio::io::Stdout,
    },
    Child {
        stdin: ChildStdin,
        stdout: ChildStdout,
    },
}

impl LocalStream {
    pub fn from_tty() -> Self {
        LocalStream::Tty {
            stdin: tokio::io::stdin(),
            stdout: tokio::io::stdout(),
        }
    }

    /// One non-blocking read attempt; `Ok(0)` means EOF, `WouldBlock` means
    /// nothing is ready yet.
    pub fn try_read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            LocalStream::Tty { stdin, .. } => poll_read_once(Pin::new(stdin), buf),
            LocalStream::Child { stdout, .. } => poll_read_once(Pin::new(stdout), buf),
        }
    }

    /// One non-blocking write attempt of as much of `buf` as is accepted.
    pub fn try_write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LocalStream::Tty { stdout, .. } => poll_write_once(Pin::new(stdout), buf),
            LocalStream::Child { stdin, .. } => poll_write_once(Pin::new(stdin), buf),
        }
    }
}

fn poll_read_once<S: AsyncRead>(stream: Pin<&mut S>, buf: &mut [u8]) -> io::Result<usize> {
    let waker = Waker::noop();
    let mut cx = Context::from_waker(waker);
    let mut read_buf = ReadBuf::new(buf);
    match stream.poll_read(&mut cx, &mut read_buf) {
        Poll::Ready(Ok(())) => Ok(read_buf.filled().len()),
        Poll::Ready(Err(e)) => Err(e),
        Poll::Pending => Err(io::Error::from(io::ErrorKind::WouldBlock)),
    }
}

fn poll_write_once<S: AsyncWrite>(stream: Pin<&mut S>, buf: &[u8]) -> io::Result<usize> {
    let waker = Waker::noop();
    let mut cx = Context::from_waker(waker);
    match stream.poll_write(&mut cx, buf) {
        Poll::Ready(Ok(n)) => Ok(n),
        Poll::Ready(Err(e)) => Err(e),
        Poll::Pending => Err(io::Error::from(io::ErrorKind::WouldBlock)),
    }
}

/// Spawn `program` with `args`, piping its stdin/stdout so they become the
/// local stream endpoints.
pub fn spawn_child(program: &str, args: &[String]) -> io::Result<(Child, LocalStream)> {
    let mut child = tokio::process::Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    let stdin = child.stdin.take().expect("piped stdin");
    let stdout = child.stdout.take().expect("piped stdout");
    Ok((child, LocalStream::Child { stdin, stdout }))
}

/// Send the child `SIGKILL` if the driver exited with an error, `SIGINT`
/// otherwise, matching the original's shutdown sequence.
pub fn kill_child(child: &mut Child, failed: bool) -> io::Result<()> {
    if let Some(pid) = child.id() {
        let pid = nix::unistd::Pid::from_raw(pid as i32);
        let signal = if failed {
            nix::sys::signal::Signal::SIGKILL
        } else {
            nix::sys::signal::Signal::SIGINT
        };
        let _ = nix::sys::signal::kill(pid, signal);
    }
    Ok(())
}

/// Guard that restores the controlling TTY's termios settings on drop.
pub struct TtyGuard {
    original: Termios,
}

impl Drop for TtyGuard {
    fn drop(&mut self) {
        let stdin = io::stdin();
        let _ = termios::tcsetattr(stdin.as_fd(), SetArg::TCSANOW, &self.original);
    }
}

/// Put the controlling TTY into raw mode, returning a guard that restores
/// it when dropped.
pub fn enter_raw_mode() -> io::Result<TtyGuard> {
    let stdin = io::stdin();
    let original = termios::tcgetattr(stdin.as_fd()).map_err(io::Error::from)?;
    let mut raw = original.clone();
    termios::cfmakeraw(&mut raw);
    termios::tcsetattr(stdin.as_fd(), SetArg::TCSANOW, &raw).map_err(io::Error::from)?;
    Ok(TtyGuard { original })
}
