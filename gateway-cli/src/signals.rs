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

//! Termination signal handling for the driver binary.
//!
//! Arms the same six signals the original handler did (`SIGPIPE`,
//! `SIGTERM`, `SIGQUIT`, `SIGINT`, `SIGHUP`, `SIGCHLD`) — any of them sets
//! the termination flag. Registering a `tokio::signal::unix` stream for
//! `SIGPIPE` is also what keeps it from killing the process with its
//! default disposition.

use std::io;
use tokio::signal::unix::{signal, Signal, SignalKind};

/// The set of signals that should terminate the driver loop.
pub struct SignalSet {
    pipe: Signal,
    term: Signal,
    quit: Signal,
    int: Signal,
    hup: Signal,
    chld: Signal,
}

impl SignalSet {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            pipe: signal(SignalKind::pipe())?,
            term: signal(SignalKind::terminate())?,
            quit: signal(SignalKind::quit())?,
            int: signal(SignalKind::interrupt())?,
            hup: signal(SignalKind::hangup())?,
            chld: signal(SignalKind::child())?,
        })
    }

    /// Resolves when any armed termination signal arrives.
    pub async fn terminate(&mut self) {
        tokio::select! {
            _ = self.pipe.recv() => {}
            _ = self.term.recv() => {}
            _ = self.quit.recv() => {}
            _ = self.int.recv() => {}
            _ = self.hup.recv() => {}
            _ = self.chld.recv() => {}
        }
    }
}
