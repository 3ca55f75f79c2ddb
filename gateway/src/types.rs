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

//! Core identifiers and snapshot types for the gateway core

use std::fmt;
use std::net::SocketAddr;

/// Unique identifier for a session (monotonically increasing, never reused
/// within one server's lifetime).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    /// Create a session id from its underlying value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The underlying `u64` value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Non-owning snapshot of one session's bookkeeping, for introspection and
/// logging without borrowing the session itself.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    /// This session's id.
    pub id: SessionId,
    /// The session's peer address.
    pub peer_addr: SocketAddr,
    /// Bytes currently queued to be written to this session.
    pub outbound_queued: usize,
    /// Bytes currently queued, decoded, awaiting merge into the server.
    pub inbound_queued: usize,
}

/// Non-owning snapshot of the server's bookkeeping.
#[derive(Debug, Clone)]
pub struct ServerSnapshot {
    /// Number of live sessions.
    pub session_count: usize,
    /// Server bind address.
    pub bind_addr: SocketAddr,
    /// Bytes queued in the server's outbound fan-out ring.
    pub outbound_queued: usize,
    /// Bytes queued in the server's inbound merge ring.
    pub inbound_queued: usize,
}

impl fmt::Display for ServerSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Server {{ sessions: {}, addr: {}, outbound: {}, inbound: {} }}",
            self.session_count, self.bind_addr, self.outbound_queued, self.inbound_queued
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_orders_and_displays() {
        let a = SessionId::new(1);
        let b = SessionId::new(2);
        assert!(a < b);
        assert_ne!(a, b);
        assert_eq!(a.to_string(), "session-1");
    }
}
