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

//! Error types for the gateway core

use crate::types::SessionId;
use gateway_ringbuf::RingBufferError;
use thiserror::Error;

/// Result type for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Gateway error taxonomy
#[derive(Debug, Error)]
pub enum GatewayError {
    /// I/O error from a session socket or the local fdin/fdout.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A ring buffer operation failed (overflow or underflow).
    #[error("ring buffer error: {0}")]
    RingBuffer(#[from] RingBufferError),

    /// The telnet codec reported a decode error on a session.
    #[error("codec error: {0}")]
    Codec(#[from] termionix_telnetcodec::CodecError),

    /// A session's peer closed the connection (`recv` returned 0).
    #[error("session {0} closed by peer")]
    PeerClosed(SessionId),

    /// Referenced a session that is no longer in the server's collection.
    #[error("session {0} not found")]
    SessionNotFound(SessionId),

    /// The server's fan-out or merge ring overflowed — a process-fatal
    /// invariant violation, not a per-session failure.
    #[error("server ring overflow: {0}")]
    ServerRingOverflow(RingBufferError),

    /// Generic fatal condition with a human-readable message, matching the
    /// original implementation's single-line stderr diagnostics (e.g.
    /// "Cannot start server.", "Emergency exit.").
    #[error("{0}")]
    Fatal(String),
}

impl GatewayError {
    /// Errors that are expected in normal operation and do not indicate a
    /// defect (peer hangs up, transient I/O already retried upstream).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GatewayError::PeerClosed(_))
    }

    /// Errors that are contained to a single session: the session is
    /// removed and closed, but the server and process continue.
    pub fn is_session_fatal(&self) -> bool {
        matches!(
            self,
            GatewayError::Io(_)
                | GatewayError::Codec(_)
                | GatewayError::PeerClosed(_)
                | GatewayError::RingBuffer(_)
        )
    }

    /// Errors that are fatal to the whole process: the server ring
    /// invariant was violated, or a scope-level allocation failed.
    pub fn is_process_fatal(&self) -> bool {
        matches!(self, GatewayError::ServerRingOverflow(_) | GatewayError::Fatal(_))
    }
}
