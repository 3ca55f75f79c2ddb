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

//! The gateway server: listener, session table, and the fan-out/merge
//! rings that connect every session to the single local stream.

use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};
use crate::session::Session;
use crate::types::{SessionId, SessionInfo, ServerSnapshot};
use gateway_ringbuf::RingBuffer;
use std::io;
use std::net::SocketAddr;
use std::task::{Context, Poll, Waker};
use tokio::net::{TcpListener, TcpStream};

fn try_accept(listener: &TcpListener) -> io::Result<Option<(TcpStream, SocketAddr)>> {
    let waker = Waker::noop();
    let mut cx = Context::from_waker(waker);
    match listener.poll_accept(&mut cx) {
        Poll::Ready(Ok(pair)) => Ok(Some(pair)),
        Poll::Ready(Err(e)) => Err(e),
        Poll::Pending => Ok(None),
    }
}

/// The gateway: one TCP listener, a table of live sessions, and the two
/// rings that fan local output out to every session and merge every
/// session's input back into one local stream.
pub struct Server {
    config: GatewayConfig,
    listener: TcpListener,
    bind_addr: SocketAddr,
    sessions: Vec<Session>,
    next_id: u64,
    /// Bytes written here by the driver are broadcast to every session.
    outbound: RingBuffer,
    /// Bytes read by the driver, merged from every session's input.
    inbound: RingBuffer,
}

impl Server {
    /// Bind the listener and allocate the fan-out/merge rings.
    pub async fn init(config: GatewayConfig) -> Result<Self> {
        let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
        let listener = TcpListener::bind(addr).await?;
        let bind_addr = listener.local_addr()?;
        let outbound = RingBuffer::new(config.ring_capacity)?;
        let inbound = RingBuffer::new(config.ring_capacity)?;
        tracing::info!(addr = %bind_addr, "gateway listening");
        Ok(Self {
            config,
            listener,
            bind_addr,
            sessions: Vec::new(),
            next_id: 0,
            outbound,
            inbound,
        })
    }

    /// The address actually bound (useful when `config.port == 0`).
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Ring buffer capacity this server was configured with, shared by its
    /// own fan-out/merge rings and every session's rings.
    pub fn ring_capacity(&self) -> usize {
        self.config.ring_capacity
    }

    /// How long a driver loop should wait between calls to [`Server::step`].
    pub fn step_poll_timeout(&self) -> std::time::Duration {
        self.config.step_poll_timeout
    }

    /// Number of currently live sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Per-session bookkeeping snapshots, for introspection and logging.
    pub fn session_infos(&self) -> Vec<SessionInfo> {
        self.sessions.iter().map(Session::info).collect()
    }

    /// A snapshot of the server's own bookkeeping.
    pub fn snapshot(&self) -> ServerSnapshot {
        ServerSnapshot {
            session_count: self.sessions.len(),
            bind_addr: self.bind_addr,
            outbound_queued: self.outbound.bytes_used(),
            inbound_queued: self.inbound.bytes_used(),
        }
    }

    /// Queue bytes from the local stream to be broadcast to every session
    /// on the next [`Server::step`]. Fails (process-fatal) on overflow.
    pub fn enqueue_outbound(&mut self, bytes: &[u8]) -> Result<()> {
        self.outbound
            .put(bytes)
            .map_err(GatewayError::ServerRingOverflow)
    }

    /// Bytes currently queued, merged from every session, waiting to be
    /// written to the local stream.
    pub fn inbound_used(&self) -> usize {
        self.inbound.bytes_used()
    }

    /// Remove and return every byte currently merged from sessions.
    pub fn drain_inbound(&mut self) -> Result<Vec<u8>> {
        let n = self.inbound.bytes_used();
        let mut buf = vec![0u8; n];
        if n > 0 {
            self.inbound.get(&mut buf)?;
        }
        Ok(buf)
    }

    /// Run one step: accept pending connections, broadcast queued local
    /// output, let every session read/write once, reap dead sessions, and
    /// merge what every session produced.
    pub async fn step(&mut self) -> Result<()> {
        self.accept_pending()?;

        let mut dead = self.broadcast_outbound();

        for session in &mut self.sessions {
            if dead.contains(&session.id()) {
                continue;
            }
            if let Err(e) = session.handle(true).await {
                if e.is_process_fatal() {
                    return Err(e);
                }
                tracing::info!(session = %session.id(), error = %e, "closing session");
                dead.push(session.id());
                continue;
            }
            if let Err(e) = session.handle(false).await {
                if e.is_process_fatal() {
                    return Err(e);
                }
                tracing::info!(session = %session.id(), error = %e, "closing session");
                dead.push(session.id());
            }
        }

        self.reap(&dead);

        let dead = self.merge_inbound();
        self.reap(&dead);

        Ok(())
    }

    fn accept_pending(&mut self) -> Result<()> {
        loop {
            match try_accept(&self.listener)? {
                Some((socket, peer_addr)) => {
                    let id = SessionId::new(self.next_id);
                    self.next_id += 1;
                    match Session::open(id, peer_addr, socket, &self.config) {
                        Ok(session) => {
                            tracing::info!(session = %id, peer = %peer_addr, "session opened");
                            // Head-insert, matching the original's singly-linked-list
                            // head-insertion iteration order.
                            self.sessions.insert(0, session);
                        }
                        Err(e) => {
                            tracing::warn!(peer = %peer_addr, error = %e, "failed to open session");
                        }
                    }
                }
                None => break,
            }
        }
        Ok(())
    }

    /// Broadcast queued local output to every session's outbound ring.
    ///
    /// A session whose outbound ring can't fit the broadcast is session-fatal,
    /// not process-fatal: it's collected and reaped by the caller rather than
    /// aborting the step.
    fn broadcast_outbound(&mut self) -> Vec<SessionId> {
        let n = self.outbound.bytes_used();
        if n == 0 {
            return Vec::new();
        }
        let mut staged = vec![0u8; n];
        if let Err(e) = self.outbound.get(&mut staged) {
            tracing::error!(error = %e, "failed to drain outbound fan-out ring");
            return Vec::new();
        }
        let mut dead = Vec::new();
        for session in &mut self.sessions {
            if let Err(e) = session.enqueue_outbound(&staged) {
                tracing::warn!(session = %session.id(), error = %e, "outbound overflow, closing session");
                dead.push(session.id());
            }
        }
        dead
    }

    /// Merge every session's decoded input into the server's inbound ring.
    ///
    /// A session whose input can't fit the merge ring is session-fatal, not
    /// process-fatal — matching the original's behavior of closing only the
    /// offending connection so a slow local drain can never deadlock the
    /// whole gateway.
    fn merge_inbound(&mut self) -> Vec<SessionId> {
        let mut dead = Vec::new();
        for session in &mut self.sessions {
            if let Err(e) = session.drain_inbound_into(&mut self.inbound) {
                tracing::warn!(session = %session.id(), error = %e, "inbound merge overflow, closing session");
                dead.push(session.id());
            }
        }
        dead
    }

    fn reap(&mut self, dead: &[SessionId]) {
        if dead.is_empty() {
            return;
        }
        self.sessions.retain(|s| !dead.contains(&s.id()));
    }

    /// Stop the server: drop the listener and every live session.
    pub fn stop(mut self) {
        tracing::info!(addr = %self.bind_addr, sessions = self.sessions.len(), "gateway stopping");
        self.sessions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn init_binds_and_reports_snapshot() {
        let config = GatewayConfig::new(0);
        let server = Server::init(config).await.unwrap();
        assert_eq!(server.session_count(), 0);
        let snap = server.snapshot();
        assert_eq!(snap.session_count, 0);
        assert_eq!(snap.bind_addr, server.bind_addr());
    }

    #[tokio::test]
    async fn accept_adds_a_session() {
        let config = GatewayConfig::new(0)
            .with_linemode_disabled(true)
            .with_echo_disabled(true);
        let mut server = Server::init(config).await.unwrap();
        let addr = server.bind_addr();
        let _client = tokio::net::TcpStream::connect(addr).await.unwrap();
        // Give the OS a moment to complete the handshake before polling accept.
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        server.step().await.unwrap();
        assert_eq!(server.session_count(), 1);
    }

    #[tokio::test]
    async fn enqueue_outbound_broadcasts_to_sessions() {
        let config = GatewayConfig::new(0)
            .with_linemode_disabled(true)
            .with_echo_disabled(true);
        let mut server = Server::init(config).await.unwrap();
        let addr = server.bind_addr();
        let mut client = tokio::net::TcpStream::connect(addr).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        server.step().await.unwrap();
        assert_eq!(server.session_count(), 1);

        server.enqueue_outbound(b"hello").unwrap();
        server.step().await.unwrap();

        let mut buf = [0u8; 64];
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        let n = tokio::io::AsyncReadExt::read(&mut client, &mut buf)
            .await
            .unwrap();
        let text = String::from_utf8_lossy(&buf[..n]);
        assert!(text.contains("hello"));
    }
}
