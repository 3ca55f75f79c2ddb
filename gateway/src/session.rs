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

//! One connected remote telnet client.

use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};
use crate::types::{SessionId, SessionInfo};
use bytes::{Buf, BytesMut};
use gateway_ringbuf::RingBuffer;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::pin::Pin;
use std::task::{Context, Poll, Waker};
use termionix_compress::{Algorithm, CompressionStream};
use termionix_telnetcodec::{TelnetArgument, TelnetCodec, TelnetEvent, TelnetFrame, TelnetOption, TelnetSide};
use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};
use tokio::net::TcpStream;
use tokio_util::codec::{Decoder, Encoder};

/// Attempt one non-blocking read from `stream` into `buf` without ever
/// suspending the calling task: a pending poll is reported as
/// [`io::ErrorKind::WouldBlock`], matching `TcpStream::try_read`'s contract
/// for a stream that isn't bare `TcpStream` (MCCP2 compression sits between
/// the session and the socket, so the plain `try_read`/`try_write` pair
/// tokio gives a raw `TcpStream` isn't available here).
fn poll_read_once(stream: Pin<&mut CompressionStream<TcpStream>>, buf: &mut [u8]) -> io::Result<usize> {
    let waker = Waker::noop();
    let mut cx = Context::from_waker(waker);
    let mut read_buf = ReadBuf::new(buf);
    match stream.poll_read(&mut cx, &mut read_buf) {
        Poll::Ready(Ok(())) => Ok(read_buf.filled().len()),
        Poll::Ready(Err(e)) => Err(e),
        Poll::Pending => Err(io::Error::from(io::ErrorKind::WouldBlock)),
    }
}

/// Attempt one non-blocking write of `buf` to `stream`. See
/// [`poll_read_once`] for why this can't just be `TcpStream::try_write`.
fn poll_write_once(stream: Pin<&mut CompressionStream<TcpStream>>, buf: &[u8]) -> io::Result<usize> {
    let waker = Waker::noop();
    let mut cx = Context::from_waker(waker);
    match stream.poll_write(&mut cx, buf) {
        Poll::Ready(Ok(n)) => Ok(n),
        Poll::Ready(Err(e)) => Err(e),
        Poll::Pending => Err(io::Error::from(io::ErrorKind::WouldBlock)),
    }
}

/// One accepted remote client: its socket, codec, and per-session queues.
///
/// A `Session` is created by [`Session::open`], mutated only by
/// [`Server::step`](crate::server::Server::step), and destroyed (dropped)
/// when [`Session::handle`] reports a fatal error.
pub struct Session {
    id: SessionId,
    peer_addr: SocketAddr,
    stream: CompressionStream<TcpStream>,
    codec: TelnetCodec,
    decode_buffer: BytesMut,
    encode_buffer: BytesMut,
    inbound: RingBuffer,
    outbound: RingBuffer,
}

impl Session {
    /// Accept a freshly connected socket: allocate rings, construct the
    /// codec, run the initial negotiation, and (if configured) send the
    /// MOTD banner.
    ///
    /// On any failure the partially constructed session is dropped and the
    /// failure is returned; no resources leak.
    pub fn open(id: SessionId, peer_addr: SocketAddr, socket: TcpStream, config: &GatewayConfig) -> Result<Self> {
        socket.set_nodelay(true).ok();
        let inbound = RingBuffer::new(config.ring_capacity)?;
        let outbound = RingBuffer::new(config.ring_capacity)?;
        let mut session = Session {
            id,
            peer_addr,
            stream: CompressionStream::new(socket, Algorithm::None),
            codec: TelnetCodec::new(),
            decode_buffer: BytesMut::new(),
            encode_buffer: BytesMut::new(),
            inbound,
            outbound,
        };
        session.negotiate_initial(config)?;
        session.flush()?;
        if let Some(motd) = &config.motd {
            session.send(motd.as_bytes())?;
            session.send(b"\n\r")?;
        }
        Ok(session)
    }

    /// This session's id.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// This session's peer address.
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    /// A non-owning snapshot of this session's queue depths, for logging.
    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            id: self.id,
            peer_addr: self.peer_addr,
            outbound_queued: self.outbound.bytes_used(),
            inbound_queued: self.inbound.bytes_used(),
        }
    }

    /// Offer `WILL COMPRESS2`; if linemode/echo aren't disabled, offer
    /// `DO LINEMODE` + `{1,0}` subnegotiation and `WILL ECHO`.
    fn negotiate_initial(&mut self, config: &GatewayConfig) -> Result<()> {
        if let Some(frame) = self.codec.enable_local(TelnetOption::Compress2) {
            self.encode_frame(frame)?;
        }
        if !config.linemode_disabled {
            if let Some(frame) = self.codec.enable_remote(TelnetOption::Linemode) {
                self.encode_frame(frame)?;
            }
            let mode = TelnetArgument::Unknown(TelnetOption::Linemode, BytesMut::from(&[1u8, 0u8][..]));
            self.encode_frame(TelnetFrame::Subnegotiate(mode))?;
        }
        if !config.echo_disabled {
            if let Some(frame) = self.codec.enable_local(TelnetOption::Echo) {
                self.encode_frame(frame)?;
            }
        }
        Ok(())
    }

    fn encode_frame(&mut self, frame: TelnetFrame) -> Result<()> {
        Encoder::<TelnetFrame>::encode(&mut self.codec, frame, &mut self.encode_buffer)
            .map_err(GatewayError::from)
    }

    /// Queue `bytes` and attempt to flush them immediately. Used for direct
    /// wire writes (MOTD) and for bytes the codec has already encoded.
    pub fn send(&mut self, bytes: &[u8]) -> Result<()> {
        self.encode_buffer.extend_from_slice(bytes);
        self.flush()
    }

    /// Write as much of the pending encode buffer as the socket will accept
    /// right now, without blocking. Anything left over stays buffered for
    /// the next call.
    fn flush(&mut self) -> Result<()> {
        while !self.encode_buffer.is_empty() {
            match poll_write_once(Pin::new(&mut self.stream), &self.encode_buffer) {
                Ok(0) => break,
                Ok(n) => self.encode_buffer.advance(n),
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Drive one step of this session.
    ///
    /// `selected == true`: the socket is (believed) readable — perform one
    /// non-blocking read and feed the codec. `selected == false`: drain the
    /// outbound ring through the codec's encoder and flush the wire.
    pub async fn handle(&mut self, selected: bool) -> Result<()> {
        if selected {
            self.read_once()?;
        } else {
            self.drain_outbound()?;
        }
        Ok(())
    }

    fn read_once(&mut self) -> Result<()> {
        let mut scratch = vec![0u8; self.inbound.capacity()];
        match poll_read_once(Pin::new(&mut self.stream), &mut scratch) {
            Ok(0) => Err(GatewayError::PeerClosed(self.id)),
            Ok(n) => {
                self.decode_buffer.extend_from_slice(&scratch[..n]);
                self.process_decoded()
            }
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn process_decoded(&mut self) -> Result<()> {
        while let Some(event) = self.codec.decode(&mut self.decode_buffer)? {
            match event {
                TelnetEvent::Data(byte) => {
                    self.inbound.put(&[byte])?;
                }
                TelnetEvent::OptionStatus(TelnetOption::Compress2, TelnetSide::Remote, true) => {
                    tracing::debug!(session = %self.id, "peer accepted MCCP2, switching to zlib");
                    self.switch_to_compressed();
                }
                other => {
                    tracing::trace!(session = %self.id, event = ?other, "ignoring telnet event");
                }
            }
        }
        Ok(())
    }

    fn switch_to_compressed(&mut self) {
        // async-compression's zlib writer is the closest match to MCCP2's
        // zlib/deflate framing; there is no literal `Compress2` tag in
        // `Algorithm`. Switching is best-effort: a failure here doesn't
        // justify killing an otherwise-healthy session, only a fallback to
        // uncompressed output.
        let waker = Waker::noop();
        let mut cx = Context::from_waker(waker);
        let mut fut = Box::pin(self.stream.switch_algorithm(Algorithm::Zlib));
        if let Poll::Ready(Err(e)) = fut.as_mut().poll(&mut cx) {
            tracing::warn!(session = %self.id, error = %e, "failed to enable MCCP2 compression");
        }
    }

    fn drain_outbound(&mut self) -> Result<()> {
        let pending = self.outbound.bytes_used();
        if pending > 0 {
            let mut scratch = vec![0u8; pending];
            self.outbound.get(&mut scratch)?;
            for byte in scratch {
                Encoder::<u8>::encode(&mut self.codec, byte, &mut self.encode_buffer)?;
            }
        }
        self.flush()
    }

    /// Append `bytes` to this session's outbound ring (bytes waiting to be
    /// framed and sent). Fails (session-fatal) on overflow.
    pub fn enqueue_outbound(&mut self, bytes: &[u8]) -> Result<()> {
        self.outbound.put(bytes).map_err(GatewayError::from)
    }

    /// Number of bytes queued in the outbound ring.
    pub fn outbound_used(&self) -> usize {
        self.outbound.bytes_used()
    }

    /// Number of bytes queued, decoded, in the inbound ring.
    pub fn inbound_used(&self) -> usize {
        self.inbound.bytes_used()
    }

    /// Move every byte currently in this session's inbound ring into `dst`.
    ///
    /// Returns the raw ring error on overflow of `dst` rather than wrapping
    /// it: `dst` here is always the server's shared merge ring, and the
    /// caller is better placed to decide that this is process-fatal rather
    /// than specific to this session.
    pub fn drain_inbound_into(
        &mut self,
        dst: &mut RingBuffer,
    ) -> std::result::Result<(), gateway_ringbuf::RingBufferError> {
        let n = self.inbound.bytes_used();
        if n == 0 {
            return Ok(());
        }
        RingBuffer::transfer(dst, &mut self.inbound, n)
    }
}
