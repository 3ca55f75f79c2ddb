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

//! Telnet broadcasting gateway core.
//!
//! Fans one local byte stream out to every connected remote telnet client,
//! and merges every client's input back into a single local stream. See
//! [`Server`] for the listener and session table, and [`Session`] for a
//! single client's codec and ring buffers.

mod config;
mod error;
mod server;
mod session;
mod types;

pub use config::{GatewayConfig, DEFAULT_RING_CAPACITY, LISTEN_BACKLOG, STEP_POLL_TIMEOUT};
pub use error::{GatewayError, Result};
pub use server::Server;
pub use session::Session;
pub use types::{ServerSnapshot, SessionId, SessionInfo};
