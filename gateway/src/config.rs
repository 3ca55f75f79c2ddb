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

//! Runtime configuration for the gateway core
//!
//! # Examples
//!
//! ```
//! use gateway_core::GatewayConfig;
//!
//! let config = GatewayConfig::new(5555)
//!     .with_motd(Some("Welcome".to_string()))
//!     .with_linemode_disabled(true)
//!     .with_echo_disabled(true);
//! ```

use std::time::Duration;

/// Default capacity, in bytes, of every ring buffer in the gateway (the
/// server's two fan-out rings and each session's inbound/outbound rings).
pub const DEFAULT_RING_CAPACITY: usize = 4096;

/// TCP listen backlog used by the server's listener, matching the original
/// implementation's fixed backlog of 10.
pub const LISTEN_BACKLOG: u32 = 10;

/// How long the server waits for socket readiness in one `step()` before
/// moving on, matching the original's 200 microsecond `select()` timeout.
pub const STEP_POLL_TIMEOUT: Duration = Duration::from_micros(200);

/// Runtime configuration for a gateway server.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// TCP port the listener binds to on `0.0.0.0`.
    pub port: u16,

    /// Capacity in bytes of every ring buffer (server fan-out rings and
    /// every session's inbound/outbound rings).
    pub ring_capacity: usize,

    /// Message-of-the-day banner sent (followed by `"\n\r"`) to every newly
    /// accepted client before it joins the broadcast. `None` sends nothing.
    pub motd: Option<String>,

    /// When `true`, new sessions are not sent `DO LINEMODE` negotiation.
    pub linemode_disabled: bool,

    /// When `true`, new sessions are not sent `WILL ECHO` negotiation.
    pub echo_disabled: bool,

    /// Timeout the server's `step()` uses when polling for socket
    /// readiness.
    pub step_poll_timeout: Duration,
}

impl GatewayConfig {
    /// Create a configuration for the given listen port, with every other
    /// field at its default.
    pub fn new(port: u16) -> Self {
        Self {
            port,
            ring_capacity: DEFAULT_RING_CAPACITY,
            motd: None,
            linemode_disabled: false,
            echo_disabled: false,
            step_poll_timeout: STEP_POLL_TIMEOUT,
        }
    }

    /// Set the ring buffer capacity used for the server's fan-out rings and
    /// every session's inbound/outbound rings.
    pub fn with_ring_capacity(mut self, capacity: usize) -> Self {
        self.ring_capacity = capacity;
        self
    }

    /// Set the MOTD banner.
    pub fn with_motd(mut self, motd: Option<String>) -> Self {
        self.motd = motd;
        self
    }

    /// Disable (or re-enable) the `DO LINEMODE` negotiation offered to new
    /// sessions.
    pub fn with_linemode_disabled(mut self, disabled: bool) -> Self {
        self.linemode_disabled = disabled;
        self
    }

    /// Disable (or re-enable) the `WILL ECHO` negotiation offered to new
    /// sessions.
    pub fn with_echo_disabled(mut self, disabled: bool) -> Self {
        self.echo_disabled = disabled;
        self
    }

    /// Set the step readiness-poll timeout.
    pub fn with_step_poll_timeout(mut self, timeout: Duration) -> Self {
        self.step_poll_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_gateway_behavior() {
        let config = GatewayConfig::new(5555);
        assert_eq!(config.port, 5555);
        assert_eq!(config.ring_capacity, DEFAULT_RING_CAPACITY);
        assert!(config.motd.is_none());
        assert!(!config.linemode_disabled);
        assert!(!config.echo_disabled);
    }

    #[test]
    fn builder_methods_compose() {
        let config = GatewayConfig::new(23)
            .with_ring_capacity(1024)
            .with_motd(Some("hi".to_string()))
            .with_linemode_disabled(true)
            .with_echo_disabled(true);

        assert_eq!(config.ring_capacity, 1024);
        assert_eq!(config.motd.as_deref(), Some("hi"));
        assert!(config.linemode_disabled);
        assert!(config.echo_disabled);
    }
}
