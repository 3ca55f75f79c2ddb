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

//! Line Mode Options

use crate::consts;
use bytes::BufMut;

/// Telnet Line Mode Option subnegotiation commands and arguments (RFC 1184)
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LineModeOption {
    /// MODE command - set line mode and flags
    Mode {
        /// Mode flags
        mode: LineModeFlags,
    },
    /// FORWARDMASK command - set forward mask
    ForwardMask {
        /// Mask of characters that should cause forwarding
        mask: [bool; 256],
    },
    /// SLC (Special Line Character) command
    Slc {
        /// List of special line character definitions
        chars: Vec<SlcDefinition>,
    },
}

impl LineModeOption {
    /// Parse line mode option from bytes
    pub fn parse(data: &[u8]) -> Result<Self, &'static str> {
        if data.is_empty() {
            return Err("Empty linemode subnegotiation");
        }

        match data[0] {
            consts::option::linemode::MODE => {
                if data.len() < 2 {
                    return Err("MODE requires at least 1 byte of data");
                }
                Ok(Self::Mode {
                    mode: LineModeFlags::from_byte(data[1]),
                })
            }
            consts::option::linemode::FORWARDMASK => {
                if data.len() < 33 {
                    return Err("FORWARDMASK requires 32 bytes of data");
                }
                let mut mask = [false; 256];
                for byte_idx in 0..32 {
                    let byte = data[1 + byte_idx];
                    for bit_idx in 0..8 {
                        let char_idx = byte_idx * 8 + bit_idx;
                        mask[char_idx] = (byte & (1 << (7 - bit_idx))) != 0;
                    }
                }
                Ok(Self::ForwardMask { mask })
            }
            consts::option::linemode::SLC => {
                if (data.len() - 1) % 3 != 0 {
                    return Err("SLC data must be in triplets");
                }
                let mut chars = Vec::new();
                for i in (1..data.len()).step_by(3) {
                    if i + 2 >= data.len() {
                        break;
                    }
                    chars.push(SlcDefinition {
                        function: SlcFunction::from_byte(data[i]),
                        flags: SlcFlags::from_byte(data[i + 1]),
                        value: data[i + 2],
                    });
                }
                Ok(Self::Slc { chars })
            }
            _ => Err("Unknown linemode subnegotiation command"),
        }
    }

    /// Serialize line mode option to bytes
    pub fn serialize(&self, buf: &mut impl BufMut) {
        match self {
            Self::Mode { mode } => {
                buf.put_u8(consts::option::linemode::MODE);
                buf.put_u8(mode.to_byte());
            }
            Self::ForwardMask { mask } => {
                buf.put_u8(consts::option::linemode::FORWARDMASK);
                for byte_idx in 0..32 {
                    let mut byte = 0u8;
                    for bit_idx in 0..8 {
                        let char_idx = byte_idx * 8 + bit_idx;
                        if mask[char_idx] {
                            byte |= 1 << (7 - bit_idx);
                        }
                    }
                    buf.put_u8(byte);
                }
            }
            Self::Slc { chars } => {
                buf.put_u8(consts::option::linemode::SLC);
                for slc in chars {
                    buf.put_u8(slc.function.to_byte());
                    buf.put_u8(slc.flags.to_byte());
                    buf.put_u8(slc.value);
                }
            }
        }
    }
}

impl std::fmt::Display for LineModeOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Line Mode flags (used with MODE command)
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct LineModeFlags {
    /// Edit mode - client performs line editing
    pub edit: bool,
    /// Trapsig mode - client handles signals locally
    pub trapsig: bool,
    /// Soft tab mode - client converts tabs to spaces
    pub soft_tab: bool,
    /// Lit echo mode - literal echo of all characters
    pub lit_echo: bool,
    /// ACK mode - acknowledgment of mode changes
    pub ack: bool,
}

impl LineModeFlags {
    /// Create flags from a byte value
    pub fn from_byte(byte: u8) -> Self {
        Self {
            edit: (byte & 0x01) != 0,
            trapsig: (byte & 0x02) != 0,
            soft_tab: (byte & 0x04) != 0,
            lit_echo: (byte & 0x08) != 0,
            ack: (byte & 0x10) != 0,
        }
    }

    /// Convert flags to a byte value
    pub fn to_byte(&self) -> u8 {
        let mut byte = 0u8;
        if self.edit {
            byte |= 0x01;
        }
        if self.trapsig {
            byte |= 0x02;
        }
        if self.soft_tab {
            byte |= 0x04;
        }
        if self.lit_echo {
            byte |= 0x08;
        }
        if self.ack {
            byte |= 0x10;
        }
        byte
    }
}

impl std::fmt::Display for LineModeFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Special Line Character definition
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SlcDefinition {
    /// SLC function code
    pub function: SlcFunction,
    /// SLC flags
    pub flags: SlcFlags,
    /// Character value (or 0 if not supported)
    pub value: u8,
}

impl std::fmt::Display for SlcDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// SLC function codes
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SlcFunction {
    /// Sync signal
    Synch = 1,
    /// Break signal
    Brk = 2,
    /// Interrupt Process
    Ip = 3,
    /// Abort Output
    Ao = 4,
    /// Are You There
    Ayt = 5,
    /// Erase Character
    Ec = 6,
    /// Erase Line
    El = 7,
    /// End of File
    Eof = 8,
    /// Suspend Process
    Susp = 9,
    /// Abort Process
    Abort = 10,
    /// End of Record
    Eor = 11,
    /// Literal Next
    Lnext = 12,
    /// Erase Word
    Ew = 13,
    /// Reprint Line
    Rp = 14,
    /// X-On character
    Xon = 15,
    /// X-Off character
    Xoff = 16,
    /// Forward Char
    ForwardChar = 17,
    /// Other/Unknown function
    Other(u8),
}

impl SlcFunction {
    /// Create SLC function from byte value
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            1 => Self::Synch,
            2 => Self::Brk,
            3 => Self::Ip,
            4 => Self::Ao,
            5 => Self::Ayt,
            6 => Self::Ec,
            7 => Self::El,
            8 => Self::Eof,
            9 => Self::Susp,
            10 => Self::Abort,
            11 => Self::Eor,
            12 => Self::Lnext,
            13 => Self::Ew,
            14 => Self::Rp,
            15 => Self::Xon,
            16 => Self::Xoff,
            17 => Self::ForwardChar,
            other => Self::Other(other),
        }
    }

    /// Convert SLC function to byte value
    pub fn to_byte(&self) -> u8 {
        match self {
            Self::Synch => 1,
            Self::Brk => 2,
            Self::Ip => 3,
            Self::Ao => 4,
            Self::Ayt => 5,
            Self::Ec => 6,
            Self::El => 7,
            Self::Eof => 8,
            Self::Susp => 9,
            Self::Abort => 10,
            Self::Eor => 11,
            Self::Lnext => 12,
            Self::Ew => 13,
            Self::Rp => 14,
            Self::Xon => 15,
            Self::Xoff => 16,
            Self::ForwardChar => 17,
            Self::Other(val) => *val,
        }
    }
}

impl std::fmt::Display for SlcFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// SLC flags
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SlcFlags {
    /// Level of support/acknowledgment
    pub level: SlcLevel,
    /// Acknowledgment flag
    pub ack: bool,
    /// Flushin flag
    pub flushin: bool,
    /// Flushout flag
    pub flushout: bool,
}

impl SlcFlags {
    /// Create SLC flags from byte value
    pub fn from_byte(byte: u8) -> Self {
        Self {
            level: SlcLevel::from_byte(byte & 0x03),
            ack: (byte & 0x80) != 0,
            flushin: (byte & 0x40) != 0,
            flushout: (byte & 0x20) != 0,
        }
    }

    /// Convert SLC flags to byte value
    pub fn to_byte(&self) -> u8 {
        let mut byte = self.level.to_byte();
        if self.ack {
            byte |= 0x80;
        }
        if self.flushin {
            byte |= 0x40;
        }
        if self.flushout {
            byte |= 0x20;
        }
        byte
    }
}

impl std::fmt::Display for SlcFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// SLC support level
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SlcLevel {
    /// Not supported
    NoSupport = 0,
    /// Use my default value
    Default = 1,
    /// Use the value I provide
    Value = 2,
    /// I want to use your value
    CantChange = 3,
}

impl SlcLevel {
    /// Create SLC level from byte value
    pub fn from_byte(byte: u8) -> Self {
        match byte & 0x03 {
            0 => Self::NoSupport,
            1 => Self::Default,
            2 => Self::Value,
            3 => Self::CantChange,
            _ => unreachable!(),
        }
    }

    /// Convert SLC level to byte value
    pub fn to_byte(&self) -> u8 {
        match self {
            Self::NoSupport => 0,
            Self::Default => 1,
            Self::Value => 2,
            Self::CantChange => 3,
        }
    }
}

impl std::fmt::Display for SlcLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
