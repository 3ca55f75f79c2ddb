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

use super::TelnetOption;
use crate::args::TelnetArgument;

/// A single unit of Telnet protocol framing, as produced by the decoder or
/// accepted by the encoder.
///
/// This is the wire-level counterpart of [`crate::TelnetEvent`]: negotiation
/// commands (`Do`/`Dont`/`Will`/`Wont`), control codes, and data bytes all
/// flow through this type when encoding, while decoding builds one of these
/// before translating it into the higher-level event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TelnetFrame {
    /// A single application data byte.
    Data(u8),
    /// `NOP` - No Operation
    NoOperation,
    /// `DM` - Data Mark
    DataMark,
    /// `BRK` - Break
    Break,
    /// `IP` - Interrupt Process
    InterruptProcess,
    /// `AO` - Abort Output
    AbortOutput,
    /// `AYT` - Are You There
    AreYouThere,
    /// `EC` - Erase Character
    EraseCharacter,
    /// `EL` - Erase Line
    EraseLine,
    /// `GA` - Go Ahead
    GoAhead,
    /// `EOR` - End of Record
    EndOfRecord,
    /// `DO` - request the peer enable `option`
    Do(TelnetOption),
    /// `DONT` - request the peer disable `option`
    Dont(TelnetOption),
    /// `WILL` - announce willingness to enable `option`
    Will(TelnetOption),
    /// `WONT` - announce refusal to enable `option`
    Wont(TelnetOption),
    /// `SB ... SE` - subnegotiation payload
    Subnegotiate(TelnetArgument),
}
