/*
 * Copyright 2021 Wren Powell
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use log::debug;
use rmp_serde::{from_read, to_vec};
use serde::{Deserialize, Serialize};

use super::format::Format;
use crate::store::Params;

/// A [`Format`] which stores parameters in the MessagePack binary format.
///
/// The file contains a single MessagePack map from keys to values. This is more compact than
/// [`JsonFormat`] and keeps integers and floats distinct, but the files aren't human-readable.
///
/// MessagePack is a documented, portable format, so files written by this format can be read by
/// other MessagePack implementations, and decoding untrusted files is safe. Files which use
/// MessagePack types outside of [`Value`], like binary strings or maps with non-string keys, can't
/// be read.
///
/// [`Format`]: crate::format::Format
/// [`JsonFormat`]: crate::format::JsonFormat
/// [`Value`]: crate::Value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessagePackFormat;

impl MessagePackFormat {
    /// Return a new `MessagePackFormat`.
    pub fn new() -> Self {
        MessagePackFormat
    }
}

impl Format for MessagePackFormat {
    fn serialize(&self, params: &Params) -> crate::Result<Vec<u8>> {
        to_vec(params).map_err(|error| {
            debug!("Could not serialize parameters as MessagePack: {}", error);
            crate::Error::Serialize
        })
    }

    fn deserialize(&self, data: &[u8]) -> crate::Result<Params> {
        from_read(data).map_err(|error| {
            debug!("Could not deserialize parameters from MessagePack: {}", error);
            crate::Error::Deserialize
        })
    }
}
