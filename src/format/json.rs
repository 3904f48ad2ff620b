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
use serde::{Deserialize, Serialize};

use super::format::Format;
use crate::store::Params;

/// A [`Format`] which stores parameters as a JSON object.
///
/// The file contains a single JSON object which maps each key to its value. This type implements
/// `Default` to provide compact output.
///
/// [`Format`]: crate::format::Format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct JsonFormat {
    /// Whether to indent the JSON which is written.
    ///
    /// The default value is `false`.
    pub pretty: bool,
}

impl JsonFormat {
    /// Return a new `JsonFormat` which writes compact JSON.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new `JsonFormat` which writes indented JSON.
    pub fn pretty() -> Self {
        JsonFormat { pretty: true }
    }
}

impl Format for JsonFormat {
    fn serialize(&self, params: &Params) -> crate::Result<Vec<u8>> {
        let result = if self.pretty {
            serde_json::to_vec_pretty(params)
        } else {
            serde_json::to_vec(params)
        };

        result.map_err(|error| {
            debug!("Could not serialize parameters as JSON: {}", error);
            crate::Error::Serialize
        })
    }

    fn deserialize(&self, data: &[u8]) -> crate::Result<Params> {
        serde_json::from_slice(data).map_err(|error| {
            debug!("Could not deserialize parameters from JSON: {}", error);
            crate::Error::Deserialize
        })
    }
}
