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


use param_store::format::Format;
use param_store::{Error, Params, Value};

/// A format which stores string parameters as `key=value` lines.
///
/// This is used to test registering custom formats. Values which aren't strings can't be
/// represented.
#[derive(Debug, Default)]
pub struct LinesFormat;

impl Format for LinesFormat {
    fn serialize(&self, params: &Params) -> param_store::Result<Vec<u8>> {
        let mut output = String::new();
        for (key, value) in params {
            let value = value.as_str().ok_or(Error::Serialize)?;
            output.push_str(&format!("{}={}\n", key, value));
        }
        Ok(output.into_bytes())
    }

    fn deserialize(&self, data: &[u8]) -> param_store::Result<Params> {
        let text = std::str::from_utf8(data).map_err(|_| Error::Deserialize)?;
        text.lines()
            .map(|line| -> param_store::Result<(String, Value)> {
                let (key, value) = line.split_once('=').ok_or(Error::Deserialize)?;
                Ok((key.to_owned(), Value::from(value)))
            })
            .collect()
    }
}
