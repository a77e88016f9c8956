//! JSON decoding as an injected capability.
//!
//! The library never implements a JSON grammar. Text is handed to a
//! [`JsonDecoder`] supplied when the [`JsonParser`] is built; decode failures
//! are swallowed and replaced by the caller's default.

use serde_json::Value;
use tracing::debug;

use crate::blank::Blank;
use crate::error::{Result, StrError};

/// Decodes JSON text into a [`Value`].
pub trait JsonDecoder: Send + Sync {
    fn decode(&self, text: &str) -> Result<Value>;
}

/// The default decoder, backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJsonDecoder;

impl JsonDecoder for SerdeJsonDecoder {
    fn decode(&self, text: &str) -> Result<Value> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Input accepted by the parser: raw text, or a value that has already been decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonInput<'a> {
    Text(&'a str),
    Value(Value),
}

impl<'a> From<&'a str> for JsonInput<'a> {
    fn from(text: &'a str) -> Self {
        JsonInput::Text(text)
    }
}

impl<'a> From<&'a String> for JsonInput<'a> {
    fn from(text: &'a String) -> Self {
        JsonInput::Text(text.as_str())
    }
}

impl From<Value> for JsonInput<'_> {
    fn from(value: Value) -> Self {
        JsonInput::Value(value)
    }
}

pub struct JsonParser {
    decoder: Option<Box<dyn JsonDecoder>>,
}

impl JsonParser {
    /// Build a parser around the given decoder.
    pub fn new<D>(decoder: D) -> Self
    where
        D: JsonDecoder + 'static,
    {
        Self {
            decoder: Some(Box::new(decoder)),
        }
    }

    /// Build a parser with no decoding capability.
    ///
    /// Blank input and pre-decoded values still resolve; decoding text fails
    /// with [`StrError::DecoderUnavailable`].
    pub fn without_decoder() -> Self {
        Self { decoder: None }
    }

    pub fn is_available(&self) -> bool {
        self.decoder.is_some()
    }

    /// Decode `input`, falling back to `default` for blank input or malformed text.
    ///
    /// A [`JsonInput::Value`] is returned unchanged unless it is blank.
    pub fn parse<'a>(&self, input: impl Into<JsonInput<'a>>, default: Value) -> Result<Value> {
        let text = match input.into() {
            JsonInput::Value(value) if value.is_blank() => return Ok(default),
            JsonInput::Value(value) => return Ok(value),
            JsonInput::Text(text) if text.is_blank() => return Ok(default),
            JsonInput::Text(text) => text,
        };

        let decoder = self
            .decoder
            .as_deref()
            .ok_or(StrError::DecoderUnavailable)?;

        match decoder.decode(text) {
            Ok(value) => Ok(value),
            Err(error) => {
                debug!(%error, "json decode failed, using default");
                Ok(default)
            }
        }
    }
}

impl Default for JsonParser {
    fn default() -> Self {
        Self::new(SerdeJsonDecoder)
    }
}

impl std::fmt::Debug for JsonParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonParser")
            .field("available", &self.is_available())
            .finish()
    }
}
