use std::any::type_name;

use parse_display::{Display, FromStr};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::{EncodeError, ParamDescriptor, ParseError};


/// Conversion between property values and query parameter strings.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, FromStr, Serialize, Deserialize,
)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Codec {
    /// Values are strings and pass through unchanged.
    #[default]
    Plain,
    /// Values are stored as JSON text.
    Json,
}

impl Codec {
    /// Decodes a raw parameter value.
    ///
    /// Returns `None` if the parameter is absent or, in JSON mode, holds `null`.
    pub fn decode<T: DeserializeOwned>(
        self,
        raw: Option<&str>,
        parameter: &str,
    ) -> Result<Option<T>, ParseError> {
        let Some(raw) = raw else {
            return Ok(None);
        };
        match self {
            Codec::Json => {
                serde_json::from_str::<Option<T>>(raw).map_err(|e| ParseError::new(parameter, e))
            }
            Codec::Plain => match serde_json::from_value(Value::String(raw.to_owned())) {
                Ok(value) => Ok(Some(value)),
                Err(e) => serde_json::from_str(raw)
                    .map(Some)
                    .map_err(|_| ParseError::new(parameter, e)),
            },
        }
    }

    /// Encodes a value. `None` means the parameter should be removed.
    ///
    /// In plain mode a value that does not serialize to a string is logged as a
    /// type mismatch and written as its JSON text.
    pub fn encode<T: Serialize + ?Sized>(
        self,
        value: &T,
        descriptor: &ParamDescriptor,
    ) -> Result<Option<String>, EncodeError> {
        let to_error = |e: serde_json::Error| EncodeError::new(descriptor.owner, descriptor.key, e);
        match self {
            Codec::Json => {
                let text = serde_json::to_string(value).map_err(to_error)?;
                Ok((text != "null").then_some(text))
            }
            Codec::Plain => Ok(match serde_json::to_value(value).map_err(to_error)? {
                Value::Null => None,
                Value::String(s) => Some(s),
                other => {
                    tracing::warn!(
                        "enabling use_json is recommended for non-string type properties in {}#{} (type {})",
                        descriptor.owner,
                        descriptor.key,
                        type_name::<T>()
                    );
                    Some(other.to_string())
                }
            }),
        }
    }
}
