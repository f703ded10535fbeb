use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};

use crate::Codec;

/// How an outward write is recorded in the navigation history.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, FromStr, Serialize, Deserialize,
)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Creates a new history entry.
    Push,
    /// Overwrites the current history entry.
    #[default]
    Replace,
}

/// Per-property binding configuration.
///
/// `#[query("name", push_history_state, use_json, export)]` builds the same value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BindingOptions {
    pub codec: Codec,
    pub write_mode: WriteMode,
    /// Allows binding a getter-only property as a one-way export.
    pub export: bool,
}

impl BindingOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn push_history_state(mut self, value: bool) -> Self {
        self.write_mode = if value {
            WriteMode::Push
        } else {
            WriteMode::Replace
        };
        self
    }
    pub fn use_json(mut self, value: bool) -> Self {
        self.codec = if value { Codec::Json } else { Codec::Plain };
        self
    }
    pub fn export(mut self, value: bool) -> Self {
        self.export = value;
        self
    }
}
