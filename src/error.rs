use parse_display::Display;

/// A property with no write path was bound without `export`.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
#[display("can not bind read-only value: {owner}.{key}")]
pub struct ReadOnlyBindingError {
    pub owner: &'static str,
    pub key: &'static str,
}

impl std::error::Error for ReadOnlyBindingError {}

/// A query parameter value could not be decoded.
#[derive(Debug, Display)]
#[display("invalid value for query parameter `{parameter}`: {source}")]
pub struct ParseError {
    pub parameter: String,
    source: serde_json::Error,
}
impl ParseError {
    pub(crate) fn new(parameter: &str, source: serde_json::Error) -> Self {
        Self {
            parameter: parameter.to_owned(),
            source,
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// A property value could not be serialized.
#[derive(Debug, Display)]
#[display("can not encode {owner}.{key}: {source}")]
pub struct EncodeError {
    pub owner: &'static str,
    pub key: &'static str,
    source: serde_json::Error,
}
impl EncodeError {
    pub(crate) fn new(owner: &'static str, key: &'static str, source: serde_json::Error) -> Self {
        Self { owner, key, source }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Debug, Display)]
pub enum BindError {
    #[display("{0}")]
    ReadOnly(ReadOnlyBindingError),
    #[display("{0}")]
    Parse(ParseError),
    #[display("{0}")]
    Encode(EncodeError),
    #[display("{owner}.{key} is already bound")]
    AlreadyBound {
        owner: &'static str,
        key: &'static str,
    },
}

impl std::error::Error for BindError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BindError::ReadOnly(e) => Some(e),
            BindError::Parse(e) => Some(e),
            BindError::Encode(e) => Some(e),
            BindError::AlreadyBound { .. } => None,
        }
    }
}

impl From<ReadOnlyBindingError> for BindError {
    fn from(e: ReadOnlyBindingError) -> Self {
        BindError::ReadOnly(e)
    }
}
impl From<ParseError> for BindError {
    fn from(e: ParseError) -> Self {
        BindError::Parse(e)
    }
}
impl From<EncodeError> for BindError {
    fn from(e: EncodeError) -> Self {
        BindError::Encode(e)
    }
}
