use rbac_core::service::error::ValidationError;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Integer field that is accepted both as a number and as its decimal text,
/// so form posts and JSON bodies behave the same.
///
/// Values that are not integers are kept as [`IntegerInput::Invalid`] instead
/// of failing the whole body, leaving the report to field validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntegerInput {
    Valid(i32),
    Invalid(String),
}

impl IntegerInput {
    pub fn valid(self) -> Option<i32> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInteger {
    Number(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for IntegerInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawInteger::deserialize(deserializer)? {
            RawInteger::Number(value) => i32::try_from(value)
                .map(Self::Valid)
                .unwrap_or_else(|_| Self::Invalid(value.to_string())),
            RawInteger::Float(value) => Self::Invalid(value.to_string()),
            RawInteger::Text(text) => text
                .trim()
                .parse()
                .map(Self::Valid)
                .unwrap_or(Self::Invalid(text)),
            RawInteger::Other(_) => Self::Invalid("<unsupported value>".to_string()),
        })
    }
}

/// Text field which keeps non-string values as [`TextInput::Invalid`], so a
/// wrongly typed value is reported against the field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextInput {
    Valid(String),
    Invalid,
}

impl TextInput {
    pub fn valid(self) -> Option<String> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid => None,
        }
    }

    /// Absent stays absent, a non-string value is an invalid `field`
    pub fn into_field(
        input: Option<Self>,
        field: &'static str,
    ) -> Result<Option<String>, ValidationError> {
        input
            .map(|input| input.valid().ok_or(ValidationError::InvalidField(field)))
            .transpose()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for TextInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawText::deserialize(deserializer)? {
            RawText::Text(text) => Self::Valid(text),
            RawText::Other(_) => Self::Invalid,
        })
    }
}
