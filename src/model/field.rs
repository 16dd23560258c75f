use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A request field whose JSON value may not have the expected type.
///
/// Payload fields deserialize into `Invalid` instead of failing the whole body, so that a
/// wrong type can be reported against the field it was sent for.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput<T> {
    Valid(T),
    Invalid(Value),
}

impl<T> From<T> for FieldInput<T> {
    fn from(value: T) -> Self {
        Self::Valid(value)
    }
}

impl<'de, T> Deserialize<'de> for FieldInput<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        Ok(match T::deserialize(&value) {
            Ok(valid) => Self::Valid(valid),
            Err(_) => Self::Invalid(value),
        })
    }
}

impl<T: Serialize> Serialize for FieldInput<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Valid(value) => value.serialize(serializer),
            Self::Invalid(value) => value.serialize(serializer),
        }
    }
}
