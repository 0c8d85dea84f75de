//! Model value object representing a Gemini model variant

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available Gemini models (Value Object)
///
/// Exactly two variants are offered: a fast/low-cost model and a
/// higher-quality one. There is no escape hatch for arbitrary model names;
/// an unrecognized identifier is a [`DomainError::UnknownModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    /// gemini-1.5-flash — fast, low cost
    Flash,
    /// gemini-1.5-pro — higher quality
    Pro,
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Flash => "gemini-1.5-flash",
            Model::Pro => "gemini-1.5-pro",
        }
    }

    /// All models offered to the operator, in menu order.
    pub fn all() -> [Model; 2] {
        [Model::Flash, Model::Pro]
    }
}

impl Default for Model {
    /// Returns the default model (gemini-1.5-flash)
    fn default() -> Self {
        Model::Flash
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gemini-1.5-flash" => Ok(Model::Flash),
            "gemini-1.5-pro" => Ok(Model::Pro),
            other => Err(DomainError::UnknownModel(other.to_string())),
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
