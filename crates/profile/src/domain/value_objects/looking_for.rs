// crates/profile/src/domain/value_objects/looking_for.rs

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use shared_kernel::errors::{DomainError, Field, FieldError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookingFor {
    Male,
    Female,
    #[default]
    Both,
}

impl LookingFor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Both => "both",
        }
    }
}

impl FromStr for LookingFor {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "both" => Ok(Self::Both),
            _ => Err(FieldError::invalid_format(Field::LookingFor).into()),
        }
    }
}

impl fmt::Display for LookingFor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
