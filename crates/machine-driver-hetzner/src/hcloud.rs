//! Hetzner Cloud API value types
//!
//! The driver does not talk to the API during the configuration pass; it only
//! needs the API's architecture names and its numeric id type.

use crate::error::HetznerError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Numeric id of an image, server, or SSH key. Zero means unset.
pub type ResourceId = i64;

/// CPU architecture filter for image and server type selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Architecture {
    /// No filter
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "arm")]
    Arm,
    #[serde(rename = "x86")]
    X86,
}

impl Architecture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::Unset => "",
            Architecture::Arm => "arm",
            Architecture::X86 => "x86",
        }
    }

    pub fn is_unset(&self) -> bool {
        *self == Architecture::Unset
    }
}

impl FromStr for Architecture {
    type Err = HetznerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Architecture::Unset),
            "arm" => Ok(Architecture::Arm),
            "x86" => Ok(Architecture::X86),
            other => Err(HetznerError::InvalidArchitecture(other.to_string())),
        }
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known() {
        assert_eq!("".parse::<Architecture>().unwrap(), Architecture::Unset);
        assert_eq!("arm".parse::<Architecture>().unwrap(), Architecture::Arm);
        assert_eq!("x86".parse::<Architecture>().unwrap(), Architecture::X86);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("ARM".parse::<Architecture>().is_err());
        assert!("x86_64".parse::<Architecture>().is_err());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Architecture::Unset).unwrap(), r#""""#);
        assert_eq!(serde_json::to_string(&Architecture::Arm).unwrap(), r#""arm""#);
        let arch: Architecture = serde_json::from_str(r#""x86""#).unwrap();
        assert_eq!(arch, Architecture::X86);
    }
}
