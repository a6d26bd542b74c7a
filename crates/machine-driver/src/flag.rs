//! Flag descriptors published by a driver

use crate::options::OptionValue;

/// A flag the driver accepts, as rendered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    /// Contractual flag name (e.g. "image-id")
    pub name: &'static str,

    /// Environment variable the host reads when the flag is not given
    pub env_var: &'static str,

    /// One-line help text
    pub usage: &'static str,

    /// Value type and default
    pub kind: FlagKind,
}

/// Value type of a flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    String { default: &'static str },
    Bool,
    Int { default: i64 },
    StringList,
}

impl FlagKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            FlagKind::String { .. } => "string",
            FlagKind::Bool => "bool",
            FlagKind::Int { .. } => "int",
            FlagKind::StringList => "string list",
        }
    }
}

impl Flag {
    pub const fn string(
        name: &'static str,
        env_var: &'static str,
        usage: &'static str,
        default: &'static str,
    ) -> Self {
        Self {
            name,
            env_var,
            usage,
            kind: FlagKind::String { default },
        }
    }

    pub const fn bool(name: &'static str, env_var: &'static str, usage: &'static str) -> Self {
        Self {
            name,
            env_var,
            usage,
            kind: FlagKind::Bool,
        }
    }

    pub const fn int(
        name: &'static str,
        env_var: &'static str,
        usage: &'static str,
        default: i64,
    ) -> Self {
        Self {
            name,
            env_var,
            usage,
            kind: FlagKind::Int { default },
        }
    }

    pub const fn string_list(
        name: &'static str,
        env_var: &'static str,
        usage: &'static str,
    ) -> Self {
        Self {
            name,
            env_var,
            usage,
            kind: FlagKind::StringList,
        }
    }

    /// Value the host falls back to when the user did not set the flag
    pub fn default_value(&self) -> OptionValue {
        match self.kind {
            FlagKind::String { default } => OptionValue::String(default.to_string()),
            FlagKind::Bool => OptionValue::Bool(false),
            FlagKind::Int { default } => OptionValue::Int(default),
            FlagKind::StringList => OptionValue::StringList(Vec::new()),
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "--{} ({}, ${})", self.name, self.kind.type_name(), self.env_var)
    }
}
