use serde::{Deserialize, Serialize};

/// Direction of a time entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    CheckIn,
    CheckOut,
}

impl EntryKind {
    /// Accepts the CLI short forms (`in`, `out`) as well as the stored codes.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "in" | "check_in" => Some(Self::CheckIn),
            "out" | "check_out" => Some(Self::CheckOut),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntryKind::CheckIn => "check_in",
            EntryKind::CheckOut => "check_out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "check_in" => Some(EntryKind::CheckIn),
            "check_out" => Some(EntryKind::CheckOut),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::CheckIn => "IN",
            EntryKind::CheckOut => "OUT",
        }
    }

    pub fn is_check_in(&self) -> bool {
        matches!(self, EntryKind::CheckIn)
    }

    pub fn is_check_out(&self) -> bool {
        matches!(self, EntryKind::CheckOut)
    }
}
