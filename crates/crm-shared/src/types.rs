//! Common types

use serde::{Deserialize, Serialize};

/// The backend's `"Y"`/`"N"` flag convention, typed.
///
/// Every entity carries at least a `useAt` flag in this form; keeping the
/// enum at the wire boundary avoids stringly-typed checks in domain code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YnFlag {
    Y,
    N,
}

impl YnFlag {
    pub fn is_yes(self) -> bool {
        matches!(self, YnFlag::Y)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            YnFlag::Y => "Y",
            YnFlag::N => "N",
        }
    }

    /// For serde defaults on flags that start out off (`is_won`, `is_lost`).
    pub fn default_no() -> Self {
        YnFlag::N
    }
}

impl Default for YnFlag {
    fn default() -> Self {
        YnFlag::Y
    }
}

impl From<bool> for YnFlag {
    fn from(value: bool) -> Self {
        if value {
            YnFlag::Y
        } else {
            YnFlag::N
        }
    }
}

impl std::fmt::Display for YnFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yn_flag_roundtrip() {
        let json = serde_json::to_string(&YnFlag::Y).unwrap();
        assert_eq!(json, "\"Y\"");
        let parsed: YnFlag = serde_json::from_str("\"N\"").unwrap();
        assert!(!parsed.is_yes());
    }

    #[test]
    fn test_yn_flag_from_bool() {
        assert_eq!(YnFlag::from(true), YnFlag::Y);
        assert_eq!(YnFlag::from(false), YnFlag::N);
    }
}
