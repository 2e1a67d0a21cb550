use std::collections::BTreeMap;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use callsheet_naming::names_match;

pub type StaffId = i64;

/// A press-office or festival staff member. Fixture-seeded and read-only in
/// practice; `permissions` are display hints, never enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    pub title: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: StaffRole,
    /// Module key to access level. An absent key means no access.
    #[serde(default)]
    pub permissions: BTreeMap<String, AccessLevel>,
}

impl StaffMember {
    pub fn matches_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    pub fn access(&self, module: &str) -> Option<AccessLevel> {
        self.permissions.get(module).copied()
    }

    pub fn can_edit(&self, module: &str) -> bool {
        self.access(module) == Some(AccessLevel::FullEdit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    PrTeam,
    FestivalStaff,
    Press,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    Read,
    FullEdit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_permission_key_means_no_access() {
        let json = r#"{
            "id": 4,
            "name": "Dana Ortiz",
            "title": "Publicity Coordinator",
            "email": "dana@festival.example",
            "role": "pr_team",
            "permissions": {"interviews": "full_edit", "screenings": "read"}
        }"#;
        let s: StaffMember = serde_json::from_str(json).unwrap();
        assert!(s.matches_name("dana ortiz"));
        assert!(s.can_edit("interviews"));
        assert_eq!(s.access("screenings"), Some(AccessLevel::Read));
        assert_eq!(s.access("travel"), None);
        assert!(!s.can_edit("travel"));
    }
}
