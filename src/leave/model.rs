//! Leave record model
//!
//! Wire types returned by the `/api/leaves` endpoint. Field names match what
//! the calendar front-end reads out of the JSON payload, so they are part of
//! the API contract and must not be renamed.

use serde::{Deserialize, Serialize};

/// Kind of approved leave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    /// Statutory annual leave (연차)
    Annual,
    /// Company welfare leave (복지휴가)
    Welfare,
}

impl LeaveType {
    /// Korean display label, used when deriving the record title
    pub const fn label(self) -> &'static str {
        match self {
            Self::Annual => "연차",
            Self::Welfare => "복지휴가",
        }
    }
}

/// One approved leave-of-absence entry with employee/branch/team display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    pub id: u32,
    /// Display title, derived from the employee name and leave type label
    pub title: String,
    /// First day of leave (ISO `YYYY-MM-DD`)
    pub start: String,
    /// Last day of leave, inclusive (ISO `YYYY-MM-DD`)
    pub end: String,
    pub leave_type: LeaveType,
    /// Half-day indicator label (`full`, `morning` or `afternoon`)
    pub half_type: String,
    pub reason: String,
    pub user_name: String,
    pub team_name: String,
    pub branch_name: String,
    pub branch_id: u32,
    pub team_id: u32,
}

impl LeaveRecord {
    /// Derive the calendar display title for an employee and leave type
    pub fn derive_title(user_name: &str, leave_type: LeaveType) -> String {
        format!("{user_name} ({})", leave_type.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&LeaveType::Annual).unwrap(),
            r#""annual""#
        );
        assert_eq!(
            serde_json::to_string(&LeaveType::Welfare).unwrap(),
            r#""welfare""#
        );
    }

    #[test]
    fn test_derive_title() {
        assert_eq!(
            LeaveRecord::derive_title("김철수", LeaveType::Annual),
            "김철수 (연차)"
        );
        assert_eq!(
            LeaveRecord::derive_title("이영희", LeaveType::Welfare),
            "이영희 (복지휴가)"
        );
    }

    #[test]
    fn test_record_round_trips_with_wire_field_names() {
        let record = LeaveRecord {
            id: 7,
            title: LeaveRecord::derive_title("김철수", LeaveType::Annual),
            start: "2025-07-14".to_string(),
            end: "2025-07-16".to_string(),
            leave_type: LeaveType::Annual,
            half_type: "full".to_string(),
            reason: "여름 휴가".to_string(),
            user_name: "김철수".to_string(),
            team_name: "영업1팀".to_string(),
            branch_name: "강남지점".to_string(),
            branch_id: 1,
            team_id: 1,
        };

        let json = serde_json::to_string(&record).unwrap();
        for field in [
            "\"id\"",
            "\"title\"",
            "\"start\"",
            "\"end\"",
            "\"leave_type\"",
            "\"half_type\"",
            "\"reason\"",
            "\"user_name\"",
            "\"team_name\"",
            "\"branch_name\"",
            "\"branch_id\"",
            "\"team_id\"",
        ] {
            assert!(json.contains(field), "missing field {field} in {json}");
        }

        // serde_json writes UTF-8 directly, no \u escapes
        assert!(json.contains("김철수 (연차)"));

        let back: LeaveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
