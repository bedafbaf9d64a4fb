//! Leave data providers
//!
//! The API layer depends on the `LeaveProvider` trait only, so the sample
//! data below can be swapped for a real backing store without touching the
//! routing code.

use thiserror::Error;

use super::model::{LeaveRecord, LeaveType};

/// Errors raised while fetching leave records
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("leave data source unavailable: {0}")]
    Unavailable(String),
}

/// Capability: fetch the currently approved leave records
pub trait LeaveProvider: Send + Sync {
    fn approved_leaves(&self) -> Result<Vec<LeaveRecord>, ProviderError>;
}

/// Fixed sample data source for local development
///
/// Records are rebuilt on every call; nothing is cached or mutated between
/// requests.
pub struct SampleLeaveProvider;

impl LeaveProvider for SampleLeaveProvider {
    fn approved_leaves(&self) -> Result<Vec<LeaveRecord>, ProviderError> {
        Ok(vec![
            sample_record(
                1,
                "김철수",
                LeaveType::Annual,
                "2025-07-14",
                "2025-07-16",
                "full",
                "여름 휴가",
                "영업1팀",
                1,
                "강남지점",
                1,
            ),
            sample_record(
                2,
                "이영희",
                LeaveType::Welfare,
                "2025-07-21",
                "2025-07-21",
                "morning",
                "병원 진료",
                "마케팅팀",
                2,
                "강남지점",
                1,
            ),
            sample_record(
                3,
                "박민수",
                LeaveType::Annual,
                "2025-08-04",
                "2025-08-05",
                "full",
                "개인 사유",
                "개발팀",
                3,
                "판교지점",
                2,
            ),
        ])
    }
}

#[allow(clippy::too_many_arguments)]
fn sample_record(
    id: u32,
    user_name: &str,
    leave_type: LeaveType,
    start: &str,
    end: &str,
    half_type: &str,
    reason: &str,
    team_name: &str,
    team_id: u32,
    branch_name: &str,
    branch_id: u32,
) -> LeaveRecord {
    LeaveRecord {
        id,
        title: LeaveRecord::derive_title(user_name, leave_type),
        start: start.to_string(),
        end: end.to_string(),
        leave_type,
        half_type: half_type.to_string(),
        reason: reason.to_string(),
        user_name: user_name.to_string(),
        team_name: team_name.to_string(),
        branch_name: branch_name.to_string(),
        branch_id,
        team_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_data_shape() {
        let records = SampleLeaveProvider.approved_leaves().unwrap();
        assert_eq!(records.len(), 3);

        let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), records.len());
    }

    #[test]
    fn test_sample_data_date_order() {
        // ISO date strings: lexicographic order matches calendar order
        for record in SampleLeaveProvider.approved_leaves().unwrap() {
            assert!(
                record.start <= record.end,
                "record {} has start {} after end {}",
                record.id,
                record.start,
                record.end
            );
        }
    }

    #[test]
    fn test_sample_titles_match_names() {
        for record in SampleLeaveProvider.approved_leaves().unwrap() {
            assert_eq!(
                record.title,
                LeaveRecord::derive_title(&record.user_name, record.leave_type)
            );
        }
    }

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::Unavailable("backing store offline".to_string());
        assert_eq!(
            err.to_string(),
            "leave data source unavailable: backing store offline"
        );
    }
}
