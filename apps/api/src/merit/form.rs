//! Form state — the five identity fields and the ordered merit entry list.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const MISSING_FIELDS_MESSAGE: &str = "모든 기본 정보를 입력해주세요!";
pub const NO_MERITS_MESSAGE: &str = "최소 한 개 이상의 공적사항을 입력해주세요!";

/// Identity and context of the person the merit statement is written for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub tenure: String,
}

impl FormInput {
    pub fn is_complete(&self) -> bool {
        [
            &self.name,
            &self.organization,
            &self.department,
            &self.position,
            &self.tenure,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

/// Ordered achievement entries. Never empty: at least one input slot always exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeritEntries {
    entries: Vec<String>,
}

impl Default for MeritEntries {
    fn default() -> Self {
        Self {
            entries: vec![String::new()],
        }
    }
}

impl MeritEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_entry(&mut self) {
        self.entries.push(String::new());
    }

    /// No-op when only one entry is left.
    pub fn remove_last_entry(&mut self) {
        if self.entries.len() > 1 {
            self.entries.pop();
        }
    }

    /// Replaces the stored values with the latest edits, keeping order and length.
    pub fn sync(&mut self, values: Vec<String>) {
        self.entries = values;
        if self.entries.is_empty() {
            self.entries.push(String::new());
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Trimmed, non-empty entries in input order.
    pub fn filled_entries(&self) -> Vec<&str> {
        filled(&self.entries)
    }
}

pub(crate) fn filled(values: &[String]) -> Vec<&str> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Checks the submission preconditions. No generation call may be made when this fails.
pub fn validate_submission(form: &FormInput, entries: &[String]) -> Result<(), AppError> {
    if !form.is_complete() {
        return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    }
    if filled(entries).is_empty() {
        return Err(AppError::Validation(NO_MERITS_MESSAGE.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merit::fixtures::complete_form;

    fn entries_of(values: Vec<String>) -> MeritEntries {
        let mut entries = MeritEntries::new();
        entries.sync(values);
        entries
    }

    #[test]
    fn test_new_entries_start_with_one_empty_slot() {
        let entries = MeritEntries::new();
        assert_eq!(entries.entries(), &[String::new()]);
    }

    #[test]
    fn test_append_adds_empty_entry_at_end() {
        let mut entries = entries_of(vec!["a".to_string()]);
        entries.append_entry();
        assert_eq!(entries.entries(), &["a".to_string(), String::new()]);
    }

    #[test]
    fn test_remove_last_never_empties_the_list() {
        let mut entries = MeritEntries::new();
        entries.remove_last_entry();
        entries.remove_last_entry();
        assert_eq!(entries.entries().len(), 1);
    }

    #[test]
    fn test_any_append_remove_sequence_keeps_at_least_one() {
        // Deterministic pseudo-random walk over append/remove.
        let mut entries = MeritEntries::new();
        let mut seed: u32 = 7;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            if (seed >> 16) % 3 == 0 {
                entries.append_entry();
            } else {
                entries.remove_last_entry();
            }
            assert!(entries.entries().len() >= 1);
        }
    }

    #[test]
    fn test_remove_last_drops_only_the_tail() {
        let mut entries =
            entries_of(vec!["first".to_string(), "second".to_string()]);
        entries.remove_last_entry();
        assert_eq!(entries.entries(), &["first".to_string()]);
    }

    #[test]
    fn test_sync_then_read_returns_same_sequence() {
        let values = vec![
            "2019년 시스템 구축".to_string(),
            String::new(),
            "2021년 표창".to_string(),
        ];
        let mut entries = MeritEntries::new();
        entries.sync(values.clone());
        assert_eq!(entries.entries(), values.as_slice());
    }

    #[test]
    fn test_sync_with_nothing_keeps_one_slot() {
        let mut entries = entries_of(vec!["x".to_string()]);
        entries.sync(Vec::new());
        assert_eq!(entries.entries(), &[String::new()]);
    }

    #[test]
    fn test_filled_entries_trim_and_skip_blanks() {
        let entries = entries_of(vec![
            "  one ".to_string(),
            "   ".to_string(),
            "two".to_string(),
        ]);
        assert_eq!(entries.filled_entries(), vec!["one", "two"]);
    }

    #[test]
    fn test_validate_requires_every_field() {
        let mut form = complete_form();
        form.tenure = "  ".to_string();
        let err = validate_submission(&form, &["merit".to_string()]).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == MISSING_FIELDS_MESSAGE));
    }

    #[test]
    fn test_validate_requires_one_filled_merit() {
        let err =
            validate_submission(&complete_form(), &[String::new(), " ".to_string()]).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == NO_MERITS_MESSAGE));
    }

    #[test]
    fn test_validate_accepts_complete_submission() {
        assert!(validate_submission(&complete_form(), &["2020년 프로젝트 완료".to_string()]).is_ok());
    }
}
