//! Registration draft validation.
//!
//! [`validate`] is pure: it maps a [`Draft`] to the set of failing fields and
//! their messages. An empty map means the draft may be submitted.

use std::collections::BTreeMap;

use crate::model::{Draft, FULL_NAME_MAX, RESUME_SUMMARY_MAX};

/// Draft fields that carry validation rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    DateOfBirth,
    PreferredLocation,
    ProgrammingSkills,
    ResumeSummary,
}

impl Field {
    /// Wire name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::DateOfBirth => "dateOfBirth",
            Field::PreferredLocation => "preferredLocation",
            Field::ProgrammingSkills => "programmingSkills",
            Field::ResumeSummary => "resumeSummary",
        }
    }
}

pub type ValidationErrors = BTreeMap<Field, &'static str>;

pub fn validate(draft: &Draft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let name_len = draft.full_name.chars().count();
    if name_len == 0 {
        errors.insert(Field::FullName, "Full name is required");
    } else if name_len > FULL_NAME_MAX {
        errors.insert(Field::FullName, "Name must be less than 50 characters");
    }

    if draft.date_of_birth.is_empty() {
        errors.insert(Field::DateOfBirth, "Date of birth is required");
    }

    if draft.preferred_location.is_empty() {
        errors.insert(Field::PreferredLocation, "Preferred location is required");
    }

    if draft.programming_skills.is_empty() {
        errors.insert(
            Field::ProgrammingSkills,
            "Select at least one programming skill",
        );
    }

    let summary_len = draft.resume_summary.chars().count();
    if summary_len == 0 {
        errors.insert(Field::ResumeSummary, "Resume summary is required");
    } else if summary_len > RESUME_SUMMARY_MAX {
        errors.insert(
            Field::ResumeSummary,
            "Resume summary must be less than 250 characters",
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> Draft {
        Draft {
            full_name: "Test User".into(),
            date_of_birth: "1990-01-01".into(),
            preferred_location: "Sydney".into(),
            programming_skills: vec!["React".into()],
            resume_summary: "Test summary".into(),
        }
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let errors = validate(&Draft::default());
        assert_eq!(errors.len(), 5);
        assert_eq!(errors[&Field::FullName], "Full name is required");
        assert_eq!(errors[&Field::DateOfBirth], "Date of birth is required");
        assert_eq!(
            errors[&Field::PreferredLocation],
            "Preferred location is required"
        );
        assert_eq!(
            errors[&Field::ProgrammingSkills],
            "Select at least one programming skill"
        );
        assert_eq!(errors[&Field::ResumeSummary], "Resume summary is required");
    }

    #[test]
    fn length_limits_are_inclusive() {
        let mut draft = valid_draft();
        draft.full_name = "a".repeat(50);
        draft.resume_summary = "b".repeat(250);
        assert!(validate(&draft).is_empty());

        draft.full_name.push('a');
        draft.resume_summary.push('b');
        let errors = validate(&draft);
        assert_eq!(errors[&Field::FullName], "Name must be less than 50 characters");
        assert_eq!(
            errors[&Field::ResumeSummary],
            "Resume summary must be less than 250 characters"
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let mut draft = valid_draft();
        draft.full_name = "é".repeat(50);
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn date_of_birth_is_not_range_checked() {
        let mut draft = valid_draft();
        draft.date_of_birth = "2999-12-31".into();
        assert!(validate(&draft).is_empty());
    }
}
