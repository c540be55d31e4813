//! Candidate records exchanged with the careers API.

use serde::{Deserialize, Serialize};

/// Cities a candidate can pick as their preferred location.
pub const LOCATIONS: [&str; 5] = ["Sydney", "Melbourne", "Brisbane", "Adelaide", "Perth"];

/// Skills offered by the registration form.
pub const PROGRAMMING_SKILLS: [&str; 6] = ["React", "Angular", "C#", "Java", "Ruby", "Python"];

pub const FULL_NAME_MAX: usize = 50;
pub const RESUME_SUMMARY_MAX: usize = 250;

/// A registered candidate as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub date_of_birth: String,
    pub preferred_location: String,
    #[serde(default)]
    pub programming_skills: Vec<String>,
    pub resume_summary: String,
}

/// Unsaved registration form state; serialized verbatim as the create payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub full_name: String,
    pub date_of_birth: String,
    pub preferred_location: String,
    pub programming_skills: Vec<String>,
    pub resume_summary: String,
}

impl Draft {
    /// Add `skill` when absent, remove it when present.
    pub fn toggle_skill(&mut self, skill: &str) {
        if let Some(pos) = self.programming_skills.iter().position(|s| s == skill) {
            self.programming_skills.remove(pos);
        } else {
            self.programming_skills.push(skill.to_string());
        }
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.programming_skills.iter().any(|s| s == skill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_skill_adds_then_removes() {
        let mut draft = Draft::default();
        draft.toggle_skill("React");
        draft.toggle_skill("Java");
        assert_eq!(draft.programming_skills, vec!["React", "Java"]);
        draft.toggle_skill("React");
        assert_eq!(draft.programming_skills, vec!["Java"]);
        assert!(!draft.has_skill("React"));
    }

    #[test]
    fn draft_serializes_with_camel_case_fields() {
        let draft = Draft {
            full_name: "Test User".into(),
            date_of_birth: "1990-01-01".into(),
            preferred_location: "Sydney".into(),
            programming_skills: vec!["React".into()],
            resume_summary: "Test summary".into(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fullName": "Test User",
                "dateOfBirth": "1990-01-01",
                "preferredLocation": "Sydney",
                "programmingSkills": ["React"],
                "resumeSummary": "Test summary"
            })
        );
    }

    #[test]
    fn user_accepts_skills_outside_the_form_list() {
        let user: User = serde_json::from_str(
            r#"{"id":1,"fullName":"John Doe","dateOfBirth":"1990-01-01","preferredLocation":"Sydney","programmingSkills":["React","TypeScript"],"resumeSummary":"Experienced developer"}"#,
        )
        .unwrap();
        assert_eq!(user.programming_skills, vec!["React", "TypeScript"]);
    }
}
