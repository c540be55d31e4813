use crate::model::User;

/// Case-insensitive match on name, location or any skill. An empty term matches everyone.
pub fn user_matches(user: &User, term: &str) -> bool {
    let q = term.to_lowercase();
    if q.is_empty() {
        return true;
    }
    user.full_name.to_lowercase().contains(&q)
        || user.preferred_location.to_lowercase().contains(&q)
        || user
            .programming_skills
            .iter()
            .any(|s| s.to_lowercase().contains(&q))
}

/// Users matching `term`, in their original order.
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    users.iter().filter(|u| user_matches(u, term)).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn mk_user(id: i64, name: &str, location: &str, skills: &[&str]) -> User {
		User {
			id,
			full_name: name.to_string(),
			date_of_birth: "1990-01-01".to_string(),
			preferred_location: location.to_string(),
			programming_skills: skills.iter().map(|s| s.to_string()).collect(),
			resume_summary: String::new(),
		}
	}

	fn sample() -> Vec<User> {
		vec![
			mk_user(1, "John Doe", "Sydney", &["React", "TypeScript"]),
			mk_user(2, "Jane Smith", "Melbourne", &["Angular", "Java"]),
		]
	}

	#[test]
	fn search_by_name_keeps_only_matches() {
		let users = sample();
		let found = filter_users(&users, "John");
		assert_eq!(found.len(), 1);
		assert_eq!(found[0].full_name, "John Doe");
	}

	#[test]
	fn empty_term_matches_everyone() {
		let users = sample();
		assert_eq!(filter_users(&users, "").len(), 2);
	}

	#[test]
	fn search_by_location_or_skill_is_case_insensitive() {
		let users = sample();
		let found = filter_users(&users, "mELB");
		assert_eq!(found.len(), 1);
		assert_eq!(found[0].id, 2);

		let found = filter_users(&users, "typescript");
		assert_eq!(found.len(), 1);
		assert_eq!(found[0].id, 1);

		let found = filter_users(&users, "jav");
		assert_eq!(found.iter().map(|u| u.id).collect::<Vec<_>>(), vec![2]);
	}

	#[test]
	fn resume_summary_and_date_are_not_searched() {
		let mut users = sample();
		users[0].resume_summary = "Kubernetes wizard".to_string();
		assert!(filter_users(&users, "kubernetes").is_empty());
		assert!(filter_users(&users, "1990").is_empty());
	}

	#[test]
	fn filtering_leaves_the_collection_untouched() {
		let users = sample();
		let before = users.clone();
		let _ = filter_users(&users, "zzz");
		assert_eq!(users, before);
	}

	#[test]
	fn special_characters_are_literal() {
		let users = vec![mk_user(3, "Ann", "Perth", &["C#"])];
		assert_eq!(filter_users(&users, "c#").len(), 1);
		assert!(filter_users(&users, "[").is_empty());
	}
}
