//! Immutable in-memory data store. Seeded once per process; views never
//! write back to it.

mod seed;

use crate::model::{Certificate, Skill, User};

#[derive(Debug, Clone)]
pub struct DataStore {
    pub skills: Vec<Skill>,
    pub certificates: Vec<Certificate>,
    pub users: Vec<User>,
}

impl DataStore {
    /// Build a store from raw tables. Each user's certificate snapshot is
    /// derived from the certificate table here, never hand-maintained.
    pub fn new(skills: Vec<Skill>, certificates: Vec<Certificate>, mut users: Vec<User>) -> Self {
        for user in &mut users {
            user.certificates = certificates
                .iter()
                .filter(|cert| cert.user_id == user.id)
                .cloned()
                .collect();
        }
        Self {
            skills,
            certificates,
            users,
        }
    }

    /// The fixed sample dataset the dashboard ships with.
    pub fn seed() -> Self {
        seed::sample()
    }

    /// A copy of this store with a different certificate table, user
    /// snapshots rederived. Used to preview imported data; the shared store
    /// itself is never mutated.
    pub fn with_certificates(&self, certificates: Vec<Certificate>) -> Self {
        Self::new(self.skills.clone(), certificates, self.users.clone())
    }

    pub fn user_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn skill_by_name(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|skill| skill.name == name)
    }

    /// Distinct providers across the certificate table, in first-seen order.
    pub fn providers(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for cert in &self.certificates {
            if !seen.contains(&cert.provider.as_str()) {
                seen.push(cert.provider.as_str());
            }
        }
        seen
    }

    /// Distinct skill categories, in catalog order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for skill in &self.skills {
            if !seen.contains(&skill.category.as_str()) {
                seen.push(skill.category.as_str());
            }
        }
        seen
    }

    /// Distinct departments across the team, in roster order.
    pub fn departments(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for user in &self.users {
            if let Some(dept) = user.department.as_deref()
                && !seen.contains(&dept)
            {
                seen.push(dept);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_expected_shape() {
        let store = DataStore::seed();
        assert_eq!(store.skills.len(), 16);
        assert_eq!(store.certificates.len(), 9);
        assert_eq!(store.users.len(), 5);
    }

    #[test]
    fn user_snapshots_are_derived_from_certificate_table() {
        let store = DataStore::seed();
        let alex = store.user_by_id("1").unwrap();
        assert_eq!(alex.certificates.len(), 3);
        assert!(alex.certificates.iter().all(|cert| cert.user_id == "1"));
    }

    #[test]
    fn with_certificates_rederives_snapshots_without_touching_original() {
        let store = DataStore::seed();
        let trimmed = store.with_certificates(vec![store.certificates[0].clone()]);

        assert_eq!(trimmed.certificates.len(), 1);
        assert_eq!(trimmed.user_by_id("1").unwrap().certificates.len(), 1);
        assert!(trimmed.user_by_id("2").unwrap().certificates.is_empty());

        // Original untouched.
        assert_eq!(store.certificates.len(), 9);
        assert_eq!(store.user_by_id("1").unwrap().certificates.len(), 3);
    }

    #[test]
    fn distinct_helpers_deduplicate() {
        let store = DataStore::seed();

        let providers = store.providers();
        assert!(providers.contains(&"Microsoft"));
        assert_eq!(
            providers.iter().filter(|p| **p == "Microsoft").count(),
            1,
            "Microsoft issues two certificates but lists once"
        );

        let categories = store.categories();
        assert_eq!(categories.len(), 6);
        assert!(categories.contains(&"Cloud"));

        assert_eq!(store.departments().len(), 5);
    }

    #[test]
    fn lookups_miss_cleanly() {
        let store = DataStore::seed();
        assert!(store.user_by_id("999").is_none());
        assert!(store.skill_by_name("Underwater Basket Weaving").is_none());
    }
}
