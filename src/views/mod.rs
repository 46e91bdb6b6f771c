//! Stateless aggregate views: filter, sort, and coverage derivation over an
//! immutable [`DataStore`]. Pure functions, no side effects.

use crate::model::{Certificate, Level, SkillCoverage, User};
use crate::store::DataStore;
use std::collections::BTreeMap;

fn matches_search(haystacks: &[&str], needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    haystacks
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Certificate list filter. `None` on an equality field means "all".
#[derive(Debug, Clone, Default)]
pub struct CertificateQuery {
    pub search: Option<String>,
    pub provider: Option<String>,
    pub level: Option<Level>,
    pub user_id: Option<String>,
}

impl CertificateQuery {
    fn matches(&self, cert: &Certificate) -> bool {
        let search_ok = self.search.as_deref().is_none_or(|term| {
            let mut fields: Vec<&str> = vec![cert.name.as_str(), cert.provider.as_str()];
            fields.extend(cert.skills.iter().map(String::as_str));
            matches_search(&fields, term)
        });

        search_ok
            && self
                .provider
                .as_deref()
                .is_none_or(|provider| cert.provider == provider)
            && self.level.is_none_or(|level| cert.level == level)
            && self
                .user_id
                .as_deref()
                .is_none_or(|user_id| cert.user_id == user_id)
    }

    pub fn run<'a>(&self, store: &'a DataStore) -> Vec<&'a Certificate> {
        store
            .certificates
            .iter()
            .filter(|cert| self.matches(cert))
            .collect()
    }
}

/// Team roster filter: search across name/email/role, optional department.
#[derive(Debug, Clone, Default)]
pub struct TeamQuery {
    pub search: Option<String>,
    pub department: Option<String>,
}

impl TeamQuery {
    fn matches(&self, user: &User) -> bool {
        let search_ok = self
            .search
            .as_deref()
            .is_none_or(|term| {
                matches_search(
                    &[user.name.as_str(), user.email.as_str(), user.role.as_str()],
                    term,
                )
            });

        search_ok
            && self
                .department
                .as_deref()
                .is_none_or(|dept| user.department.as_deref() == Some(dept))
    }

    pub fn run<'a>(&self, store: &'a DataStore) -> Vec<&'a User> {
        store
            .users
            .iter()
            .filter(|user| self.matches(user))
            .collect()
    }
}

/// Team members holding the most certificates, descending, at most `n`.
pub fn top_by_certificates(store: &DataStore, n: usize) -> Vec<&User> {
    let mut users: Vec<&User> = store.users.iter().collect();
    users.sort_by(|a, b| b.certificates.len().cmp(&a.certificates.len()));
    users.truncate(n);
    users
}

/// Derive the full skill coverage table from the certificate table. One row
/// per catalog skill with at least one holder; catalog order.
///
/// Proficiency percent is the mean of each holder's best level for the skill
/// (beginner 25 / intermediate 50 / advanced 75 / expert 100).
pub fn skill_coverage(store: &DataStore) -> Vec<SkillCoverage> {
    store
        .skills
        .iter()
        .filter_map(|skill| {
            // Best level per holder, keyed by user id for stable ordering.
            let mut best: BTreeMap<&str, Level> = BTreeMap::new();
            for cert in &store.certificates {
                if cert.skills.iter().any(|name| *name == skill.name) {
                    best.entry(&cert.user_id)
                        .and_modify(|level| *level = (*level).max(cert.level))
                        .or_insert(cert.level);
                }
            }
            if best.is_empty() {
                return None;
            }

            let total: u32 = best.values().map(|level| u32::from(level.percent())).sum();
            let count = best.len();
            #[allow(clippy::cast_possible_truncation)]
            let percent = (total / count as u32) as u8;

            Some(SkillCoverage {
                skill: skill.name.clone(),
                category: skill.category.clone(),
                count,
                percent,
                user_ids: best.keys().map(|id| (*id).to_string()).collect(),
            })
        })
        .collect()
}

/// Coverage table filter; results sorted descending by proficiency percent,
/// name ascending on ties.
#[derive(Debug, Clone, Default)]
pub struct CoverageQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl CoverageQuery {
    pub fn run(&self, store: &DataStore) -> Vec<SkillCoverage> {
        let mut rows: Vec<SkillCoverage> = skill_coverage(store)
            .into_iter()
            .filter(|row| {
                self.search
                    .as_deref()
                    .is_none_or(|term| matches_search(&[row.skill.as_str()], term))
                    && self
                        .category
                        .as_deref()
                        .is_none_or(|category| row.category == category)
            })
            .collect();

        rows.sort_by(|a, b| b.percent.cmp(&a.percent).then(a.skill.cmp(&b.skill)));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certificate_search_spans_name_provider_and_skills() {
        let store = DataStore::seed();

        let by_name = CertificateQuery {
            search: Some("kubernetes".into()),
            ..Default::default()
        };
        assert_eq!(by_name.run(&store).len(), 1);

        let by_provider = CertificateQuery {
            search: Some("comptia".into()),
            ..Default::default()
        };
        assert_eq!(by_provider.run(&store)[0].name, "CompTIA Security+");

        // "docker" appears only in cert 3's skill list, not its name.
        let by_skill = CertificateQuery {
            search: Some("docker".into()),
            ..Default::default()
        };
        assert_eq!(by_skill.run(&store)[0].id, "3");
    }

    #[test]
    fn certificate_filters_are_conjunctive() {
        let store = DataStore::seed();
        let query = CertificateQuery {
            provider: Some("Microsoft".into()),
            level: Some(Level::Expert),
            ..Default::default()
        };
        let hits = query.run(&store);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "6");
    }

    #[test]
    fn empty_query_returns_everything() {
        let store = DataStore::seed();
        assert_eq!(CertificateQuery::default().run(&store).len(), 9);
        assert_eq!(TeamQuery::default().run(&store).len(), 5);
    }

    #[test]
    fn unmatched_search_returns_nothing() {
        let store = DataStore::seed();
        let query = CertificateQuery {
            search: Some("no such certificate".into()),
            ..Default::default()
        };
        assert!(query.run(&store).is_empty());
    }

    #[test]
    fn team_search_spans_name_email_and_role() {
        let store = DataStore::seed();

        let by_email = TeamQuery {
            search: Some("jamie.taylor@".into()),
            ..Default::default()
        };
        assert_eq!(by_email.run(&store)[0].name, "Jamie Taylor");

        let by_role = TeamQuery {
            search: Some("security analyst".into()),
            ..Default::default()
        };
        assert_eq!(by_role.run(&store)[0].name, "Sam Chen");
    }

    #[test]
    fn team_department_filter_is_exact() {
        let store = DataStore::seed();
        let query = TeamQuery {
            department: Some("Network Operations".into()),
            ..Default::default()
        };
        let hits = query.run(&store);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Morgan Lee");
    }

    #[test]
    fn top_by_certificates_sorts_descending_and_truncates() {
        let store = DataStore::seed();
        let top = top_by_certificates(&store, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, "1", "Alex Morgan holds three certificates");
        assert!(top[0].certificates.len() >= top[1].certificates.len());
    }

    #[test]
    fn coverage_counts_holders_once_per_skill() {
        let store = DataStore::seed();
        let rows = skill_coverage(&store);

        let azure = rows.iter().find(|row| row.skill == "Azure").unwrap();
        assert_eq!(azure.count, 2);
        assert_eq!(azure.user_ids, vec!["1", "5"]);
        // intermediate (50) + expert (100) averaged.
        assert_eq!(azure.percent, 75);

        // Sam Chen holds Network Security through two certificates; only the
        // best level counts and the holder counts once.
        let netsec = rows
            .iter()
            .find(|row| row.skill == "Network Security")
            .unwrap();
        assert_eq!(netsec.count, 1);
        assert_eq!(netsec.percent, 100);
    }

    #[test]
    fn coverage_omits_skills_without_holders() {
        let store = DataStore::seed();
        let rows = skill_coverage(&store);
        assert!(rows.iter().all(|row| row.skill != "Python"));
        assert!(rows.iter().all(|row| row.count > 0));
    }

    #[test]
    fn coverage_tracks_certificate_table() {
        let store = DataStore::seed();
        let trimmed = store.with_certificates(
            store
                .certificates
                .iter()
                .filter(|cert| cert.id != "3")
                .cloned()
                .collect(),
        );
        let rows = skill_coverage(&trimmed);
        assert!(rows.iter().all(|row| row.skill != "Kubernetes"));
    }

    #[test]
    fn coverage_query_sorts_by_percent_descending() {
        let store = DataStore::seed();
        let rows = CoverageQuery::default().run(&store);
        assert!(
            rows.windows(2)
                .all(|pair| pair[0].percent >= pair[1].percent)
        );
    }

    #[test]
    fn coverage_query_filters_category_and_search() {
        let store = DataStore::seed();

        let cloud = CoverageQuery {
            category: Some("Cloud".into()),
            ..Default::default()
        };
        let rows = cloud.run(&store);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.category == "Cloud"));

        let search = CoverageQuery {
            search: Some("sd-wan".into()),
            ..Default::default()
        };
        assert_eq!(search.run(&store).len(), 1);
    }
}
