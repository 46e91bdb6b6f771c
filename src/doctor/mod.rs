//! Dataset diagnostics.
//!
//! The dashboard never enforced these invariants; doctor makes violations
//! visible without rejecting data. Advisory only: the command succeeds even
//! when checks fail.

use crate::store::DataStore;

pub fn run(store: &DataStore) {
    println!("🩺 certfolio doctor");
    let lines = check_lines(store);
    for line in &lines {
        println!("  {line}");
    }

    let failures = lines.iter().filter(|line| line.starts_with('❌')).count();
    if failures == 0 {
        println!("  All checks passed.");
    } else {
        println!("  {failures} check(s) failed.");
    }
}

/// One line per finding; a ✅ summary line per check family when clean.
pub fn check_lines(store: &DataStore) -> Vec<String> {
    let mut lines = Vec::new();

    // Issue date must precede expiry date when an expiry is present.
    let mut date_violations = 0_u32;
    for cert in &store.certificates {
        if let Some(expiry) = cert.expiry_date
            && cert.issue_date >= expiry
        {
            date_violations += 1;
            lines.push(format!(
                "❌ certificate '{}' issued {} but expires {}",
                cert.name, cert.issue_date, expiry
            ));
        }
    }
    if date_violations == 0 {
        lines.push("✅ all issue dates precede their expiry dates".to_string());
    }

    // Every certificate owner must resolve to a known user.
    let mut orphaned = 0_u32;
    for cert in &store.certificates {
        if store.user_by_id(&cert.user_id).is_none() {
            orphaned += 1;
            lines.push(format!(
                "❌ certificate '{}' owned by unknown user id '{}'",
                cert.name, cert.user_id
            ));
        }
    }
    if orphaned == 0 {
        lines.push("✅ all certificate owners resolve to team members".to_string());
    }

    // Every certificate skill must exist in the catalog.
    let mut unknown_skills = 0_u32;
    for cert in &store.certificates {
        for name in &cert.skills {
            if store.skill_by_name(name).is_none() {
                unknown_skills += 1;
                lines.push(format!(
                    "❌ certificate '{}' references unknown skill '{name}'",
                    cert.name
                ));
            }
        }
    }
    if unknown_skills == 0 {
        lines.push("✅ all certificate skills exist in the catalog".to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn seed_dataset_is_clean() {
        let store = DataStore::seed();
        let lines = check_lines(&store);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.starts_with('✅')));
    }

    #[test]
    fn inverted_dates_are_reported() {
        let mut store = DataStore::seed();
        store.certificates[0].expiry_date = NaiveDate::from_ymd_opt(2020, 1, 1);

        let lines = check_lines(&store);
        assert!(
            lines
                .iter()
                .any(|line| line.starts_with('❌') && line.contains("issued"))
        );
    }

    #[test]
    fn unknown_owner_is_reported() {
        let mut store = DataStore::seed();
        store.certificates[0].user_id = "999".into();

        let lines = check_lines(&store);
        assert!(lines.iter().any(|line| line.contains("unknown user id")));
    }

    #[test]
    fn unknown_skill_is_reported() {
        let mut store = DataStore::seed();
        store.certificates[0].skills.push("Fortran".into());

        let lines = check_lines(&store);
        assert!(
            lines
                .iter()
                .any(|line| line.contains("unknown skill 'Fortran'"))
        );
    }
}
