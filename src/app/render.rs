//! Terminal renderers for every view. Each returns plain lines so the
//! output can be asserted on; `dispatch` does the printing.

use crate::expiry::{self, ExpiryStatus};
use crate::model::{Certificate, ExpiryAlert, SkillCoverage, User};
use crate::store::DataStore;
use crate::ui::style;
use crate::views;
use chrono::NaiveDate;

const BAR_WIDTH: usize = 20;

fn expiry_line(cert: &Certificate, today: NaiveDate) -> String {
    let status = ExpiryStatus::classify(expiry::days_remaining(cert.expiry_date, today));
    style::severity(status.label(), status.severity())
}

/// One block per certificate: name, provider, skills, level, owner, expiry.
pub fn certificates(certs: &[&Certificate], store: &DataStore, today: NaiveDate) -> Vec<String> {
    if certs.is_empty() {
        return vec![style::dim("No certificates match your search")];
    }

    let mut lines = Vec::new();
    for cert in certs {
        let owner = store
            .user_by_id(&cert.user_id)
            .map_or("Unknown User", |user| user.name.as_str());
        lines.push(format!(
            "{} {}",
            style::header(&cert.name),
            style::dim(format!("[{}]", cert.level))
        ));
        lines.push(format!(
            "  {} · issued {} · {}",
            cert.provider,
            cert.issue_date,
            expiry_line(cert, today)
        ));
        lines.push(format!(
            "  {} · skills: {}",
            style::dim(owner),
            cert.skills.join(", ")
        ));
    }
    lines
}

/// One block per team member with their certificate snapshot.
pub fn team(members: &[&User]) -> Vec<String> {
    if members.is_empty() {
        return vec![style::dim("No team members match your search")];
    }

    let mut lines = Vec::new();
    for user in members {
        let department = user.department.as_deref().unwrap_or("—");
        lines.push(format!(
            "{} {}",
            style::header(&user.name),
            style::dim(format!("<{}>", user.email))
        ));
        lines.push(format!(
            "  {} · {department} · {} certificate(s)",
            user.role,
            user.certificates.len()
        ));
    }
    lines
}

fn bar(percent: u8) -> String {
    let filled = usize::from(percent) * BAR_WIDTH / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Skill coverage rows as horizontal bars.
pub fn coverage(rows: &[SkillCoverage]) -> Vec<String> {
    if rows.is_empty() {
        return vec![style::dim("No skills match your search criteria")];
    }

    let width = rows.iter().map(|row| row.skill.len()).max().unwrap_or(0);
    rows.iter()
        .map(|row| {
            format!(
                "{:width$}  {} {:>3}%  {} member(s) · {}",
                row.skill,
                bar(row.percent),
                row.percent,
                row.count,
                style::dim(&row.category),
            )
        })
        .collect()
}

fn alert_line(alert: &ExpiryAlert) -> String {
    let status = ExpiryStatus::classify(Some(alert.days_remaining));
    format!(
        "{} — {} ({}) · {}",
        style::severity(status.label(), status.severity()),
        alert.certificate_name,
        alert.user_name,
        style::dim(alert.expiry_date.to_string()),
    )
}

/// The alert feed, critical certificates first.
pub fn alerts(feed: &[ExpiryAlert]) -> Vec<String> {
    if feed.is_empty() {
        return vec![style::value("No certificates near expiry")];
    }

    let (critical, upcoming) = expiry::split_critical(feed);
    let mut lines = Vec::new();

    if !critical.is_empty() {
        lines.push(style::critical("Needs attention"));
        lines.extend(
            critical
                .into_iter()
                .map(|alert| format!("  {}", alert_line(alert))),
        );
    }
    if !upcoming.is_empty() {
        lines.push(style::header("Upcoming"));
        lines.extend(
            upcoming
                .into_iter()
                .map(|alert| format!("  {}", alert_line(alert))),
        );
    }
    lines
}

/// The composite dashboard: stats, alerts, top team members, top coverage.
pub fn dashboard(
    store: &DataStore,
    today: NaiveDate,
    window_days: i64,
    rows: usize,
) -> Vec<String> {
    let mut lines = vec![
        style::header("certfolio dashboard"),
        format!(
            "{} certificates · {} team members · {} skills tracked",
            store.certificates.len(),
            store.users.len(),
            store.skills.len()
        ),
        String::new(),
        style::accent("Expiry alerts"),
    ];

    let feed = expiry::expiry_alerts(store, today, window_days);
    lines.extend(alerts(&feed));

    lines.push(String::new());
    lines.push(style::accent("Most certified"));
    for user in views::top_by_certificates(store, rows) {
        lines.push(format!(
            "  {} · {} certificate(s)",
            user.name,
            user.certificates.len()
        ));
    }

    lines.push(String::new());
    lines.push(style::accent("Skill coverage"));
    let top: Vec<SkillCoverage> = views::CoverageQuery::default()
        .run(store)
        .into_iter()
        .take(rows)
        .collect();
    lines.extend(coverage(&top).into_iter().map(|line| format!("  {line}")));

    lines
}
