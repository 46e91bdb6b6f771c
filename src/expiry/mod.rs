//! The single definition of the expiry day-count and its severity tiers.
//!
//! Every renderer and the alert builder go through these functions; the
//! 30/90-day boundaries live nowhere else.

use crate::model::ExpiryAlert;
use crate::store::DataStore;
use chrono::NaiveDate;

/// Certificates within this many days of expiry show up in the alert feed.
pub const DEFAULT_ALERT_WINDOW_DAYS: i64 = 180;

/// Alerts at or below this many days are split out as critical.
pub const CRITICAL_WINDOW_DAYS: i64 = 30;

const WARNING_WINDOW_DAYS: i64 = 90;

/// Whole days from `today` until `expiry`. `None` when the certificate never
/// expires; negative when the date is already past.
pub fn days_remaining(expiry: Option<NaiveDate>, today: NaiveDate) -> Option<i64> {
    expiry.map(|date| (date - today).num_days())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Neutral,
    Critical,
    Warning,
    Healthy,
}

/// Classification of an expiry day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    NeverExpires,
    Expired,
    ExpiresIn(i64),
}

impl ExpiryStatus {
    pub fn classify(days: Option<i64>) -> Self {
        match days {
            None => Self::NeverExpires,
            Some(d) if d < 0 => Self::Expired,
            Some(d) => Self::ExpiresIn(d),
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Self::NeverExpires => Severity::Neutral,
            Self::Expired => Severity::Critical,
            Self::ExpiresIn(d) if d <= CRITICAL_WINDOW_DAYS => Severity::Critical,
            Self::ExpiresIn(d) if d <= WARNING_WINDOW_DAYS => Severity::Warning,
            Self::ExpiresIn(_) => Severity::Healthy,
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::NeverExpires => "Never expires".to_string(),
            Self::Expired => "Expired".to_string(),
            Self::ExpiresIn(d) => format!("Expires in {d} days"),
        }
    }
}

/// Build the expiry alert feed: certificates with an expiry date at most
/// `window_days` out (negative counts included), ascending by days remaining.
pub fn expiry_alerts(store: &DataStore, today: NaiveDate, window_days: i64) -> Vec<ExpiryAlert> {
    let mut alerts: Vec<ExpiryAlert> = store
        .certificates
        .iter()
        .filter_map(|cert| {
            let expiry = cert.expiry_date?;
            let days = (expiry - today).num_days();
            if days > window_days {
                return None;
            }
            let user_name = store
                .user_by_id(&cert.user_id)
                .map_or_else(|| "Unknown User".to_string(), |user| user.name.clone());
            Some(ExpiryAlert {
                certificate_id: cert.id.clone(),
                certificate_name: cert.name.clone(),
                user_id: cert.user_id.clone(),
                user_name,
                expiry_date: expiry,
                days_remaining: days,
            })
        })
        .collect();

    alerts.sort_by_key(|alert| alert.days_remaining);
    alerts
}

/// Split an alert feed into (critical, upcoming) at the 30-day boundary.
pub fn split_critical(alerts: &[ExpiryAlert]) -> (Vec<&ExpiryAlert>, Vec<&ExpiryAlert>) {
    alerts
        .iter()
        .partition(|alert| alert.days_remaining <= CRITICAL_WINDOW_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn no_expiry_yields_none_and_neutral() {
        let today = day(2025, 6, 1);
        assert_eq!(days_remaining(None, today), None);

        let status = ExpiryStatus::classify(None);
        assert_eq!(status, ExpiryStatus::NeverExpires);
        assert_eq!(status.severity(), Severity::Neutral);
        assert_eq!(status.label(), "Never expires");
    }

    #[test]
    fn past_expiry_is_expired_with_negative_days() {
        let today = day(2025, 6, 1);
        let days = days_remaining(Some(day(2025, 5, 20)), today);
        assert_eq!(days, Some(-12));

        let status = ExpiryStatus::classify(days);
        assert_eq!(status, ExpiryStatus::Expired);
        assert_eq!(status.severity(), Severity::Critical);
        assert_eq!(status.label(), "Expired");
    }

    #[test]
    fn expiring_today_is_critical_at_zero_days() {
        let today = day(2025, 6, 1);
        let days = days_remaining(Some(today), today);
        assert_eq!(days, Some(0));
        assert_eq!(ExpiryStatus::classify(days).severity(), Severity::Critical);
    }

    #[test]
    fn critical_warning_boundary_sits_between_30_and_31() {
        assert_eq!(
            ExpiryStatus::classify(Some(30)).severity(),
            Severity::Critical
        );
        assert_eq!(
            ExpiryStatus::classify(Some(31)).severity(),
            Severity::Warning
        );
    }

    #[test]
    fn warning_healthy_boundary_sits_between_90_and_91() {
        assert_eq!(
            ExpiryStatus::classify(Some(90)).severity(),
            Severity::Warning
        );
        assert_eq!(
            ExpiryStatus::classify(Some(91)).severity(),
            Severity::Healthy
        );
    }

    #[test]
    fn expires_in_label_carries_day_count() {
        assert_eq!(
            ExpiryStatus::classify(Some(45)).label(),
            "Expires in 45 days"
        );
    }

    #[test]
    fn alert_feed_is_windowed_and_sorted_ascending() {
        let store = DataStore::seed();
        let today = day(2024, 6, 1);
        let alerts = expiry_alerts(&store, today, DEFAULT_ALERT_WINDOW_DAYS);

        assert!(!alerts.is_empty());
        assert!(
            alerts
                .iter()
                .all(|a| a.days_remaining <= DEFAULT_ALERT_WINDOW_DAYS)
        );
        assert!(
            alerts
                .windows(2)
                .all(|pair| pair[0].days_remaining <= pair[1].days_remaining)
        );

        // 2024-05-15 expiry is 17 days past on this date.
        let expired = alerts
            .iter()
            .find(|a| a.certificate_name == "Azure Administrator Associate")
            .unwrap();
        assert_eq!(expired.days_remaining, -17);
        assert_eq!(expired.user_name, "Alex Morgan");
    }

    #[test]
    fn alert_feed_skips_never_expiring_certificates() {
        let mut store = DataStore::seed();
        for cert in &mut store.certificates {
            cert.expiry_date = None;
        }
        let alerts = expiry_alerts(&store, day(2024, 6, 1), DEFAULT_ALERT_WINDOW_DAYS);
        assert!(alerts.is_empty());
    }

    #[test]
    fn unknown_owner_falls_back_to_placeholder_name() {
        let mut store = DataStore::seed();
        store.certificates[0].user_id = "999".into();
        let alerts = expiry_alerts(&store, day(2024, 6, 1), DEFAULT_ALERT_WINDOW_DAYS);
        assert!(alerts.iter().any(|a| a.user_name == "Unknown User"));
    }

    #[test]
    fn split_critical_partitions_at_thirty_days() {
        let store = DataStore::seed();
        let alerts = expiry_alerts(&store, day(2024, 6, 1), DEFAULT_ALERT_WINDOW_DAYS);
        let (critical, upcoming) = split_critical(&alerts);

        assert!(critical.iter().all(|a| a.days_remaining <= 30));
        assert!(upcoming.iter().all(|a| a.days_remaining > 30));
        assert_eq!(critical.len() + upcoming.len(), alerts.len());
    }
}
