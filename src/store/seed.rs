//! The fixed sample dataset: 16 skills, 9 certificates, 5 team members.

use super::DataStore;
use crate::model::{Certificate, Level, Skill, User};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid")
}

fn skill(id: &str, name: &str, category: &str, color: &str) -> Skill {
    Skill {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        color: color.into(),
    }
}

#[allow(clippy::too_many_arguments)]
fn certificate(
    id: &str,
    name: &str,
    provider: &str,
    issue_date: NaiveDate,
    expiry_date: Option<NaiveDate>,
    skills: &[&str],
    level: Level,
    user_id: &str,
    image: &str,
) -> Certificate {
    Certificate {
        id: id.into(),
        name: name.into(),
        provider: provider.into(),
        issue_date,
        expiry_date,
        skills: skills.iter().map(|s| (*s).to_string()).collect(),
        level,
        user_id: user_id.into(),
        image: Some(image.into()),
    }
}

fn user(id: &str, name: &str, email: &str, role: &str, avatar: &str, department: &str) -> User {
    User {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        role: role.into(),
        avatar: Some(avatar.into()),
        department: Some(department.into()),
        certificates: Vec::new(),
    }
}

pub(super) fn sample() -> DataStore {
    let skills = vec![
        skill("1", "Azure", "Cloud", "#0078D4"),
        skill("2", "AWS", "Cloud", "#FF9900"),
        skill("3", "GCP", "Cloud", "#4285F4"),
        skill("4", "Kubernetes", "DevOps", "#326CE5"),
        skill("5", "Docker", "DevOps", "#2496ED"),
        skill("6", "CI/CD", "DevOps", "#4B32C3"),
        skill("7", "Network Security", "Security", "#D13438"),
        skill("8", "Penetration Testing", "Security", "#881798"),
        skill("9", "SIEM", "Security", "#E74856"),
        skill("10", "Cisco Networking", "Networking", "#1BA0D7"),
        skill("11", "SD-WAN", "Networking", "#6264A7"),
        skill("12", "Network Automation", "Networking", "#4F6BED"),
        skill("13", "Windows Server", "Systems", "#0078D7"),
        skill("14", "Linux Administration", "Systems", "#F3CD00"),
        skill("15", "PowerShell", "Scripting", "#5391FE"),
        skill("16", "Python", "Scripting", "#3776AB"),
    ];

    let certificates = vec![
        certificate(
            "1",
            "Azure Administrator Associate",
            "Microsoft",
            date(2023, 5, 15),
            Some(date(2024, 5, 15)),
            &["Azure"],
            Level::Intermediate,
            "1",
            "https://learn.microsoft.com/en-us/media/learn/certification/badges/microsoft-certified-associate-badge.svg",
        ),
        certificate(
            "2",
            "AWS Solutions Architect Associate",
            "Amazon Web Services",
            date(2023, 3, 10),
            Some(date(2026, 3, 10)),
            &["AWS"],
            Level::Intermediate,
            "1",
            "https://d1.awsstatic.com/training-and-certification/certification-badges/AWS-Certified-Solutions-Architect-Associate_badge.3419559c682629072f1eb968d59dea0741772c0f.png",
        ),
        certificate(
            "3",
            "Certified Kubernetes Administrator",
            "Cloud Native Computing Foundation",
            date(2023, 1, 20),
            Some(date(2026, 1, 20)),
            &["Kubernetes", "Docker"],
            Level::Advanced,
            "2",
            "https://training.linuxfoundation.org/wp-content/uploads/2019/03/logo_cka_whitetext-300x293.png",
        ),
        certificate(
            "4",
            "Certified Information Systems Security Professional",
            "ISC2",
            date(2022, 11, 5),
            Some(date(2025, 11, 5)),
            &["Network Security", "Penetration Testing", "SIEM"],
            Level::Expert,
            "3",
            "https://www.isc2.org/-/media/ISC2/Certifications/Certification-Badges/CISSP-Badge.ashx",
        ),
        certificate(
            "5",
            "Cisco Certified Network Professional",
            "Cisco",
            date(2022, 9, 15),
            Some(date(2025, 9, 15)),
            &["Cisco Networking", "SD-WAN", "Network Automation"],
            Level::Advanced,
            "4",
            "https://images.credly.com/images/a31c0301-ff96-4cee-9435-0a4b40ce6e66/cisco_ccnp_enterprise.png",
        ),
        certificate(
            "6",
            "Microsoft 365 Certified: Enterprise Administrator Expert",
            "Microsoft",
            date(2023, 6, 20),
            Some(date(2024, 6, 20)),
            &["Azure", "Windows Server"],
            Level::Expert,
            "5",
            "https://learn.microsoft.com/en-us/media/learn/certification/badges/microsoft-certified-expert-badge.svg",
        ),
        certificate(
            "7",
            "CompTIA Security+",
            "CompTIA",
            date(2022, 7, 10),
            Some(date(2025, 7, 10)),
            &["Network Security"],
            Level::Intermediate,
            "3",
            "https://comptiacdn.azureedge.net/webcontent/images/default-source/siteicons/logosecurity.svg",
        ),
        certificate(
            "8",
            "Google Professional Cloud Architect",
            "Google Cloud",
            date(2023, 2, 28),
            Some(date(2025, 2, 28)),
            &["GCP"],
            Level::Advanced,
            "2",
            "https://cloud.google.com/images/certification/cloud-architect.png",
        ),
        certificate(
            "9",
            "Red Hat Certified Engineer",
            "Red Hat",
            date(2022, 12, 15),
            Some(date(2025, 12, 15)),
            &["Linux Administration"],
            Level::Advanced,
            "1",
            "https://www.redhat.com/cms/managed-files/RHCE-128.png",
        ),
    ];

    let users = vec![
        user(
            "1",
            "Alex Morgan",
            "alex.morgan@example.com",
            "Cloud Engineer",
            "https://randomuser.me/api/portraits/men/1.jpg",
            "Cloud Infrastructure",
        ),
        user(
            "2",
            "Jamie Taylor",
            "jamie.taylor@example.com",
            "DevOps Engineer",
            "https://randomuser.me/api/portraits/women/2.jpg",
            "Platform Engineering",
        ),
        user(
            "3",
            "Sam Chen",
            "sam.chen@example.com",
            "Security Analyst",
            "https://randomuser.me/api/portraits/men/3.jpg",
            "Security Operations",
        ),
        user(
            "4",
            "Morgan Lee",
            "morgan.lee@example.com",
            "Network Engineer",
            "https://randomuser.me/api/portraits/women/4.jpg",
            "Network Operations",
        ),
        user(
            "5",
            "Jordan Williams",
            "jordan.williams@example.com",
            "Systems Administrator",
            "https://randomuser.me/api/portraits/men/5.jpg",
            "IT Operations",
        ),
    ];

    DataStore::new(skills, certificates, users)
}
