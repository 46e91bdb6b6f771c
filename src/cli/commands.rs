use crate::model::Level;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// certfolio - certificate and skills tracking for teams.
#[derive(Parser, Debug)]
#[command(name = "certfolio")]
#[command(version = "0.1.0")]
#[command(about = "Track team certificates, skills, and expiry from the terminal.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the full dashboard (alerts, team overview, skill coverage)
    Dashboard,

    /// List, export, and import certificates
    Certs {
        #[command(subcommand)]
        cert_command: CertCommands,
    },

    /// Browse the team roster
    Team {
        #[command(subcommand)]
        team_command: TeamCommands,
    },

    /// Team-wide skill coverage
    Skills {
        #[command(subcommand)]
        skill_command: SkillCommands,
    },

    /// Certificates nearing or past expiry
    Alerts {
        /// Alert horizon in days (default from config)
        #[arg(long)]
        window: Option<i64>,
    },

    /// Sign in and out of the mock session
    Auth {
        #[command(subcommand)]
        auth_command: AuthCommands,
    },

    /// Check dataset invariants
    Doctor,
}

#[derive(Subcommand, Debug)]
pub enum CertCommands {
    /// List certificates, optionally filtered
    List {
        /// Case-insensitive substring match on name, provider, or skills
        #[arg(short, long)]
        search: Option<String>,

        /// Exact provider name
        #[arg(long)]
        provider: Option<String>,

        /// Proficiency tier (beginner, intermediate, advanced, expert)
        #[arg(long)]
        level: Option<Level>,

        /// Owning user id
        #[arg(long)]
        user: Option<String>,
    },

    /// Export the certificate list as a date-stamped JSON file
    Export {
        /// Target directory (default: current directory, ~ expanded)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate and preview certificates from a JSON file
    Import {
        /// JSON file holding an array of certificates
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum TeamCommands {
    /// List team members, optionally filtered
    List {
        /// Case-insensitive substring match on name, email, or role
        #[arg(short, long)]
        search: Option<String>,

        /// Exact department name
        #[arg(long)]
        department: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SkillCommands {
    /// Show the skill coverage matrix, descending by proficiency
    Matrix {
        /// Case-insensitive substring match on skill name
        #[arg(short, long)]
        search: Option<String>,

        /// Exact skill category
        #[arg(long)]
        category: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Sign in (mock; no credentials are validated)
    Login {
        /// Display name (prompted when omitted)
        #[arg(long)]
        name: Option<String>,

        /// Email (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
    },

    /// Sign out and clear all session state
    Logout,

    /// Show the current session
    Status,
}
