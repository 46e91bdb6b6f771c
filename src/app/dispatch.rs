use crate::cli::{AuthCommands, CertCommands, Cli, Commands, SkillCommands, TeamCommands};
use crate::config::Config;
use crate::session::{SessionContext, SessionStatus};
use crate::store::DataStore;
use crate::transfer;
use crate::ui::style;
use crate::views::{CertificateQuery, CoverageQuery, TeamQuery};
use crate::{app::render, doctor, expiry};
use anyhow::{Context, Result, bail};
use chrono::Local;
use dialoguer::Input;
use std::path::PathBuf;

pub fn dispatch(cli: Cli, config: &Config) -> Result<()> {
    if !config.display.color {
        console::set_colors_enabled(false);
    }

    let store = DataStore::seed();
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Dashboard => {
            let session = SessionContext::new(config);
            let SessionStatus::SignedIn(profile) = session.status()? else {
                bail!("Not signed in. Run: certfolio auth login");
            };

            println!("{}", style::dim(format!("signed in as {}", profile.email)));
            for line in render::dashboard(
                &store,
                today,
                config.alert_window_days,
                config.display.dashboard_rows,
            ) {
                println!("{line}");
            }
        }

        Commands::Certs { cert_command } => match cert_command {
            CertCommands::List {
                search,
                provider,
                level,
                user,
            } => {
                let query = CertificateQuery {
                    search,
                    provider,
                    level,
                    user_id: user,
                };
                let hits = query.run(&store);
                for line in render::certificates(&hits, &store, today) {
                    println!("{line}");
                }
            }

            CertCommands::Export { output } => {
                let dir = output.map_or_else(
                    || PathBuf::from("."),
                    |raw| PathBuf::from(shellexpand::tilde(&raw).into_owned()),
                );
                let path = transfer::export_certificates(&store.certificates, &dir, today)
                    .context("Export failed")?;
                println!(
                    "{} {}",
                    style::success("Exported"),
                    style::value(path.display())
                );
            }

            CertCommands::Import { file } => {
                let report = transfer::import_certificates(&file)
                    .with_context(|| format!("Import failed: {}", file.display()))?;

                println!(
                    "{} {} certificate(s), {} skipped",
                    style::success("Imported"),
                    report.certificates.len(),
                    report.skipped
                );
                for reason in &report.reasons {
                    println!("  {}", style::yellow(reason));
                }

                // Preview only: imported records never reach the shared store.
                let refs: Vec<_> = report.certificates.iter().collect();
                for line in render::certificates(&refs, &store, today) {
                    println!("{line}");
                }
            }
        },

        Commands::Team { team_command } => match team_command {
            TeamCommands::List { search, department } => {
                let query = TeamQuery { search, department };
                for line in render::team(&query.run(&store)) {
                    println!("{line}");
                }
            }
        },

        Commands::Skills { skill_command } => match skill_command {
            SkillCommands::Matrix { search, category } => {
                let query = CoverageQuery { search, category };
                for line in render::coverage(&query.run(&store)) {
                    println!("{line}");
                }
            }
        },

        Commands::Alerts { window } => {
            let window_days = window.unwrap_or(config.alert_window_days);
            let feed = expiry::expiry_alerts(&store, today, window_days);
            for line in render::alerts(&feed) {
                println!("{line}");
            }
        }

        Commands::Auth { auth_command } => run_auth(auth_command, config)?,

        Commands::Doctor => doctor::run(&store),
    }

    Ok(())
}

fn run_auth(command: AuthCommands, config: &Config) -> Result<()> {
    let session = SessionContext::new(config);

    match command {
        AuthCommands::Login { name, email } => {
            let name = match name {
                Some(name) => name,
                None => Input::<String>::new()
                    .with_prompt("Name")
                    .default("Alex Morgan".into())
                    .interact_text()?,
            };
            let email = match email {
                Some(email) => email,
                None => Input::<String>::new()
                    .with_prompt("Email")
                    .default("alex.morgan@example.com".into())
                    .interact_text()?,
            };

            let profile = session.sign_in(&name, &email)?;
            println!(
                "{} as {}",
                style::success("Signed in"),
                style::value(profile.email)
            );
        }

        AuthCommands::Logout => {
            session.sign_out()?;
            println!("{}", style::success("Signed out"));
        }

        AuthCommands::Status => match session.status()? {
            SessionStatus::SignedIn(profile) => {
                println!(
                    "{} {} <{}> since {}",
                    style::success("Signed in:"),
                    profile.name,
                    profile.email,
                    style::dim(profile.signed_in_at.to_rfc3339())
                );
            }
            SessionStatus::SignedOut => println!("{}", style::dim("Signed out")),
        },
    }

    Ok(())
}
