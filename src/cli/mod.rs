pub mod commands;

pub use commands::{AuthCommands, CertCommands, Cli, Commands, SkillCommands, TeamCommands};
