use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-store")]
#[command(about = "A small storefront toolkit for customer and inventory workflows")]
pub struct CliConfig {
    /// Directory the session's veto ledger is written to
    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// TOML session profile; the built-in demo session runs when omitted
    #[arg(long)]
    pub profile: Option<String>,

    /// Emit logs as JSON instead of compact text
    #[arg(long)]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;

        if let Some(profile) = &self.profile {
            validate_path("profile", profile)?;
            validate_file_extension("profile", profile, &["toml"])?;
        }

        Ok(())
    }
}
