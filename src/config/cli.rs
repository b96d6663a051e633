use crate::config::toml_config::{TomlConfig, DEFAULT_OUTPUT_PATH};
use crate::core::{BundleKind, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "lumos-artifacts")]
#[command(about = "Writes the Lumos Moda Fitness storefront artifacts to disk")]
pub struct CliConfig {
    /// Directory the artifacts are written to (must exist)
    #[arg(long)]
    pub output_path: Option<String>,

    /// Bundles to emit: catalog, infra, docs, social (default: all)
    #[arg(long, value_delimiter = ',')]
    pub bundles: Vec<BundleKind>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the artifacts each bundle produces and exit
    #[arg(long)]
    pub list: bool,

    /// Show what would be written without touching the filesystem
    #[arg(long, conflicts_with = "verify")]
    pub dry_run: bool,

    /// Check existing files against their payloads without writing
    #[arg(long)]
    pub verify: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Fill in whatever the command line left unset from the config file.
    pub fn apply_file_defaults(&mut self, file: &TomlConfig) {
        if self.output_path.is_none() {
            self.output_path = Some(file.output.path.clone());
        }
        if self.bundles.is_empty() {
            self.bundles = file.bundles.enabled.clone();
        }
    }
}

impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn bundles(&self) -> &[BundleKind] {
        &self.bundles
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", self.output_path())
    }
}
