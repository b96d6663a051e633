use anyhow::Context;
use clap::Parser;
use lumos_artifacts::app::runner;
use lumos_artifacts::utils::{logger, validation::Validate};
use lumos_artifacts::{CliConfig, TomlConfig};

fn main() {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if let Err(e) = load_config_file(&mut config) {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
    tracing::debug!("CLI config: {:?}", config);

    let stdout = std::io::stdout();
    let result = config
        .validate()
        .and_then(|_| runner::run(&config, &mut stdout.lock()));

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!(
                "❌ Generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }
}

fn load_config_file(config: &mut CliConfig) -> anyhow::Result<()> {
    let Some(path) = config.config.clone() else {
        return Ok(());
    };

    tracing::info!("📁 Loading configuration from: {}", path);
    let file = TomlConfig::from_file(&path)
        .with_context(|| format!("Failed to load config file '{}'", path))?;
    file.validate()
        .with_context(|| format!("Invalid config file '{}'", path))?;

    config.apply_file_defaults(&file);
    Ok(())
}
