use anyhow::Context;
use clap::Parser;
use cord_scaffold::core::ConfigProvider;
use cord_scaffold::utils::{logger, validation::Validate};
use cord_scaffold::{CliConfig, FileNameSource, ScaffoldEngine, ScaffoldPipeline};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    // CLI flags > TOML file > defaults
    let config = cli.resolve().inspect_err(report)?;
    config.validate().inspect_err(report)?;

    let input = config.input_path().to_path_buf();
    let source = FileNameSource::new(&input);
    let engine = ScaffoldEngine::new(ScaffoldPipeline::new(source, config));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = if cli.names_only {
        engine.list_names(&mut out)
    } else {
        engine.run(&mut out)
    };

    result
        .inspect_err(report)
        .with_context(|| format!("failed to generate declarations from '{}'", input.display()))?;

    Ok(())
}

fn report(e: &cord_scaffold::ScaffoldError) {
    tracing::error!("{} (Category: {:?})", e, e.category());
    tracing::error!("Suggestion: {}", e.recovery_suggestion());
}
