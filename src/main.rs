use clap::Parser;
use fn_tour::core::ConfigProvider;
use fn_tour::domain::model::render_evaluations;
use fn_tour::utils::{logger, validation::Validate};
use fn_tour::{CliConfig, Command, TourEngine, TourError};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting fn-tour");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        exit_with(e);
    }

    let format = config.output_format();
    let engine = TourEngine::new(config);

    let outcome = match &cli.command {
        Command::Factorial { x } => engine.factorial(*x).map(|e| vec![e]),
        Command::Sum { numbers } => engine.sum(numbers).map(|e| vec![e]),
        Command::Add { x, y } => engine.add(*x, *y).map(|e| vec![e]),
        Command::Greet { name } => Ok(vec![engine.greet(name)]),
        Command::Echo { name } => Ok(vec![engine.echo(name)]),
        Command::Tour => engine.run().map(|report| report.evaluations),
    };

    match outcome {
        Ok(evaluations) => {
            let as_list = matches!(cli.command, Command::Tour);
            let rendered = render_evaluations(&evaluations, format, as_list)?;
            println!("{}", rendered);
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}

fn exit_with(e: TourError) -> ! {
    tracing::error!(
        "fn-tour failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("error: {}", e.user_friendly_message());
    eprintln!("hint: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}
