use anyhow::Result;
use clap::Parser;
use skycast::WeatherApiClient;
use skycast::app::{self, Submission};
use skycast::cli::Args;
use skycast::config::SkycastConfig;
use skycast::models::UnitSystem;
use skycast::render::WeatherReport;
use tracing_subscriber::EnvFilter;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = SkycastConfig::load_from_path(args.config)?;
    init_tracing(&config.logging.level);

    let units = UnitSystem::from_key(args.units.as_deref().unwrap_or(&config.defaults.units));

    let city = args.city.trim().to_string();
    if city.is_empty() {
        show_status(app::STATUS_EMPTY_INPUT, true);
        std::process::exit(2);
    }

    show_status(app::STATUS_LOADING, false);

    let client = WeatherApiClient::new(config)?;
    match app::run_submission(&client, &city, units, args.country.as_deref()).await {
        Ok(Submission::Success(report)) => print_report(&report),
        Ok(Submission::NotFound) => {
            show_status(app::STATUS_NOT_FOUND, true);
            std::process::exit(1);
        }
        Err(err) => {
            tracing::error!("Submission failed: {err}");
            show_status(&err.user_message(), true);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Status line with an error/non-error style flag
fn show_status(message: &str, is_error: bool) {
    if is_error {
        eprintln!("{message}");
    } else {
        println!("{message}");
    }
}

fn print_report(report: &WeatherReport) {
    println!();
    println!("{}", report.location);
    println!("  Condition    {}", report.condition);
    println!("  Temperature  {}", report.temperature);
    println!("  Wind         {}", report.wind);
    println!("  Humidity     {}", report.humidity);

    if !report.forecast.is_empty() {
        println!();
        println!("Daily outlook");
        for card in &report.forecast {
            println!(
                "  {:<12} {:<32} high {:>7}  low {:>7}",
                card.day, card.condition, card.high, card.low
            );
        }
    }
}
