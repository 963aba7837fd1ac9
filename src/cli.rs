use clap::Parser;
use std::path::PathBuf;

const ABOUT: &str = "City weather lookup backed by the Open-Meteo APIs";

const LONG_ABOUT: &str = "
Look up current weather, and a short daily outlook, for a city by name.

The city name is geocoded through the Open-Meteo geocoding service and the
first match wins. Pass --country to restrict matches to one country. No API
key is required.
";

#[derive(Parser, Debug)]
#[command(version, about = ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    #[arg(help = "City name to look up (e.g. \"Springfield\")")]
    pub city: String,

    #[arg(
        short,
        long,
        help = "Unit system: metric or imperial (defaults to the configured value)"
    )]
    pub units: Option<String>,

    #[arg(
        short,
        long,
        help = "Only match locations in this country (ISO 3166-1 alpha-2 code, e.g. US)"
    )]
    pub country: Option<String>,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,
}
