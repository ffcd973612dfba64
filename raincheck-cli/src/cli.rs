use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use raincheck_core::{
    Config, ForecastRecord, Lookup, SelectionStrategy, forecast_for_tomorrow, provider_from_config,
};
use std::io::{self, BufRead, IsTerminal};
use tracing::debug;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "raincheck", version, about = "Will it rain tomorrow?")]
pub struct Cli {
    /// Defaults to `check` with an interactive prompt.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Tell whether it will rain tomorrow in a city.
    Check {
        /// City name; prompted for when absent.
        city: Option<String>,

        /// How to pick tomorrow's forecast: "exact-date" or "predictability".
        #[arg(long, value_parser = parse_strategy)]
        strategy: Option<SelectionStrategy>,

        /// Also print the forecast record the verdict is based on.
        #[arg(long)]
        details: bool,
    },

    /// Choose the default selection strategy and service URL.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Check { city: None, strategy: None, details: false }) {
            Command::Check { city, strategy, details } => check(city, strategy, details).await,
            Command::Configure => configure(),
        }
    }
}

async fn check(
    city: Option<String>,
    strategy: Option<SelectionStrategy>,
    details: bool,
) -> anyhow::Result<()> {
    let config = Config::load()?;
    let strategy = strategy.unwrap_or(config.strategy);

    let city = match city {
        Some(city) => city,
        None => prompt_city()?,
    };

    let provider = provider_from_config(&config)?;
    debug!(%city, %strategy, "checking forecast");

    let lookup = forecast_for_tomorrow(provider.as_ref(), &city, strategy).await?;
    println!("{}", lookup.outlook());

    if let (true, Lookup::Found(record)) = (details, &lookup) {
        println!("{}", describe(record));
    }

    Ok(())
}

/// Interactive prompt on a terminal, otherwise the first line of stdin.
fn prompt_city() -> anyhow::Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Text::new("Enter city name:").prompt().context("Failed to read city name");
    }
    read_city(stdin.lock())
}

fn read_city(mut input: impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read city name from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let strategies = SelectionStrategy::all().to_vec();
    let current = strategies.iter().position(|s| *s == config.strategy).unwrap_or_default();
    config.strategy = Select::new("Forecast selection strategy:", strategies)
        .with_starting_cursor(current)
        .prompt()
        .context("Failed to read selection strategy")?;

    let base_url = Text::new("Forecast service URL:")
        .with_default(&config.base_url)
        .prompt()
        .context("Failed to read service URL")?;
    config.base_url = base_url;

    // Reject a broken URL before it lands on disk.
    provider_from_config(&config)?;

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}

fn parse_strategy(value: &str) -> Result<SelectionStrategy, String> {
    SelectionStrategy::try_from(value).map_err(|e| e.to_string())
}

fn describe(record: &ForecastRecord) -> String {
    let name = record.weather_state_name.as_deref().unwrap_or("Unknown");
    let mut line = format!(
        "{}: {} ({}), predictability {}%",
        record.applicable_date, name, record.weather_state_abbr, record.predictability
    );
    if let (Some(min), Some(max)) = (record.min_temp, record.max_temp) {
        line.push_str(&format!(", {min:.1}..{max:.1} °C"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["raincheck"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn check_parses_city_and_strategy() {
        let cli = Cli::try_parse_from(["raincheck", "check", "London", "--strategy", "exact-date"]).unwrap();
        match cli.command {
            Some(Command::Check { city, strategy, details }) => {
                assert_eq!(city.as_deref(), Some("London"));
                assert_eq!(strategy, Some(SelectionStrategy::ExactDate));
                assert!(!details);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn check_rejects_unknown_strategy() {
        let err = Cli::try_parse_from(["raincheck", "check", "London", "--strategy", "newest"]).unwrap_err();
        assert!(err.to_string().contains("Unknown selection strategy"));
    }

    #[test]
    fn describe_includes_state_and_temperatures() {
        let record = ForecastRecord {
            id: Some(1),
            weather_state_name: Some("Light Rain".to_string()),
            weather_state_abbr: "lr".to_string(),
            applicable_date: "2021-12-20".parse().unwrap(),
            min_temp: Some(4.6),
            max_temp: Some(9.8),
            the_temp: Some(8.1),
            predictability: 75.0,
        };
        assert_eq!(
            describe(&record),
            "2021-12-20: Light Rain (lr), predictability 75%, 4.6..9.8 °C"
        );
    }

    #[test]
    fn describe_keeps_fractional_predictability() {
        let record = ForecastRecord {
            id: None,
            weather_state_name: None,
            weather_state_abbr: "c".to_string(),
            applicable_date: "2021-12-20".parse().unwrap(),
            min_temp: None,
            max_temp: None,
            the_temp: None,
            predictability: 71.5,
        };
        assert_eq!(describe(&record), "2021-12-20: Unknown (c), predictability 71.5%");
    }

    #[test]
    fn read_city_takes_first_line() {
        let city = read_city("London\nParis\n".as_bytes()).unwrap();
        assert_eq!(city, "London");
    }

    #[test]
    fn read_city_strips_windows_line_ending() {
        let city = read_city("New York\r\n".as_bytes()).unwrap();
        assert_eq!(city, "New York");
    }

    #[test]
    fn read_city_from_empty_input_is_empty() {
        assert_eq!(read_city(io::empty()).unwrap(), "");
    }
}
