use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use weatherline_core::{
    Config, DisplayToggles, IpApiProvider, LocationSource, OpenMeteoProvider,
    TemperaturePreference, UnitPreference, lookup, render,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weatherline",
    version,
    about = "Current weather on a single line"
)]
pub struct Cli {
    #[command(flatten)]
    pub options: Options,

    /// Defaults to `here`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Subcommand)]
pub enum Command {
    /// Get weather at current location.
    Here,

    /// Get weather at specified coordinates.
    #[command(allow_negative_numbers = true)]
    At {
        /// Latitude in decimal degrees.
        latitude: f64,
        /// Longitude in decimal degrees.
        longitude: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitsArg {
    Local,
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TempUnitsArg {
    Local,
    Celsius,
    Fahrenheit,
}

impl From<UnitsArg> for UnitPreference {
    fn from(units: UnitsArg) -> Self {
        match units {
            UnitsArg::Local => Self::Local,
            UnitsArg::Metric => Self::Metric,
            UnitsArg::Imperial => Self::Imperial,
        }
    }
}

impl From<TempUnitsArg> for TemperaturePreference {
    fn from(units: TempUnitsArg) -> Self {
        match units {
            TempUnitsArg::Local => Self::Local,
            TempUnitsArg::Celsius => Self::Celsius,
            TempUnitsArg::Fahrenheit => Self::Fahrenheit,
        }
    }
}

/// Display options, accepted before or after the subcommand.
///
/// Every toggle is off by default and can be switched back off with its
/// `--no-` form; the last occurrence wins.
#[derive(Debug, Args)]
pub struct Options {
    /// Units for wind speed and precipitation.
    #[arg(short, long, value_enum, default_value_t = UnitsArg::Local, global = true)]
    pub units: UnitsArg,

    /// Temperature units.
    #[arg(short, long, value_enum, default_value_t = TempUnitsArg::Local, global = true)]
    pub temp_units: TempUnitsArg,

    /// Show 'feels like' temperature.
    #[arg(short = 'l', long, global = true, overrides_with = "no_feels_like")]
    feels_like: bool,
    /// Hide 'feels like' temperature (default).
    #[arg(long, global = true, overrides_with = "feels_like")]
    no_feels_like: bool,

    /// Show UV index.
    #[arg(short = 'i', long, global = true, overrides_with = "no_uv_index")]
    uv_index: bool,
    /// Hide UV index (default).
    #[arg(long, global = true, overrides_with = "uv_index")]
    no_uv_index: bool,

    /// Show humidity.
    #[arg(short = 'm', long, global = true, overrides_with = "no_humidity")]
    humidity: bool,
    /// Hide humidity (default).
    #[arg(long, global = true, overrides_with = "humidity")]
    no_humidity: bool,

    /// Show wind speed and direction.
    #[arg(short = 'w', long, global = true, overrides_with = "no_wind")]
    wind: bool,
    /// Hide wind speed and direction (default).
    #[arg(long, global = true, overrides_with = "wind")]
    no_wind: bool,

    /// Show atmospheric pressure.
    #[arg(short = 'p', long, global = true, overrides_with = "no_pressure")]
    pressure: bool,
    /// Hide atmospheric pressure (default).
    #[arg(long, global = true, overrides_with = "pressure")]
    no_pressure: bool,

    /// Show sunrise and sunset times.
    #[arg(short = 'd', long, global = true, overrides_with = "no_daylight")]
    daylight: bool,
    /// Hide sunrise and sunset times (default).
    #[arg(long, global = true, overrides_with = "daylight")]
    no_daylight: bool,
}

impl Options {
    pub fn toggles(&self) -> DisplayToggles {
        DisplayToggles {
            feels_like: self.feels_like && !self.no_feels_like,
            uv_index: self.uv_index && !self.no_uv_index,
            humidity: self.humidity && !self.no_humidity,
            wind: self.wind && !self.no_wind,
            pressure: self.pressure && !self.no_pressure,
            daylight: self.daylight && !self.no_daylight,
        }
    }
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::default()
            .with_units(self.options.units.into())
            .with_temperature(self.options.temp_units.into())
            .with_toggles(self.options.toggles())
    }

    pub fn location_source(&self) -> LocationSource {
        match self.command.unwrap_or(Command::Here) {
            Command::Here => LocationSource::Here,
            Command::At {
                latitude,
                longitude,
            } => LocationSource::At {
                latitude,
                longitude,
            },
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.config();
        let source = self.location_source();
        info!(?config, ?source, "Starting weather lookup");

        let geolocation = IpApiProvider::new(config.services())?;
        let weather = OpenMeteoProvider::new(config.services())?;

        let segments = lookup(&geolocation, &weather, source, &config).await?;
        println!("{}", render(&segments));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("weatherline").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_here_with_local_units_and_no_extras() {
        let cli = parse(&[]);

        assert_eq!(cli.location_source(), LocationSource::Here);
        let config = cli.config();
        assert_eq!(config.units(), UnitPreference::Local);
        assert_eq!(config.temperature(), TemperaturePreference::Local);
        assert_eq!(*config.toggles(), DisplayToggles::default());
    }

    #[test]
    fn at_accepts_negative_coordinates() {
        let cli = parse(&["at", "-33.87", "-151.21"]);

        assert_eq!(
            cli.location_source(),
            LocationSource::At {
                latitude: -33.87,
                longitude: -151.21,
            }
        );
    }

    #[test]
    fn unit_options_map_to_preferences() {
        let cli = parse(&["-u", "imperial", "--temp-units", "celsius", "here"]);
        let config = cli.config();

        assert_eq!(config.units(), UnitPreference::Imperial);
        assert_eq!(config.temperature(), TemperaturePreference::Celsius);
    }

    #[test]
    fn short_toggles_enable_segments() {
        let cli = parse(&["-l", "-i", "-m", "-w", "-p", "-d"]);
        assert_eq!(cli.options.toggles(), DisplayToggles::all());
    }

    #[test]
    fn options_are_accepted_after_the_subcommand() {
        let cli = parse(&["at", "52.52", "13.40", "--wind", "-t", "fahrenheit"]);

        assert!(cli.options.toggles().wind);
        assert_eq!(cli.config().temperature(), TemperaturePreference::Fahrenheit);
    }

    #[test]
    fn last_toggle_occurrence_wins() {
        let cli = parse(&["--wind", "--no-wind", "--no-humidity", "--humidity"]);
        let toggles = cli.options.toggles();

        assert!(!toggles.wind);
        assert!(toggles.humidity);
    }

    #[test]
    fn help_lists_negated_toggles() {
        let help = Cli::command().render_long_help().to_string();

        for flag in [
            "--no-feels-like",
            "--no-uv-index",
            "--no-humidity",
            "--no-wind",
            "--no-pressure",
            "--no-daylight",
        ] {
            assert!(help.contains(flag), "{flag} missing from help");
        }
    }

    #[test]
    fn rejects_unknown_unit_system() {
        let err = Cli::try_parse_from(["weatherline", "--units", "nautical"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
