use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing::info;
use weather_core::{
    Config, Language, Presenter, WeatherReading, WeatherSource, present, provider,
};

use crate::interactive::Settings;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather from WeatherAPI.com")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// City name to get weather information for.
    #[arg(short, long)]
    pub city: Option<String>,

    /// Language for output (en, ru, uz). Unknown codes fall back to English.
    #[arg(short, long, global = true)]
    pub lang: Option<String>,

    /// WeatherAPI.com key; overrides the one stored by `weather configure`.
    #[arg(long, env = "WEATHERAPI_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Print the whole reading as JSON instead of the labeled block.
    #[arg(long, global = true)]
    pub json: bool,

    /// Also print cloud cover, UV index, gusts, dew point, wind chill and heat index.
    #[arg(long, global = true)]
    pub details: bool,

    /// Disable ANSI colors.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ask for a language, then look up cities until `exit` is entered.
    Interactive,

    /// Store the WeatherAPI key and default language in the config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Some(Command::Configure) => {
                // A broken file must not block the command that rewrites it.
                crate::configure::run(Config::load_or_default())?;
                Ok(ExitCode::SUCCESS)
            }
            Some(Command::Interactive) => {
                let config = Config::load()?;
                let source = provider::source_from_config(&config, self.api_key.as_deref())?;
                let settings = self.interactive_settings(&config);
                crate::interactive::run(source.as_ref(), &settings).await?;
                Ok(ExitCode::SUCCESS)
            }
            None => {
                let Some(city) = self.flag_city() else {
                    println!("Error: Please provide a city using the --city flag.");
                    return Ok(ExitCode::FAILURE);
                };
                let config = Config::load()?;
                self.lookup_once(city, &config).await
            }
        }
    }

    /// The `--city` value, trimmed; `None` when missing or blank.
    fn flag_city(&self) -> Option<&str> {
        self.city.as_deref().map(str::trim).filter(|city| !city.is_empty())
    }

    /// An explicit `--lang` skips the language prompt; otherwise the prompt
    /// defaults to the configured language.
    fn interactive_settings(&self, config: &Config) -> Settings {
        Settings {
            explicit_lang: self.lang.as_deref().map(Language::from_code),
            default_lang: config.language(None),
            json: self.json,
            details: self.details,
        }
    }

    async fn lookup_once(&self, city: &str, config: &Config) -> anyhow::Result<ExitCode> {
        let source = provider::source_from_config(config, self.api_key.as_deref())?;
        let output = Output::new(config.language(self.lang.as_deref()), self.json, self.details);

        if lookup(source.as_ref(), city, &output).await? {
            Ok(ExitCode::SUCCESS)
        } else {
            Ok(ExitCode::FAILURE)
        }
    }
}

/// How a successful reading is printed.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    presenter: Presenter,
    json: bool,
}

impl Output {
    pub fn new(lang: Language, json: bool, details: bool) -> Self {
        Self { presenter: Presenter::new(lang).with_details(details), json }
    }

    pub fn language(&self) -> Language {
        self.presenter.language()
    }

    pub fn render(&self, reading: &WeatherReading) -> anyhow::Result<String> {
        if self.json {
            Ok(present::render_json(reading)? + "\n")
        } else {
            Ok(self.presenter.render(reading))
        }
    }
}

/// Fetch and print one city. Fetch failures are printed as `Error: ...` and
/// reported as `false`; only output failures propagate.
pub async fn lookup(
    source: &dyn WeatherSource,
    city: &str,
    output: &Output,
) -> anyhow::Result<bool> {
    info!(city, lang = %output.language(), "looking up current weather");

    match source.current(city, output.language()).await {
        Ok(reading) => {
            print!("{}", output.render(&reading)?);
            Ok(true)
        }
        Err(err) => {
            println!("Error: {err}");
            Ok(false)
        }
    }
}
