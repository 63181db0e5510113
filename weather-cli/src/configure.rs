use anyhow::Result;
use inquire::{Password, PasswordDisplayMode, Select, required};
use weather_core::{Config, Language};

/// Ask for the API key and default language, then write the config file.
pub fn run(mut config: Config) -> Result<()> {
    let api_key = Password::new("WeatherAPI.com key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_help_message("Free keys: https://www.weatherapi.com/signup.aspx")
        .with_validator(required!("API key cannot be empty"))
        .prompt()?;

    let current = config.language(None);
    let languages = Language::all().to_vec();
    let cursor = languages.iter().position(|l| *l == current).unwrap_or(0);

    let lang = Select::new("Default language:", languages).with_starting_cursor(cursor).prompt()?;

    config.set_api_key(api_key);
    config.set_default_language(lang);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
