use async_trait::async_trait;
use std::fmt::Debug;

use crate::{Config, FetchError, Language, WeatherReading, provider::weatherapi::WeatherApiProvider};

pub mod weatherapi;

/// Something that can produce the current conditions for a city.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn current(&self, city: &str, lang: Language) -> Result<WeatherReading, FetchError>;
}

/// Construct the WeatherAPI source from config and an optional explicit key.
pub fn source_from_config(
    config: &Config,
    api_key: Option<&str>,
) -> anyhow::Result<Box<dyn WeatherSource>> {
    let api_key = config.api_key(api_key)?;
    Ok(Box::new(WeatherApiProvider::with_base_url(api_key, config.base_url())))
}
