//! Client for [WeatherAPI.com](https://www.weatherapi.com/docs/) current conditions.

use async_trait::async_trait;
use reqwest::{Client, Request, StatusCode, Url};
use tracing::debug;

use crate::{FetchError, Language, WeatherReading};

use super::WeatherSource;

pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self::with_client(api_key, base_url, Client::new())
    }

    pub fn with_client(api_key: String, base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { api_key, base_url, http }
    }

    /// `GET {base}/current.json?key=..&q=..&aqi=no[&lang=..]`
    pub fn request(&self, city: &str, lang: Language) -> Result<Request, FetchError> {
        let mut params = vec![("key", self.api_key.as_str()), ("q", city), ("aqi", "no")];
        if let Some(code) = lang.query_code() {
            params.push(("lang", code));
        }

        self.http
            .get(format!("{}/current.json", self.base_url))
            .query(&params)
            .build()
            .map_err(FetchError::Request)
    }

    async fn fetch_current(&self, city: &str, lang: Language) -> Result<WeatherReading, FetchError> {
        let request = self.request(city, lang)?;
        debug!(url = %redact_key(request.url()), "requesting current weather");

        let res = self.http.execute(request).await.map_err(FetchError::Network)?;

        let status = res.status();
        debug!(%status, "WeatherAPI responded");

        if status != StatusCode::OK {
            // Only logged; an error status never reaches the decoder.
            let body = res.text().await.unwrap_or_default();
            debug!(body = %truncate_body(&body), "WeatherAPI error body");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = res.text().await.map_err(FetchError::Body)?;
        let reading = decode_current(&body)?;

        if let Some(at) = reading.observed_at() {
            debug!(city = %reading.location.name, observed_at = %at, "decoded reading");
        }

        Ok(reading)
    }
}

#[async_trait]
impl WeatherSource for WeatherApiProvider {
    async fn current(&self, city: &str, lang: Language) -> Result<WeatherReading, FetchError> {
        self.fetch_current(city, lang).await
    }
}

/// Decode a 200 body. An empty location name means the city was not found.
pub fn decode_current(body: &str) -> Result<WeatherReading, FetchError> {
    let reading: WeatherReading = serde_json::from_str(body)?;

    if !reading.has_location() {
        return Err(FetchError::CityNotFound);
    }

    Ok(reading)
}

fn redact_key(url: &Url) -> Url {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "key" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> WeatherApiProvider {
        WeatherApiProvider::new("SECRET".to_string())
    }

    #[test]
    fn request_url_for_english_omits_lang() {
        let req = provider().request("Tashkent", Language::En).unwrap();
        assert_eq!(
            req.url().as_str(),
            "http://api.weatherapi.com/v1/current.json?key=SECRET&q=Tashkent&aqi=no"
        );
    }

    #[test]
    fn request_url_escapes_city_and_adds_lang() {
        let req = provider().request("New York", Language::Ru).unwrap();
        let url = req.url();

        assert_eq!(url.path(), "/v1/current.json");
        assert_eq!(url.query(), Some("key=SECRET&q=New+York&aqi=no&lang=ru"));
    }

    #[test]
    fn base_url_trailing_slash_is_ignored() {
        let p = WeatherApiProvider::with_base_url("K".into(), "http://localhost:8080/v1/");
        let req = p.request("Oslo", Language::Uz).unwrap();
        assert_eq!(
            req.url().as_str(),
            "http://localhost:8080/v1/current.json?key=K&q=Oslo&aqi=no&lang=uz"
        );
    }

    #[test]
    fn redact_hides_only_the_key() {
        let req = provider().request("Tashkent", Language::En).unwrap();
        let redacted = redact_key(req.url());
        let query = redacted.query().unwrap_or_default();

        assert!(!query.contains("SECRET"));
        assert!(query.contains("q=Tashkent"));
    }

    #[test]
    fn decode_empty_location_is_city_not_found() {
        let err = decode_current(r#"{"location":{"name":""},"current":{}}"#).unwrap_err();
        assert!(matches!(err, FetchError::CityNotFound));
        assert_eq!(err.to_string(), "city not found");
    }

    #[test]
    fn decode_null_location_is_city_not_found() {
        let err = decode_current(r#"{"location":null,"current":null}"#).unwrap_err();
        assert!(matches!(err, FetchError::CityNotFound));
    }

    #[test]
    fn decode_garbage_is_decode_error() {
        let err = decode_current("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn decode_fixture() {
        let reading =
            decode_current(include_str!("../../tests/fixtures/current_tashkent.json")).unwrap();
        assert_eq!(reading.location.name, "Tashkent");
        assert_eq!(reading.current.condition.code, 1000);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let long = "ж".repeat(300);
        let out = truncate_body(&long);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), 203);
        assert_eq!(truncate_body("short"), "short");
    }
}
