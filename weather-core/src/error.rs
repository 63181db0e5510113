use thiserror::Error;

/// Everything that can go wrong while fetching one reading.
///
/// The CLI prints all of these the same way (`Error: <message>`); the variants
/// exist so callers and tests can tell the cases apart.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build weather request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("could not fetch weather data: {0}")]
    Network(#[source] reqwest::Error),

    #[error("city not found or API error, status code: {0}")]
    Status(u16),

    #[error("could not read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("could not decode weather JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("city not found")]
    CityNotFound,
}
