//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com client behind the [`WeatherSource`] trait
//! - The [`WeatherReading`] model and the language-selected [`Presenter`]
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod lang;
pub mod model;
pub mod present;
pub mod provider;

pub use config::Config;
pub use error::FetchError;
pub use lang::Language;
pub use model::WeatherReading;
pub use present::Presenter;
pub use provider::{WeatherSource, weatherapi::WeatherApiProvider};
