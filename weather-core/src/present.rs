//! Human-readable rendering of a [`WeatherReading`].

use colored::Colorize;
use std::fmt::Display;

use crate::{Language, WeatherReading};

pub const BORDER: &str = "---------------------------------------------------------";

/// Renders readings with one language's labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct Presenter {
    lang: Language,
    details: bool,
}

impl Presenter {
    pub fn new(lang: Language) -> Self {
        Self { lang, details: false }
    }

    /// Also print cloud cover, UV, gusts, dew point, wind chill and heat index.
    pub fn with_details(mut self, details: bool) -> Self {
        self.details = details;
        self
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// The full block, borders included, each line terminated by `\n`.
    ///
    /// Labels are green unless coloring is switched off through `colored::control`.
    pub fn render(&self, reading: &WeatherReading) -> String {
        let labels = self.lang.labels();
        let loc = &reading.location;
        let cur = &reading.current;

        let mut out = String::new();
        out.push_str(BORDER);
        out.push('\n');

        line(&mut out, labels.city, &loc.name);
        line(&mut out, labels.region, &loc.region);
        line(&mut out, labels.country, &loc.country);
        line(&mut out, labels.temperature, celsius_fahrenheit(cur.temp_c, cur.temp_f));
        line(&mut out, labels.weather, &cur.condition.text);
        line(
            &mut out,
            labels.wind,
            format!("{:.1} MPH ({:.1} KPH), {}", cur.wind_mph, cur.wind_kph, cur.wind_dir),
        );
        line(&mut out, labels.pressure, format!("{:.1} hPa", cur.pressure_mb));
        line(&mut out, labels.humidity, format!("{}%", cur.humidity));
        line(&mut out, labels.feels_like, celsius_fahrenheit(cur.feelslike_c, cur.feelslike_f));
        line(&mut out, labels.visibility, format!("{:.1} {}", cur.vis_km, labels.km));

        if self.details {
            line(&mut out, labels.local_time, &loc.localtime);
            line(&mut out, labels.cloud, format!("{}%", cur.cloud));
            line(&mut out, labels.uv, format!("{:.1}", cur.uv));
            line(
                &mut out,
                labels.gusts,
                format!("{:.1} MPH ({:.1} KPH)", cur.gust_mph, cur.gust_kph),
            );
            line(&mut out, labels.dew_point, celsius_fahrenheit(cur.dewpoint_c, cur.dewpoint_f));
            line(&mut out, labels.wind_chill, celsius_fahrenheit(cur.windchill_c, cur.windchill_f));
            line(&mut out, labels.heat_index, celsius_fahrenheit(cur.heatindex_c, cur.heatindex_f));
        }

        out.push_str(BORDER);
        out.push('\n');
        out
    }
}

/// Pretty-printed JSON of the whole reading.
pub fn render_json(reading: &WeatherReading) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reading)
}

fn line(out: &mut String, label: &str, value: impl Display) {
    out.push_str(&format!("{}{}\n", format!("{label}: ").green(), value));
}

fn celsius_fahrenheit(c: f64, f: f64) -> String {
    format!("{c:.2}°C ({f:.2}°F)")
}
