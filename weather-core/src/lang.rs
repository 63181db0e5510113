use serde::{Deserialize, Serialize};
use std::fmt;

/// Output language. Anything that is not Russian or Uzbek is English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
    Uz,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Uz => "uz",
        }
    }

    pub const fn all() -> &'static [Language] {
        &[Language::En, Language::Ru, Language::Uz]
    }

    /// Parse a user-supplied code, case-insensitively. Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "ru" => Language::Ru,
            "uz" => Language::Uz,
            _ => Language::En,
        }
    }

    /// Value of the `lang` query parameter. English is the upstream default, so it is omitted.
    pub fn query_code(&self) -> Option<&'static str> {
        match self {
            Language::En => None,
            other => Some(other.as_str()),
        }
    }

    pub fn labels(&self) -> &'static Labels {
        match self {
            Language::En => &EN,
            Language::Ru => &RU,
            Language::Uz => &UZ,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label set for one language.
#[derive(Debug)]
pub struct Labels {
    pub city: &'static str,
    pub region: &'static str,
    pub country: &'static str,
    pub temperature: &'static str,
    pub weather: &'static str,
    pub wind: &'static str,
    pub pressure: &'static str,
    pub humidity: &'static str,
    pub feels_like: &'static str,
    pub visibility: &'static str,
    pub km: &'static str,

    // --details
    pub local_time: &'static str,
    pub cloud: &'static str,
    pub uv: &'static str,
    pub gusts: &'static str,
    pub dew_point: &'static str,
    pub wind_chill: &'static str,
    pub heat_index: &'static str,
}

static EN: Labels = Labels {
    city: "City",
    region: "Region",
    country: "Country",
    temperature: "Temperature",
    weather: "Weather",
    wind: "Wind",
    pressure: "Pressure",
    humidity: "Humidity",
    feels_like: "Feels Like",
    visibility: "Visibility",
    km: "km",
    local_time: "Local Time",
    cloud: "Cloud Cover",
    uv: "UV Index",
    gusts: "Gusts",
    dew_point: "Dew Point",
    wind_chill: "Wind Chill",
    heat_index: "Heat Index",
};

static RU: Labels = Labels {
    city: "Город",
    region: "Регион",
    country: "Страна",
    temperature: "Температура",
    weather: "Погода",
    wind: "Ветер",
    pressure: "Давление",
    humidity: "Влажность",
    feels_like: "Ощущается как",
    visibility: "Видимость",
    km: "км",
    local_time: "Местное время",
    cloud: "Облачность",
    uv: "УФ-индекс",
    gusts: "Порывы ветра",
    dew_point: "Точка росы",
    wind_chill: "Ветро-холодовой индекс",
    heat_index: "Индекс жары",
};

static UZ: Labels = Labels {
    city: "Shahar",
    region: "Hudud",
    country: "Davlat",
    temperature: "Harorat",
    weather: "Ob-havo",
    wind: "Shamol",
    pressure: "Bosim",
    humidity: "Namlik",
    feels_like: "His qilinadigan harorat",
    visibility: "Ko'rinish",
    km: "km",
    local_time: "Mahalliy vaqt",
    cloud: "Bulutlilik",
    uv: "UB indeksi",
    gusts: "Shamol zarbalari",
    dew_point: "Shudring nuqtasi",
    wind_chill: "Shamol sovuqligi",
    heat_index: "Issiqlik indeksi",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_roundtrip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.as_str()), *lang);
        }
    }

    #[test]
    fn codes_are_case_insensitive() {
        assert_eq!(Language::from_code("RU"), Language::Ru);
        assert_eq!(Language::from_code(" Uz "), Language::Uz);
    }

    #[test]
    fn unknown_codes_fall_back_to_english() {
        for code in ["", "de", "english", "ru-RU", "uzb"] {
            assert_eq!(Language::from_code(code), Language::En, "code {code:?}");
        }
        assert_eq!(Language::from_code("fr").labels().city, "City");
    }

    #[test]
    fn english_is_not_sent_upstream() {
        assert_eq!(Language::En.query_code(), None);
        assert_eq!(Language::Ru.query_code(), Some("ru"));
        assert_eq!(Language::Uz.query_code(), Some("uz"));
    }
}
