//! Defines the `WeatherCode` enum, mapping WMO weather interpretation codes
//! (the `weather_code` variable) to descriptive variants.

/// A WMO weather interpretation code as reported by Open-Meteo.
///
/// Open-Meteo reports `weather_code` as a number in each time series. Convert a
/// value from a frame with [`WeatherCode::from_value`]. See the
/// [Open-Meteo documentation](https://open-meteo.com/en/docs) for the code table.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WeatherCode {
    /// Code 0: Clear sky.
    ClearSky = 0,
    /// Code 1: Mainly clear.
    MainlyClear = 1,
    /// Code 2: Partly cloudy.
    PartlyCloudy = 2,
    /// Code 3: Overcast.
    Overcast = 3,
    /// Code 45: Fog.
    Fog = 45,
    /// Code 48: Depositing rime fog.
    RimeFog = 48,
    /// Code 51: Light drizzle.
    LightDrizzle = 51,
    /// Code 53: Moderate drizzle.
    Drizzle = 53,
    /// Code 55: Dense drizzle.
    DenseDrizzle = 55,
    /// Code 56: Light freezing drizzle.
    LightFreezingDrizzle = 56,
    /// Code 57: Dense freezing drizzle.
    DenseFreezingDrizzle = 57,
    /// Code 61: Slight rain.
    SlightRain = 61,
    /// Code 63: Moderate rain.
    Rain = 63,
    /// Code 65: Heavy rain.
    HeavyRain = 65,
    /// Code 66: Light freezing rain.
    LightFreezingRain = 66,
    /// Code 67: Heavy freezing rain.
    HeavyFreezingRain = 67,
    /// Code 71: Slight snowfall.
    SlightSnowfall = 71,
    /// Code 73: Moderate snowfall.
    Snowfall = 73,
    /// Code 75: Heavy snowfall.
    HeavySnowfall = 75,
    /// Code 77: Snow grains.
    SnowGrains = 77,
    /// Code 80: Slight rain showers.
    SlightRainShowers = 80,
    /// Code 81: Moderate rain showers.
    RainShowers = 81,
    /// Code 82: Violent rain showers.
    ViolentRainShowers = 82,
    /// Code 85: Slight snow showers.
    SlightSnowShowers = 85,
    /// Code 86: Heavy snow showers.
    HeavySnowShowers = 86,
    /// Code 95: Thunderstorm.
    Thunderstorm = 95,
    /// Code 96: Thunderstorm with slight hail.
    ThunderstormSlightHail = 96,
    /// Code 99: Thunderstorm with heavy hail.
    ThunderstormHeavyHail = 99,
}

impl WeatherCode {
    /// Converts an integer WMO code into a `WeatherCode`.
    ///
    /// Returns `None` for codes Open-Meteo does not emit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openmeteo_frames::WeatherCode;
    ///
    /// assert_eq!(WeatherCode::from_i64(63), Some(WeatherCode::Rain));
    /// assert_eq!(WeatherCode::from_i64(4), None);
    /// ```
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            0 => Some(WeatherCode::ClearSky),
            1 => Some(WeatherCode::MainlyClear),
            2 => Some(WeatherCode::PartlyCloudy),
            3 => Some(WeatherCode::Overcast),
            45 => Some(WeatherCode::Fog),
            48 => Some(WeatherCode::RimeFog),
            51 => Some(WeatherCode::LightDrizzle),
            53 => Some(WeatherCode::Drizzle),
            55 => Some(WeatherCode::DenseDrizzle),
            56 => Some(WeatherCode::LightFreezingDrizzle),
            57 => Some(WeatherCode::DenseFreezingDrizzle),
            61 => Some(WeatherCode::SlightRain),
            63 => Some(WeatherCode::Rain),
            65 => Some(WeatherCode::HeavyRain),
            66 => Some(WeatherCode::LightFreezingRain),
            67 => Some(WeatherCode::HeavyFreezingRain),
            71 => Some(WeatherCode::SlightSnowfall),
            73 => Some(WeatherCode::Snowfall),
            75 => Some(WeatherCode::HeavySnowfall),
            77 => Some(WeatherCode::SnowGrains),
            80 => Some(WeatherCode::SlightRainShowers),
            81 => Some(WeatherCode::RainShowers),
            82 => Some(WeatherCode::ViolentRainShowers),
            85 => Some(WeatherCode::SlightSnowShowers),
            86 => Some(WeatherCode::HeavySnowShowers),
            95 => Some(WeatherCode::Thunderstorm),
            96 => Some(WeatherCode::ThunderstormSlightHail),
            99 => Some(WeatherCode::ThunderstormHeavyHail),
            _ => None,
        }
    }

    /// Converts a frame value into a `WeatherCode`.
    ///
    /// Frame columns are `f64`; non-integral or non-finite values yield `None`.
    pub fn from_value(value: f64) -> Option<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }
        Self::from_i64(value as i64)
    }

    /// A short English description of the condition.
    pub fn description(&self) -> &'static str {
        match self {
            WeatherCode::ClearSky => "Clear sky",
            WeatherCode::MainlyClear => "Mainly clear",
            WeatherCode::PartlyCloudy => "Partly cloudy",
            WeatherCode::Overcast => "Overcast",
            WeatherCode::Fog => "Fog",
            WeatherCode::RimeFog => "Depositing rime fog",
            WeatherCode::LightDrizzle => "Light drizzle",
            WeatherCode::Drizzle => "Moderate drizzle",
            WeatherCode::DenseDrizzle => "Dense drizzle",
            WeatherCode::LightFreezingDrizzle => "Light freezing drizzle",
            WeatherCode::DenseFreezingDrizzle => "Dense freezing drizzle",
            WeatherCode::SlightRain => "Slight rain",
            WeatherCode::Rain => "Moderate rain",
            WeatherCode::HeavyRain => "Heavy rain",
            WeatherCode::LightFreezingRain => "Light freezing rain",
            WeatherCode::HeavyFreezingRain => "Heavy freezing rain",
            WeatherCode::SlightSnowfall => "Slight snowfall",
            WeatherCode::Snowfall => "Moderate snowfall",
            WeatherCode::HeavySnowfall => "Heavy snowfall",
            WeatherCode::SnowGrains => "Snow grains",
            WeatherCode::SlightRainShowers => "Slight rain showers",
            WeatherCode::RainShowers => "Moderate rain showers",
            WeatherCode::ViolentRainShowers => "Violent rain showers",
            WeatherCode::SlightSnowShowers => "Slight snow showers",
            WeatherCode::HeavySnowShowers => "Heavy snow showers",
            WeatherCode::Thunderstorm => "Thunderstorm",
            WeatherCode::ThunderstormSlightHail => "Thunderstorm with slight hail",
            WeatherCode::ThunderstormHeavyHail => "Thunderstorm with heavy hail",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value() {
        assert_eq!(WeatherCode::from_value(0.0), Some(WeatherCode::ClearSky));
        assert_eq!(WeatherCode::from_value(95.0), Some(WeatherCode::Thunderstorm));
        assert_eq!(WeatherCode::from_value(61.5), None);
        assert_eq!(WeatherCode::from_value(f64::NAN), None);
        assert_eq!(WeatherCode::from_value(100.0), None);
    }

    #[test]
    fn test_discriminants_match_codes() {
        for code in [0, 3, 45, 57, 67, 77, 82, 86, 99] {
            let parsed = WeatherCode::from_i64(code).unwrap();
            assert_eq!(parsed as i64, code);
        }
    }
}
