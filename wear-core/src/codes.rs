//! WMO weather-code descriptions.
//!
//! Open-Meteo reports conditions as WMO integer codes; this table turns them
//! into the human-readable strings shown to the user and embedded in the
//! recommendation prompt.

/// Fallback for codes outside the table.
pub const UNKNOWN_WEATHER_CODE: &str = "Unknown weather code";

/// Describe a WMO weather code.
///
/// Total over all integers: unrecognized codes map to
/// [`UNKNOWN_WEATHER_CODE`] rather than failing.
pub fn describe(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Drizzle: Light intensity",
        53 => "Drizzle: Moderate intensity",
        55 => "Drizzle: Dense intensity",
        56 => "Freezing Drizzle: Light",
        57 => "Freezing Drizzle: Dense",
        61 => "Rain: Light intensity",
        63 => "Rain: Moderate intensity",
        65 => "Rain: Heavy intensity",
        66 => "Freezing Rain: Light",
        67 => "Freezing Rain: Heavy",
        71 => "Snow fall: Light intensity",
        73 => "Snow fall: Moderate intensity",
        75 => "Snow fall: Heavy intensity",
        77 => "Snow grains",
        80 => "Rain showers: Light",
        81 => "Rain showers: Moderate",
        82 => "Rain showers: Violent",
        85 => "Snow showers: Light",
        86 => "Snow showers: Heavy",
        95 => "Thunderstorm: Light or moderate",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => UNKNOWN_WEATHER_CODE,
    }
}
