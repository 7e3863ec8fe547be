//! Static weather multipliers.
//!
//! No live data source is consulted and nothing here touches the routing
//! graph. Callers may scale a quote by the returned multipliers.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Weather over an airport or along a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    #[default]
    Clear,
    Cloudy,
    Rain,
    Storm,
    Snow,
}

/// Multipliers applied to flight time and cost under a condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeatherImpact {
    pub time_multiplier: f64,
    pub cost_multiplier: f64,
    /// Whether flights may operate at all.
    pub operational: bool,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 5] = [
        WeatherCondition::Clear,
        WeatherCondition::Cloudy,
        WeatherCondition::Rain,
        WeatherCondition::Storm,
        WeatherCondition::Snow,
    ];

    pub fn impact(self) -> WeatherImpact {
        let (time_multiplier, cost_multiplier, operational) = match self {
            WeatherCondition::Clear => (1.0, 1.0, true),
            WeatherCondition::Cloudy => (1.05, 1.02, true),
            WeatherCondition::Rain => (1.15, 1.10, true),
            WeatherCondition::Storm => (1.5, 1.3, false),
            WeatherCondition::Snow => (1.3, 1.2, true),
        };
        WeatherImpact {
            time_multiplier,
            cost_multiplier,
            operational,
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            WeatherCondition::Clear => "clear",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Rain => "rain",
            WeatherCondition::Storm => "storm",
            WeatherCondition::Snow => "snow",
        };
        f.write_str(value)
    }
}

impl FromStr for WeatherCondition {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        WeatherCondition::ALL
            .into_iter()
            .find(|condition| condition.to_string().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| format!("unknown weather condition '{value}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storm_grounds_flights() {
        let impact = WeatherCondition::Storm.impact();
        assert!(!impact.operational);
        assert_eq!(impact.time_multiplier, 1.5);
        assert_eq!(impact.cost_multiplier, 1.3);
    }

    #[test]
    fn only_storm_is_non_operational() {
        let grounded: Vec<_> = WeatherCondition::ALL
            .into_iter()
            .filter(|c| !c.impact().operational)
            .collect();
        assert_eq!(grounded, vec![WeatherCondition::Storm]);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Rain".parse::<WeatherCondition>(), Ok(WeatherCondition::Rain));
        assert!("hail".parse::<WeatherCondition>().is_err());
    }
}
