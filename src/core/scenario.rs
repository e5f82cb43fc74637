use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Environmental conditions the disruption predictor reasons about.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, bon::Builder)]
pub struct Conditions {
    #[builder(into)]
    #[serde(rename = "weatherData")]
    pub weather: String,

    #[builder(into)]
    #[serde(rename = "trafficData")]
    pub traffic: String,

    #[builder(into)]
    #[serde(rename = "portCongestionData")]
    pub port_congestion: String,

    #[builder(into)]
    #[serde(rename = "infrastructureHealthData")]
    pub infrastructure_health: String,
}

impl Conditions {
    /// Forecast context: all the condition texts joined together.
    ///
    /// It is later reused as the disruption description for the route optimizer.
    #[must_use]
    pub fn context(&self) -> String {
        [&self.weather, &self.traffic, &self.port_congestion, &self.infrastructure_health]
            .into_iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Named scenarios from the catalog.
#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum ScenarioKind {
    Hurricane,
    Wildfire,
    Blizzard,
}

impl ScenarioKind {
    pub const ALL: [Self; 3] = [Self::Hurricane, Self::Wildfire, Self::Blizzard];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Hurricane => "hurricane",
            Self::Wildfire => "wildfire",
            Self::Blizzard => "blizzard",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hurricane => "Hurricane",
            Self::Wildfire => "Wildfire",
            Self::Blizzard => "Blizzard",
        }
    }

    pub fn conditions(self) -> Conditions {
        match self {
            Self::Hurricane => Conditions::builder()
                .weather("A Category 4 hurricane is projected to make landfall on the Gulf Coast near New Orleans, LA, in the next 36 hours. Expect widespread flooding, high winds, and road closures.")
                .traffic("Major highways I-10 and I-12 are experiencing heavy outbound traffic as evacuations begin. Congestion is expected to worsen.")
                .port_congestion("The Port of New Orleans is operating at reduced capacity and will close to all vessel traffic in 24 hours.")
                .infrastructure_health("Bridges and overpasses in the coastal region are at high risk of damage from storm surge and high winds.")
                .build(),
            Self::Wildfire => Conditions::builder()
                .weather("Hot, dry, and windy conditions have led to a large wildfire in Southern California, spreading rapidly towards major transportation routes.")
                .traffic("Interstate 5 is closed in both directions near the Tejon Pass. Heavy traffic is being diverted to smaller state highways, causing significant delays.")
                .port_congestion("No direct impact on ports, but ground transportation to and from the Port of Los Angeles is severely hampered.")
                .infrastructure_health("Power lines and communication towers are threatened by the fire, potentially causing wider-scale infrastructure outages.")
                .build(),
            Self::Blizzard => Conditions::builder()
                .weather("A major blizzard is forecast for the Midwest, centered on Chicago, IL. Expect 18-24 inches of snow and whiteout conditions over the next 48 hours.")
                .traffic("All major interstates including I-90, I-94, and I-80 are becoming impassable. Travel is not advised. O'Hare and Midway airports have canceled all flights.")
                .port_congestion("N/A for this region, but rail and trucking hubs are ceasing operations.")
                .infrastructure_health("Risk of power outages due to heavy snow and high winds.")
                .build(),
        }
    }
}

impl Display for ScenarioKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub label: String,
    pub conditions: Conditions,
}

impl Scenario {
    pub fn custom(conditions: Conditions) -> Self {
        Self { label: "Custom".to_owned(), conditions }
    }
}

impl From<ScenarioKind> for Scenario {
    fn from(kind: ScenarioKind) -> Self {
        Self { label: kind.label().to_owned(), conditions: kind.conditions() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_joins_in_field_order() {
        let conditions = Conditions::builder()
            .weather("storm")
            .traffic("jam")
            .port_congestion("closed")
            .infrastructure_health("bridge out")
            .build();
        assert_eq!(conditions.context(), "storm jam closed bridge out");
    }

    #[test]
    fn catalog_keys_round_trip_through_clap() {
        use clap::ValueEnum;

        for kind in ScenarioKind::ALL {
            assert_eq!(ScenarioKind::from_str(kind.key(), true), Ok(kind));
        }
    }

    #[test]
    fn conditions_serialize_with_wire_names() -> crate::prelude::Result {
        let value = serde_json::to_value(ScenarioKind::Hurricane.conditions())?;
        assert!(value["weatherData"].as_str().unwrap().contains("Category 4"));
        assert!(value["portCongestionData"].as_str().unwrap().contains("New Orleans"));
        assert!(value.get("trafficData").is_some());
        assert!(value.get("infrastructureHealthData").is_some());
        Ok(())
    }
}
