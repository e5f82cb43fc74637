use clap::Parser;

use crate::core::scenario::{Conditions, Scenario, ScenarioKind};

/// Either a named scenario or all four custom condition texts.
#[derive(Parser)]
pub struct ScenarioArgs {
    #[clap(long, value_enum, required_unless_present = "weather")]
    pub scenario: Option<ScenarioKind>,

    #[clap(
        long,
        conflicts_with = "scenario",
        requires_all = ["traffic", "port_congestion", "infrastructure_health"]
    )]
    pub weather: Option<String>,

    #[clap(long, requires = "weather")]
    pub traffic: Option<String>,

    #[clap(long, requires = "weather")]
    pub port_congestion: Option<String>,

    #[clap(long, requires = "weather")]
    pub infrastructure_health: Option<String>,
}

impl ScenarioArgs {
    pub fn scenario(&self) -> Scenario {
        if let Some(kind) = self.scenario {
            return kind.into();
        }
        Scenario::custom(
            Conditions::builder()
                .weather(self.weather.clone().unwrap_or_default())
                .traffic(self.traffic.clone().unwrap_or_default())
                .port_congestion(self.port_congestion.clone().unwrap_or_default())
                .infrastructure_health(self.infrastructure_health.clone().unwrap_or_default())
                .build(),
        )
    }
}
