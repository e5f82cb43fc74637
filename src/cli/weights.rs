use clap::Parser;

use crate::core::weights::{Priority, PriorityWeights};

#[derive(Parser)]
pub struct WeightsArgs {
    /// Cost importance, 0 to 100.
    #[clap(long, default_value = "50")]
    pub cost: Priority,

    /// Time importance, 0 to 100.
    #[clap(long, default_value = "50")]
    pub time: Priority,

    /// Sustainability importance, 0 to 100.
    #[clap(long, default_value = "50")]
    pub sustainability: Priority,
}

impl From<&WeightsArgs> for PriorityWeights {
    fn from(args: &WeightsArgs) -> Self {
        Self::builder()
            .cost(args.cost)
            .time(args.time)
            .sustainability(args.sustainability)
            .build()
    }
}
