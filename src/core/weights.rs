use std::str::FromStr;

use serde::Serialize;

use crate::prelude::*;

/// Relative importance of a single objective, from 0 to 100.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Display,
    derive_more::Into,
)]
#[serde(transparent)]
pub struct Priority(u8);

impl Priority {
    pub const MAX: Self = Self(100);
    pub const NEUTRAL: Self = Self(50);
}

impl TryFrom<u8> for Priority {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        ensure!(value <= Self::MAX.0, "priority must be within 0..=100, got {value}");
        Ok(Self(value))
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim().parse::<u8>().with_context(|| format!("`{s}` is not a priority"))?.try_into()
    }
}

/// Independent cost, time, and sustainability priorities.
///
/// They are not required to add up to anything.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, bon::Builder)]
pub struct PriorityWeights {
    #[builder(default = Priority::NEUTRAL)]
    pub cost: Priority,

    #[builder(default = Priority::NEUTRAL)]
    pub time: Priority,

    #[builder(default = Priority::NEUTRAL)]
    pub sustainability: Priority,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self::builder().build()
    }
}
