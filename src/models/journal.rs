use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::selection::Weekday;
use crate::planner::constants::{DEFAULT_GLASS_ML, DEFAULT_HYDRATION_GOAL_ML};

/// Daily water target, counted in glasses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HydrationGoal {
    pub glass_ml: u32,
    pub goal_ml: u32,
}

impl Default for HydrationGoal {
    fn default() -> Self {
        Self {
            glass_ml: DEFAULT_GLASS_ML,
            goal_ml: DEFAULT_HYDRATION_GOAL_ML,
        }
    }
}

impl HydrationGoal {
    /// Glasses needed to reach the goal (rounded up).
    pub fn glasses(&self) -> u32 {
        if self.glass_ml == 0 {
            return 0;
        }
        self.goal_ml.div_ceil(self.glass_ml)
    }

    pub fn liters(&self, glasses: u32) -> f64 {
        f64::from(glasses) * f64::from(self.glass_ml) / 1000.0
    }

    pub fn goal_liters(&self) -> f64 {
        f64::from(self.goal_ml) / 1000.0
    }

    /// Fraction of the goal reached, capped at 1.0.
    pub fn progress(&self, glasses: u32) -> f64 {
        if self.goal_ml == 0 {
            return 1.0;
        }
        (f64::from(glasses) * f64::from(self.glass_ml) / f64::from(self.goal_ml)).min(1.0)
    }
}

/// Free-text notes and per-day hydration counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    hydration: BTreeMap<Weekday, u32>,
}

impl Journal {
    pub fn glasses(&self, day: Weekday) -> u32 {
        self.hydration.get(&day).copied().unwrap_or(0)
    }

    /// Set the glass count for a day, clamped to the goal.
    pub fn set_glasses(&mut self, day: Weekday, glasses: u32, goal: &HydrationGoal) -> u32 {
        let clamped = glasses.min(goal.glasses());
        self.hydration.insert(day, clamped);
        clamped
    }

    /// Adjust the glass count by a signed delta, clamped to `0..=goal`.
    pub fn add_glasses(&mut self, day: Weekday, delta: i32, goal: &HydrationGoal) -> u32 {
        let current = i64::from(self.glasses(day));
        let next = u32::try_from((current + i64::from(delta)).max(0)).unwrap_or(u32::MAX);
        self.set_glasses(day, next, goal)
    }

    /// Clamp stored counts to the goal. Returns how many days were repaired.
    pub fn normalize(&mut self, goal: &HydrationGoal) -> usize {
        let limit = goal.glasses();
        let mut repaired = 0;
        for count in self.hydration.values_mut() {
            if *count > limit {
                *count = limit;
                repaired += 1;
            }
        }
        repaired
    }
}
