//! Brush parameter defaults.
//!
//! Every numeric brush argument falls back to these values when it is missing
//! or malformed. Defaults can be loaded from JSON; absent fields keep their
//! built-in values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Error, types::Result};

/// Checker tile size and offset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerDefaults {
    pub width: u32,
    pub height: u32,
    pub length: u32,
    pub offset: [i32; 3],
}

impl Default for CheckerDefaults {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            length: 1,
            offset: [0, 0, 0],
        }
    }
}

/// Stochastic growth parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplatterDefaults {
    /// Phase-0 seed probability
    pub seed: f64,
    /// Growth probability of the first recursion
    pub growth: f64,
    /// Number of growth phases after seeding
    pub recursions: u32,
}

impl Default for SplatterDefaults {
    fn default() -> Self {
        Self {
            seed: 0.1,
            growth: 0.1,
            recursions: 3,
        }
    }
}

/// Face-count thresholds for erosion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErodeDefaults {
    pub erode: u32,
    pub fill: u32,
}

impl Default for ErodeDefaults {
    fn default() -> Self {
        Self { erode: 3, fill: 3 }
    }
}

/// Fallback values for all brush arguments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushDefaults {
    /// Radius for ball, ellipsoid and cylinder brushes
    pub radius: f64,
    /// Height for cylinder brushes
    pub cylinder_height: u32,
    /// Edge length for cuboid brushes
    pub cuboid_size: u32,
    pub checker: CheckerDefaults,
    /// Keep probability of the random mask
    pub random_chance: f64,
    pub splatter: SplatterDefaults,
    pub erode: ErodeDefaults,
    /// Layers painted by overlay
    pub overlay_depth: u32,
    /// Material used by overlay and splatter when none is given
    pub paint_material: String,
    /// Fixed RNG seed; fresh randomness per invocation when absent
    pub seed: Option<u64>,
}

impl Default for BrushDefaults {
    fn default() -> Self {
        Self {
            radius: 3.0,
            cylinder_height: 1,
            cuboid_size: 3,
            checker: CheckerDefaults::default(),
            random_chance: 0.5,
            splatter: SplatterDefaults::default(),
            erode: ErodeDefaults::default(),
            overlay_depth: 1,
            paint_material: "grass".to_string(),
            seed: None,
        }
    }
}

impl BrushDefaults {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let defaults: Self = serde_json::from_str(json)?;
        defaults.validate()?;
        Ok(defaults)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Reject defaults that no brush could run with.
    pub fn validate(&self) -> Result<()> {
        let unit = 0.0..=1.0;
        if !unit.contains(&self.random_chance) {
            return Err(Error::Argument(format!("random_chance {} outside [0, 1]", self.random_chance)));
        }
        if !unit.contains(&self.splatter.seed) || !unit.contains(&self.splatter.growth) {
            return Err(Error::Argument("splatter seed and growth must lie in [0, 1]".into()));
        }
        let c = &self.checker;
        if c.width == 0 || c.height == 0 || c.length == 0 {
            return Err(Error::Argument("checker tile size must be positive".into()));
        }
        if !(self.radius.is_finite() && self.radius >= 0.0) {
            return Err(Error::Argument(format!("invalid default radius {}", self.radius)));
        }
        if self.cylinder_height == 0 || self.cuboid_size == 0 {
            return Err(Error::Argument("cylinder height and cuboid size must be positive".into()));
        }
        Ok(())
    }
}
