use crate::domain::{Algorithm, Dimensions, RANDOM_DRAW_RANGE};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Startup configuration. Fixed for the lifetime of the process.
///
/// The grid extent is derived from a physical size divided by the voxel
/// `resolution`, so the defaults give 37 x 25 x 37 cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub screen_width: usize,
    pub screen_height: usize,
    pub depth: usize,
    /// Edge length of one voxel, in the same units as the sizes above
    pub resolution: usize,
    /// Ticks per second while placing the seed
    pub setting_fps: u32,
    /// Generations per second while running
    pub running_fps: u32,
    /// A cell starts alive when its draw from `0..200` exceeds this
    pub density_threshold: u32,
    /// Fixed RNG seed; OS entropy when absent
    pub seed: Option<u64>,
    pub algorithm: Algorithm,
}

impl Default for SimConfig {
    fn default() -> Self {
        const SCALE: usize = 5;
        Self {
            screen_width: 1200 * SCALE,
            screen_height: 800 * SCALE,
            depth: 1200 * SCALE,
            resolution: 160,
            setting_fps: 10,
            running_fps: 5,
            density_threshold: 175,
            seed: None,
            algorithm: Algorithm::default(),
        }
    }
}

impl SimConfig {
    /// Read a JSON config file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Grid extent in cells
    pub fn dimensions(&self) -> Result<Dimensions> {
        if self.resolution == 0 {
            return Err(Error::InvalidConfig("resolution must be positive".into()));
        }
        Dimensions::new(
            self.screen_width / self.resolution,
            self.screen_height / self.resolution,
            self.depth / self.resolution,
        )
    }

    pub fn validate(&self) -> Result<()> {
        self.dimensions()?;
        if self.setting_fps == 0 || self.running_fps == 0 {
            return Err(Error::InvalidConfig("tick rates must be positive".into()));
        }
        if self.density_threshold >= RANDOM_DRAW_RANGE {
            return Err(Error::InvalidConfig(format!(
                "density_threshold must be below {RANDOM_DRAW_RANGE}, got {}",
                self.density_threshold
            )));
        }
        Ok(())
    }
}
