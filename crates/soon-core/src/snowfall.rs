//! Snowfall parameters and snowflake layout.
//!
//! Flakes are laid out once from a seeded RNG and then animated entirely by
//! CSS, so the same [`SnowfallConfig`] always produces the same flakes.
//!
//! Speed and wind are expressed in pixels per frame, the way most canvas
//! snow effects are tuned, and converted to an animation duration and a
//! horizontal drift over a fixed fall distance.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SoonError};
use crate::palette::{HexColor, SNOW};

/// Frame rate assumed when converting per-frame speeds to durations
pub const FRAMES_PER_SECOND: f32 = 60.0;

/// Vertical distance a flake covers in one animation cycle
pub const FALL_DISTANCE_PX: f32 = 1000.0;

/// Default number of flakes on screen
pub const DEFAULT_COUNT: u32 = 150;

/// Most flakes a single overlay may hold
pub const MAX_COUNT: u32 = 10_000;

/// Accepted radius range in pixels
pub const RADIUS_LIMITS: Bounds = Bounds::new(0.01, 100.0);

/// Accepted fall speed range in pixels per frame
pub const SPEED_LIMITS: Bounds = Bounds::new(0.01, 100.0);

/// Accepted wind range in pixels per frame
pub const WIND_LIMITS: Bounds = Bounds::new(-100.0, 100.0);

const MIN_OPACITY: f32 = 0.4;

/// Inclusive `[min, max]` range, written as a two element array in config.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

impl Bounds {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Distance between the two ends
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Checks the range is ordered and lies inside `limits`. NaN fails
    /// every comparison and is rejected too.
    fn check(&self, field: &'static str, limits: Bounds) -> Result<()> {
        if limits.min <= self.min && self.min <= self.max && self.max <= limits.max {
            Ok(())
        } else {
            Err(SoonError::InvalidBounds {
                field,
                min: self.min,
                max: self.max,
            })
        }
    }

    fn sample(&self, rng: &mut StdRng) -> f32 {
        rng.random_range(self.min..=self.max)
    }
}

impl From<[f32; 2]> for Bounds {
    fn from([min, max]: [f32; 2]) -> Self {
        Self { min, max }
    }
}

impl From<Bounds> for [f32; 2] {
    fn from(bounds: Bounds) -> Self {
        [bounds.min, bounds.max]
    }
}

/// Settings for the decorative snowfall overlay
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowfallConfig {
    /// When false the overlay is rendered empty
    pub enabled: bool,
    /// Flake color
    pub color: HexColor,
    /// Number of flakes
    pub count: u32,
    /// Flake radius in pixels
    pub radius: Bounds,
    /// Fall speed in pixels per frame
    pub speed: Bounds,
    /// Horizontal drift in pixels per frame (negative drifts left)
    pub wind: Bounds,
    /// RNG seed for flake placement
    pub seed: u64,
}

impl Default for SnowfallConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color: HexColor::from_static(SNOW),
            count: DEFAULT_COUNT,
            radius: Bounds::new(0.5, 3.0),
            speed: Bounds::new(1.0, 3.0),
            wind: Bounds::new(-0.5, 2.0),
            seed: 0,
        }
    }
}

impl SnowfallConfig {
    pub fn validate(&self) -> Result<()> {
        if self.count > MAX_COUNT {
            return Err(SoonError::TooManySnowflakes {
                count: self.count,
                max: MAX_COUNT,
            });
        }
        self.radius.check("radius", RADIUS_LIMITS)?;
        self.speed.check("speed", SPEED_LIMITS)?;
        self.wind.check("wind", WIND_LIMITS)?;
        Ok(())
    }

    /// Number of flakes that will actually be rendered
    pub fn visible_count(&self) -> u32 {
        if self.enabled {
            self.count
        } else {
            0
        }
    }

    /// Lays out every flake.
    ///
    /// Assumes the config has been validated; an inverted range would make
    /// the RNG panic.
    pub fn generate(&self) -> Vec<Snowflake> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.visible_count())
            .map(|index| self.flake(index, &mut rng))
            .collect()
    }

    fn flake(&self, index: u32, rng: &mut StdRng) -> Snowflake {
        let left_percent = rng.random::<f32>() * 100.0;
        let radius = self.radius.sample(rng);
        let speed = self.speed.sample(rng);
        let wind = self.wind.sample(rng);
        let phase = rng.random::<f32>();

        let duration_secs = FALL_DISTANCE_PX / (speed * FRAMES_PER_SECOND);
        let opacity = if self.radius.span() > 0.0 {
            let t = (radius - self.radius.min) / self.radius.span();
            (MIN_OPACITY + (1.0 - MIN_OPACITY) * t).clamp(MIN_OPACITY, 1.0)
        } else {
            1.0
        };

        Snowflake {
            index,
            left_percent,
            radius,
            duration_secs,
            delay_secs: -(phase * duration_secs),
            drift_px: wind * FRAMES_PER_SECOND * duration_secs,
            opacity,
        }
    }
}

/// One laid-out flake
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snowflake {
    pub index: u32,
    /// Horizontal start position as a percentage of the overlay width
    pub left_percent: f32,
    pub radius: f32,
    /// Time to fall [`FALL_DISTANCE_PX`]
    pub duration_secs: f32,
    /// Negative delay so the flake starts mid-fall
    pub delay_secs: f32,
    /// Horizontal distance covered over one fall
    pub drift_px: f32,
    pub opacity: f32,
}

impl Snowflake {
    /// Inline style for the flake element.
    ///
    /// Movement comes from the `snowfall-drop` keyframes, which read the
    /// drift from `--snowflake-drift`.
    pub fn style(&self, color: &HexColor) -> String {
        let diameter = self.radius * 2.0;
        format!(
            "left: {:.2}%; width: {:.2}px; height: {:.2}px; background: {}; opacity: {:.2}; \
             animation-duration: {:.2}s; animation-delay: {:.2}s; --snowflake-drift: {:.1}px;",
            self.left_percent,
            diameter,
            diameter,
            color,
            self.opacity,
            self.duration_secs,
            self.delay_secs,
            self.drift_px,
        )
    }
}
