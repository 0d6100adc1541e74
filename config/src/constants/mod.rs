//! Centralized configuration values shared across the bathymetry pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for general floating-point comparisons.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1e-10;

/// Plane-side tolerance used by the BSP boolean kernel.
///
/// Points closer than this to a splitting plane are treated as coplanar.
/// It is deliberately much larger than [`EPSILON`] so that vertices produced
/// by earlier splits snap back onto their planes.
///
/// # Examples
/// ```
/// use config::constants::{CSG_EPSILON, EPSILON};
/// assert!(CSG_EPSILON > EPSILON);
/// ```
pub const CSG_EPSILON: f64 = 1e-5;

/// Tolerance used when comparing mesh volumes in assertions and
/// post-condition checks.
///
/// # Examples
/// ```
/// use config::constants::VOLUME_TOLERANCE;
/// let carved = 0.9;
/// let base = 1.0;
/// assert!(carved < base - VOLUME_TOLERANCE);
/// ```
pub const VOLUME_TOLERANCE: f64 = 1e-6;

// =============================================================================
// SLAB DIMENSIONS
// =============================================================================

/// Length of the table slab along its long (z) axis, in scene units.
///
/// # Examples
/// ```
/// use config::constants::SLAB_LONG_DIM;
/// assert!(SLAB_LONG_DIM > 0.0);
/// ```
pub const SLAB_LONG_DIM: f64 = 1.0;

/// Width of the table slab along its short (x) axis, in scene units.
///
/// # Examples
/// ```
/// use config::constants::SLAB_SHORT_DIM;
/// assert!(SLAB_SHORT_DIM > 0.0);
/// ```
pub const SLAB_SHORT_DIM: f64 = 1.0;

/// Thickness of the table slab (y axis), in scene units.
///
/// # Examples
/// ```
/// use config::constants::SLAB_HEIGHT;
/// assert!(SLAB_HEIGHT < 1.0);
/// ```
pub const SLAB_HEIGHT: f64 = 0.118;

/// Fraction of the slab thickness occupied by the deepest water layer.
///
/// The total depth distributed across all contour layers is
/// `SLAB_HEIGHT * WATER_DEPTH_RATIO`.
///
/// # Examples
/// ```
/// use config::constants::{SLAB_HEIGHT, WATER_DEPTH_RATIO};
/// let max_water_depth = SLAB_HEIGHT * WATER_DEPTH_RATIO;
/// assert!(max_water_depth < SLAB_HEIGHT);
/// ```
pub const WATER_DEPTH_RATIO: f64 = 0.8;

/// Factor applied to half the slab height when dropping the slab below the
/// water plane. Slightly above 1 so the water top breaks through the slab
/// surface instead of sharing a plane with it.
///
/// # Examples
/// ```
/// use config::constants::{SLAB_DROP_FACTOR, SLAB_HEIGHT};
/// let slab_center_y = SLAB_DROP_FACTOR * (-SLAB_HEIGHT / 2.0);
/// assert!(slab_center_y + SLAB_HEIGHT / 2.0 < 0.0);
/// ```
pub const SLAB_DROP_FACTOR: f64 = 1.01;

/// Offset subtracted from contour coordinates in x and y so that the unit
/// contour footprint is centred on the origin.
///
/// # Examples
/// ```
/// use config::constants::CONTOUR_CENTER_OFFSET;
/// assert_eq!(CONTOUR_CENTER_OFFSET, 0.5);
/// ```
pub const CONTOUR_CENTER_OFFSET: f64 = 0.5;

/// World rotation of the water layers as XYZ Euler angles in radians.
///
/// Contours are extruded along +z; this turns the extrusion axis to point
/// down into the slab and aligns the footprint diagonally on the table.
///
/// # Examples
/// ```
/// use config::constants::WATER_ROTATION;
/// assert_eq!(WATER_ROTATION[1], 0.0);
/// ```
pub const WATER_ROTATION: [f64; 3] = [FRAC_PI_2, 0.0, -FRAC_PI_4];

// =============================================================================
// PRESENTATION CONSTANTS
// =============================================================================

/// Peak height (scene units) of the idle hover bob. The bob oscillates in
/// `[0, 2 * HOVER_HEIGHT]`.
///
/// # Examples
/// ```
/// use config::constants::HOVER_HEIGHT;
/// assert!(HOVER_HEIGHT < 0.1);
/// ```
pub const HOVER_HEIGHT: f64 = 0.05;

/// Angular frequency (radians per second) of the idle hover bob.
///
/// # Examples
/// ```
/// use config::constants::HOVER_ANGULAR_FREQUENCY;
/// let period_secs = 2.0 * std::f64::consts::PI / HOVER_ANGULAR_FREQUENCY;
/// assert!(period_secs > 10.0);
/// ```
pub const HOVER_ANGULAR_FREQUENCY: f64 = 0.5;

/// Amplitude (radians) of the idle hover roll.
///
/// # Examples
/// ```
/// use config::constants::HOVER_TILT;
/// assert!(HOVER_TILT < 0.1);
/// ```
pub const HOVER_TILT: f64 = 0.02;

/// Height of the host page's scroll container, in viewport heights.
///
/// This sizes the scroll area only. The orientation sequencer splits the
/// offset into `keyframes - 1` pages of its own.
///
/// # Examples
/// ```
/// use config::constants::SCROLL_PAGES;
/// assert!(SCROLL_PAGES >= 1);
/// ```
pub const SCROLL_PAGES: u32 = 5;

/// Damping factor of the displayed scroll offset. Higher is snappier.
///
/// # Examples
/// ```
/// use config::constants::SCROLL_DAMPING;
/// assert!(SCROLL_DAMPING > 0.0);
/// ```
pub const SCROLL_DAMPING: f64 = 4.0;

// =============================================================================
// ASSET NAMING
// =============================================================================

/// Root of all asset URLs / paths.
///
/// # Examples
/// ```
/// use config::constants::ASSETS_ROOT;
/// assert!(ASSETS_ROOT.ends_with('/'));
/// ```
pub const ASSETS_ROOT: &str = "assets/";

/// Directory under [`ASSETS_ROOT`] holding one sub-directory of contour layers
/// per coaster target.
///
/// # Examples
/// ```
/// use config::constants::CONTOUR_LAYERS_DIR;
/// assert_eq!(CONTOUR_LAYERS_DIR, "contour-layers");
/// ```
pub const CONTOUR_LAYERS_DIR: &str = "contour-layers";

/// Directory under [`ASSETS_ROOT`] holding the pre-built coaster models.
///
/// # Examples
/// ```
/// use config::constants::MODELS_DIR;
/// assert_eq!(MODELS_DIR, "models");
/// ```
pub const MODELS_DIR: &str = "models";

/// File name prefix of a contour layer.
///
/// # Examples
/// ```
/// use config::constants::layer_file_name;
/// assert!(layer_file_name(0).starts_with(config::constants::LAYER_FILE_PREFIX));
/// ```
pub const LAYER_FILE_PREFIX: &str = "layer_";

/// File name suffix of a contour layer.
///
/// # Examples
/// ```
/// use config::constants::layer_file_name;
/// assert!(layer_file_name(0).ends_with(config::constants::LAYER_FILE_SUFFIX));
/// ```
pub const LAYER_FILE_SUFFIX: &str = "_contours.json";

/// Builds the file name of contour layer `index`.
///
/// # Examples
/// ```
/// use config::constants::layer_file_name;
/// assert_eq!(layer_file_name(3), "layer_3_contours.json");
/// ```
pub fn layer_file_name(index: usize) -> String {
    format!("{LAYER_FILE_PREFIX}{index}{LAYER_FILE_SUFFIX}")
}

// =============================================================================
// HELPERS
// =============================================================================

/// Returns true when `a` and `b` differ by less than [`EPSILON`].
///
/// # Examples
/// ```
/// use config::constants::approx_equal;
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true when `value` is within [`EPSILON`] of zero.
///
/// # Examples
/// ```
/// use config::constants::approx_zero;
/// assert!(approx_zero(-1e-12));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// RUNTIME SLAB CONFIGURATION
// =============================================================================

/// Validated physical dimensions of one coffee-table slab.
///
/// # Examples
/// ```
/// use config::constants::SlabConfig;
/// let slab = SlabConfig::default();
/// assert!(slab.max_water_depth() < slab.height);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlabConfig {
    /// Extent along z.
    pub long_dim: f64,
    /// Extent along x.
    pub short_dim: f64,
    /// Extent along y.
    pub height: f64,
    /// Fraction of `height` filled by the water layers.
    pub water_depth_ratio: f64,
    /// Multiplier on half the height when dropping the slab below y = 0.
    pub drop_factor: f64,
    /// XYZ Euler rotation (radians) applied to the water layers.
    pub water_rotation: [f64; 3],
}

impl SlabConfig {
    /// Builds a slab configuration, rejecting non-positive dimensions and
    /// water ratios outside `(0, 1]`. Drop factor and rotation take their
    /// defaults.
    ///
    /// # Examples
    /// ```
    /// use config::constants::SlabConfig;
    /// let slab = SlabConfig::new(2.0, 1.0, 0.1, 0.5).expect("valid slab");
    /// assert!((slab.max_water_depth() - 0.05).abs() < 1e-12);
    /// ```
    pub fn new(
        long_dim: f64,
        short_dim: f64,
        height: f64,
        water_depth_ratio: f64,
    ) -> Result<Self, ConfigError> {
        let slab = Self {
            long_dim,
            short_dim,
            height,
            water_depth_ratio,
            ..Self::default()
        };
        slab.validate()?;
        Ok(slab)
    }

    /// Checks every field of an already-built configuration.
    ///
    /// # Examples
    /// ```
    /// use config::constants::SlabConfig;
    /// let mut slab = SlabConfig::default();
    /// slab.height = -1.0;
    /// assert!(slab.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("long_dim", self.long_dim),
            ("short_dim", self.short_dim),
            ("height", self.height),
            ("drop_factor", self.drop_factor),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }
        let ratio = self.water_depth_ratio;
        if !(ratio.is_finite() && ratio > 0.0 && ratio <= 1.0) {
            return Err(ConfigError::InvalidWaterRatio(ratio));
        }
        if self.water_rotation.iter().any(|angle| !angle.is_finite()) {
            return Err(ConfigError::InvalidRotation(self.water_rotation));
        }
        Ok(())
    }

    /// Total depth distributed across all contour layers.
    ///
    /// # Examples
    /// ```
    /// use config::constants::SlabConfig;
    /// assert!(SlabConfig::default().max_water_depth() > 0.0);
    /// ```
    pub fn max_water_depth(&self) -> f64 {
        self.height * self.water_depth_ratio
    }

    /// Y coordinate of the slab centre once it is dropped below the water.
    ///
    /// # Examples
    /// ```
    /// use config::constants::SlabConfig;
    /// assert!(SlabConfig::default().slab_center_y() < 0.0);
    /// ```
    pub fn slab_center_y(&self) -> f64 {
        self.drop_factor * (-self.height / 2.0)
    }
}

impl Default for SlabConfig {
    fn default() -> Self {
        Self {
            long_dim: SLAB_LONG_DIM,
            short_dim: SLAB_SHORT_DIM,
            height: SLAB_HEIGHT,
            water_depth_ratio: WATER_DEPTH_RATIO,
            drop_factor: SLAB_DROP_FACTOR,
            water_rotation: WATER_ROTATION,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A length or factor was zero, negative or not finite.
    InvalidDimension {
        /// Field name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// The water depth ratio was outside `(0, 1]`.
    InvalidWaterRatio(f64),
    /// A rotation angle was not finite.
    InvalidRotation([f64; 3]),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimension { name, value } => {
                write!(f, "{name} must be positive and finite: {value}")
            }
            ConfigError::InvalidWaterRatio(value) => {
                write!(f, "water_depth_ratio must be in (0, 1]: {value}")
            }
            ConfigError::InvalidRotation(angles) => {
                write!(f, "water_rotation must be finite: {angles:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
