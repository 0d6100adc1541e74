//! # Coaster Targets
//!
//! The closed set of coasters the viewer can show, and where their assets
//! live:
//!
//! ```text
//! assets/models/<name>/coaster.glb
//! assets/models/<name>/water.glb            (lake-tahoe: water_0.glb, water_1.glb)
//! assets/contour-layers/<name>/layer_<i>_contours.json
//! ```

use crate::error::SceneError;
use config::constants::{ASSETS_ROOT, CONTOUR_LAYERS_DIR, MODELS_DIR};
use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

/// A coaster the viewer knows how to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoasterTarget {
    Monterey,
    Catalina,
    SanFranciscoBay,
    LakeTahoe,
}

impl CoasterTarget {
    pub const ALL: [Self; 4] = [
        Self::Monterey,
        Self::Catalina,
        Self::SanFranciscoBay,
        Self::LakeTahoe,
    ];

    /// Canonical kebab-case name, also the asset directory name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Monterey => "monterey",
            Self::Catalina => "catalina",
            Self::SanFranciscoBay => "san-francisco-bay",
            Self::LakeTahoe => "lake-tahoe",
        }
    }

    fn water_files(self) -> &'static [&'static str] {
        match self {
            Self::LakeTahoe => &["water_0.glb", "water_1.glb"],
            _ => &["water.glb"],
        }
    }

    /// Rotation about +Y applied to the imported model, radians.
    pub fn import_rotation(self) -> f32 {
        match self {
            Self::SanFranciscoBay => PI,
            _ => 0.0,
        }
    }

    /// Scroll keyframes for this coaster.
    pub fn orientation_sequence(self) -> Vec<Quat> {
        match self {
            Self::SanFranciscoBay => vec![
                Quat::from_axis_angle(Vec3::Y, 0.0),
                Quat::from_euler(EulerRot::ZYX, FRAC_PI_2, 0.0, 0.0),
                Quat::from_euler(EulerRot::ZYX, FRAC_PI_2, 0.0, FRAC_PI_2),
                Quat::from_euler(EulerRot::YXZ, FRAC_PI_2, 0.0, 0.0),
                Quat::from_axis_angle(Vec3::Y, 0.0),
            ],
            _ => vec![Quat::IDENTITY],
        }
    }

    /// Full asset description.
    pub fn spec(self) -> TargetSpec {
        let name = self.name();
        let model_dir = format!("{ASSETS_ROOT}{MODELS_DIR}/{name}");
        TargetSpec {
            target: self,
            coaster_model_url: format!("{model_dir}/coaster.glb"),
            water_model_urls: self
                .water_files()
                .iter()
                .map(|file| format!("{model_dir}/{file}"))
                .collect(),
            contour_layers_url: format!("{ASSETS_ROOT}{CONTOUR_LAYERS_DIR}/{name}"),
            import_rotation: self.import_rotation(),
            orientation_sequence: self.orientation_sequence(),
        }
    }
}

impl fmt::Display for CoasterTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CoasterTarget {
    type Err = SceneError;

    /// Case-insensitive; spaces and underscores count as hyphens.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized: String = name
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '_' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        Self::ALL
            .into_iter()
            .find(|target| target.name() == normalized)
            .ok_or_else(|| SceneError::unknown_target(name))
    }
}

/// Asset locations and motion parameters for one coaster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetSpec {
    pub target: CoasterTarget,
    pub coaster_model_url: String,
    pub water_model_urls: Vec<String>,
    /// Base location of `layer_<i>_contours.json` files.
    pub contour_layers_url: String,
    pub import_rotation: f32,
    pub orientation_sequence: Vec<Quat>,
}

/// Looks up a target by name.
///
/// # Example
///
/// ```rust
/// use coaster_scene::resolve_target;
///
/// let spec = resolve_target("lake tahoe").unwrap();
/// assert_eq!(spec.water_model_urls.len(), 2);
/// assert!(resolve_target("atlantis").is_err());
/// ```
pub fn resolve_target(name: &str) -> Result<TargetSpec, SceneError> {
    name.parse::<CoasterTarget>().map(CoasterTarget::spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_names_roundtrip() {
        for target in CoasterTarget::ALL {
            assert_eq!(target.name().parse::<CoasterTarget>(), Ok(target));
            assert_eq!(target.to_string().parse::<CoasterTarget>(), Ok(target));
        }
    }

    #[test]
    fn test_lenient_parsing() {
        assert_eq!("Monterey".parse(), Ok(CoasterTarget::Monterey));
        assert_eq!("san francisco bay".parse(), Ok(CoasterTarget::SanFranciscoBay));
        assert_eq!("LAKE_TAHOE".parse(), Ok(CoasterTarget::LakeTahoe));
        assert_eq!("  catalina ".parse(), Ok(CoasterTarget::Catalina));
    }

    #[test]
    fn test_unknown_target() {
        let err = "atlantis".parse::<CoasterTarget>().unwrap_err();
        assert_eq!(err, SceneError::unknown_target("atlantis"));
        assert_eq!(err.to_string(), "Unknown target atlantis");
    }

    #[test]
    fn test_asset_urls() {
        let spec = CoasterTarget::Monterey.spec();
        assert_eq!(spec.coaster_model_url, "assets/models/monterey/coaster.glb");
        assert_eq!(spec.water_model_urls, vec!["assets/models/monterey/water.glb"]);
        assert_eq!(spec.contour_layers_url, "assets/contour-layers/monterey");

        let tahoe = CoasterTarget::LakeTahoe.spec();
        assert_eq!(
            tahoe.water_model_urls,
            vec![
                "assets/models/lake-tahoe/water_0.glb",
                "assets/models/lake-tahoe/water_1.glb"
            ]
        );
    }

    #[test]
    fn test_san_francisco_fly_around() {
        let spec = CoasterTarget::SanFranciscoBay.spec();
        assert_eq!(spec.orientation_sequence.len(), 5);
        assert_relative_eq!(spec.import_rotation, PI);

        let keys = &spec.orientation_sequence;
        assert!(keys[0].angle_between(Quat::IDENTITY) < 1e-3);
        assert!(keys[4].angle_between(Quat::IDENTITY) < 1e-3);
        // Second keyframe is a quarter turn about Z
        let v = keys[1] * Vec3::X;
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-6);
        // Fourth keyframe is a quarter turn about Y
        let v = keys[3] * Vec3::Z;
        assert_relative_eq!(v.x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_other_targets_hold_still() {
        for target in [CoasterTarget::Monterey, CoasterTarget::Catalina, CoasterTarget::LakeTahoe] {
            assert_eq!(target.orientation_sequence(), vec![Quat::IDENTITY]);
            assert_eq!(target.import_rotation(), 0.0);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&CoasterTarget::SanFranciscoBay).unwrap();
        assert_eq!(json, "\"san-francisco-bay\"");
        let back: CoasterTarget = serde_json::from_str("\"lake-tahoe\"").unwrap();
        assert_eq!(back, CoasterTarget::LakeTahoe);
    }
}
