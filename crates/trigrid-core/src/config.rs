use crate::error::LatticeError;
use crate::geom::{Point, Vec3};
use crate::lattice::TriangleLattice;

/// Parameters for building a [`TriangleLattice`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LatticeConfig {
    pub width: i32,
    pub height: i32,
    pub edge_length: f32,
    pub origin: Vec3,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 20,
            edge_length: 0.375,
            origin: Vec3::ZERO,
        }
    }
}

impl LatticeConfig {
    /// Build the lattice described by this configuration.
    pub fn build<T, F>(&self, factory: F) -> Result<TriangleLattice<T>, LatticeError>
    where
        F: FnMut(Point) -> T,
    {
        TriangleLattice::new(
            self.width,
            self.height,
            self.edge_length,
            self.origin,
            factory,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_builds() {
        let l = LatticeConfig::default().build(|_| true).unwrap();
        assert_eq!((l.width(), l.height()), (40, 20));
        assert_eq!(l.edge_length(), 0.375);
    }

    #[test]
    fn invalid_config_fails() {
        let cfg = LatticeConfig {
            height: 0,
            ..LatticeConfig::default()
        };
        assert!(cfg.build(|_| ()).is_err());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let cfg: LatticeConfig = serde_json::from_str(r#"{"width": 8, "edge_length": 1.0}"#).unwrap();
        assert_eq!(cfg.width, 8);
        assert_eq!(cfg.height, 20);
        assert_eq!(cfg.edge_length, 1.0);
        assert_eq!(cfg.origin, Vec3::ZERO);
    }

    #[test]
    fn config_round_trip() {
        let cfg = LatticeConfig {
            width: 5,
            height: 6,
            edge_length: 2.0,
            origin: Vec3::new(1.0, 2.0, 3.0),
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: LatticeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
