use serde::{Deserialize, Serialize};

/// Which thread ends receive a 45° chamfer cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChamferMode {
    None,
    Left,
    Right,
    Both,
}

/// Thread cross-section variant.
///
/// Male is the external (bolt) profile, Female the internal (nut) profile
/// with the inverted, valley-first cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileVariant {
    Male,
    Female,
}

/// Input parameters for one thread generation run.
///
/// Values are copied in, never referenced — a run owns its parameters.
/// Validation happens when derived geometry is computed, not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreadParameters {
    /// Axial distance between adjacent thread turns.
    pub pitch: f64,
    /// Major (outer) diameter of the thread.
    pub major_diameter: f64,
    /// Total axial length of the threaded section.
    pub length: f64,
    /// Modeling tolerance, threaded unchanged through every stage.
    pub tolerance: f64,
    /// Thread half-angle in degrees. ISO metric threads use 30.
    pub thread_angle_deg: f64,
    pub chamfer: ChamferMode,
    pub variant: ProfileVariant,
}

impl ThreadParameters {
    /// Parameters with the ISO metric defaults: 30° half-angle, no chamfer,
    /// female profile.
    pub fn new(pitch: f64, major_diameter: f64, length: f64, tolerance: f64) -> Self {
        Self {
            pitch,
            major_diameter,
            length,
            tolerance,
            thread_angle_deg: 30.0,
            chamfer: ChamferMode::None,
            variant: ProfileVariant::Female,
        }
    }

    pub fn with_thread_angle(mut self, degrees: f64) -> Self {
        self.thread_angle_deg = degrees;
        self
    }

    pub fn with_chamfer(mut self, chamfer: ChamferMode) -> Self {
        self.chamfer = chamfer;
        self
    }

    pub fn with_variant(mut self, variant: ProfileVariant) -> Self {
        self.variant = variant;
        self
    }
}
