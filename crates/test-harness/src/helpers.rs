//! Scenario helpers: run the thread pipeline against a fresh kernel and
//! hand back the results the oracles need.

use kernel_bridge::{MockKernel, SolidProperties};
use thread_ops::{generate_thread_solid, KernelBundle, ProfileGeometry, ThreadError};
use thread_types::{ChamferMode, ProfileVariant, ThreadParameters};

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("generation failed: {0}")]
    Generation(#[from] ThreadError),
}

// ── Scenario Builder ────────────────────────────────────────────────────────

/// One pipeline run: parameters in, solid properties out. Every scenario
/// owns a fresh mock kernel, matching the pipeline's no-shared-state model.
pub struct ThreadScenario {
    params: ThreadParameters,
}

impl ThreadScenario {
    /// The reference thread: M64 x 6, 200 long, female, no chamfer.
    pub fn reference() -> Self {
        Self {
            params: ThreadParameters::new(6.0, 64.0, 200.0, 1e-4),
        }
    }

    pub fn with_params(params: ThreadParameters) -> Self {
        Self { params }
    }

    pub fn chamfer(mut self, mode: ChamferMode) -> Self {
        self.params = self.params.with_chamfer(mode);
        self
    }

    pub fn variant(mut self, variant: ProfileVariant) -> Self {
        self.params = self.params.with_variant(variant);
        self
    }

    pub fn diameter(mut self, major_diameter: f64) -> Self {
        self.params.major_diameter = major_diameter;
        self
    }

    pub fn params(&self) -> &ThreadParameters {
        &self.params
    }

    /// Generate the thread on a fresh mock kernel.
    pub fn run(&self) -> Result<ScenarioResult, HarnessError> {
        let mut kernel = MockKernel::new();
        let kb: &mut dyn KernelBundle = &mut kernel;
        let thread = generate_thread_solid(kb, &self.params)?;
        Ok(ScenarioResult {
            geometry: thread.geometry,
            properties: thread.properties,
            kernel_operations: kernel.operations(),
        })
    }
}

/// Everything a scenario produced.
pub struct ScenarioResult {
    pub geometry: ProfileGeometry,
    pub properties: SolidProperties,
    pub kernel_operations: usize,
}

impl ScenarioResult {
    pub fn volume(&self) -> f64 {
        self.properties.volume
    }

    /// Axial extent of the solid along the screw axis (global X).
    pub fn axial_range(&self) -> (f64, f64) {
        (self.properties.bounding_box[0], self.properties.bounding_box[3])
    }
}
