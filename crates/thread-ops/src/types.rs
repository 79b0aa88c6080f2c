use std::fmt;

use kernel_bridge::{KernelError, SolidHandle, SolidProperties};

use crate::settings::ProfileGeometry;

/// Pipeline stage names for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Sweep,
    Repair,
    Cap,
    Chamfer,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Sweep => "sweep",
            Stage::Repair => "face repair",
            Stage::Cap => "capping",
            Stage::Chamfer => "chamfer",
        };
        f.write_str(name)
    }
}

/// Errors from thread generation.
///
/// Parameter problems are detected before any kernel call and are
/// recoverable by re-prompting; construction failures are deterministic for
/// a given parameter set and are not retried.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ThreadError {
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    #[error("geometry construction failed: {0}")]
    Construction(#[from] KernelError),

    #[error("{stage} produced no geometry")]
    EmptyResult { stage: Stage },

    #[error("{stage} produced {count} bodies where exactly one was expected")]
    Ambiguous { stage: Stage, count: usize },
}

/// A finished thread solid plus the geometry it was derived from and its
/// measured properties, so the caller can position and inspect the result.
#[derive(Debug, Clone)]
pub struct GeneratedThread {
    pub solid: SolidHandle,
    pub geometry: ProfileGeometry,
    pub properties: SolidProperties,
}

/// Exactly one body expected from a kernel operation: zero is a
/// construction failure, several is an ambiguity surfaced to the caller.
pub(crate) fn expect_single(
    mut bodies: Vec<SolidHandle>,
    stage: Stage,
) -> Result<SolidHandle, ThreadError> {
    match bodies.len() {
        1 => Ok(bodies.remove(0)),
        0 => Err(ThreadError::EmptyResult { stage }),
        n => Err(ThreadError::Ambiguous { stage, count: n }),
    }
}
