use serde::{Deserialize, Serialize};

/// Opaque handle to an open sheet body (a surface or shell) in the
/// geometry kernel. Valid only for the current kernel session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SheetHandle(pub(crate) u64);

impl SheetHandle {
    pub(crate) fn id(&self) -> u64 {
        self.0
    }
}

/// Opaque handle to a closed solid body in the geometry kernel.
/// Valid only for the current kernel session, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SolidHandle(pub(crate) u64);

impl SolidHandle {
    pub(crate) fn id(&self) -> u64 {
        self.0
    }
}

/// Errors from kernel operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KernelError {
    #[error("sweep failed: {reason}")]
    SweepFailed { reason: String },

    #[error("boolean operation failed: {reason}")]
    BooleanFailed { reason: String },

    #[error("degenerate input: {reason}")]
    DegenerateInput { reason: String },

    #[error("body not found: {id}")]
    BodyNotFound { id: u64 },

    #[error("operation not supported: {operation}")]
    NotSupported { operation: String },

    #[error("kernel error: {message}")]
    Other { message: String },
}

/// Mass and extent properties of a solid body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolidProperties {
    pub volume: f64,
    /// Axis-aligned bounding box [min_x, min_y, min_z, max_x, max_y, max_z].
    pub bounding_box: [f64; 6],
    pub face_count: usize,
    pub is_closed: bool,
}

impl SolidProperties {
    /// Extent of the bounding box along coordinate `i` (0..3).
    pub fn extent(&self, i: usize) -> f64 {
        self.bounding_box[i + 3] - self.bounding_box[i]
    }
}
