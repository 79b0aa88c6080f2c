pub mod assemble;
pub mod chamfer;
pub mod helix;
pub mod kernel_ext;
pub mod pipeline;
pub mod profile;
pub mod settings;
pub mod sweep;
pub mod types;

pub use assemble::execute_cap;
pub use chamfer::{cutter_outline, execute_chamfer};
pub use helix::build_helix;
pub use kernel_ext::KernelBundle;
pub use pipeline::generate_thread_solid;
pub use profile::build_profile;
pub use settings::ProfileGeometry;
pub use sweep::execute_sweep;
pub use types::*;
