pub mod mesh_props;
pub mod mock_kernel;
pub mod traits;
pub mod truck_kernel;
pub mod truck_shapes;
pub mod types;

pub use mock_kernel::MockKernel;
pub use traits::*;
pub use truck_kernel::TruckKernel;
pub use types::*;
