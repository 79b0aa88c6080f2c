use kernel_bridge::{Kernel, KernelIntrospect};

/// The pipeline stages take one kernel object and need both the mutating
/// construction ops and the read-only queries on it. Bundling the two
/// traits sidesteps holding &mut and & on the same value.
pub trait KernelBundle: Kernel + KernelIntrospect {
    fn as_introspect(&self) -> &dyn KernelIntrospect;
}

impl<T: Kernel + KernelIntrospect> KernelBundle for T {
    fn as_introspect(&self) -> &dyn KernelIntrospect {
        self
    }
}
