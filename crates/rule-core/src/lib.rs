//! rule-core: store de artifacts compilados y wiring de invokers por unidad
//! de dialecto.
//!
//! El core mantiene consistente el triángulo store ↔ loader ↔ registry:
//! - `store`: mapping nombre→bytes con flag dirty.
//! - `loader`: resolución nombre→definición cargada, local-first con
//!   delegación al registry compartido de loaders hermanos.
//! - `registry`: invokers vivos esperando una unidad instanciada.
//! - `runtime`: `DialectRuntime` orquesta write/remove, wiring, reload,
//!   merge, clear y snapshots.
//!
//! El compilador de reglas y el modelo completo de reglas/paquete quedan
//! fuera: entran como colaboradores (pares nombre+bytes, objetos de regla
//! para el borrado dirigido).
pub mod constants;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod loader;
pub mod model;
pub mod naming;
pub mod registry;
pub mod runtime;
pub mod store;

pub use errors::{EngineError, WireError};
pub use event::{EventSink, InMemoryEventLog, RuntimeEvent, RuntimeEventKind};
pub use loader::{ArtifactResolver, BootstrapResolver, DynamicLoader, LoaderRegistry};
pub use model::{new_handle, Artifact, ByteUnitLinker, ConditionNode, Function, InvokerHandle, InvokerTarget,
                LoadedUnit, PatternConstraint, Rule, UnitFactory, UnitInstance, UnitLinker};
pub use registry::InvokerRegistry;
pub use runtime::{DialectRuntime, RuntimeBuilder, RuntimeSnapshot};
pub use store::ArtifactStore;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::naming::class_to_resource;

    #[test]
    fn write_then_read_roundtrip() {
        let registry = Arc::new(LoaderRegistry::bootstrap());
        let mut runtime = DialectRuntime::new(registry);

        let resource = class_to_resource("org.acme.Rule_0ConsequenceInvoker");
        runtime.write(&resource, vec![0xCA, 0xFE]).unwrap();

        assert_eq!(runtime.read(&resource), Some(vec![0xCA, 0xFE]));
        assert!(!runtime.is_dirty());
        assert_eq!(runtime.list(), vec![resource]);
    }

    #[test]
    fn new_write_wires_registered_invoker() {
        let registry = Arc::new(LoaderRegistry::bootstrap());
        let mut runtime = DialectRuntime::new(registry);

        let class = "org.acme.Rule_0ConsequenceInvoker";
        let handle = new_handle(InvokerTarget::Consequence { consequence: None });
        runtime.put_invoker(class, handle.clone());

        runtime.write(&class_to_resource(class), b"unit".to_vec()).unwrap();

        let target = handle.lock().unwrap();
        assert!(target.is_wired());
        assert_eq!(target.slot().unwrap().class_name, class);
        assert!(!runtime.is_dirty());
    }
}
