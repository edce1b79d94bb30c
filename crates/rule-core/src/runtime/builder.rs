//! Builder para `DialectRuntime`.
//!
//! Permite sustituir el linker (formato concreto del payload compilado) y el
//! event sink antes de attachar el runtime al registry de loaders. El orden
//! de attach importa: el loader se crea y se registra en la construcción,
//! de modo que las unidades hermanas puedan resolver contra esta unidad
//! desde el primer write.

use std::sync::Arc;

use uuid::Uuid;

use crate::event::{EventSink, InMemoryEventLog};
use crate::loader::{DynamicLoader, LoaderRegistry};
use crate::model::{ByteUnitLinker, UnitLinker};
use crate::registry::InvokerRegistry;
use crate::store::ArtifactStore;

use super::core::DialectRuntime;

pub struct RuntimeBuilder<E: EventSink> {
    registry: Option<Arc<LoaderRegistry>>,
    linker: Arc<dyn UnitLinker>,
    events: E,
}

impl RuntimeBuilder<InMemoryEventLog> {
    pub(super) fn new(registry: Arc<LoaderRegistry>) -> Self {
        Self { registry: Some(registry),
               linker: Arc::new(ByteUnitLinker),
               events: InMemoryEventLog::default() }
    }

    pub(super) fn detached() -> Self {
        Self { registry: None,
               linker: Arc::new(ByteUnitLinker),
               events: InMemoryEventLog::default() }
    }
}

impl<E: EventSink> RuntimeBuilder<E> {
    pub fn with_linker(mut self, linker: Arc<dyn UnitLinker>) -> Self {
        self.linker = linker;
        self
    }

    pub fn with_events<S: EventSink>(self, events: S) -> RuntimeBuilder<S> {
        RuntimeBuilder { registry: self.registry,
                         linker: self.linker,
                         events }
    }

    pub fn build(self) -> DialectRuntime<E> {
        let store = ArtifactStore::new();
        let loader = self.registry.as_ref().map(|registry| {
                                               let loader = DynamicLoader::chained(store.handle(),
                                                                                   registry.clone(),
                                                                                   self.linker.clone());
                                               registry.add(loader.clone());
                                               loader
                                           });
        DialectRuntime { runtime_id: Uuid::new_v4(),
                         store,
                         invokers: InvokerRegistry::new(),
                         loader,
                         registry: self.registry,
                         linker: self.linker,
                         ast: None,
                         events: self.events }
    }
}
