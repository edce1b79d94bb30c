//! Snapshot persistible del runtime.
//!
//! El layout es contractual y ordenado: store, AST, invokers, dirty — el
//! mismo orden para guardar y restaurar. En la restauración el loader se
//! reconstruye y registra antes de cualquier resolución, y no se hace reload
//! automático: acceder a una unidad restaurada dirty sirve wiring obsoleto
//! hasta que alguien decida recargarla.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::event::{EventSink, InMemoryEventLog};
use crate::loader::LoaderRegistry;
use crate::model::{new_handle, Artifact, InvokerTarget};

use super::core::DialectRuntime;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeSnapshot {
    pub store: HashMap<String, Artifact>,
    pub ast: Option<Value>,
    pub invokers: HashMap<String, InvokerTarget>,
    pub dirty: bool,
}

impl<E: EventSink> DialectRuntime<E> {
    pub fn snapshot(&self) -> RuntimeSnapshot {
        let invokers = self.invokers
                           .iter()
                           .map(|(name, handle)| {
                               let target = handle.lock().unwrap_or_else(|e| e.into_inner()).clone();
                               (name.clone(), target)
                           })
                           .collect();
        RuntimeSnapshot { store: self.store_snapshot(),
                          ast: self.ast().cloned(),
                          invokers,
                          dirty: self.is_dirty() }
    }

    fn store_snapshot(&self) -> HashMap<String, Artifact> {
        self.store.snapshot_map()
    }
}

impl DialectRuntime<InMemoryEventLog> {
    /// Reconstruye un runtime a partir de un snapshot, attachado a
    /// `registry`.
    pub fn restore(snapshot: RuntimeSnapshot, registry: Arc<LoaderRegistry>) -> Self {
        let mut runtime = DialectRuntime::new(registry);
        runtime.store.replace_map(snapshot.store);
        runtime.store.set_dirty(snapshot.dirty);
        runtime.ast = snapshot.ast;
        for (class_name, target) in snapshot.invokers {
            runtime.invokers.put(class_name, new_handle(target));
        }
        runtime
    }
}
