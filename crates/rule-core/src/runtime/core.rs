//! Core DialectRuntime implementation
//!
//! Una unidad de dialecto compilada posee exactamente un store de artifacts,
//! un registry de invokers y un loader a la vez, y registra su loader en el
//! `LoaderRegistry` compartido para que otras unidades del mismo paquete
//! resuelvan referencias cruzadas a través de él.
//!
//! Supuesto de escritor único: todas las operaciones mutantes toman
//! `&mut self`; la serialización externa la aporta la capa de gestión de
//! paquetes. La resolución concurrente de nombres es responsabilidad del
//! loader (ver `loader`).

use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

use crate::errors::{EngineError, WireError};
use crate::event::{EventSink, InMemoryEventLog, RuntimeEvent, RuntimeEventKind};
use crate::loader::{DynamicLoader, LoaderRegistry};
use crate::model::{Artifact, InvokerHandle, UnitLinker};
use crate::naming::resource_to_class;
use crate::registry::InvokerRegistry;
use crate::store::ArtifactStore;

use super::builder::RuntimeBuilder;

pub struct DialectRuntime<E: EventSink> {
    pub(super) runtime_id: Uuid,
    pub(super) store: ArtifactStore,
    pub(super) invokers: InvokerRegistry,
    pub(super) loader: Option<Arc<DynamicLoader>>,
    pub(super) registry: Option<Arc<LoaderRegistry>>,
    pub(super) linker: Arc<dyn UnitLinker>,
    pub(super) ast: Option<Value>,
    pub(super) events: E,
}

impl DialectRuntime<InMemoryEventLog> {
    /// Runtime con event log in-memory y linker por defecto, attachado al
    /// registry compartido.
    pub fn new(registry: Arc<LoaderRegistry>) -> Self {
        Self::builder(registry).build()
    }

    /// Runtime sin loader ni registry: el estado en el que queda un clon
    /// antes del merge. Cualquier wiring sobre él señala `LoaderDetached`.
    pub fn detached() -> Self {
        RuntimeBuilder::detached().build()
    }

    /// Builder para configurar linker y event sink.
    pub fn builder(registry: Arc<LoaderRegistry>) -> RuntimeBuilder<InMemoryEventLog> {
        RuntimeBuilder::new(registry)
    }
}

impl<E: EventSink> DialectRuntime<E> {
    pub fn runtime_id(&self) -> Uuid {
        self.runtime_id
    }

    pub fn loader(&self) -> Option<Arc<DynamicLoader>> {
        self.loader.clone()
    }

    pub fn loader_registry(&self) -> Option<Arc<LoaderRegistry>> {
        self.registry.clone()
    }

    pub fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.store.set_dirty(dirty);
    }

    pub fn ast(&self) -> Option<&Value> {
        self.ast.as_ref()
    }

    pub fn set_ast(&mut self, ast: Option<Value>) {
        self.ast = ast;
    }

    // ---- store ----

    /// Inserta o reemplaza un artifact. Nombre nuevo: se wirea de inmediato
    /// con el invoker ya registrado bajo ese nombre (ninguno registrado es
    /// un no-op); un fallo de wiring se envuelve en `EngineError` y se
    /// re-lanza sin deshacer la inserción. Nombre existente: dirty=true y el
    /// rewiring queda diferido a un reload.
    pub fn write(&mut self, resource_name: &str, bytes: Vec<u8>) -> Result<(), EngineError> {
        let artifact = Artifact::from_bytes(bytes);
        let digest = artifact.digest.clone();
        let replaced = self.store.insert(resource_name.to_string(), artifact).is_some();
        self.events.append_kind(self.runtime_id,
                                RuntimeEventKind::ArtifactWritten { resource: resource_name.to_string(),
                                                                    digest,
                                                                    replaced });
        if replaced {
            self.store.set_dirty(true);
        } else {
            let class_name = resource_to_class(resource_name);
            self.wire(&class_name)?;
        }
        Ok(())
    }

    /// Bytes del recurso; `None` si es desconocido. Nunca falla.
    pub fn read(&self, resource_name: &str) -> Option<Vec<u8>> {
        self.store.read(resource_name)
    }

    /// Elimina primero la entrada del registry de invokers (clave: nombre de
    /// clase) y después la del store (clave: ruta de recurso derivada).
    /// Devuelve si existía entrada en el store; sólo en ese caso marca dirty.
    pub fn remove(&mut self, class_name: &str) -> bool {
        self.invokers.remove(class_name);
        let resource = crate::naming::class_to_resource(class_name);
        if self.store.remove(&resource).is_some() {
            self.store.set_dirty(true);
            self.events
                .append_kind(self.runtime_id, RuntimeEventKind::ArtifactRemoved { resource });
            true
        } else {
            false
        }
    }

    /// Nombres de recurso presentes, sin orden significativo.
    pub fn list(&self) -> Vec<String> {
        self.store.names()
    }

    // ---- registry de invokers ----

    pub fn put_invoker(&mut self, class_name: impl Into<String>, invoker: InvokerHandle) {
        self.invokers.put(class_name, invoker);
    }

    pub fn put_all_invokers(&mut self, invokers: std::collections::HashMap<String, InvokerHandle>) {
        self.invokers.put_all(invokers);
    }

    pub fn remove_invoker(&mut self, class_name: &str) -> Option<InvokerHandle> {
        self.invokers.remove(class_name)
    }

    pub fn get_invoker(&self, class_name: &str) -> Option<InvokerHandle> {
        self.invokers.get(class_name)
    }

    pub fn invoker_count(&self) -> usize {
        self.invokers.len()
    }

    // ---- ciclo de vida ----

    /// Descarta el loader actual, crea uno fresco encadenado al mismo padre
    /// y re-wirea cada entrada del registry (orden no especificado). Un fallo
    /// individual aborta el reload completo envuelto en un único
    /// `EngineError`; dirty sólo se limpia si el re-wiring completo tuvo
    /// éxito, de modo que un reload fallido deja la unidad marcada
    /// inconsistente.
    pub fn reload(&mut self) -> Result<(), EngineError> {
        let registry = self.registry.clone().ok_or(WireError::LoaderDetached).map_err(EngineError::from)?;
        if let Some(old) = self.loader.take() {
            registry.remove(old.id());
        }
        let fresh = DynamicLoader::chained(self.store.handle(), registry.clone(), self.linker.clone());
        registry.add(fresh.clone());
        let loader_id = fresh.id();
        self.loader = Some(fresh);

        let entries = self.invokers.entries();
        let wired = entries.len();
        for (class_name, handle) in entries {
            self.wire_target(&class_name, &handle)?;
        }

        self.store.set_dirty(false);
        self.events
            .append_kind(self.runtime_id, RuntimeEventKind::Reloaded { loader_id, wired });
        Ok(())
    }

    /// Vacía store, registry y AST, y reconstruye el loader (con entradas
    /// vacías el reload sólo produce un loader fresco). Idempotente.
    pub fn clear(&mut self) -> Result<(), EngineError> {
        self.store.clear();
        self.invokers.clear();
        self.ast = None;
        self.events.append_kind(self.runtime_id, RuntimeEventKind::Cleared);
        self.reload()
    }

    /// Une otro runtime sobre éste: copia su flag dirty (sobrescritura, no
    /// OR), escribe cada artifact suyo (dirty-on-overwrite, sin wiring: el
    /// merge asume que el otro runtime ya wireó lo suyo) y une su registry
    /// de invokers con last-write-wins. Sin garantía de orden entre
    /// artifacts con referencias cruzadas: se itera en el orden que entregue
    /// `list()`.
    pub fn merge<S: EventSink>(&mut self, other: &DialectRuntime<S>) {
        self.store.set_dirty(other.is_dirty());

        if self.loader.is_none() {
            if self.registry.is_none() {
                self.registry = other.registry.clone();
            }
            if let Some(other_loader) = &other.loader {
                let fresh = Arc::new(DynamicLoader::new(self.store.handle(),
                                                        other_loader.parent(),
                                                        self.linker.clone()));
                if let Some(registry) = &self.registry {
                    registry.add(fresh.clone());
                }
                self.loader = Some(fresh);
                self.store.set_dirty(true);
            }
        }

        let mut artifacts = 0usize;
        for resource in other.list() {
            if let Some(bytes) = other.read(&resource) {
                let replaced = self.store.insert(resource, Artifact::from_bytes(bytes)).is_some();
                if replaced {
                    self.store.set_dirty(true);
                }
                artifacts += 1;
            }
        }

        let invokers = other.invokers.len();
        self.invokers.put_all(other.invokers.clone_map());
        self.events.append_kind(self.runtime_id,
                                RuntimeEventKind::Merged { artifacts, invokers });
    }

    /// Clon detachado poblado vía merge. Queda sin wirear hasta que se le
    /// haga reload con un loader attachado.
    pub fn clone_data(&self) -> DialectRuntime<InMemoryEventLog> {
        let mut clone = DialectRuntime::detached();
        clone.merge(self);
        clone
    }

    /// Desregistra el loader del registry compartido y detacha el runtime.
    /// Empareja el `add` hecho en la construcción/reload.
    pub fn dispose(&mut self) {
        if let (Some(loader), Some(registry)) = (self.loader.take(), &self.registry) {
            registry.remove(loader.id());
        }
        self.registry = None;
    }

    // ---- eventos ----

    pub fn events(&self) -> Vec<RuntimeEvent> {
        self.events.list(self.runtime_id)
    }

    /// Variante compacta del log de eventos del runtime.
    pub fn event_variants(&self) -> Vec<&'static str> {
        self.events()
            .iter()
            .map(|e| match e.kind {
                RuntimeEventKind::ArtifactWritten { replaced: false, .. } => "W",
                RuntimeEventKind::ArtifactWritten { replaced: true, .. } => "O",
                RuntimeEventKind::ArtifactRemoved { .. } => "R",
                RuntimeEventKind::InvokerWired { .. } => "X",
                RuntimeEventKind::Reloaded { .. } => "L",
                RuntimeEventKind::Merged { .. } => "M",
                RuntimeEventKind::Cleared => "C",
            })
            .collect()
    }
}
