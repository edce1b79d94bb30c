//! Registry compartido de loaders hermanos.
//!
//! Estado mutable compartido entre todas las unidades de un mismo paquete
//! compilado, pasado explícitamente por `Arc` en la construcción (sin estado
//! ambiente). Sus únicos mutadores son `add`/`remove`; cada `add` se empareja
//! eventualmente con un `remove` en reload o disposición de la unidad.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::errors::WireError;
use crate::model::LoadedUnit;

use super::{ArtifactResolver, BootstrapResolver, DynamicLoader};

#[derive(Debug)]
pub struct LoaderRegistry {
    root: Arc<dyn ArtifactResolver>,
    members: Mutex<Vec<Arc<DynamicLoader>>>,
}

impl LoaderRegistry {
    /// Registry cuyo último eslabón es `root` (provisto por el host).
    pub fn new(root: Arc<dyn ArtifactResolver>) -> Self {
        Self { root,
               members: Mutex::new(Vec::new()) }
    }

    /// Registry con raíz vacía: la cadena termina en `ArtifactNotFound`.
    pub fn bootstrap() -> Self {
        Self::new(Arc::new(BootstrapResolver))
    }

    pub fn root(&self) -> Arc<dyn ArtifactResolver> {
        self.root.clone()
    }

    pub fn add(&self, loader: Arc<DynamicLoader>) {
        self.members.lock().unwrap_or_else(|e| e.into_inner()).push(loader);
    }

    pub fn remove(&self, loader_id: Uuid) -> bool {
        let mut members = self.members.lock().unwrap_or_else(|e| e.into_inner());
        let before = members.len();
        members.retain(|l| l.id() != loader_id);
        members.len() < before
    }

    pub fn len(&self) -> usize {
        self.members.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Búsqueda cross-unidad: stores locales de todos los miembros, en orden
    /// de registro, incluido el solicitante (inocuo: su lookup local ya
    /// falló). Sólo `resolve_local`, así la delegación nunca recursa.
    pub(crate) fn resolve_member_local(&self, class_name: &str) -> Result<Option<Arc<LoadedUnit>>, WireError> {
        let members = self.members.lock().unwrap_or_else(|e| e.into_inner()).clone();
        for member in members {
            if let Some(unit) = member.resolve_local(class_name)? {
                return Ok(Some(unit));
            }
        }
        Ok(None)
    }

    pub(crate) fn member_resource_bytes(&self, resource_name: &str) -> Option<Vec<u8>> {
        let members = self.members.lock().unwrap_or_else(|e| e.into_inner()).clone();
        for member in members {
            if let Some(bytes) = member.store_bytes(resource_name) {
                return Some(bytes);
            }
        }
        None
    }
}

/// Resolver padre de un loader de unidad: hermanos primero, raíz después.
#[derive(Debug)]
pub struct ParentResolver {
    registry: Arc<LoaderRegistry>,
}

impl ParentResolver {
    pub fn new(registry: Arc<LoaderRegistry>) -> Self {
        Self { registry }
    }
}

impl ArtifactResolver for ParentResolver {
    fn resolve(&self, class_name: &str) -> Result<Arc<LoadedUnit>, WireError> {
        match self.registry.resolve_member_local(class_name)? {
            Some(unit) => Ok(unit),
            None => self.registry.root().resolve(class_name),
        }
    }

    fn resource_bytes(&self, resource_name: &str) -> Option<Vec<u8>> {
        self.registry
            .member_resource_bytes(resource_name)
            .or_else(|| self.registry.root().resource_bytes(resource_name))
    }
}
