//! Store de artifacts: mapping nombre-de-recurso → `Artifact` + flag dirty.
//!
//! El mapa interno se comparte (`Arc<RwLock<..>>`) con los loaders de la
//! misma unidad: el escritor único muta a través de `ArtifactStore` y los
//! loaders leen concurrentemente vía `StoreHandle`. El flag dirty queda en
//! true cuando los bytes del store dejan de coincidir con lo que el loader
//! actual resolvió; sólo un reload exitoso lo limpia.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::model::Artifact;

type SharedMap = Arc<RwLock<HashMap<String, Artifact>>>;

#[derive(Debug)]
pub struct ArtifactStore {
    artifacts: SharedMap,
    dirty: bool,
}

impl Default for ArtifactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactStore {
    pub fn new() -> Self {
        Self { artifacts: Arc::new(RwLock::new(HashMap::new())),
               dirty: false }
    }

    /// Handle de sólo-lectura para loaders. Clonar el handle no copia el
    /// mapa: ambos observan las mismas entradas.
    pub fn handle(&self) -> StoreHandle {
        StoreHandle(self.artifacts.clone())
    }

    /// Inserta o reemplaza; devuelve la entrada previa si la hubo.
    pub fn insert(&mut self, resource_name: String, artifact: Artifact) -> Option<Artifact> {
        self.write_guard().insert(resource_name, artifact)
    }

    /// Bytes del recurso, o `None` si es desconocido o el store está vacío.
    /// Nunca falla.
    pub fn read(&self, resource_name: &str) -> Option<Vec<u8>> {
        self.read_guard().get(resource_name).map(|a| a.bytes.clone())
    }

    pub fn remove(&mut self, resource_name: &str) -> Option<Artifact> {
        self.write_guard().remove(resource_name)
    }

    /// Nombres de recurso presentes, sin orden significativo.
    pub fn names(&self) -> Vec<String> {
        self.read_guard().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    pub fn clear(&mut self) {
        self.write_guard().clear();
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Copia del mapa completo (serialización de snapshots).
    pub(crate) fn snapshot_map(&self) -> HashMap<String, Artifact> {
        self.read_guard().clone()
    }

    /// Reemplaza el contenido completo (restauración de snapshots).
    pub(crate) fn replace_map(&mut self, map: HashMap<String, Artifact>) {
        *self.write_guard() = map;
    }

    fn read_guard(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Artifact>> {
        self.artifacts.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_guard(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Artifact>> {
        self.artifacts.write().unwrap_or_else(|e| e.into_inner())
    }
}

/// Vista de lectura del store compartida con los loaders.
#[derive(Debug, Clone)]
pub struct StoreHandle(SharedMap);

impl StoreHandle {
    pub fn read_bytes(&self, resource_name: &str) -> Option<Vec<u8>> {
        self.0
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(resource_name)
            .map(|a| a.bytes.clone())
    }
}
