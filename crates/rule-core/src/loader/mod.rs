//! Loader dinámico: resolución nombre → definición cargada.
//!
//! Orden de resolución deliberadamente local-first: el store propio se
//! consulta antes de delegar al padre, porque los artifacts compilados en
//! esta unidad deben hacer sombra a artifacts homónimos de otras unidades.
//! Un loader nunca se muta cuando su store queda obsoleto: se descarta y se
//! reemplaza entero (ver `DialectRuntime::reload`).

mod registry;

pub use registry::{LoaderRegistry, ParentResolver};

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::errors::WireError;
use crate::model::{LoadedUnit, UnitLinker};
use crate::naming::class_to_resource;
use crate::store::StoreHandle;

/// Capacidad de resolver nombres de clase a definiciones cargadas y nombres
/// de recurso a bytes crudos.
pub trait ArtifactResolver: Send + Sync + fmt::Debug {
    fn resolve(&self, class_name: &str) -> Result<Arc<LoadedUnit>, WireError>;
    /// Bytes crudos del recurso, para consumidores que necesitan el payload
    /// original en lugar de una definición instanciada.
    fn resource_bytes(&self, resource_name: &str) -> Option<Vec<u8>>;
}

/// Resolver terminal de la cadena: no conoce ningún artifact. Sustituible
/// por un resolver raíz provisto por el host al crear el `LoaderRegistry`.
#[derive(Debug, Default)]
pub struct BootstrapResolver;

impl ArtifactResolver for BootstrapResolver {
    fn resolve(&self, class_name: &str) -> Result<Arc<LoadedUnit>, WireError> {
        Err(WireError::ArtifactNotFound(class_name.to_string()))
    }

    fn resource_bytes(&self, _resource_name: &str) -> Option<Vec<u8>> {
        None
    }
}

/// Loader de una unidad de dialecto. Cachea como máximo una resolución por
/// nombre por instancia; resolver dos veces el mismo nombre devuelve la
/// misma definición (identidad del `Arc`), requisito de los consumidores
/// sensibles a identidad.
pub struct DynamicLoader {
    id: Uuid,
    store: StoreHandle,
    parent: Arc<dyn ArtifactResolver>,
    linker: Arc<dyn UnitLinker>,
    cache: RwLock<HashMap<String, Arc<LoadedUnit>>>,
}

impl fmt::Debug for DynamicLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicLoader").field("id", &self.id).finish()
    }
}

impl DynamicLoader {
    /// Loader encadenado a un padre arbitrario (camino del merge: el padre
    /// es el del loader del otro runtime).
    pub fn new(store: StoreHandle, parent: Arc<dyn ArtifactResolver>, linker: Arc<dyn UnitLinker>) -> Self {
        Self { id: Uuid::new_v4(),
               store,
               parent,
               linker,
               cache: RwLock::new(HashMap::new()) }
    }

    /// Loader encadenado al registry compartido de la unidad: el padre
    /// consulta los stores locales de los loaders hermanos y después el
    /// resolver raíz del registry.
    pub fn chained(store: StoreHandle, registry: Arc<LoaderRegistry>, linker: Arc<dyn UnitLinker>) -> Arc<Self> {
        let parent = Arc::new(ParentResolver::new(registry));
        Arc::new(Self::new(store, parent, linker))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn parent(&self) -> Arc<dyn ArtifactResolver> {
        self.parent.clone()
    }

    /// Resolución sin delegación al padre: cache y store local únicamente.
    /// Es el camino que usan los loaders hermanos vía registry, lo que evita
    /// recursión entre unidades.
    pub(crate) fn resolve_local(&self, class_name: &str) -> Result<Option<Arc<LoadedUnit>>, WireError> {
        if let Some(hit) = self.cache.read().unwrap_or_else(|e| e.into_inner()).get(class_name) {
            return Ok(Some(hit.clone()));
        }

        let resource = class_to_resource(class_name);
        let bytes = match self.store.read_bytes(&resource) {
            Some(bytes) => bytes,
            None => return Ok(None),
        };

        let unit = Arc::new(self.linker.link(class_name, &bytes)?);
        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        // Doble chequeo bajo el write lock: si otro hilo resolvió el mismo
        // nombre entre medias, gana su definición (una por nombre por loader).
        let cached = cache.entry(class_name.to_string()).or_insert(unit);
        Ok(Some(cached.clone()))
    }

    /// Bytes del store local, sin delegación.
    pub(crate) fn store_bytes(&self, resource_name: &str) -> Option<Vec<u8>> {
        self.store.read_bytes(resource_name)
    }
}

impl ArtifactResolver for DynamicLoader {
    fn resolve(&self, class_name: &str) -> Result<Arc<LoadedUnit>, WireError> {
        if let Some(unit) = self.resolve_local(class_name)? {
            return Ok(unit);
        }

        // El resultado delegado también se cachea en esta instancia: la
        // identidad por nombre debe sostenerse aunque el resolver padre
        // construya una definición nueva en cada llamada. La entrada vive
        // hasta que el reload descarta el loader entero.
        let unit = self.parent.resolve(class_name)?;
        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        let cached = cache.entry(class_name.to_string()).or_insert(unit);
        Ok(cached.clone())
    }

    fn resource_bytes(&self, resource_name: &str) -> Option<Vec<u8>> {
        self.store
            .read_bytes(resource_name)
            .or_else(|| self.parent.resource_bytes(resource_name))
    }
}
