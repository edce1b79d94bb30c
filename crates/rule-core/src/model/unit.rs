//! Definiciones cargadas e instanciación de unidades.
//!
//! El loader no ejecuta bytecode: convierte bytes en una `LoadedUnit` a
//! través de un `UnitLinker`, y cada `LoadedUnit` lleva su factory de
//! construcción sin argumentos. Separar link e instanciación permite que la
//! resolución sea cacheable (una definición por nombre por loader) mientras
//! que cada wiring inyecta una instancia fresca.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::WireError;
use crate::hashing::hash_bytes;

/// Construcción sin argumentos de una instancia a partir de una definición
/// resuelta. Los fallos se reportan como `InstantiationFailure` o
/// `AccessDenial`.
pub trait UnitFactory: Send + Sync + fmt::Debug {
    fn new_instance(&self) -> Result<UnitInstance, WireError>;
}

/// Convierte los bytes de un artifact en una definición cargada. Es el seam
/// entre el loader y el formato concreto del payload compilado.
pub trait UnitLinker: Send + Sync + fmt::Debug {
    fn link(&self, class_name: &str, bytes: &[u8]) -> Result<LoadedUnit, WireError>;
}

/// Definición resuelta por un loader. La identidad relevante para los
/// consumidores es el `Arc<LoadedUnit>` cacheado: resolver el mismo nombre
/// en el mismo loader devuelve la misma definición, no una fresca.
#[derive(Debug)]
pub struct LoadedUnit {
    pub class_name: String,
    pub digest: String,
    factory: Arc<dyn UnitFactory>,
}

impl LoadedUnit {
    pub fn new(class_name: impl Into<String>, digest: impl Into<String>, factory: Arc<dyn UnitFactory>) -> Self {
        Self { class_name: class_name.into(),
               digest: digest.into(),
               factory }
    }

    /// Instancia fresca de la unidad (construcción sin argumentos).
    pub fn new_instance(&self) -> Result<UnitInstance, WireError> {
        self.factory.new_instance()
    }
}

/// Instancia viva inyectada en el slot de un invoker. `instance_id` la
/// distingue de otras instancias de la misma definición.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnitInstance {
    pub class_name: String,
    pub digest: String,
    pub instance_id: Uuid,
}

/// Linker por defecto: la definición conserva el digest de los bytes y su
/// factory siempre construye.
#[derive(Debug, Default)]
pub struct ByteUnitLinker;

impl UnitLinker for ByteUnitLinker {
    fn link(&self, class_name: &str, bytes: &[u8]) -> Result<LoadedUnit, WireError> {
        let digest = hash_bytes(bytes);
        let factory = ByteUnitFactory { class_name: class_name.to_string(),
                                        digest: digest.clone() };
        Ok(LoadedUnit::new(class_name, digest, Arc::new(factory)))
    }
}

#[derive(Debug)]
struct ByteUnitFactory {
    class_name: String,
    digest: String,
}

impl UnitFactory for ByteUnitFactory {
    fn new_instance(&self) -> Result<UnitInstance, WireError> {
        Ok(UnitInstance { class_name: self.class_name.clone(),
                          digest: self.digest.clone(),
                          instance_id: Uuid::new_v4() })
    }
}
