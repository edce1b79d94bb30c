//! Artifact opaco del store.
//!
//! Un `Artifact` es la unidad compilada que el compilador de reglas entrega
//! al store. Es neutral:
//! - `bytes` es el payload opaco; el core no interpreta su contenido.
//! - `digest` es calculado sobre los bytes (ver `hashing::hash_bytes`) y
//!   sirve como identidad para trazabilidad en eventos y snapshots.
//!
//! Invariante: un nombre de recurso mapea a exactamente un payload; escribir
//! el mismo nombre reemplaza el payload (y con él, el digest).

use serde::{Deserialize, Serialize};

use crate::hashing::hash_bytes;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artifact {
    pub bytes: Vec<u8>,
    pub digest: String, // hash del payload (asignado al construir)
}

impl Artifact {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let digest = hash_bytes(&bytes);
        Self { bytes, digest }
    }
}
