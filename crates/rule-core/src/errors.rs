//! Errores del core.
//!
//! `WireError` es la taxonomía específica del wiring/resolución y se propaga
//! sin envolver desde `wire`. `EngineError` es el tipo único que presentan
//! las fronteras de ciclo de vida (`write`/`reload`/`clear`) hacia la capa
//! del motor de reglas.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireError {
    /// Ni este loader ni su cadena de ancestros conocen el artifact.
    #[error("artifact not found: {0}")]
    ArtifactNotFound(String),
    /// La construcción de una definición resuelta falló.
    #[error("instantiation of {class} failed: {reason}")]
    InstantiationFailure { class: String, reason: String },
    /// La construcción fue rechazada por reglas de acceso.
    #[error("access to {class} denied: {reason}")]
    AccessDenial { class: String, reason: String },
    /// El runtime no tiene loader (clonado/deserializado sin re-attachar).
    #[error("runtime has no loader attached")]
    LoaderDetached,
}

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    #[error("wiring failed: {0}")]
    Wiring(#[from] WireError),
    #[error("internal: {0}")]
    Internal(String),
}
