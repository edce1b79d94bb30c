//! Tipos de evento del runtime y estructura `RuntimeEvent`.
//!
//! Rol: cada mutación del store/ciclo de vida emite un evento a un
//! `EventSink` append-only. El enum define el contrato observable del
//! runtime; no participa en ninguna decisión de control.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RuntimeEventKind {
    /// Un artifact entró al store. `replaced` distingue alta de overwrite
    /// (el overwrite marca dirty y difiere el rewiring a un reload).
    ArtifactWritten {
        resource: String,
        digest: String,
        replaced: bool,
    },
    /// Un artifact salió del store.
    ArtifactRemoved { resource: String },
    /// Un invoker recibió una instancia fresca.
    InvokerWired { class_name: String },
    /// Loader descartado y reconstruido; `wired` cuenta los invokers
    /// re-wireados.
    Reloaded { loader_id: Uuid, wired: usize },
    /// Unión de otro runtime sobre éste.
    Merged { artifacts: usize, invokers: usize },
    /// Store, registry y AST vaciados.
    Cleared,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeEvent {
    pub seq: u64, // asignado por el sink in-memory (orden append)
    pub runtime_id: Uuid,
    pub kind: RuntimeEventKind,
    pub ts: DateTime<Utc>, // metadato, no participa en identidad
}
