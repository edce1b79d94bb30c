//! Definiciones de eventos y trait EventSink.

mod log;
mod types;

pub use log::InMemoryEventLog;
pub use types::{RuntimeEvent, RuntimeEventKind};

use uuid::Uuid;

/// Registro append-only de mutaciones del runtime.
pub trait EventSink {
    /// Agrega un evento a partir de su kind y devuelve el evento completo
    /// (con seq y ts).
    fn append_kind(&mut self, runtime_id: Uuid, kind: RuntimeEventKind) -> RuntimeEvent;
    /// Lista eventos de un runtime (orden ascendente por seq).
    fn list(&self, runtime_id: Uuid) -> Vec<RuntimeEvent>;
}
