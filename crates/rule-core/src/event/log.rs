use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use super::{EventSink, RuntimeEvent, RuntimeEventKind};

pub struct InMemoryEventLog {
    pub inner: HashMap<Uuid, Vec<RuntimeEvent>>,
}

impl Default for InMemoryEventLog {
    fn default() -> Self {
        Self { inner: HashMap::new() }
    }
}

impl EventSink for InMemoryEventLog {
    fn append_kind(&mut self, runtime_id: Uuid, kind: RuntimeEventKind) -> RuntimeEvent {
        let vec = self.inner.entry(runtime_id).or_insert_with(Vec::new);
        let seq = vec.len() as u64;
        let ev = RuntimeEvent { seq,
                                runtime_id,
                                kind,
                                ts: Utc::now() };
        vec.push(ev.clone());
        ev
    }

    fn list(&self, runtime_id: Uuid) -> Vec<RuntimeEvent> {
        self.inner.get(&runtime_id).cloned().unwrap_or_default()
    }
}
