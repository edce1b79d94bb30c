//! Registry de invokers: nombre-de-clase → handle del objeto vivo.
//!
//! Semántica de mapa plano, last-write-wins. Una entrada presente denota un
//! objeto vivo esperando (o ya sosteniendo) una unidad wireada.

use std::collections::HashMap;

use crate::model::InvokerHandle;

#[derive(Debug, Default)]
pub struct InvokerRegistry {
    inner: HashMap<String, InvokerHandle>,
}

impl InvokerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, class_name: impl Into<String>, invoker: InvokerHandle) {
        self.inner.insert(class_name.into(), invoker);
    }

    pub fn put_all(&mut self, invokers: HashMap<String, InvokerHandle>) {
        self.inner.extend(invokers);
    }

    pub fn remove(&mut self, class_name: &str) -> Option<InvokerHandle> {
        self.inner.remove(class_name)
    }

    pub fn get(&self, class_name: &str) -> Option<InvokerHandle> {
        self.inner.get(class_name).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &InvokerHandle)> {
        self.inner.iter()
    }

    /// Copia de las entradas; los handles se comparten (clonar el `Arc`),
    /// no los targets.
    pub fn entries(&self) -> Vec<(String, InvokerHandle)> {
        self.inner.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    pub fn clone_map(&self) -> HashMap<String, InvokerHandle> {
        self.inner.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}
