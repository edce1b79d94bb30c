//! Linkers concretos sobre el seam `UnitLinker`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rule_core::hashing::hash_bytes;
use rule_core::{ByteUnitLinker, LoadedUnit, UnitFactory, UnitInstance, UnitLinker, WireError};

/// Linker que delega en el linker por defecto contando cuántos links se
/// ejecutaron. Permite verificar que un loader linkea como máximo una vez
/// por nombre (resoluciones repetidas salen de la cache).
#[derive(Debug, Default)]
pub struct CountingLinker {
    links: AtomicUsize,
}

impl CountingLinker {
    pub fn links(&self) -> usize {
        self.links.load(Ordering::SeqCst)
    }
}

impl UnitLinker for CountingLinker {
    fn link(&self, class_name: &str, bytes: &[u8]) -> Result<LoadedUnit, WireError> {
        self.links.fetch_add(1, Ordering::SeqCst);
        ByteUnitLinker.link(class_name, bytes)
    }
}

#[derive(Debug, Clone)]
pub enum FaultMode {
    /// La construcción es rechazada por reglas de acceso.
    DenyAccess,
    /// La construcción falla.
    FailInstantiation,
}

/// Linker cuyas definiciones linkean bien pero nunca construyen: simula
/// unidades compiladas inválidas para los caminos de error del wiring.
#[derive(Debug)]
pub struct FaultyLinker {
    pub mode: FaultMode,
}

impl UnitLinker for FaultyLinker {
    fn link(&self, class_name: &str, bytes: &[u8]) -> Result<LoadedUnit, WireError> {
        let factory = FaultyFactory { class_name: class_name.to_string(),
                                      mode: self.mode.clone() };
        Ok(LoadedUnit::new(class_name, hash_bytes(bytes), Arc::new(factory)))
    }
}

#[derive(Debug)]
struct FaultyFactory {
    class_name: String,
    mode: FaultMode,
}

impl UnitFactory for FaultyFactory {
    fn new_instance(&self) -> Result<UnitInstance, WireError> {
        match self.mode {
            FaultMode::DenyAccess => Err(WireError::AccessDenial { class: self.class_name.clone(),
                                                                   reason: "constructor no accesible".to_string() }),
            FaultMode::FailInstantiation => {
                Err(WireError::InstantiationFailure { class: self.class_name.clone(),
                                                      reason: "el constructor lanzó".to_string() })
            }
        }
    }
}
