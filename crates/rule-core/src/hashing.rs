//! Hash helpers – abstracción para permitir cambiar de algoritmo sin tocar
//! el resto del core.

use blake3::Hasher;

/// Hashea un payload binario y devuelve hex. Sirve como digest de identidad
/// de un artifact (trazabilidad en eventos y snapshots; no participa en la
/// resolución por nombre).
pub fn hash_bytes(input: &[u8]) -> String {
    let mut h = Hasher::new();
    h.update(input);
    h.finalize().to_hex().to_string()
}
