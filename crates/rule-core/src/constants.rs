//! Constantes del runtime de dialecto.
//!
//! Este módulo agrupa los valores estáticos de la convención de nombres de
//! artifacts. La convención es load-bearing: `remove_rule`/`remove_function`
//! derivan nombres a partir de ella, y un cambio aquí invalida la capacidad
//! de localizar entradas ya escritas en el store.

/// Extensión de los recursos compilados dentro del store
/// (`org/my/Unit.unit`). El resto del sistema opera con nombres de clase
/// (`org.my.Unit`); ver `naming` para las conversiones.
pub const ARTIFACT_EXTENSION: &str = ".unit";

/// Sufijo que distingue la clase invoker de una consecuencia. El nombre de la
/// clase de la regla es el prefijo del nombre de la consecuencia hasta este
/// marcador.
pub const CONSEQUENCE_INVOKER_MARKER: &str = "ConsequenceInvoker";
