//! rule-adapters: colaboradores concretos para `rule-core`.
//!
//! Este crate provee:
//! - Linkers concretos (`CountingLinker`, `FaultyLinker`) para ejercitar el
//!   seam `UnitLinker` del loader: el core sólo conoce bytes opacos y las
//!   condiciones de fallo de construcción.
//! - Builders de modelo de reglas (`sample_rule`, `sample_function`) que
//!   producen árboles de condiciones con la convención de nombres real.
//!
//! Lo usan los tests de integración del core y sirve de plantilla para
//! embedders que traigan su propio formato de unidad compilada.

pub mod linkers;
pub mod rules;

pub use linkers::{CountingLinker, FaultMode, FaultyLinker};
pub use rules::{sample_function, sample_rule, write_artifacts, SampleRule};
