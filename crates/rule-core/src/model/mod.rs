//! Modelos del runtime (Artifact, unidades cargadas, invokers, reglas).

pub mod artifact;
pub mod invoker;
pub mod rule;
pub mod unit;

pub use artifact::Artifact;
pub use invoker::{new_handle, InvokerHandle, InvokerTarget};
pub use rule::{ConditionNode, Function, PatternConstraint, Rule};
pub use unit::{ByteUnitLinker, LoadedUnit, UnitFactory, UnitInstance, UnitLinker};
