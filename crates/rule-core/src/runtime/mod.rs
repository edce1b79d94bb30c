//! Runtime de dialecto: orquesta store, registry de invokers y loader.

mod builder;
mod core;
mod snapshot;
mod wiring;

pub use builder::RuntimeBuilder;
pub use core::DialectRuntime;
pub use snapshot::RuntimeSnapshot;
