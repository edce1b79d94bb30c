//! Pruebas del contrato store + ciclo de vida: dirty tracking, reload y
//! clear.

use std::sync::Arc;

use rule_adapters::{FaultMode, FaultyLinker};
use rule_core::naming::class_to_resource;
use rule_core::{new_handle, DialectRuntime, EngineError, InvokerTarget, LoaderRegistry, WireError};

#[test]
fn overwrite_sets_dirty_without_rewiring() {
    let registry = Arc::new(LoaderRegistry::bootstrap());
    let mut runtime = DialectRuntime::new(registry);

    let class = "org.acme.Rule_AConsequenceInvoker";
    let resource = class_to_resource(class);
    let handle = new_handle(InvokerTarget::Consequence { consequence: None });
    runtime.put_invoker(class, handle.clone());

    runtime.write(&resource, b"v1".to_vec()).unwrap();
    let wired = handle.lock().unwrap().slot().cloned().unwrap();
    assert!(!runtime.is_dirty());

    // overwrite: marca dirty y deja el slot intacto hasta el reload
    runtime.write(&resource, b"v2".to_vec()).unwrap();
    assert!(runtime.is_dirty());
    assert_eq!(handle.lock().unwrap().slot().cloned().unwrap(), wired);
    assert_eq!(runtime.read(&resource), Some(b"v2".to_vec()));
}

#[test]
fn remove_unknown_name_returns_false_and_keeps_dirty() {
    let registry = Arc::new(LoaderRegistry::bootstrap());
    let mut runtime = DialectRuntime::new(registry);

    assert!(!runtime.remove("org.acme.Missing"));
    assert!(!runtime.is_dirty());
}

#[test]
fn remove_known_name_sets_dirty_and_read_is_absent() {
    let registry = Arc::new(LoaderRegistry::bootstrap());
    let mut runtime = DialectRuntime::new(registry);

    let class = "org.acme.Util";
    let resource = class_to_resource(class);
    runtime.write(&resource, b"bytes".to_vec()).unwrap();

    assert!(runtime.remove(class));
    assert!(runtime.is_dirty());
    assert_eq!(runtime.read(&resource), None);
    assert!(runtime.list().is_empty());
}

#[test]
fn reload_clears_dirty_and_rewires_fresh_instances() {
    let registry = Arc::new(LoaderRegistry::bootstrap());
    let mut runtime = DialectRuntime::new(registry.clone());

    let class = "org.acme.Rule_BConsequenceInvoker";
    let resource = class_to_resource(class);
    let handle = new_handle(InvokerTarget::Consequence { consequence: None });
    runtime.put_invoker(class, handle.clone());

    runtime.write(&resource, b"v1".to_vec()).unwrap();
    let first = handle.lock().unwrap().slot().cloned().unwrap();

    runtime.write(&resource, b"v2".to_vec()).unwrap();
    assert!(runtime.is_dirty());

    runtime.reload().unwrap();
    assert!(!runtime.is_dirty());

    let second = handle.lock().unwrap().slot().cloned().unwrap();
    // instancia fresca de la definición nueva
    assert_ne!(first.instance_id, second.instance_id);
    assert_ne!(first.digest, second.digest);
    // el add del loader viejo quedó emparejado con su remove
    assert_eq!(registry.len(), 1);
}

#[test]
fn failed_reload_keeps_dirty() {
    let registry = Arc::new(LoaderRegistry::bootstrap());
    let mut runtime = DialectRuntime::builder(registry).with_linker(Arc::new(FaultyLinker { mode: FaultMode::FailInstantiation }))
                                                       .build();

    let class = "org.acme.Rule_CConsequenceInvoker";
    let resource = class_to_resource(class);

    // el write inicial ya falla al wirear: envuelto en EngineError, sin rollback
    let handle = new_handle(InvokerTarget::Consequence { consequence: None });
    runtime.put_invoker(class, handle.clone());
    let err = runtime.write(&resource, b"v1".to_vec()).unwrap_err();
    assert!(matches!(err, EngineError::Wiring(WireError::InstantiationFailure { .. })));
    assert_eq!(runtime.read(&resource), Some(b"v1".to_vec()));

    runtime.set_dirty(true);
    let err = runtime.reload().unwrap_err();
    assert!(matches!(err, EngineError::Wiring(WireError::InstantiationFailure { .. })));
    // un reload fallido deja la unidad marcada inconsistente
    assert!(runtime.is_dirty());
    assert!(!handle.lock().unwrap().is_wired());
}

#[test]
fn clear_is_idempotent() {
    let registry = Arc::new(LoaderRegistry::bootstrap());
    let mut runtime = DialectRuntime::new(registry);

    runtime.write(&class_to_resource("org.acme.A"), b"a".to_vec()).unwrap();
    runtime.put_invoker("org.acme.A", new_handle(InvokerTarget::Eval { expression: None }));
    runtime.set_ast(Some(serde_json::json!({"nodes": 1})));

    runtime.clear().unwrap();
    runtime.clear().unwrap();

    assert!(runtime.list().is_empty());
    assert_eq!(runtime.invoker_count(), 0);
    assert!(runtime.ast().is_none());
    assert!(!runtime.is_dirty());
}

#[test]
fn event_log_tracks_mutations() {
    let registry = Arc::new(LoaderRegistry::bootstrap());
    let mut runtime = DialectRuntime::new(registry);

    let resource = class_to_resource("org.acme.A");
    runtime.write(&resource, b"v1".to_vec()).unwrap();
    runtime.write(&resource, b"v2".to_vec()).unwrap();
    runtime.remove("org.acme.A");
    runtime.reload().unwrap();

    assert_eq!(runtime.event_variants(), vec!["W", "O", "R", "L"]);
}
