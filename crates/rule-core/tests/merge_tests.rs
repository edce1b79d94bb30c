//! Pruebas de merge y clone: unión de stores, semántica del flag dirty y
//! unión del registry de invokers.

use std::sync::Arc;

use rule_core::naming::class_to_resource;
use rule_core::{new_handle, DialectRuntime, InvokerTarget, LoaderRegistry};

#[test]
fn merge_unions_store_and_marks_dirty_on_overwrite() {
    let registry = Arc::new(LoaderRegistry::bootstrap());
    let mut a = DialectRuntime::new(registry.clone());
    let mut b = DialectRuntime::new(registry);

    let x = class_to_resource("org.acme.X");
    let y = class_to_resource("org.acme.Y");
    a.write(&x, vec![1]).unwrap();
    b.write(&x, vec![2]).unwrap();
    b.write(&y, vec![3]).unwrap();
    assert!(!a.is_dirty());
    assert!(!b.is_dirty());

    a.merge(&b);

    assert_eq!(a.read(&x), Some(vec![2]));
    assert_eq!(a.read(&y), Some(vec![3]));
    // "x" fue sobrescrito, el merge deja la unidad pendiente de reload
    assert!(a.is_dirty());
}

#[test]
fn merge_copies_dirty_flag_by_overwrite() {
    let registry = Arc::new(LoaderRegistry::bootstrap());
    let mut a = DialectRuntime::new(registry.clone());
    let b = DialectRuntime::new(registry);

    // a quedó dirty por su cuenta; b está limpio y no aporta overwrites
    a.write(&class_to_resource("org.acme.Solo"), vec![1]).unwrap();
    a.set_dirty(true);

    a.merge(&b);

    // sobrescritura del flag, no OR
    assert!(!a.is_dirty());
}

#[test]
fn merge_does_not_wire_incoming_artifacts() {
    let registry = Arc::new(LoaderRegistry::bootstrap());
    let mut a = DialectRuntime::new(registry.clone());
    let mut b = DialectRuntime::new(registry);

    let class = "org.acme.Rule_MConsequenceInvoker";
    b.write(&class_to_resource(class), b"unit".to_vec()).unwrap();

    // el invoker está en a; el merge une registry y store pero no wirea
    let handle = new_handle(InvokerTarget::Consequence { consequence: None });
    a.put_invoker(class, handle.clone());

    a.merge(&b);

    assert!(!handle.lock().unwrap().is_wired());
    assert_eq!(a.read(&class_to_resource(class)), Some(b"unit".to_vec()));
}

#[test]
fn merge_unions_invokers_last_write_wins() {
    let registry = Arc::new(LoaderRegistry::bootstrap());
    let mut a = DialectRuntime::new(registry.clone());
    let mut b = DialectRuntime::new(registry);

    let class = "org.acme.Rule_NConsequenceInvoker";
    let ours = new_handle(InvokerTarget::Consequence { consequence: None });
    let theirs = new_handle(InvokerTarget::Consequence { consequence: None });
    a.put_invoker(class, ours);
    b.put_invoker(class, theirs.clone());

    a.merge(&b);

    assert!(Arc::ptr_eq(&a.get_invoker(class).unwrap(), &theirs));
}

#[test]
fn clone_data_detaches_then_adopts_parent_chain() {
    let registry = Arc::new(LoaderRegistry::bootstrap());
    let mut original = DialectRuntime::new(registry.clone());

    let resource = class_to_resource("org.acme.Cloned");
    original.write(&resource, b"payload".to_vec()).unwrap();
    original.put_invoker("org.acme.Cloned", new_handle(InvokerTarget::Eval { expression: None }));

    let clone = original.clone_data();

    assert_eq!(clone.read(&resource), Some(b"payload".to_vec()));
    assert_eq!(clone.invoker_count(), 1);
    // el clon nació sin loader: el merge le creó uno y lo dejó dirty
    assert!(clone.is_dirty());
    assert!(clone.loader().is_some());
    assert!(clone.loader_registry().is_some());
}

#[test]
fn dispose_unregisters_the_loader() {
    let registry = Arc::new(LoaderRegistry::bootstrap());
    let mut runtime = DialectRuntime::new(registry.clone());
    assert_eq!(registry.len(), 1);

    runtime.dispose();
    assert_eq!(registry.len(), 0);
    assert!(runtime.loader().is_none());
}
