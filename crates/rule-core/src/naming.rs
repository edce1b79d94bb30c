//! Helpers de conversión entre nombres de clase y rutas de recurso.
//!
//! El store indexa por ruta de recurso (`org/my/Unit.unit`) mientras que el
//! registry de invokers y el loader operan por nombre de clase
//! (`org.my.Unit`). Las conversiones deben ser exactamente inversas entre sí
//! para que `remove` encuentre la entrada que `write` creó.

use crate::constants::ARTIFACT_EXTENSION;

/// `org/my/Unit.unit` -> `org.my.Unit`
pub fn resource_to_class(resource_name: &str) -> String {
    strip_extension(resource_name).replace('/', ".")
}

/// `org.my.Unit` -> `org/my/Unit.unit`
pub fn class_to_resource(class_name: &str) -> String {
    let mut resource = class_name.replace('.', "/");
    resource.push_str(ARTIFACT_EXTENSION);
    resource
}

/// Recorta la extensión (todo a partir del último `.`). Un nombre sin
/// extensión se devuelve intacto.
pub fn strip_extension(resource_name: &str) -> &str {
    match resource_name.rfind('.') {
        Some(i) => &resource_name[..i],
        None => resource_name,
    }
}

/// Capitaliza el primer carácter (`min` -> `Min`). Usado para derivar el
/// nombre de clase de una función a partir de su identificador.
pub fn uc_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_and_resource_are_inverse() {
        assert_eq!(class_to_resource("org.my.Unit"), "org/my/Unit.unit");
        assert_eq!(resource_to_class("org/my/Unit.unit"), "org.my.Unit");
        assert_eq!(resource_to_class(&class_to_resource("a.b.C")), "a.b.C");
    }

    #[test]
    fn strip_extension_without_dot_is_identity() {
        assert_eq!(strip_extension("sin_extension"), "sin_extension");
        assert_eq!(strip_extension("org/my/Unit.unit"), "org/my/Unit");
    }

    #[test]
    fn uc_first_basic() {
        assert_eq!(uc_first("max"), "Max");
        assert_eq!(uc_first(""), "");
        assert_eq!(uc_first("Upper"), "Upper");
    }
}
