//! Vista mínima del modelo de reglas/paquete.
//!
//! El modelo completo de reglas vive fuera del core; aquí sólo está la forma
//! que `remove_rule`/`remove_function` necesitan para descubrir nombres de
//! artifacts: el nombre de la clase consecuencia y el árbol de condiciones
//! con sus referencias embebidas. El conjunto de variantes es cerrado.

use serde::{Deserialize, Serialize};

use crate::naming::uc_first;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub package_name: String,
    /// Nombre de la clase invoker de la consecuencia generada. El nombre de
    /// la clase de la regla es su prefijo hasta el marcador
    /// (`constants::CONSEQUENCE_INVOKER_MARKER`).
    pub consequence_class: String,
    pub lhs: ConditionNode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Function {
    pub package_name: String,
    pub name: String,
}

impl Function {
    /// Clase del artifact generado: paquete + identificador capitalizado.
    pub fn artifact_class(&self) -> String {
        format!("{}.{}", self.package_name, uc_first(&self.name))
    }
}

/// Nodos del árbol de condiciones. Los grupos recursan en sus hijos; las
/// hojas eval y los constraints de pattern llevan cero o una referencia a
/// artifact cada uno.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConditionNode {
    Group { children: Vec<ConditionNode> },
    Eval { expression_class: String },
    Pattern { constraints: Vec<PatternConstraint> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PatternConstraint {
    Predicate { expression_class: String },
    ReturnValue { expression_class: String },
    /// Constraint sin código compilado asociado (comparación literal).
    Literal { field: String },
}
