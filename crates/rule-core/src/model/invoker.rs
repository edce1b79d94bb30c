//! Invokers: objetos vivos del motor que esperan una unidad instanciada.
//!
//! El conjunto de capacidades es cerrado y fijo; cada variante expone un
//! único slot que recibe exactamente una instancia. El dispatch del wiring
//! es un match exhaustivo sobre la variante, no una cadena de type-tests.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use super::unit::UnitInstance;

/// Handle compartido entre el registry y el objeto de regla que posee el
/// invoker: el wiring muta el slot a través del handle y la regla observa
/// la instancia nueva.
pub type InvokerHandle = Arc<Mutex<InvokerTarget>>;

pub fn new_handle(target: InvokerTarget) -> InvokerHandle {
    Arc::new(Mutex::new(target))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum InvokerTarget {
    /// Restricción return-value de un pattern.
    ReturnValue { expression: Option<UnitInstance> },
    /// Restricción predicado de un pattern.
    Predicate { expression: Option<UnitInstance> },
    /// Condición eval (hoja del árbol de condiciones).
    Eval { expression: Option<UnitInstance> },
    /// Cuerpo de un acumulador.
    Accumulator { function: Option<UnitInstance> },
    /// Consecuencia de una regla.
    Consequence { consequence: Option<UnitInstance> },
    /// Evaluador return-value de un constraint de workflow.
    ReturnValueEvaluator { evaluator: Option<UnitInstance> },
    /// Acción de un nodo de workflow.
    Action { action: Option<UnitInstance> },
}

impl InvokerTarget {
    /// Inyecta una instancia fresca en el slot de la variante.
    pub fn inject(&mut self, instance: UnitInstance) {
        match self {
            InvokerTarget::ReturnValue { expression }
            | InvokerTarget::Predicate { expression }
            | InvokerTarget::Eval { expression } => *expression = Some(instance),
            InvokerTarget::Accumulator { function } => *function = Some(instance),
            InvokerTarget::Consequence { consequence } => *consequence = Some(instance),
            InvokerTarget::ReturnValueEvaluator { evaluator } => *evaluator = Some(instance),
            InvokerTarget::Action { action } => *action = Some(instance),
        }
    }

    /// Instancia actualmente wireada, si existe.
    pub fn slot(&self) -> Option<&UnitInstance> {
        match self {
            InvokerTarget::ReturnValue { expression }
            | InvokerTarget::Predicate { expression }
            | InvokerTarget::Eval { expression } => expression.as_ref(),
            InvokerTarget::Accumulator { function } => function.as_ref(),
            InvokerTarget::Consequence { consequence } => consequence.as_ref(),
            InvokerTarget::ReturnValueEvaluator { evaluator } => evaluator.as_ref(),
            InvokerTarget::Action { action } => action.as_ref(),
        }
    }

    pub fn is_wired(&self) -> bool {
        self.slot().is_some()
    }
}
