//! Protocolo de wiring: resolver un nombre e inyectar una instancia fresca
//! en el invoker registrado, más el borrado dirigido por el modelo de reglas
//! (consecuencia + recorrido del árbol de condiciones).

use crate::constants::CONSEQUENCE_INVOKER_MARKER;
use crate::errors::WireError;
use crate::event::{EventSink, RuntimeEventKind};
use crate::loader::ArtifactResolver;
use crate::model::{ConditionNode, Function, InvokerHandle, PatternConstraint, Rule};

use super::core::DialectRuntime;

impl<E: EventSink> DialectRuntime<E> {
    /// Wirea el invoker registrado bajo `class_name`. Que no haya ninguno es
    /// un no-op legal (el artifact puede preceder a su invoker).
    pub fn wire(&mut self, class_name: &str) -> Result<(), WireError> {
        match self.invokers.get(class_name) {
            None => Ok(()),
            Some(handle) => self.wire_target(class_name, &handle),
        }
    }

    /// Resuelve `class_name` vía loader e inyecta una instancia fresca en el
    /// slot del invoker. Los tres fallos específicos (`ArtifactNotFound`,
    /// `InstantiationFailure`, `AccessDenial`) se propagan sin envolver.
    pub fn wire_target(&mut self, class_name: &str, invoker: &InvokerHandle) -> Result<(), WireError> {
        let loader = self.loader.as_ref().ok_or(WireError::LoaderDetached)?;
        let unit = loader.resolve(class_name)?;
        let instance = unit.new_instance()?;
        invoker.lock().unwrap_or_else(|e| e.into_inner()).inject(instance);
        self.events.append_kind(self.runtime_id,
                                RuntimeEventKind::InvokerWired { class_name: class_name.to_string() });
        Ok(())
    }

    /// Borra los artifacts de una regla: la clase consecuencia y, si su
    /// borrado tuvo efecto, las clases embebidas en el árbol de condiciones
    /// más la clase de la regla (prefijo de la consecuencia hasta el
    /// marcador).
    pub fn remove_rule(&mut self, rule: &Rule) {
        let consequence = rule.consequence_class.clone();
        if self.remove(&consequence) {
            self.remove_condition_classes(&rule.lhs);
            if let Some(idx) = consequence.find(CONSEQUENCE_INVOKER_MARKER) {
                self.remove(&consequence[..idx]);
            }
        }
    }

    /// Borra el artifact generado para una función.
    pub fn remove_function(&mut self, function: &Function) {
        self.remove(&function.artifact_class());
    }

    fn remove_condition_classes(&mut self, node: &ConditionNode) {
        match node {
            ConditionNode::Group { children } => {
                for child in children {
                    self.remove_condition_classes(child);
                }
            }
            ConditionNode::Eval { expression_class } => {
                self.remove(expression_class);
            }
            ConditionNode::Pattern { constraints } => {
                for constraint in constraints {
                    match constraint {
                        PatternConstraint::Predicate { expression_class }
                        | PatternConstraint::ReturnValue { expression_class } => {
                            self.remove(expression_class);
                        }
                        PatternConstraint::Literal { .. } => {}
                    }
                }
            }
        }
    }
}
