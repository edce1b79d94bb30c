//! Builders de modelo de reglas con la convención de nombres real.
//!
//! La convención reproduce la del compilador: clases `{pkg}.Rule_{name}…`,
//! consecuencia = clase de la regla + marcador `ConsequenceInvoker`, y una
//! clase invoker por expresión embebida en el árbol de condiciones.

use rule_core::event::EventSink;
use rule_core::naming::class_to_resource;
use rule_core::{new_handle, ConditionNode, DialectRuntime, Function, InvokerHandle, InvokerTarget,
                PatternConstraint, Rule};

pub struct SampleRule {
    pub rule: Rule,
    /// Todas las clases de artifact que la regla referencia, incluida la
    /// clase de la regla misma.
    pub artifact_classes: Vec<String>,
    pub consequence_handle: InvokerHandle,
}

/// Regla con un grupo que anida una condición eval, un pattern con
/// constraints de los tres tipos y un subgrupo vacío.
pub fn sample_rule(package_name: &str, rule_name: &str) -> SampleRule {
    let rule_class = format!("{package_name}.Rule_{rule_name}");
    let consequence_class = format!("{rule_class}ConsequenceInvoker");
    let eval_class = format!("{rule_class}Eval0Invoker");
    let predicate_class = format!("{rule_class}Predicate0Invoker");
    let return_value_class = format!("{rule_class}ReturnValue0Invoker");

    let lhs = ConditionNode::Group {
        children: vec![
            ConditionNode::Eval { expression_class: eval_class.clone() },
            ConditionNode::Pattern {
                constraints: vec![
                    PatternConstraint::Predicate { expression_class: predicate_class.clone() },
                    PatternConstraint::Literal { field: "age".to_string() },
                    PatternConstraint::ReturnValue { expression_class: return_value_class.clone() },
                ],
            },
            ConditionNode::Group { children: vec![] },
        ],
    };

    let rule = Rule { name: rule_name.to_string(),
                      package_name: package_name.to_string(),
                      consequence_class: consequence_class.clone(),
                      lhs };

    SampleRule { rule,
                 artifact_classes: vec![consequence_class,
                                        eval_class,
                                        predicate_class,
                                        return_value_class,
                                        rule_class],
                 consequence_handle: new_handle(InvokerTarget::Consequence { consequence: None }) }
}

pub fn sample_function(package_name: &str, function_name: &str) -> Function {
    Function { package_name: package_name.to_string(),
               name: function_name.to_string() }
}

/// Escribe un artifact dummy por cada clase dada (payload = nombre de la
/// clase en bytes).
pub fn write_artifacts<E: EventSink>(runtime: &mut DialectRuntime<E>, classes: &[String]) {
    for class in classes {
        runtime.write(&class_to_resource(class), class.clone().into_bytes())
               .expect("write de artifact de prueba");
    }
}
