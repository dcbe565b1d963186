use crate::consts::BUILTIN_CONSTANTS;
use std::collections::HashMap;
use super::{trig_mode::TrigMode, value::Value};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A context to use when evaluating an expression, containing the values of the variables that
/// can be used within the expression.
///
/// The constants `pi` and `e` are always available, unless a variable of the same name is added
/// to the context.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, Value>,

    /// The trigonometric mode of the context.
    pub trig_mode: TrigMode,
}

impl Ctxt {
    /// Creates a new context with no variables, using radians.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Sets the trigonometric mode of the context.
    pub fn with_trig_mode(mut self, trig_mode: TrigMode) -> Ctxt {
        self.trig_mode = trig_mode;
        self
    }

    /// Add a variable to the context, replacing any previous value.
    pub fn add_var(&mut self, name: &str, value: impl Into<Value>) {
        self.vars.insert(name.to_string(), value.into());
    }

    /// Removes a variable from the context, returning its value.
    pub fn remove_var(&mut self, name: &str) -> Option<Value> {
        self.vars.remove(name)
    }

    /// Get the value of a variable in the context, falling back to the builtin constants.
    pub fn get_var(&self, name: &str) -> Option<Value> {
        self.vars.get(name).copied().or_else(|| {
            BUILTIN_CONSTANTS.iter()
                .find(|(constant, _)| *constant == name)
                .map(|(_, value)| Value::Float(*value))
        })
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, Value> {
        &self.vars
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Ctxt {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Ctxt {
            vars: iter.into_iter().map(|(name, value)| (name.into(), value.into())).collect(),
            trig_mode: TrigMode::default(),
        }
    }
}
