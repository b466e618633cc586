//! `InterpreterBuilder` for configuring an [`Interpreter`].

use epl_ir::Layer;

use super::Interpreter;
use crate::typeck::{TypeChecker, TypeEnv};

/// Builder for [`Interpreter`].
///
/// The layer defaults to the full language; a smaller layer makes the
/// interpreter reject forms its language does not have.
pub struct InterpreterBuilder {
    layer: Layer,
    type_checker: Option<Box<dyn TypeChecker>>,
    type_env: Option<TypeEnv>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            layer: Layer::default(),
            type_checker: None,
            type_env: None,
        }
    }

    /// Set the largest accepted language.
    #[must_use]
    pub fn layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    /// Run `checker` before every evaluation.
    #[must_use]
    pub fn type_checker(mut self, checker: Box<dyn TypeChecker>) -> Self {
        self.type_checker = Some(checker);
        self
    }

    /// Types of the names the caller's runtime environment provides.
    #[must_use]
    pub fn type_env(mut self, tenv: TypeEnv) -> Self {
        self.type_env = Some(tenv);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            layer: self.layer,
            type_checker: self.type_checker,
            type_env: self.type_env.unwrap_or_default(),
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
