//! The ordered module registry.
//!
//! Registration order is precedence order: the dispatcher walks modules front
//! to back and the first one whose triggers match handles the request. The
//! registry is validated once and is immutable afterwards.

use super::trigger::{Match, Triggers};
use crate::answerer::{Answerer, Requires};
use crate::error::RegistryError;
use crate::solution::AnswerType;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Static metadata read from an [`Answerer`] at registration.
#[derive(Debug, Clone)]
pub struct Descriptor {
    pub answer_type: AnswerType,
    pub triggers: Triggers,
    pub cacheable: bool,
    pub requires: Requires,
}

impl Descriptor {
    pub fn name(&self) -> &'static str {
        self.answer_type.as_str()
    }
}

pub(crate) struct Module {
    pub descriptor: Descriptor,
    pub answerer: Arc<dyn Answerer>,
}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module").field("descriptor", &self.descriptor).field("answerer", &"<answerer>").finish()
    }
}

#[derive(Debug)]
pub struct Registry {
    modules: Vec<Module>,
}

/// Collects answerers in precedence order.
#[derive(Default)]
pub struct RegistryBuilder {
    answerers: Vec<Arc<dyn Answerer>>,
}

impl RegistryBuilder {
    pub fn register(self, answerer: impl Answerer + 'static) -> Self {
        self.register_arc(Arc::new(answerer))
    }

    pub fn register_arc(mut self, answerer: Arc<dyn Answerer>) -> Self {
        self.answerers.push(answerer);
        self
    }

    pub fn build(self) -> Result<Registry, RegistryError> {
        Registry::new(self.answerers)
    }
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Compile and validate every module's triggers.
    ///
    /// Rejects duplicate type tags, modules without patterns, patterns that
    /// do not compile, catch-all rules that are not a module's last rule, and
    /// catch-all modules that are not the last module.
    pub fn new(answerers: Vec<Arc<dyn Answerer>>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        let mut modules = Vec::with_capacity(answerers.len());

        for answerer in answerers {
            let answer_type = answerer.answer_type();
            if !seen.insert(answer_type) {
                return Err(RegistryError::DuplicateType(answer_type.as_str()));
            }

            let triggers = Triggers::compile(answer_type.as_str(), &answerer.triggers())?;
            let descriptor =
                Descriptor { answer_type, triggers, cacheable: answerer.cacheable(), requires: answerer.requires() };
            tracing::debug!(
                module = descriptor.name(),
                rules = descriptor.triggers.len(),
                cacheable = descriptor.cacheable,
                "registered answer module"
            );
            modules.push(Module { descriptor, answerer });
        }

        for pair in modules.windows(2) {
            if pair[0].descriptor.triggers.has_catch_all() {
                return Err(RegistryError::ShadowingCatchAll {
                    module: pair[0].descriptor.name(),
                    next: pair[1].descriptor.name(),
                });
            }
        }

        Ok(Self { modules })
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &Descriptor> {
        self.modules.iter().map(|m| &m.descriptor)
    }

    pub fn contains(&self, answer_type: AnswerType) -> bool {
        self.descriptors().any(|d| d.answer_type == answer_type)
    }

    pub(crate) fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// The module that would handle `query`, without solving anything.
    pub fn resolve(&self, query: &str) -> Option<(&Descriptor, Match)> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        self.modules.iter().find_map(|m| m.descriptor.triggers.find(query).map(|hit| (&m.descriptor, hit)))
    }
}
