//! Proxy creation code templates, keyed by the factory that deploys them
//!
//! A factory deploys each proxy from `proxyCreationCode() ‖ uint256(singleton)`.
//! The template is never guessed: a factory without a registered template
//! cannot be used for prediction.

use alloc::{collections::BTreeMap, vec::Vec};
use alloy_primitives::{Address, Bytes};

use crate::{
    constants::{PROXY_CREATION_CODE_V130, PROXY_FACTORY_V130},
    errors::CreationError,
};

/// The known proxy creation code of each factory
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    /// Creation code templates, keyed by factory address
    templates: BTreeMap<Address, Bytes>,
}

impl TemplateRegistry {
    /// A registry with no templates
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry holding the template of the canonical v1.3.0 proxy factory
    pub fn canonical() -> Self {
        let mut registry = Self::empty();
        registry.register(PROXY_FACTORY_V130, Bytes::from_static(PROXY_CREATION_CODE_V130));
        registry
    }

    /// Register the creation code deployed by a factory, replacing any previous template
    pub fn register(&mut self, factory: Address, creation_code: Bytes) {
        self.templates.insert(factory, creation_code);
    }

    /// Builder-style [`TemplateRegistry::register`]
    pub fn with_template(mut self, factory: Address, creation_code: Bytes) -> Self {
        self.register(factory, creation_code);
        self
    }

    /// Whether a template is known for the given factory
    pub fn contains(&self, factory: &Address) -> bool {
        self.templates.contains_key(factory)
    }

    /// The creation code template of the given factory
    pub fn template(&self, factory: &Address) -> Result<&Bytes, CreationError> {
        self.templates
            .get(factory)
            .ok_or(CreationError::UnknownFactoryTemplate(*factory))
    }

    /// The init code the factory runs to create a proxy to `singleton`
    ///
    /// This is the factory's template followed by the singleton address
    /// left-padded to a full ABI word.
    pub fn creation_code(
        &self,
        factory: &Address,
        singleton: &Address,
    ) -> Result<Vec<u8>, CreationError> {
        let template = self.template(factory)?;
        let singleton_word = singleton.into_word();

        let mut code = Vec::with_capacity(template.len() + singleton_word.len());
        code.extend_from_slice(template);
        code.extend_from_slice(singleton_word.as_slice());
        Ok(code)
    }
}
