//! Configuration shared by the four generators

use cqrsgen_core::{ArtifactKind, ClassRef, CodegenResult, NamingConfig, RuntimeClasses, Type};
use cqrsgen_schema::{SchemaGateway, TypeReference};

/// Naming convention and runtime classes of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub naming: NamingConfig,
    pub runtime: RuntimeClasses,
}

impl GeneratorConfig {
    /// Default runtime classes with the given naming.
    pub fn new(naming: NamingConfig) -> Self {
        Self {
            naming,
            runtime: RuntimeClasses::default(),
        }
    }

    pub fn with_runtime(mut self, runtime: RuntimeClasses) -> Self {
        self.runtime = runtime;
        self
    }

    pub fn value_object_namespace(&self) -> String {
        self.naming.namespace(ArtifactKind::ValueObject, None)
    }

    /// Convert a schema type reference for use in a generated member.
    ///
    /// Input types resolve into the value-object namespace and carry the
    /// value-object prefix and suffix; `ID` resolves to `identifier`.
    pub fn member_type(
        &self,
        gateway: &SchemaGateway,
        reference: &TypeReference,
        identifier: &ClassRef,
    ) -> CodegenResult<Type> {
        let namespace = self.value_object_namespace();
        let naming = &self.naming.value_object;
        Ok(gateway
            .convert_type(reference, identifier, &namespace)?
            .with_name_surrounded_when_in_namespace(&naming.prefix, &naming.suffix, &namespace))
    }
}
