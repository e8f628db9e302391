//! Value object generator
//!
//! One immutable record class per input type. Besides the record members shared
//! with event payloads it documents a `with<Field>` wither per field and can be
//! built from an associative array through `fromHashMap`.

use crate::codec::RecordCodec;
use crate::event_payload::append_record_members;
use crate::generator::GeneratorConfig;
use crate::naming::capitalize;
use cqrsgen_core::types::ARRAY;
use cqrsgen_core::{ArtifactKind, Classifier, CodegenResult, Method, Parameter, Type};
use cqrsgen_schema::{SchemaGateway, TypeDefinition};

pub struct ValueObjectGenerator<'a> {
    gateway: &'a SchemaGateway,
    config: &'a GeneratorConfig,
}

impl<'a> ValueObjectGenerator<'a> {
    pub fn new(gateway: &'a SchemaGateway, config: &'a GeneratorConfig) -> Self {
        Self { gateway, config }
    }

    pub fn process(&self, value_object: &TypeDefinition) -> CodegenResult<Classifier> {
        let runtime = &self.config.runtime;
        let codec = RecordCodec::for_value_object(self.gateway, self.config, value_object)?;
        let mut classifier = Classifier::new(
            codec.name(),
            &self.config.naming.namespace(ArtifactKind::ValueObject, None),
        );
        append_record_members(&mut classifier, &codec);
        for field in codec.fields() {
            classifier.add_doc_line(format!(
                "@method self with{}({}$v)",
                capitalize(field.name()),
                field.ty().to_param()
            ));
        }

        let mut from_hash_map = Method::new("fromHashMap");
        from_hash_map
            .add_doc_line("@param array $map")
            .add_doc_line("@return static")
            .make_static(true)
            .append_parameter(Parameter::new("map", Type::required(ARRAY)))
            .make_return(Type::of_class(&runtime.value_object_base).with_nullable(false))
            .push_block(codec.from_hash_map_block());
        let mut unwind = Method::new("unwind");
        unwind
            .add_doc_line("@param array $spool")
            .add_doc_line("@return static")
            .make_static(true)
            .append_parameter(Parameter::new("spool", Type::required(ARRAY)))
            .make_return(Type::of_class(&runtime.windable).with_nullable(false))
            .push_block(codec.unwind_block());
        let mut wind_up = Method::new("windUp");
        wind_up
            .make_return(Type::required(ARRAY))
            .push_block(codec.wind_up_block());

        classifier
            .add_method(from_hash_map)
            .add_method(unwind)
            .add_method(wind_up)
            .extend(&runtime.value_object_base);
        Ok(classifier)
    }
}
