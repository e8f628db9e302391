//! Event payload generator
//!
//! One immutable record class per event, in the event payload namespace of its
//! aggregate. Fields become protected properties documented as `@property-read`
//! and are set through the base class's `init`. The record winds up into a spool
//! and unwinds from one; see [`RecordCodec`].

use crate::codec::RecordCodec;
use crate::generator::GeneratorConfig;
use cqrsgen_core::types::ARRAY;
use cqrsgen_core::{ArtifactKind, Classifier, CodegenResult, Method, Parameter, Property, Type};
use cqrsgen_schema::{FieldDefinition, SchemaGateway, TypeDefinition};

pub struct EventPayloadGenerator<'a> {
    gateway: &'a SchemaGateway,
    config: &'a GeneratorConfig,
}

impl<'a> EventPayloadGenerator<'a> {
    pub fn new(gateway: &'a SchemaGateway, config: &'a GeneratorConfig) -> Self {
        Self { gateway, config }
    }

    pub fn process(
        &self,
        event: &FieldDefinition,
        aggregate: &TypeDefinition,
    ) -> CodegenResult<Classifier> {
        let naming = &self.config.naming;
        let codec = RecordCodec::for_event(self.gateway, self.config, event)?;
        let mut classifier = Classifier::new(
            codec.name(),
            &naming.namespace(ArtifactKind::EventPayload, Some(&aggregate.name)),
        );
        append_record_members(&mut classifier, &codec);

        let mut unwind = Method::new("unwind");
        unwind
            .add_doc_line("@param array $spool")
            .add_doc_line("@return static")
            .make_static(true)
            .append_parameter(Parameter::new("spool", Type::required(ARRAY)))
            .make_return(Type::of_class(&self.config.runtime.windable).with_nullable(false))
            .push_block(codec.unwind_block());
        let mut wind_up = Method::new("windUp");
        wind_up
            .make_return(Type::required(ARRAY))
            .push_block(codec.wind_up_block());

        classifier
            .add_method(unwind)
            .add_method(wind_up)
            .extend(&self.config.runtime.event_payload_base);
        Ok(classifier)
    }
}

/// Doc lines, properties and the constructor shared by every generated record.
pub(crate) fn append_record_members(classifier: &mut Classifier, codec: &RecordCodec) {
    let mut constructor = Method::new("__construct");
    for field in codec.fields() {
        let name = field.name();
        let ty = field.ty();
        classifier
            .add_doc_line(format!("@property-read {} ${name}", ty.to_doc_param()))
            .add_property(Property::new(name, ty.clone()).make_protected());
        let parameter = Parameter::new(name, ty.clone());
        constructor
            .append_parameter(if ty.is_nullable() {
                parameter.with_default_value(serde_json::Value::Null)
            } else {
                parameter
            })
            .push_text(format!("$this->init('{name}', ${name});"));
    }
    classifier.add_method(constructor);
}
