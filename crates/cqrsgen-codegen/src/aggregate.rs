//! Aggregate root generator
//!
//! One class per aggregate, extending the runtime aggregate root:
//!
//! - a static method per factory command creating and returning the aggregate
//! - an instance method per mutating command
//! - a protected `when<Event>` handler stub per event
//!
//! Command methods carry commented-out guard calls per argument and record the
//! derived event.

use crate::generator::GeneratorConfig;
use crate::naming::{capitalize, decapitalize, event_name, guard_predicate};
use cqrsgen_core::types::SELF;
use cqrsgen_core::{ArtifactKind, Classifier, CodeBlock, CodegenResult, Method, Parameter, Type};
use cqrsgen_schema::{Command, FieldDefinition, SchemaGateway, TypeDefinition};

pub struct AggregateGenerator<'a> {
    gateway: &'a SchemaGateway,
    config: &'a GeneratorConfig,
}

impl<'a> AggregateGenerator<'a> {
    pub fn new(gateway: &'a SchemaGateway, config: &'a GeneratorConfig) -> Self {
        Self { gateway, config }
    }

    pub fn process(&self, aggregate: &TypeDefinition) -> CodegenResult<Classifier> {
        let naming = &self.config.naming;
        let mut classifier = Classifier::new(
            naming.class_name(ArtifactKind::Aggregate, &aggregate.name),
            &naming.namespace(ArtifactKind::Aggregate, None),
        );
        for command in self.gateway.commands(aggregate)? {
            classifier.add_method(self.command_method(&aggregate.name, &command)?);
        }
        for event in self.gateway.events(aggregate)? {
            classifier.add_method(self.event_handler(&aggregate.name, event));
        }
        classifier.extend(&self.config.runtime.aggregate_root);
        Ok(classifier)
    }

    fn command_method(&self, aggregate: &str, command: &Command<'_>) -> CodegenResult<Method> {
        let mut method = Method::new(command.name());
        method.make_static(command.is_factory());
        let mut event = CodeBlock::new(
            &format!("// new {}(", event_name(aggregate, command.name())),
            ")",
            ", ",
        );
        if command.is_factory() {
            let id = format!("{}Id", decapitalize(aggregate));
            let identifier = Type::of_class(&self.config.runtime.entity_identifier).with_nullable(false);
            method
                .append_parameter(Parameter::new(&id, identifier))
                .push_text(format!("// $this->guard{aggregate}IdIsVersion4Uuid(${id});"));
            self.append_arguments(&mut method, command.field, &mut event)?;
            method
                .push_text(format!("$new{aggregate} = new static(${id});"))
                .push_block(
                    CodeBlock::indented(&format!("$new{aggregate}->recordThat("), ");", "")
                        .with_block(event),
                )
                .push_text(format!("return $new{aggregate};"))
                .make_return(Type::required(SELF));
        } else {
            self.append_arguments(&mut method, command.field, &mut event)?;
            method
                .push_block(CodeBlock::indented("$this->recordThat(", ");", "").with_block(event))
                .make_return(Type::void());
        }
        Ok(method)
    }

    fn append_arguments(
        &self,
        method: &mut Method,
        command: &FieldDefinition,
        event: &mut CodeBlock,
    ) -> CodegenResult<()> {
        let identifier = &self.config.runtime.entity_identifier;
        for argument in &command.arguments {
            let ty = self
                .config
                .member_type(self.gateway, &argument.ty, identifier)?;
            let predicate = guard_predicate(ty.short_name(), identifier.short());
            let name = &argument.name;
            method
                .push_text(format!(
                    "// $this->guard{}{predicate}(${name});",
                    capitalize(name)
                ))
                .append_parameter(Parameter::new(name, ty));
            event.push_text(format!("${name}"));
        }
        Ok(())
    }

    fn event_handler(&self, aggregate: &str, event: &FieldDefinition) -> Method {
        let payload = self.config.naming.class_ref(
            ArtifactKind::EventPayload,
            &event.name,
            Some(aggregate),
        );
        let mut method = Method::new(format!("when{}", event.name));
        method
            .make_protected()
            .make_return(Type::void())
            .append_parameter(Parameter::new(
                "event",
                Type::of_class(&payload).with_nullable(false),
            ));
        method
    }
}
