//! Command handler generator
//!
//! One class per aggregate, extending the runtime command handler. Every command
//! gets a method with the resolver signature
//! `(string $aggregateId, array $methodArgs, $context, ResolveInfo $info): void`
//! that converts the raw arguments and then:
//!
//! - factory: creates the aggregate through its static method and saves it
//! - mutator: loads the aggregate, invokes the command and saves it

use crate::generator::GeneratorConfig;
use cqrsgen_core::types::{ARRAY, STRING};
use cqrsgen_core::{
    ArtifactKind, ClassRef, Classifier, CodeBlock, CodegenResult, Conversion, Method, Parameter,
    Type,
};
use cqrsgen_schema::{Command, SchemaGateway, TypeDefinition};

pub struct CommandHandlerGenerator<'a> {
    gateway: &'a SchemaGateway,
    config: &'a GeneratorConfig,
}

impl<'a> CommandHandlerGenerator<'a> {
    pub fn new(gateway: &'a SchemaGateway, config: &'a GeneratorConfig) -> Self {
        Self { gateway, config }
    }

    pub fn process(&self, aggregate: &TypeDefinition) -> CodegenResult<Classifier> {
        let naming = &self.config.naming;
        let mut classifier = Classifier::new(
            naming.class_name(ArtifactKind::CommandHandler, &aggregate.name),
            &naming.namespace(ArtifactKind::CommandHandler, None),
        );
        let aggregate_class = naming.class_ref(ArtifactKind::Aggregate, &aggregate.name, None);
        for command in self.gateway.commands(aggregate)? {
            classifier.add_method(self.handler_method(
                &aggregate.name,
                &aggregate_class,
                &command,
            )?);
        }
        classifier.extend(&self.config.runtime.command_handler);
        Ok(classifier)
    }

    fn handler_method(
        &self,
        aggregate: &str,
        aggregate_class: &ClassRef,
        command: &Command<'_>,
    ) -> CodegenResult<Method> {
        let runtime = &self.config.runtime;
        let identifier = &runtime.aggregate_identifier;
        let class = aggregate_class.short();
        let name = command.name();

        let mut method = Method::new(name);
        method
            .append_parameter(Parameter::new("aggregateId", Type::required(STRING)))
            .append_parameter(Parameter::new("methodArgs", Type::required(ARRAY)))
            .append_parameter(Parameter::new("context", Type::mixed()))
            .append_parameter(Parameter::new(
                "info",
                Type::of_class(&runtime.resolve_info).with_nullable(false),
            ))
            .make_return(Type::void())
            .use_class(&aggregate_class.full_name())
            .use_class(&identifier.full_name());

        let (variable, mut invocation) = if command.is_factory() {
            let variable = format!("$new{aggregate}");
            let invocation = CodeBlock::indented(&format!("{variable} = {class}::{name}("), ");", ",")
                .with_text(format!("{}::unfold($aggregateId)", identifier.short()));
            method.push_text(format!("/** @var {class} {variable} */"));
            (variable, invocation)
        } else {
            let variable = format!("$the{aggregate}");
            method
                .push_text(format!("/** @var {class} {variable} */"))
                .push_text(format!(
                    "{variable} = $this->loadFromRepository({}::unfold($aggregateId));",
                    identifier.short()
                ));
            let invocation = CodeBlock::indented(&format!("{variable}->{name}("), ");", ",");
            (variable, invocation)
        };

        for argument in &command.field.arguments {
            let ty = self
                .config
                .member_type(self.gateway, &argument.ty, identifier)?;
            let conversion = if ty.full_name() == Some(identifier.full_name()) {
                Conversion::StaticCall("unfold")
            } else {
                Conversion::StaticCall("fromHashMap")
            };
            invocation.push_text(
                ty.to_conversion(&format!("$methodArgs['{}']", argument.name), conversion),
            );
            if let Some(class) = ty.full_name() {
                method.use_class(&class);
            }
        }

        method
            .push_block(invocation)
            .push_text(format!("$this->saveToRepository({variable});"));
        Ok(method)
    }
}
