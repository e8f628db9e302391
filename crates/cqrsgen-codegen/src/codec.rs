//! Wind-up/unwind layout of generated records
//!
//! Event payloads and value objects serialize themselves into a positional
//! "spool" (`windUp`) and restore from it (`unwind`). A [`RecordCodec`] holds
//! the per-field layout once and serves two purposes:
//!
//! - rendering the bodies of the generated `windUp`, `unwind` and `fromHashMap` methods
//! - evaluating the same conversions over `serde_json` values, so the layout can be
//!   checked without running generated code
//!
//! | field | `windUp` | `unwind` |
//! |-------|----------|----------|
//! | scalar | as is | scalar conversion (`intval`, ...) |
//! | collection | as is | as is |
//! | identifier | `->fold()` (string) | `Id::unfold` |
//! | value object in a payload | `->fold()` (JSON string) | `Vo::unfold` |
//! | value object in a value object | `->windUp()` (nested spool) | `Vo::unwind` |
//!
//! Nullable fields short-circuit to null in both directions.

use crate::error::{CodecError, CodecResult};
use crate::generator::GeneratorConfig;
use cqrsgen_core::types::{BOOL, FLOAT, INT, STRING};
use cqrsgen_core::{ArtifactKind, ClassRef, CodeBlock, CodegenResult, Conversion, Type};
use cqrsgen_schema::{FieldDefinition, InputValue, SchemaGateway, TypeDefinition};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// The kind of record a layout belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    EventPayload,
    ValueObject,
}

/// How one field crosses the spool boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEncoding {
    Scalar,
    /// Collections and untyped values, never converted
    Passthrough,
    Identifier,
    /// A nested value object, by class name
    Record(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordField {
    name: String,
    ty: Type,
    encoding: FieldEncoding,
}

impl RecordField {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn encoding(&self) -> &FieldEncoding {
        &self.encoding
    }
}

/// Field layout of one event payload or value object.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordCodec {
    name: String,
    kind: RecordKind,
    fields: Vec<RecordField>,
}

impl RecordCodec {
    pub fn new(name: impl Into<String>, kind: RecordKind) -> Self {
        Self {
            name: name.into(),
            kind,
            fields: Vec::new(),
        }
    }

    /// Layout of the payload generated for an event.
    pub fn for_event(
        gateway: &SchemaGateway,
        config: &GeneratorConfig,
        event: &FieldDefinition,
    ) -> CodegenResult<Self> {
        let name = config
            .naming
            .class_name(ArtifactKind::EventPayload, &event.name);
        Self::from_inputs(gateway, config, name, RecordKind::EventPayload, &event.arguments)
    }

    /// Layout of the value object generated for an input type.
    pub fn for_value_object(
        gateway: &SchemaGateway,
        config: &GeneratorConfig,
        value_object: &TypeDefinition,
    ) -> CodegenResult<Self> {
        let name = config
            .naming
            .class_name(ArtifactKind::ValueObject, &value_object.name);
        Self::from_inputs(
            gateway,
            config,
            name,
            RecordKind::ValueObject,
            &value_object.input_fields,
        )
    }

    fn from_inputs(
        gateway: &SchemaGateway,
        config: &GeneratorConfig,
        name: String,
        kind: RecordKind,
        inputs: &[InputValue],
    ) -> CodegenResult<Self> {
        let identifier = &config.runtime.aggregate_identifier;
        let mut codec = Self::new(name, kind);
        for input in inputs {
            let ty = config.member_type(gateway, &input.ty, identifier)?;
            codec.push_field(&input.name, ty, identifier);
        }
        Ok(codec)
    }

    /// Append a field; its encoding follows from the type.
    pub fn push_field(&mut self, name: &str, ty: Type, identifier: &ClassRef) -> &mut Self {
        let encoding = match ty.short_name() {
            _ if ty.is_collection() => FieldEncoding::Passthrough,
            None => FieldEncoding::Passthrough,
            Some(_) if ty.is_scalar() => FieldEncoding::Scalar,
            Some(_) if ty.full_name() == Some(identifier.full_name()) => FieldEncoding::Identifier,
            Some(short) => FieldEncoding::Record(short.to_string()),
        };
        self.fields.push(RecordField {
            name: name.to_string(),
            ty,
            encoding,
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn fields(&self) -> &[RecordField] {
        &self.fields
    }

    /// Body of the static `unwind(array $spool)` method.
    pub fn unwind_block(&self) -> CodeBlock {
        let mut block = CodeBlock::indented("return new self(", ");", ",");
        for (index, field) in self.fields.iter().enumerate() {
            let method = match (&field.encoding, self.kind) {
                (FieldEncoding::Record(_), RecordKind::ValueObject) => "unwind",
                _ => "unfold",
            };
            block.push_text(
                field
                    .ty
                    .to_conversion(&format!("$spool[{index}]"), Conversion::StaticCall(method)),
            );
        }
        block
    }

    /// Body of the `windUp()` method.
    pub fn wind_up_block(&self) -> CodeBlock {
        let mut block = CodeBlock::indented("return [", "];", ",");
        for field in &self.fields {
            let name = &field.name;
            let fold = match (&field.encoding, self.kind) {
                (FieldEncoding::Scalar | FieldEncoding::Passthrough, _) => None,
                (FieldEncoding::Record(_), RecordKind::ValueObject) => Some("windUp"),
                (FieldEncoding::Identifier | FieldEncoding::Record(_), _) => Some("fold"),
            };
            block.push_text(match fold {
                Some(method) if field.ty.is_nullable() => {
                    format!("is_null($this->{name}) ? null : $this->{name}->{method}()")
                }
                Some(method) => format!("$this->{name}->{method}()"),
                None => format!("$this->{name}"),
            });
        }
        block
    }

    /// Body of the static `fromHashMap(array $map)` method of value objects.
    pub fn from_hash_map_block(&self) -> CodeBlock {
        let mut block = CodeBlock::indented("return new self(", ");", ",");
        for field in &self.fields {
            let method = match field.encoding {
                FieldEncoding::Identifier => "unfold",
                _ => "fromHashMap",
            };
            block.push_text(field.ty.to_conversion(
                &format!("$map['{}']", field.name),
                Conversion::StaticCall(method),
            ));
        }
        block
    }

    /// Evaluate `windUp` over a record given as field name to value.
    pub fn wind_up(
        &self,
        record: &Map<String, Value>,
        registry: &CodecRegistry,
    ) -> CodecResult<Vec<Value>> {
        self.fields
            .iter()
            .map(|field| {
                let value = record.get(&field.name).unwrap_or(&Value::Null);
                if value.is_null() {
                    return self.null_for(field);
                }
                match &field.encoding {
                    FieldEncoding::Scalar | FieldEncoding::Passthrough => Ok(value.clone()),
                    FieldEncoding::Identifier => self.identifier(field, value),
                    FieldEncoding::Record(class) => {
                        let nested = value.as_object().ok_or_else(|| {
                            CodecError::malformed(&self.name, &field.name, "expected an object")
                        })?;
                        let spool = registry.get(class)?.wind_up(nested, registry)?;
                        Ok(match self.kind {
                            RecordKind::EventPayload => {
                                Value::String(Value::Array(spool).to_string())
                            }
                            RecordKind::ValueObject => Value::Array(spool),
                        })
                    }
                }
            })
            .collect()
    }

    /// Evaluate `unwind` over a spool, producing field name to value.
    pub fn unwind(
        &self,
        spool: &[Value],
        registry: &CodecRegistry,
    ) -> CodecResult<Map<String, Value>> {
        if spool.len() != self.fields.len() {
            return Err(CodecError::Arity {
                record: self.name.clone(),
                expected: self.fields.len(),
                found: spool.len(),
            });
        }
        self.fields
            .iter()
            .zip(spool)
            .map(|(field, value)| {
                Ok((field.name.clone(), self.unwind_value(field, value, registry)?))
            })
            .collect()
    }

    fn unwind_value(
        &self,
        field: &RecordField,
        value: &Value,
        registry: &CodecRegistry,
    ) -> CodecResult<Value> {
        if value.is_null() && field.ty.is_nullable() {
            return Ok(Value::Null);
        }
        match &field.encoding {
            FieldEncoding::Passthrough => Ok(value.clone()),
            FieldEncoding::Scalar => Ok(coerce(field.ty.short_name(), value)),
            FieldEncoding::Identifier => self.identifier(field, value),
            FieldEncoding::Record(class) => {
                let codec = registry.get(class)?;
                let nested = match self.kind {
                    RecordKind::EventPayload => {
                        let folded = value.as_str().ok_or_else(|| {
                            CodecError::malformed(&self.name, &field.name, "expected a folded string")
                        })?;
                        serde_json::from_str(folded).map_err(|err| {
                            CodecError::malformed(&self.name, &field.name, err.to_string())
                        })?
                    }
                    RecordKind::ValueObject => value.clone(),
                };
                let spool = nested.as_array().ok_or_else(|| {
                    CodecError::malformed(&self.name, &field.name, "expected a spool")
                })?;
                Ok(Value::Object(codec.unwind(spool, registry)?))
            }
        }
    }

    /// Evaluate `fromHashMap` over a map keyed by field name.
    pub fn from_hash_map(
        &self,
        map: &Map<String, Value>,
        registry: &CodecRegistry,
    ) -> CodecResult<Map<String, Value>> {
        self.fields
            .iter()
            .map(|field| {
                let value = map.get(&field.name).unwrap_or(&Value::Null);
                let converted = if value.is_null() && field.ty.is_nullable() {
                    Value::Null
                } else {
                    match &field.encoding {
                        FieldEncoding::Passthrough => value.clone(),
                        FieldEncoding::Scalar => coerce(field.ty.short_name(), value),
                        FieldEncoding::Identifier => self.identifier(field, value)?,
                        FieldEncoding::Record(class) => {
                            let nested = value.as_object().ok_or_else(|| {
                                CodecError::malformed(&self.name, &field.name, "expected an object")
                            })?;
                            Value::Object(registry.get(class)?.from_hash_map(nested, registry)?)
                        }
                    }
                };
                Ok((field.name.clone(), converted))
            })
            .collect()
    }

    fn null_for(&self, field: &RecordField) -> CodecResult<Value> {
        if field.ty.is_nullable() {
            Ok(Value::Null)
        } else {
            Err(CodecError::MissingField {
                record: self.name.clone(),
                field: field.name.clone(),
            })
        }
    }

    fn identifier(&self, field: &RecordField, value: &Value) -> CodecResult<Value> {
        value
            .as_str()
            .map(|id| Value::String(id.to_string()))
            .ok_or_else(|| CodecError::malformed(&self.name, &field.name, "expected an identifier string"))
    }
}

/// Scalar conversion of `boolval`, `floatval`, `intval` and `strval`.
///
/// Follows PHP's rules on 64-bit builds: numeric strings are read up to the
/// first non-numeric character, floats print with 14 significant digits
/// (`1.0` as `1`, `1e20` as `1.0E+20`), out-of-range floats wrap modulo 2^64
/// and out-of-range numeric strings saturate. Arrays and maps count as `1`
/// when non-empty and print as `Array`.
fn coerce(short_name: Option<&str>, value: &Value) -> Value {
    match short_name {
        Some(BOOL) => Value::Bool(truthy(value)),
        Some(INT) => Value::from(to_int(value)),
        Some(FLOAT) => Number::from_f64(to_float(value)).map_or(Value::Null, Value::Number),
        Some(STRING) => Value::String(to_text(value)),
        _ => value.clone(),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}

fn to_int(value: &Value) -> i64 {
    match value {
        Value::Bool(b) => i64::from(*b),
        Value::Number(n) => n
            .as_i64()
            .unwrap_or_else(|| wrap_to_int(n.as_f64().unwrap_or(0.0))),
        Value::String(s) => match numeric_prefix(s) {
            Some(prefix) if !prefix.contains(['.', 'e', 'E']) => {
                prefix.parse::<i64>().unwrap_or(if prefix.starts_with('-') {
                    i64::MIN
                } else {
                    i64::MAX
                })
            }
            Some(prefix) => saturate_to_int(prefix.parse().unwrap_or(0.0)),
            None => 0,
        },
        Value::Array(items) => i64::from(!items.is_empty()),
        Value::Object(entries) => i64::from(!entries.is_empty()),
        Value::Null => 0,
    }
}

fn to_float(value: &Value) -> f64 {
    match value {
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => numeric_prefix(s).and_then(|p| p.parse().ok()).unwrap_or(0.0),
        Value::Array(items) => f64::from(u8::from(!items.is_empty())),
        Value::Object(entries) => f64::from(u8::from(!entries.is_empty())),
        Value::Null => 0.0,
    }
}

fn to_text(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_i64() {
            Some(int) => int.to_string(),
            None => float_text(n.as_f64().unwrap_or(0.0)),
        },
        Value::Array(_) | Value::Object(_) => "Array".to_string(),
    }
}

const PRECISION: usize = 14;

/// `strval` of a float: `%.14G` with PHP's `.0` on a bare exponent mantissa.
fn float_text(value: f64) -> String {
    if value.is_nan() {
        return "NAN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    let scientific = format!("{value:.prec$e}", prec = PRECISION - 1);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if exponent < -4 || exponent >= PRECISION as i32 {
        let mantissa = mantissa.trim_end_matches('0');
        let mantissa = match mantissa.strip_suffix('.') {
            Some(whole) => format!("{whole}.0"),
            None => mantissa.to_string(),
        };
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}E{sign}{}", exponent.abs())
    } else {
        // Rounded to the printed precision, Display never needs an exponent here.
        let rounded: f64 = scientific.parse().unwrap_or(value);
        rounded.to_string()
    }
}

/// Leading numeric part of a string, after leading whitespace.
fn numeric_prefix(text: &str) -> Option<&str> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |mut at: usize| {
        while bytes.get(at).is_some_and(u8::is_ascii_digit) {
            at += 1;
        }
        at
    };
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer_end = digits_from(end);
    let mut seen_digits = integer_end > end;
    end = integer_end;
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_from(end + 1);
        if fraction_end > end + 1 || seen_digits {
            seen_digits |= fraction_end > end + 1;
            end = fraction_end;
        }
    }
    if !seen_digits {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent_end = digits_from(end + 1 + sign);
        if exponent_end > end + 1 + sign {
            end = exponent_end;
        }
    }
    Some(&text[..end])
}

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// `(int)` of a float: truncation, wrapping modulo 2^64 outside the `i64` range.
fn wrap_to_int(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let value = value.trunc();
    if (-TWO_POW_63..TWO_POW_63).contains(&value) {
        return value as i64;
    }
    let two_pow_64 = 2.0 * TWO_POW_63;
    let mut wrapped = value % two_pow_64;
    if wrapped < 0.0 {
        wrapped += two_pow_64;
    }
    if wrapped >= TWO_POW_63 {
        wrapped -= two_pow_64;
    }
    wrapped as i64
}

/// `intval` of a float read from a string: truncation, clamped to the `i64` range.
fn saturate_to_int(value: f64) -> i64 {
    if value.is_nan() {
        0
    } else if value >= TWO_POW_63 {
        i64::MAX
    } else if value < -TWO_POW_63 {
        i64::MIN
    } else {
        value.trunc() as i64
    }
}

/// Value-object layouts by class name, used to resolve nested records.
#[derive(Debug, Clone, Default)]
pub struct CodecRegistry {
    records: BTreeMap<String, RecordCodec>,
}

impl CodecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layouts of every value object in the schema.
    pub fn build(gateway: &SchemaGateway, config: &GeneratorConfig) -> CodegenResult<Self> {
        let mut registry = Self::new();
        for value_object in gateway.value_objects() {
            registry.register(RecordCodec::for_value_object(gateway, config, value_object)?);
        }
        Ok(registry)
    }

    pub fn register(&mut self, codec: RecordCodec) -> &mut Self {
        self.records.insert(codec.name.clone(), codec);
        self
    }

    pub fn get(&self, name: &str) -> CodecResult<&RecordCodec> {
        self.records
            .get(name)
            .ok_or_else(|| CodecError::UnknownRecord(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
