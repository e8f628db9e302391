//! GraphQL SDL reader
//!
//! Reads the type system subset a schema document needs: the `schema` block,
//! `type`, `interface`, `input`, `scalar`, `enum` and `union` definitions and
//! `directive` declarations. Descriptions, comments and directives are skipped;
//! default values are kept as source text. Commas are insignificant.

use crate::document::{FieldDefinition, InputValue, TypeDefinition, TypeKind, TypeReference};
use crate::error::{SchemaError, SchemaResult};

/// Definitions in source order plus the operation roots named in a `schema` block.
#[derive(Debug, Default)]
pub(crate) struct ParsedSchema {
    pub types: Vec<TypeDefinition>,
    pub query: Option<String>,
    pub mutation: Option<String>,
    /// Whether a `schema` block was present, even one naming no mutation root
    pub has_schema_block: bool,
}

pub(crate) fn parse(source: &str) -> SchemaResult<ParsedSchema> {
    let tokens = tokenize(source)?;
    Parser {
        tokens,
        position: 0,
    }
    .document()
}

// ============================================================================
// Lexer
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Name(String),
    Punct(char),
    Str(String),
    Number(String),
    Eof,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Name(name) => format!("“{name}”"),
            Token::Punct(c) => format!("“{c}”"),
            Token::Str(_) => "a string".to_string(),
            Token::Number(n) => format!("number {n}"),
            Token::Eof => "end of input".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct Spanned {
    token: Token,
    line: usize,
    column: usize,
}

const PUNCTUATORS: &str = "!$&()[]{}:=@|";

struct Lexer {
    chars: Vec<char>,
    index: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.index + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.index += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn error(&self, message: impl Into<String>) -> SchemaError {
        SchemaError::syntax(self.line, self.column, message)
    }

    fn starts_block_string(&self) -> bool {
        self.peek() == Some('"') && self.peek_at(1) == Some('"') && self.peek_at(2) == Some('"')
    }

    fn string(&mut self) -> SchemaResult<String> {
        if self.starts_block_string() {
            return self.block_string();
        }
        self.bump();
        let mut value = String::new();
        loop {
            let c = match self.peek() {
                None | Some('\n') => return Err(self.error("unterminated string")),
                Some(c) => c,
            };
            self.bump();
            match c {
                '"' => return Ok(value),
                '\\' => value.push(self.escape()?),
                c => value.push(c),
            }
        }
    }

    fn escape(&mut self) -> SchemaResult<char> {
        match self.bump() {
            Some('"') => Ok('"'),
            Some('\\') => Ok('\\'),
            Some('/') => Ok('/'),
            Some('b') => Ok('\u{8}'),
            Some('f') => Ok('\u{c}'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('u') => {
                let mut code = String::new();
                for _ in 0..4 {
                    code.extend(self.bump());
                }
                u32::from_str_radix(&code, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| self.error(format!("invalid unicode escape “\\u{code}”")))
            }
            Some(c) => Err(self.error(format!("invalid escape “\\{c}”"))),
            None => Err(self.error("unterminated string")),
        }
    }

    fn block_string(&mut self) -> SchemaResult<String> {
        for _ in 0..3 {
            self.bump();
        }
        let mut value = String::new();
        loop {
            if self.starts_block_string() {
                for _ in 0..3 {
                    self.bump();
                }
                return Ok(value);
            }
            match self.bump() {
                None => return Err(self.error("unterminated block string")),
                Some('\\') if self.starts_block_string() => {
                    for _ in 0..3 {
                        self.bump();
                    }
                    value.push_str("\"\"\"");
                }
                Some(c) => value.push(c),
            }
        }
    }

    fn name(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek().filter(|c| c.is_ascii_alphanumeric() || *c == '_') {
            name.push(c);
            self.bump();
        }
        name
    }

    fn number(&mut self) -> String {
        let mut number = String::new();
        if self.peek() == Some('-') {
            number.extend(self.bump());
        }
        while let Some(c) = self
            .peek()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-'))
        {
            number.push(c);
            self.bump();
        }
        number
    }
}

fn tokenize(source: &str) -> SchemaResult<Vec<Spanned>> {
    let mut lexer = Lexer {
        chars: source.chars().collect(),
        index: 0,
        line: 1,
        column: 1,
    };
    let mut tokens = Vec::new();
    while let Some(c) = lexer.peek() {
        let (line, column) = (lexer.line, lexer.column);
        let token = match c {
            c if c.is_whitespace() || c == ',' || c == '\u{feff}' => {
                lexer.bump();
                continue;
            }
            '#' => {
                while lexer.peek().is_some_and(|c| c != '\n') {
                    lexer.bump();
                }
                continue;
            }
            '"' => Token::Str(lexer.string()?),
            c if PUNCTUATORS.contains(c) => {
                lexer.bump();
                Token::Punct(c)
            }
            c if c.is_ascii_alphabetic() || c == '_' => Token::Name(lexer.name()),
            c if c.is_ascii_digit() || c == '-' => Token::Number(lexer.number()),
            other => return Err(lexer.error(format!("unexpected character “{other}”"))),
        };
        tokens.push(Spanned {
            token,
            line,
            column,
        });
    }
    tokens.push(Spanned {
        token: Token::Eof,
        line: lexer.line,
        column: lexer.column,
    });
    Ok(tokens)
}

// ============================================================================
// Parser
// ============================================================================

struct Parser {
    tokens: Vec<Spanned>,
    position: usize,
}

impl Parser {
    fn current(&self) -> &Spanned {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.position.min(last)]
    }

    fn peek(&self) -> &Token {
        &self.current().token
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    fn error(&self, message: impl Into<String>) -> SchemaError {
        let current = self.current();
        SchemaError::syntax(current.line, current.column, message)
    }

    fn unexpected(&self, expected: &str) -> SchemaError {
        self.error(format!("expected {expected}, found {}", self.peek().describe()))
    }

    fn is_punct(&self, c: char) -> bool {
        *self.peek() == Token::Punct(c)
    }

    fn eat_punct(&mut self, c: char) -> bool {
        let matched = self.is_punct(c);
        if matched {
            self.advance();
        }
        matched
    }

    fn expect_punct(&mut self, c: char) -> SchemaResult<()> {
        if self.eat_punct(c) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("“{c}”")))
        }
    }

    fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self.peek(), Token::Name(name) if name == keyword)
    }

    fn name(&mut self) -> SchemaResult<String> {
        if let Token::Name(name) = self.peek() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.unexpected("a name"))
        }
    }

    fn skip_description(&mut self) {
        if matches!(self.peek(), Token::Str(_)) {
            self.advance();
        }
    }

    fn document(mut self) -> SchemaResult<ParsedSchema> {
        let mut schema = ParsedSchema::default();
        loop {
            self.skip_description();
            let keyword = match self.peek() {
                Token::Eof => return Ok(schema),
                Token::Name(keyword) => keyword.clone(),
                _ => return Err(self.unexpected("a definition")),
            };
            self.advance();
            match keyword.as_str() {
                "schema" => self.schema_block(&mut schema)?,
                "type" => schema.types.push(self.object(TypeKind::Object)?),
                "interface" => schema.types.push(self.object(TypeKind::Interface)?),
                "input" => schema.types.push(self.input()?),
                "scalar" => {
                    let definition = TypeDefinition::new(self.name()?, TypeKind::Scalar);
                    self.directives()?;
                    schema.types.push(definition);
                }
                "enum" => schema.types.push(self.enumeration()?),
                "union" => schema.types.push(self.union()?),
                "directive" => self.directive_definition()?,
                "extend" => return Err(self.error("type extensions are not supported")),
                other => return Err(self.error(format!("unknown definition “{other}”"))),
            }
        }
    }

    fn schema_block(&mut self, schema: &mut ParsedSchema) -> SchemaResult<()> {
        schema.has_schema_block = true;
        self.directives()?;
        self.expect_punct('{')?;
        while !self.eat_punct('}') {
            let operation = self.name()?;
            self.expect_punct(':')?;
            let root = self.name()?;
            match operation.as_str() {
                "query" => schema.query = Some(root),
                "mutation" => schema.mutation = Some(root),
                "subscription" => {}
                other => return Err(self.error(format!("unknown operation “{other}”"))),
            }
        }
        Ok(())
    }

    fn object(&mut self, kind: TypeKind) -> SchemaResult<TypeDefinition> {
        let mut definition = TypeDefinition::new(self.name()?, kind);
        if self.is_keyword("implements") {
            self.advance();
            self.eat_punct('&');
            definition.members.push(self.name()?);
            while self.eat_punct('&') {
                definition.members.push(self.name()?);
            }
        }
        self.directives()?;
        if self.eat_punct('{') {
            while !self.eat_punct('}') {
                definition.fields.push(self.field()?);
            }
        }
        Ok(definition)
    }

    fn field(&mut self) -> SchemaResult<FieldDefinition> {
        self.skip_description();
        let name = self.name()?;
        let mut arguments = Vec::new();
        if self.eat_punct('(') {
            while !self.eat_punct(')') {
                arguments.push(self.input_value()?);
            }
        }
        self.expect_punct(':')?;
        let ty = self.type_reference()?;
        self.directives()?;
        Ok(FieldDefinition {
            name,
            arguments,
            ty,
        })
    }

    fn input(&mut self) -> SchemaResult<TypeDefinition> {
        let mut definition = TypeDefinition::new(self.name()?, TypeKind::InputObject);
        self.directives()?;
        if self.eat_punct('{') {
            while !self.eat_punct('}') {
                definition.input_fields.push(self.input_value()?);
            }
        }
        Ok(definition)
    }

    fn input_value(&mut self) -> SchemaResult<InputValue> {
        self.skip_description();
        let name = self.name()?;
        self.expect_punct(':')?;
        let ty = self.type_reference()?;
        let default_value = if self.eat_punct('=') {
            Some(self.value()?)
        } else {
            None
        };
        self.directives()?;
        Ok(InputValue {
            name,
            ty,
            default_value,
        })
    }

    fn enumeration(&mut self) -> SchemaResult<TypeDefinition> {
        let mut definition = TypeDefinition::new(self.name()?, TypeKind::Enum);
        self.directives()?;
        if self.eat_punct('{') {
            while !self.eat_punct('}') {
                self.skip_description();
                definition.values.push(self.name()?);
                self.directives()?;
            }
        }
        Ok(definition)
    }

    fn union(&mut self) -> SchemaResult<TypeDefinition> {
        let mut definition = TypeDefinition::new(self.name()?, TypeKind::Union);
        self.directives()?;
        if self.eat_punct('=') {
            self.eat_punct('|');
            definition.members.push(self.name()?);
            while self.eat_punct('|') {
                definition.members.push(self.name()?);
            }
        }
        Ok(definition)
    }

    fn directive_definition(&mut self) -> SchemaResult<()> {
        self.expect_punct('@')?;
        self.name()?;
        if self.eat_punct('(') {
            while !self.eat_punct(')') {
                self.input_value()?;
            }
        }
        if self.is_keyword("repeatable") {
            self.advance();
        }
        if !self.is_keyword("on") {
            return Err(self.unexpected("“on”"));
        }
        self.advance();
        self.eat_punct('|');
        self.name()?;
        while self.eat_punct('|') {
            self.name()?;
        }
        Ok(())
    }

    fn directives(&mut self) -> SchemaResult<()> {
        while self.eat_punct('@') {
            self.name()?;
            if self.eat_punct('(') {
                while !self.eat_punct(')') {
                    self.name()?;
                    self.expect_punct(':')?;
                    self.value()?;
                }
            }
        }
        Ok(())
    }

    fn type_reference(&mut self) -> SchemaResult<TypeReference> {
        let ty = if self.eat_punct('[') {
            let inner = self.type_reference()?;
            self.expect_punct(']')?;
            TypeReference::list(inner)
        } else {
            TypeReference::named(self.name()?)
        };
        if self.eat_punct('!') {
            Ok(TypeReference::non_null(ty))
        } else {
            Ok(ty)
        }
    }

    /// A value literal, returned as normalized source text.
    fn value(&mut self) -> SchemaResult<String> {
        match self.advance() {
            Token::Name(name) => Ok(name),
            Token::Number(number) => Ok(number),
            Token::Str(text) => Ok(format!(
                "\"{}\"",
                text.replace('\\', "\\\\").replace('"', "\\\"")
            )),
            Token::Punct('$') => Ok(format!("${}", self.name()?)),
            Token::Punct('[') => {
                let mut items = Vec::new();
                while !self.eat_punct(']') {
                    items.push(self.value()?);
                }
                Ok(format!("[{}]", items.join(", ")))
            }
            Token::Punct('{') => {
                let mut entries = Vec::new();
                while !self.eat_punct('}') {
                    let key = self.name()?;
                    self.expect_punct(':')?;
                    entries.push(format!("{key}: {}", self.value()?));
                }
                Ok(format!("{{{}}}", entries.join(", ")))
            }
            _ => {
                self.position = self.position.saturating_sub(1);
                Err(self.unexpected("a value"))
            }
        }
    }
}

#[cfg(test)]
#[path = "parser/parser_tests.rs"]
mod parser_tests;
