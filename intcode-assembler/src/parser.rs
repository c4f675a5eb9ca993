//! Parser for Intcode assembly
//!
//! Each source line becomes zero or more [`Item`]s: any number of leading
//! label definitions followed by at most one instruction or directive.

use intcode_spec::{Opcode, ParamMode, Word};
use logos::Logos;

use crate::error::{AssemblerError, Result};
use crate::lexer::Token;

/// A word that may still refer to a label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Number(Word),
    Label(String),
}

/// An instruction operand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    pub mode: ParamMode,
    pub value: Value,
}

/// A parsed source item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Label {
        name: String,
        line: usize,
    },
    Instruction {
        opcode: Opcode,
        operands: Vec<Operand>,
        line: usize,
    },
    Data {
        values: Vec<Value>,
        line: usize,
    },
}

impl Item {
    /// Number of words this item occupies in the program image
    pub fn size(&self) -> usize {
        match self {
            Item::Label { .. } => 0,
            Item::Instruction { opcode, .. } => opcode.len(),
            Item::Data { values, .. } => values.len(),
        }
    }
}

/// Parse a whole source file
pub fn parse_source(source: &str) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    for (index, text) in source.lines().enumerate() {
        items.extend(parse_line(text, index + 1)?);
    }
    Ok(items)
}

/// Parse one source line; `line` is 1-based and only used in errors
pub fn parse_line(text: &str, line: usize) -> Result<Vec<Item>> {
    let tokens = tokenize(text, line)?;
    let mut cursor = Cursor { tokens: &tokens, pos: 0, line };
    let mut items = Vec::new();

    // Labels
    while let (Some(Token::Identifier(name)), Some(Token::Colon)) = (cursor.peek(0), cursor.peek(1)) {
        items.push(Item::Label { name: name.clone(), line });
        cursor.pos += 2;
    }

    match cursor.next() {
        None => {}
        Some(Token::Identifier(name)) => {
            let opcode = Opcode::from_mnemonic(name).ok_or_else(|| AssemblerError::UnknownInstruction {
                line,
                name: name.clone(),
            })?;
            let operands = parse_list(&mut cursor, parse_operand)?;
            check_operands(opcode, &operands, line)?;
            items.push(Item::Instruction { opcode, operands, line });
        }
        Some(Token::Directive(name)) => {
            if name != "data" {
                return Err(AssemblerError::InvalidDirective(name.clone()));
            }
            let values = parse_list(&mut cursor, parse_value)?;
            if values.is_empty() {
                return Err(cursor.error("expected at least one value after .data"));
            }
            items.push(Item::Data { values, line });
        }
        Some(token) => return Err(cursor.error(&format!("unexpected token {:?}", token))),
    }

    Ok(items)
}

fn tokenize(text: &str, line: usize) -> Result<Vec<Token>> {
    let mut lexer = Token::lexer(text);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push(token),
            Err(()) => {
                return Err(AssemblerError::SyntaxError {
                    line,
                    column: lexer.span().start + 1,
                    message: format!("unexpected input '{}'", lexer.slice()),
                })
            }
        }
    }
    Ok(tokens)
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self, offset: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + offset)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn error(&self, message: &str) -> AssemblerError {
        AssemblerError::SyntaxError {
            line: self.line,
            column: self.pos + 1,
            message: message.to_string(),
        }
    }
}

/// Comma-separated list running to the end of the line
fn parse_list<T>(cursor: &mut Cursor, parse: fn(&mut Cursor) -> Result<T>) -> Result<Vec<T>> {
    let mut list = Vec::new();
    if cursor.peek(0).is_none() {
        return Ok(list);
    }
    loop {
        list.push(parse(cursor)?);
        match cursor.next() {
            None => return Ok(list),
            Some(Token::Comma) => {}
            Some(token) => return Err(cursor.error(&format!("expected ',', found {:?}", token))),
        }
    }
}

fn parse_value(cursor: &mut Cursor) -> Result<Value> {
    match cursor.next() {
        Some(Token::Number(n)) => Ok(Value::Number(*n)),
        Some(Token::Identifier(name)) => Ok(Value::Label(name.clone())),
        Some(token) => Err(cursor.error(&format!("expected number or label, found {:?}", token))),
        None => Err(cursor.error("expected number or label")),
    }
}

fn parse_operand(cursor: &mut Cursor) -> Result<Operand> {
    let mode = match cursor.peek(0) {
        Some(Token::Hash) => ParamMode::Immediate,
        Some(Token::At) => ParamMode::Relative,
        _ => ParamMode::Position,
    };
    if mode != ParamMode::Position {
        cursor.pos += 1;
    }
    let value = parse_value(cursor)?;
    Ok(Operand { mode, value })
}

fn check_operands(opcode: Opcode, operands: &[Operand], line: usize) -> Result<()> {
    if operands.len() != opcode.param_count() {
        return Err(AssemblerError::OperandCount {
            line,
            mnemonic: opcode.mnemonic(),
            expected: opcode.param_count(),
            found: operands.len(),
        });
    }
    if let Some(index) = opcode.write_param() {
        if operands[index].mode == ParamMode::Immediate {
            return Err(AssemblerError::ImmediateWriteTarget { line });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_instruction() {
        let items = parse_line("add #1, @2, x", 1).unwrap();
        assert_eq!(
            items,
            vec![Item::Instruction {
                opcode: Opcode::Add,
                operands: vec![
                    Operand { mode: ParamMode::Immediate, value: Value::Number(1) },
                    Operand { mode: ParamMode::Relative, value: Value::Number(2) },
                    Operand { mode: ParamMode::Position, value: Value::Label("x".to_string()) },
                ],
                line: 1,
            }]
        );
    }

    #[test]
    fn test_parse_labels_and_data() {
        let items = parse_line("a: b: .data 1, -2, a", 3).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], Item::Label { name: "a".to_string(), line: 3 });
        assert_eq!(items[1], Item::Label { name: "b".to_string(), line: 3 });
        assert_eq!(items[2].size(), 3);
    }

    #[test]
    fn test_parse_blank_and_comment_lines() {
        assert!(parse_line("", 1).unwrap().is_empty());
        assert!(parse_line("   ; just a comment", 1).unwrap().is_empty());
        assert_eq!(parse_line("end: ; trailing", 1).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_no_operand_instruction() {
        let items = parse_line("HLT", 1).unwrap();
        assert_eq!(items[0].size(), 1);
    }

    #[test]
    fn test_unknown_instruction() {
        assert!(matches!(
            parse_line("jmp 4", 7),
            Err(AssemblerError::UnknownInstruction { line: 7, .. })
        ));
    }

    #[test]
    fn test_operand_count() {
        assert!(matches!(
            parse_line("add 1, 2", 1),
            Err(AssemblerError::OperandCount { expected: 3, found: 2, .. })
        ));
    }

    #[test]
    fn test_immediate_write_rejected() {
        assert!(matches!(
            parse_line("in #4", 2),
            Err(AssemblerError::ImmediateWriteTarget { line: 2 })
        ));
        assert!(parse_line("in @4", 2).is_ok());
    }

    #[test]
    fn test_invalid_directive() {
        assert!(matches!(
            parse_line(".word 1", 1),
            Err(AssemblerError::InvalidDirective(_))
        ));
        assert!(matches!(parse_line(".data", 1), Err(AssemblerError::SyntaxError { .. })));
    }

    #[test]
    fn test_syntax_errors() {
        assert!(matches!(parse_line("add 1 2 3", 1), Err(AssemblerError::SyntaxError { .. })));
        assert!(matches!(parse_line("out $1", 1), Err(AssemblerError::SyntaxError { column: 5, .. })));
        assert!(matches!(parse_line("out 1,", 1), Err(AssemblerError::SyntaxError { .. })));
    }
}
