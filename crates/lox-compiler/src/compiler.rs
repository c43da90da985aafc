//! The single-pass Pratt compiler: drives the scanner and emits directly
//! into a `Chunk`, with no intermediate AST.

use lox_bytecode::{Chunk, Heap, OpCode, Value};
use lox_lex::{Scanner, Token, TokenType};

use crate::error::CompileError;
use crate::precedence::Precedence;
use crate::rules::get_rule;

pub struct Compiler<'src, 'hp> {
    scanner: Scanner<'src>,
    previous: Token<'src>,
    current: Token<'src>,
    chunk: Chunk,
    heap: &'hp mut Heap,
    had_error: bool,
    panic_mode: bool,
}

/// Compiles `source` into a `Chunk`, using `heap` for any string constants
/// along the way (so they land in the same intern table the VM allocates
/// into at runtime). Reports every compile error it finds via stderr
/// before returning; never executes anything.
pub fn compile(source: &str, heap: &mut Heap) -> Result<Chunk, CompileError> {
    // Line 1, not 0: an empty (or comment/whitespace-only) source never
    // advances past this placeholder before `emit_return` writes the
    // trailing RETURN, so its line has to already be a valid source line.
    let placeholder = Token::new(TokenType::Eof, "", 1);
    let mut compiler = Compiler {
        scanner: Scanner::new(source),
        previous: placeholder,
        current: placeholder,
        chunk: Chunk::new(),
        heap,
        had_error: false,
        panic_mode: false,
    };

    compiler.advance();
    while !compiler.check(TokenType::Eof) {
        compiler.declaration();
    }
    compiler.emit_return();

    if compiler.had_error {
        Err(CompileError)
    } else {
        Ok(compiler.chunk)
    }
}

impl<'src, 'hp> Compiler<'src, 'hp> {
    fn advance(&mut self) {
        self.previous = self.current;
        loop {
            self.current = self.scanner.scan_token();
            if self.current.kind != TokenType::Error {
                break;
            }
            let message = self.current.lexeme;
            self.error_at_current(message);
        }
    }

    fn check(&self, kind: TokenType) -> bool {
        self.current.kind == kind
    }

    fn match_token(&mut self, kind: TokenType) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn consume(&mut self, kind: TokenType, message: &str) {
        if self.current.kind == kind {
            self.advance();
        } else {
            self.error_at_current(message);
        }
    }

    // --- declarations & statements --------------------------------------

    fn declaration(&mut self) {
        if self.match_token(TokenType::Var) {
            self.var_declaration();
        } else {
            self.statement();
        }
        if self.panic_mode {
            self.synchronize();
        }
    }

    fn var_declaration(&mut self) {
        self.consume(TokenType::Identifier, "Expect variable name.");
        let name_idx = self.identifier_constant();

        if self.match_token(TokenType::Equal) {
            self.expression();
        } else {
            self.emit_op(OpCode::Nil);
        }
        self.consume(TokenType::Semicolon, "Expect ';' after variable declaration.");
        self.emit_bytes(OpCode::DefineGlobal, name_idx);
    }

    fn statement(&mut self) {
        if self.match_token(TokenType::Print) {
            self.print_statement();
        } else {
            self.expression_statement();
        }
    }

    fn print_statement(&mut self) {
        self.expression();
        self.consume(TokenType::Semicolon, "Expect ';' after value.");
        self.emit_op(OpCode::Print);
    }

    fn expression_statement(&mut self) {
        self.expression();
        self.consume(TokenType::Semicolon, "Expect ';' after expression.");
        self.emit_op(OpCode::Pop);
    }

    fn synchronize(&mut self) {
        self.panic_mode = false;
        while self.current.kind != TokenType::Eof {
            if self.previous.kind == TokenType::Semicolon {
                return;
            }
            match self.current.kind {
                TokenType::Class
                | TokenType::Fun
                | TokenType::Var
                | TokenType::For
                | TokenType::If
                | TokenType::While
                | TokenType::Print
                | TokenType::Return => return,
                _ => {}
            }
            self.advance();
        }
    }

    // --- expressions -----------------------------------------------------

    fn expression(&mut self) {
        self.parse_precedence(Precedence::Assignment);
    }

    fn parse_precedence(&mut self, precedence: Precedence) {
        self.advance();
        let prefix_rule = get_rule(self.previous.kind).prefix;
        match prefix_rule {
            Some(prefix) => prefix(self),
            None => {
                self.error("Expect expression.");
                return;
            }
        }

        while precedence <= get_rule(self.current.kind).precedence {
            self.advance();
            let infix_rule = get_rule(self.previous.kind)
                .infix
                .expect("a token reached here only because it has a precedence, hence an infix rule");
            infix_rule(self);
        }
    }

    fn grouping(&mut self) {
        self.expression();
        self.consume(TokenType::RightParen, "Expect ')' after expression.");
    }

    fn unary(&mut self) {
        let operator = self.previous.kind;
        self.parse_precedence(Precedence::Unary);
        match operator {
            TokenType::Bang => self.emit_op(OpCode::Not),
            TokenType::Minus => self.emit_op(OpCode::Negate),
            _ => unreachable!("unary is only ever the prefix rule for ! and -"),
        }
    }

    fn binary(&mut self) {
        let operator = self.previous.kind;
        let rule = get_rule(operator);
        self.parse_precedence(rule.precedence.next());
        match operator {
            TokenType::Plus => self.emit_op(OpCode::Add),
            TokenType::Minus => self.emit_op(OpCode::Subtract),
            TokenType::Star => self.emit_op(OpCode::Multiply),
            TokenType::Slash => self.emit_op(OpCode::Divide),
            TokenType::EqualEqual => self.emit_op(OpCode::Equal),
            TokenType::BangEqual => {
                self.emit_op(OpCode::Equal);
                self.emit_op(OpCode::Not);
            }
            TokenType::Greater => self.emit_op(OpCode::Greater),
            TokenType::GreaterEqual => {
                self.emit_op(OpCode::Less);
                self.emit_op(OpCode::Not);
            }
            TokenType::Less => self.emit_op(OpCode::Less),
            TokenType::LessEqual => {
                self.emit_op(OpCode::Greater);
                self.emit_op(OpCode::Not);
            }
            _ => unreachable!("binary is only ever the infix rule for the operators above"),
        }
    }

    fn literal(&mut self) {
        match self.previous.kind {
            TokenType::False => self.emit_op(OpCode::False),
            TokenType::Nil => self.emit_op(OpCode::Nil),
            TokenType::True => self.emit_op(OpCode::True),
            _ => unreachable!("literal is only ever the prefix rule for false/nil/true"),
        }
    }

    fn number(&mut self) {
        let value: f64 = self
            .previous
            .lexeme
            .parse()
            .expect("the scanner only ever produces digit-and-dot lexemes for NUMBER tokens");
        self.emit_constant(Value::Number(value));
    }

    fn string(&mut self) {
        let lexeme = self.previous.lexeme;
        let content = &lexeme[1..lexeme.len() - 1];
        let ptr = self.heap.copy_string(content);
        self.emit_constant(Value::Obj(ptr));
    }

    fn identifier_constant(&mut self) -> u8 {
        let name = self.previous.lexeme;
        let ptr = self.heap.copy_string(name);
        self.make_constant(Value::Obj(ptr))
    }

    // --- emission ----------------------------------------------------------

    fn emit_byte(&mut self, byte: u8) {
        self.chunk.write(byte, self.previous.line);
    }

    fn emit_op(&mut self, op: OpCode) {
        self.chunk.write_op(op, self.previous.line);
    }

    fn emit_bytes(&mut self, op: OpCode, operand: u8) {
        self.emit_op(op);
        self.emit_byte(operand);
    }

    fn emit_return(&mut self) {
        self.emit_op(OpCode::Return);
    }

    fn emit_constant(&mut self, value: Value) {
        let idx = self.make_constant(value);
        self.emit_bytes(OpCode::Constant, idx);
    }

    fn make_constant(&mut self, value: Value) -> u8 {
        match self.chunk.add_constant(value) {
            Ok(idx) => idx,
            Err(message) => {
                self.error(message);
                0
            }
        }
    }

    // --- diagnostics ---------------------------------------------------------

    fn error_at_current(&mut self, message: &str) {
        let token = self.current;
        self.error_at(token, message);
    }

    fn error(&mut self, message: &str) {
        let token = self.previous;
        self.error_at(token, message);
    }

    fn error_at(&mut self, token: Token<'src>, message: &str) {
        if self.panic_mode {
            return;
        }
        self.panic_mode = true;

        eprint!("[line {}] Error", token.line);
        match token.kind {
            TokenType::Eof => eprint!(" at end"),
            TokenType::Error => {}
            _ => eprint!(" at '{}'", token.lexeme),
        }
        eprintln!(": {message}");

        self.had_error = true;
    }
}
