//! The dispatch loop: byte-at-a-time decode and execute over a `Chunk`.

use lox_bytecode::{Chunk, Heap, OpCode, Table, Value};

const STACK_MAX: usize = 256;

/// The outcome of one `interpret` call. `CompileError` and `RuntimeError`
/// are both terminal for that call only — the `Vm` itself stays valid and
/// ready for the next `interpret`, carrying its object list and intern
/// table forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpretResult {
    Ok,
    CompileError,
    RuntimeError,
}

/// Owns the operand stack, the heap (object list + intern table), and
/// global-variable storage across every `interpret` call made on it.
pub struct Vm {
    stack: [Value; STACK_MAX],
    stack_top: usize,
    heap: Heap,
    globals: Table,
}

impl Vm {
    pub fn new() -> Self {
        Self {
            stack: [Value::Nil; STACK_MAX],
            stack_top: 0,
            heap: Heap::new(),
            globals: Table::new(),
        }
    }

    /// Compiles `source` and, if that succeeds, runs the resulting chunk.
    /// A compile error never reaches the dispatch loop at all.
    pub fn interpret(&mut self, source: &str) -> InterpretResult {
        let chunk = match lox_compiler::compile(source, &mut self.heap) {
            Ok(chunk) => chunk,
            Err(_) => return InterpretResult::CompileError,
        };
        self.run(&chunk)
    }

    fn run(&mut self, chunk: &Chunk) -> InterpretResult {
        let mut ip = 0usize;
        loop {
            if ip >= chunk.len() {
                return InterpretResult::Ok;
            }
            let byte = chunk.read(ip);
            ip += 1;

            let op = match OpCode::from_u8(byte) {
                Some(op) => op,
                None => continue,
            };

            match op {
                OpCode::Constant => {
                    let idx = chunk.read(ip);
                    ip += 1;
                    let value = *chunk.get_constant(idx);
                    self.push(value);
                }
                OpCode::Nil => self.push(Value::Nil),
                OpCode::True => self.push(Value::Bool(true)),
                OpCode::False => self.push(Value::Bool(false)),
                OpCode::Pop => {
                    self.pop();
                }
                OpCode::DefineGlobal => {
                    let idx = chunk.read(ip);
                    ip += 1;
                    let name = *chunk.get_constant(idx);
                    let value = self.pop();
                    if let Value::Obj(ptr) = name {
                        self.globals.set(ptr, value);
                    }
                }
                OpCode::Equal => {
                    let b = self.pop();
                    let a = self.pop();
                    self.push(Value::Bool(a.equal(&b)));
                }
                OpCode::Greater => {
                    if let Some(result) =
                        self.binary_numeric(chunk, ip, |a, b| Value::Bool(a > b), "Operands must be numbers.")
                    {
                        return result;
                    }
                }
                OpCode::Less => {
                    if let Some(result) =
                        self.binary_numeric(chunk, ip, |a, b| Value::Bool(a < b), "Operands must be numbers.")
                    {
                        return result;
                    }
                }
                OpCode::Add => {
                    if let Some(result) = self.add(chunk, ip) {
                        return result;
                    }
                }
                OpCode::Subtract => {
                    if let Some(result) =
                        self.binary_numeric(chunk, ip, |a, b| Value::Number(a - b), "Operands must be numbers.")
                    {
                        return result;
                    }
                }
                OpCode::Multiply => {
                    if let Some(result) =
                        self.binary_numeric(chunk, ip, |a, b| Value::Number(a * b), "Operands must be numbers.")
                    {
                        return result;
                    }
                }
                OpCode::Divide => {
                    if let Some(result) =
                        self.binary_numeric(chunk, ip, |a, b| Value::Number(a / b), "Operands must be numbers.")
                    {
                        return result;
                    }
                }
                OpCode::Not => {
                    let v = self.pop();
                    self.push(Value::Bool(v.is_falsey()));
                }
                OpCode::Negate => {
                    if let Some(result) = self.negate(chunk, ip) {
                        return result;
                    }
                }
                OpCode::Print => {
                    let value = self.pop();
                    println!("{value}");
                }
                OpCode::Return => return InterpretResult::Ok,
            }
        }
    }

    fn binary_numeric(
        &mut self,
        chunk: &Chunk,
        ip: usize,
        f: impl Fn(f64, f64) -> Value,
        message: &str,
    ) -> Option<InterpretResult> {
        let b = self.peek(0);
        let a = self.peek(1);
        match (a.as_number(), b.as_number()) {
            (Some(av), Some(bv)) => {
                self.pop();
                self.pop();
                self.push(f(av, bv));
                None
            }
            _ => Some(self.runtime_error(chunk, ip, message)),
        }
    }

    fn add(&mut self, chunk: &Chunk, ip: usize) -> Option<InterpretResult> {
        let b = self.peek(0);
        let a = self.peek(1);
        if a.is_string() && b.is_string() {
            self.pop();
            self.pop();
            let a_str = a.as_str().expect("checked is_string above");
            let b_str = b.as_str().expect("checked is_string above");
            let mut bytes = Vec::with_capacity(a_str.len() + b_str.len());
            bytes.extend_from_slice(a_str.as_bytes());
            bytes.extend_from_slice(b_str.as_bytes());
            let ptr = self.heap.take_string(bytes.into_boxed_slice());
            self.push(Value::Obj(ptr));
            None
        } else if a.is_number() && b.is_number() {
            self.pop();
            self.pop();
            self.push(Value::Number(
                a.as_number().expect("checked is_number above") + b.as_number().expect("checked is_number above"),
            ));
            None
        } else {
            Some(self.runtime_error(chunk, ip, "Operands must be two numbers or two strings."))
        }
    }

    fn negate(&mut self, chunk: &Chunk, ip: usize) -> Option<InterpretResult> {
        match self.peek(0).as_number() {
            Some(v) => {
                self.pop();
                self.push(Value::Number(-v));
                None
            }
            None => Some(self.runtime_error(chunk, ip, "Operand must be a number.")),
        }
    }

    fn runtime_error(&mut self, chunk: &Chunk, ip: usize, message: &str) -> InterpretResult {
        eprintln!("{message}");
        let line = chunk.get_line(ip - 1);
        eprintln!("[line {line}] in script");
        self.reset_stack();
        InterpretResult::RuntimeError
    }

    fn push(&mut self, value: Value) {
        self.stack[self.stack_top] = value;
        self.stack_top += 1;
    }

    fn pop(&mut self) -> Value {
        self.stack_top -= 1;
        self.stack[self.stack_top]
    }

    fn peek(&self, distance: usize) -> Value {
        self.stack[self.stack_top - 1 - distance]
    }

    fn reset_stack(&mut self) {
        self.stack_top = 0;
    }
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}
