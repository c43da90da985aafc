//! lox-compiler - single-pass Pratt compiler.
//!
//! Parses tokens from `lox-lex` and emits bytecode directly into a
//! `lox_bytecode::Chunk` as it goes; there is no intermediate AST.
//! Precedence climbing is driven by an explicit `Precedence` ladder and a
//! `{prefix, infix, precedence}` rule table addressed by token type.

mod compiler;
mod error;
mod precedence;
mod rules;

pub use compiler::compile;
pub use error::CompileError;
pub use precedence::Precedence;

#[cfg(test)]
mod tests {
    use super::*;
    use lox_bytecode::Heap;

    fn compiles(source: &str) -> bool {
        let mut heap = Heap::new();
        compile(source, &mut heap).is_ok()
    }

    #[test]
    fn empty_program_compiles() {
        assert!(compiles(""));
    }

    #[test]
    fn expression_statement_compiles() {
        assert!(compiles("1 + 2 * 3;"));
    }

    #[test]
    fn print_statement_compiles() {
        assert!(compiles("print \"hi\";"));
    }

    #[test]
    fn var_declaration_with_initializer_compiles() {
        assert!(compiles("var x = 1 + 2;"));
    }

    #[test]
    fn var_declaration_without_initializer_compiles() {
        assert!(compiles("var x;"));
    }

    #[test]
    fn missing_expression_is_a_compile_error() {
        assert!(!compiles("print 1 +;"));
    }

    #[test]
    fn unterminated_string_is_a_compile_error() {
        assert!(!compiles("print \"hi;"));
    }

    #[test]
    fn unclosed_group_is_a_compile_error() {
        assert!(!compiles("print (1 + 2;"));
    }

    #[test]
    fn panic_mode_recovers_at_next_statement() {
        // The first statement is malformed; the second is fine. A single
        // compiler pass should still report (at least) the first error and
        // not crash trying to parse the rest.
        assert!(!compiles("print 1 +; print 2;"));
    }

    #[test]
    fn constant_pool_overflow_is_a_compile_error() {
        let mut source = String::new();
        for i in 0..257 {
            source.push_str(&format!("print {i};\n"));
        }
        // Every literal is a distinct constant; 257 distinct numbers
        // overflow the 256-entry pool.
        assert!(!compiles(&source));
    }

    #[test]
    fn chunk_ends_in_return() {
        let mut heap = Heap::new();
        let chunk = compile("print 1;", &mut heap).expect("compiles");
        assert_eq!(
            lox_bytecode::OpCode::from_u8(chunk.read(chunk.len() - 1)),
            Some(lox_bytecode::OpCode::Return)
        );
    }

    #[test]
    fn identical_string_literals_intern_to_one_object() {
        let mut heap = Heap::new();
        let chunk = compile("print \"same\"; print \"same\";", &mut heap).expect("compiles");
        // Two CONSTANT idx pairs were emitted for two string literals with
        // identical content; interning means they share one constant-pool
        // value even though `add_constant` was called twice.
        let mut obj_constants = Vec::new();
        let mut i = 0;
        while i < chunk.len() {
            if lox_bytecode::OpCode::from_u8(chunk.read(i)) == Some(lox_bytecode::OpCode::Constant) {
                obj_constants.push(chunk.get_constant(chunk.read(i + 1)).as_str().map(str::to_owned));
                i += 2;
            } else {
                i += 1;
            }
        }
        assert_eq!(obj_constants, vec![Some("same".to_string()), Some("same".to_string())]);
    }
}
