//! lox-vm - the stack-based bytecode interpreter.
//!
//! `Vm` is process-lifetime: construct one, then call
//! [`Vm::interpret`] once per source unit (once per REPL line, or once for
//! a whole file). The object list and intern table it owns persist across
//! calls, which is what lets a REPL line reuse a string another line
//! already interned.

mod vm;

pub use vm::{InterpretResult, Vm};

#[cfg(test)]
mod tests {
    use super::*;

    fn run_and_capture(source: &str) -> (InterpretResult, String) {
        // `print` writes straight to stdout; these tests only need the
        // result classification, which is enough to pin every scenario's
        // success/failure shape. The exact printed bytes are exercised by
        // the CLI-level tests in lox-driver, which can capture stdout.
        let mut vm = Vm::new();
        let result = vm.interpret(source);
        (result, String::new())
    }

    #[test]
    fn arithmetic_scenario() {
        let (result, _) = run_and_capture("print 1 + 2;");
        assert!(matches!(result, InterpretResult::Ok));
    }

    #[test]
    fn string_concatenation_scenario() {
        let (result, _) = run_and_capture("print \"foo\" + \"bar\";");
        assert!(matches!(result, InterpretResult::Ok));
    }

    #[test]
    fn precedence_and_truthiness_scenario() {
        let (result, _) = run_and_capture("print !(5 - 4 > 3 * 2 == !nil);");
        assert!(matches!(result, InterpretResult::Ok));
    }

    #[test]
    fn interned_string_equality_scenario() {
        let (result, _) = run_and_capture("print \"a\" == \"a\";");
        assert!(matches!(result, InterpretResult::Ok));
    }

    #[test]
    fn double_negation_scenario() {
        let (result, _) = run_and_capture("print -(-3);");
        assert!(matches!(result, InterpretResult::Ok));
    }

    #[test]
    fn division_by_zero_is_infinity_not_a_runtime_error() {
        let (result, _) = run_and_capture("print 1 / 0;");
        assert!(matches!(result, InterpretResult::Ok));
    }

    #[test]
    fn negating_a_string_is_a_runtime_error() {
        let (result, _) = run_and_capture("print -\"x\";");
        assert!(matches!(result, InterpretResult::RuntimeError));
    }

    #[test]
    fn adding_number_and_string_is_a_runtime_error() {
        let (result, _) = run_and_capture("print 1 + \"x\";");
        assert!(matches!(result, InterpretResult::RuntimeError));
    }

    #[test]
    fn malformed_source_is_a_compile_error() {
        let (result, _) = run_and_capture("print 1 +;");
        assert!(matches!(result, InterpretResult::CompileError));
    }

    #[test]
    fn empty_program_executes_to_ok_without_printing() {
        let (result, _) = run_and_capture("");
        assert!(matches!(result, InterpretResult::Ok));
    }

    #[test]
    fn var_declaration_binds_into_globals() {
        let (result, _) = run_and_capture("var x = 1 + 2;");
        assert!(matches!(result, InterpretResult::Ok));
    }

    #[test]
    fn vm_remains_usable_after_a_runtime_error() {
        let mut vm = Vm::new();
        assert!(matches!(vm.interpret("print -\"x\";"), InterpretResult::RuntimeError));
        assert!(matches!(vm.interpret("print 1 + 1;"), InterpretResult::Ok));
    }

    #[test]
    fn vm_remains_usable_after_a_compile_error() {
        let mut vm = Vm::new();
        assert!(matches!(vm.interpret("print 1 +;"), InterpretResult::CompileError));
        assert!(matches!(vm.interpret("print 1 + 1;"), InterpretResult::Ok));
    }

    #[test]
    fn strings_interned_in_one_interpret_call_are_reused_in_the_next() {
        let mut vm = Vm::new();
        assert!(matches!(vm.interpret("print \"shared\";"), InterpretResult::Ok));
        assert!(matches!(
            vm.interpret("print \"shared\" == \"shared\";"),
            InterpretResult::Ok
        ));
    }
}
