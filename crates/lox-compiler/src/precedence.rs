//! The precedence ladder that drives `parse_precedence`.

/// Ordered low to high; `#[derive(PartialOrd)]` on a fieldless enum compares
/// by declaration order, which is exactly the climbing order the Pratt
/// parser needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    None,
    Assignment,
    Or,
    And,
    Equality,
    Comparison,
    Term,
    Factor,
    Unary,
    Call,
    Primary,
}

impl Precedence {
    /// One rung higher, used when parsing a binary operator's right operand
    /// so that `a op b op c` associates left: the right side stops at the
    /// first operator no stronger than `op` itself.
    pub fn next(self) -> Precedence {
        use Precedence::*;
        match self {
            None => Assignment,
            Assignment => Or,
            Or => And,
            And => Equality,
            Equality => Comparison,
            Comparison => Term,
            Term => Factor,
            Factor => Unary,
            Unary => Call,
            Call => Primary,
            Primary => Primary,
        }
    }
}
