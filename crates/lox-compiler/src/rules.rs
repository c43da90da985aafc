//! The Pratt table: one row per token type, each naming its prefix parser,
//! infix parser, and infix precedence.

use lox_lex::TokenType;

use crate::compiler::Compiler;
use crate::precedence::Precedence;

pub type ParseFn<'src, 'hp> = fn(&mut Compiler<'src, 'hp>);

pub struct ParseRule<'src, 'hp> {
    pub prefix: Option<ParseFn<'src, 'hp>>,
    pub infix: Option<ParseFn<'src, 'hp>>,
    pub precedence: Precedence,
}

const fn rule<'src, 'hp>(
    prefix: Option<ParseFn<'src, 'hp>>,
    infix: Option<ParseFn<'src, 'hp>>,
    precedence: Precedence,
) -> ParseRule<'src, 'hp> {
    ParseRule {
        prefix,
        infix,
        precedence,
    }
}

/// Looks up the row for `kind`. Tokens with no entry below get
/// `{none, none, NONE}`, matching every token the implemented grammar
/// never uses as an operator (keywords other than the literals, `;`,
/// `,`, braces, `EOF`, ...).
pub fn get_rule<'src, 'hp>(kind: TokenType) -> ParseRule<'src, 'hp> {
    use Precedence::*;
    use TokenType::*;
    match kind {
        LeftParen => rule(Some(Compiler::grouping), None, None),
        Minus => rule(Some(Compiler::unary), Some(Compiler::binary), Term),
        Plus => rule(None, Some(Compiler::binary), Term),
        Slash => rule(None, Some(Compiler::binary), Factor),
        Star => rule(None, Some(Compiler::binary), Factor),
        Bang => rule(Some(Compiler::unary), None, None),
        BangEqual => rule(None, Some(Compiler::binary), Equality),
        EqualEqual => rule(None, Some(Compiler::binary), Equality),
        Greater => rule(None, Some(Compiler::binary), Comparison),
        GreaterEqual => rule(None, Some(Compiler::binary), Comparison),
        Less => rule(None, Some(Compiler::binary), Comparison),
        LessEqual => rule(None, Some(Compiler::binary), Comparison),
        String => rule(Some(Compiler::string), None, None),
        Number => rule(Some(Compiler::number), None, None),
        False | Nil | True => rule(Some(Compiler::literal), None, None),
        _ => rule(None, None, None),
    }
}
