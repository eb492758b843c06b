//! Operator matching helpers.

use recast_ir::{AssertionKind, AssignOp, BinaryOp, TokenKind, UnaryOp, UpdateOp};

use crate::Parser;

impl Parser<'_> {
    pub(super) fn match_binary_op(&self) -> Option<BinaryOp> {
        let op = match self.cursor.current_kind() {
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Percent => BinaryOp::Mod,
            TokenKind::StarStar => BinaryOp::Pow,
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::LtEq => BinaryOp::LtEq,
            TokenKind::Gt => BinaryOp::Gt,
            TokenKind::GtEq => BinaryOp::GtEq,
            TokenKind::EqEq => BinaryOp::Eq,
            TokenKind::NotEq => BinaryOp::NotEq,
            TokenKind::EqEqEq => BinaryOp::StrictEq,
            TokenKind::NotEqEq => BinaryOp::StrictNotEq,
            TokenKind::In => BinaryOp::In,
            TokenKind::InstanceOf => BinaryOp::InstanceOf,
            TokenKind::Amp => BinaryOp::BitAnd,
            TokenKind::Pipe => BinaryOp::BitOr,
            TokenKind::Caret => BinaryOp::BitXor,
            TokenKind::Shl => BinaryOp::Shl,
            TokenKind::Shr => BinaryOp::Shr,
            TokenKind::UShr => BinaryOp::UShr,
            TokenKind::AmpAmp => BinaryOp::And,
            TokenKind::PipePipe => BinaryOp::Or,
            TokenKind::QuestionQuestion => BinaryOp::Coalesce,
            _ => return None,
        };
        Some(op)
    }

    pub(super) fn match_assign_op(&self) -> Option<AssignOp> {
        let op = match self.cursor.current_kind() {
            TokenKind::Eq => return Some(AssignOp::Assign),
            TokenKind::PlusEq => BinaryOp::Add,
            TokenKind::MinusEq => BinaryOp::Sub,
            TokenKind::StarEq => BinaryOp::Mul,
            TokenKind::StarStarEq => BinaryOp::Pow,
            TokenKind::SlashEq => BinaryOp::Div,
            TokenKind::PercentEq => BinaryOp::Mod,
            TokenKind::AmpEq => BinaryOp::BitAnd,
            TokenKind::PipeEq => BinaryOp::BitOr,
            TokenKind::CaretEq => BinaryOp::BitXor,
            TokenKind::ShlEq => BinaryOp::Shl,
            TokenKind::ShrEq => BinaryOp::Shr,
            TokenKind::UShrEq => BinaryOp::UShr,
            TokenKind::AmpAmpEq => BinaryOp::And,
            TokenKind::PipePipeEq => BinaryOp::Or,
            TokenKind::QuestionQuestionEq => BinaryOp::Coalesce,
            _ => return None,
        };
        Some(AssignOp::Compound(op))
    }

    pub(super) fn match_update_op(&self) -> Option<UpdateOp> {
        match self.cursor.current_kind() {
            TokenKind::PlusPlus => Some(UpdateOp::Increment),
            TokenKind::MinusMinus => Some(UpdateOp::Decrement),
            _ => None,
        }
    }

    /// `as` / `satisfies` after an operand.
    pub(super) fn match_assertion_keyword(&self) -> Option<AssertionKind> {
        if self.cursor.check_name(self.names.as_kw) {
            Some(AssertionKind::As)
        } else if self.cursor.check_name(self.names.satisfies) {
            Some(AssertionKind::Satisfies)
        } else {
            None
        }
    }
}

/// Prefix operators spelled with a dedicated token.
pub(super) fn unary_op(kind: TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Plus => Some(UnaryOp::Plus),
        TokenKind::Minus => Some(UnaryOp::Neg),
        TokenKind::Bang => Some(UnaryOp::Not),
        TokenKind::Tilde => Some(UnaryOp::BitNot),
        TokenKind::TypeOf => Some(UnaryOp::TypeOf),
        TokenKind::Void => Some(UnaryOp::Void),
        TokenKind::Delete => Some(UnaryOp::Delete),
        _ => None,
    }
}

/// Tokens that can begin an operand, used to tell `await x` from an
/// identifier named `await`.
pub(super) fn starts_operand(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Number(_)
            | TokenKind::Str(_)
            | TokenKind::Template(_)
            | TokenKind::Regex(_)
            | TokenKind::Ident(_)
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null
            | TokenKind::This
            | TokenKind::Super
            | TokenKind::Function
            | TokenKind::New
            | TokenKind::Import
            | TokenKind::LParen
            | TokenKind::LBracket
            | TokenKind::LBrace
            | TokenKind::Bang
            | TokenKind::Tilde
            | TokenKind::TypeOf
            | TokenKind::Void
            | TokenKind::Delete
            | TokenKind::PlusPlus
            | TokenKind::MinusMinus
    )
}
