//! Formula tokenization and evaluation.
//!
//! A formula is tokenized left to right, converted from infix to postfix
//! with the shunting-yard algorithm, then evaluated with an operand stack.
//! Reference tokens resolve through the owning [`Sheet`], which may recurse
//! into other formula cells; a visited-address set threaded through the
//! evaluation turns reference cycles into errors instead of unbounded
//! recursion.

use std::collections::HashSet;

use super::{Cell, CellRef, EngineError, Sheet, Stack};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// Group tokens act as precedence 0 barriers, so operators start at 1.
    fn precedence(self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div => 2,
        }
    }

    fn apply(self, x: i64, y: i64) -> Result<i64, EngineError> {
        let overflow = || EngineError::Eval("numeric overflow".to_string());
        match self {
            BinOp::Add => x.checked_add(y).ok_or_else(overflow),
            BinOp::Sub => x.checked_sub(y).ok_or_else(overflow),
            BinOp::Mul => x.checked_mul(y).ok_or_else(overflow),
            BinOp::Div => {
                if y == 0 {
                    return Err(EngineError::DivisionByZero);
                }
                x.checked_div(y).ok_or_else(overflow)
            }
        }
    }

    fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum GroupKind {
    Paren,
    Bracket,
    Brace,
}

impl GroupKind {
    fn open_symbol(self) -> char {
        match self {
            GroupKind::Paren => '(',
            GroupKind::Bracket => '[',
            GroupKind::Brace => '{',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Literal(i64),
    Reference(String),
    Op(BinOp),
    Open(GroupKind),
    Close(GroupKind),
}

/// Tokenize a formula. References are a run of uppercase or lowercase
/// letters followed by a run of digits (variable length, so rows >= 10 and
/// multi-digit literals work); bare digit runs are integer literals.
fn tokenize(expr: &str) -> Result<Vec<Token>, EngineError> {
    let mut tokens = Vec::new();
    let mut chars = expr.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            c if c.is_ascii_alphabetic() => {
                let mut name = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_ascii_alphabetic() {
                        name.push(c.to_ascii_uppercase());
                        chars.next();
                    } else {
                        break;
                    }
                }
                let mut saw_digit = false;
                while let Some(&c) = chars.peek() {
                    if c.is_ascii_digit() {
                        name.push(c);
                        saw_digit = true;
                        chars.next();
                    } else {
                        break;
                    }
                }
                if !saw_digit {
                    return Err(EngineError::Parse(format!(
                        "incomplete cell reference '{}'",
                        name
                    )));
                }
                tokens.push(Token::Reference(name));
            }
            c if c.is_ascii_digit() => {
                let mut digits = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_ascii_digit() {
                        digits.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value = digits
                    .parse::<i64>()
                    .map_err(|_| EngineError::Parse(format!("literal '{}' too large", digits)))?;
                tokens.push(Token::Literal(value));
            }
            '+' => {
                tokens.push(Token::Op(BinOp::Add));
                chars.next();
            }
            '-' => {
                tokens.push(Token::Op(BinOp::Sub));
                chars.next();
            }
            '*' => {
                tokens.push(Token::Op(BinOp::Mul));
                chars.next();
            }
            '/' => {
                tokens.push(Token::Op(BinOp::Div));
                chars.next();
            }
            '(' => {
                tokens.push(Token::Open(GroupKind::Paren));
                chars.next();
            }
            '[' => {
                tokens.push(Token::Open(GroupKind::Bracket));
                chars.next();
            }
            '{' => {
                tokens.push(Token::Open(GroupKind::Brace));
                chars.next();
            }
            ')' => {
                tokens.push(Token::Close(GroupKind::Paren));
                chars.next();
            }
            ']' => {
                tokens.push(Token::Close(GroupKind::Bracket));
                chars.next();
            }
            '}' => {
                tokens.push(Token::Close(GroupKind::Brace));
                chars.next();
            }
            other => {
                return Err(EngineError::Parse(format!(
                    "unexpected character '{}'",
                    other
                )));
            }
        }
    }

    Ok(tokens)
}

/// Convert an infix token sequence to postfix (shunting-yard).
///
/// Operators pop while the stack top has precedence >= their own, which
/// makes same-precedence chains left-associative. Close tokens must match
/// the kind of the open they close.
fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, EngineError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut pending: Stack<Token> = Stack::new();

    for token in tokens {
        match token {
            Token::Literal(_) | Token::Reference(_) => output.push(token),
            Token::Open(_) => pending.push(token),
            Token::Close(kind) => loop {
                match pending.pop() {
                    Some(Token::Open(open_kind)) => {
                        if open_kind != kind {
                            return Err(EngineError::Parse(format!(
                                "mismatched group: '{}' closed by '{}'",
                                open_kind.open_symbol(),
                                close_symbol(kind)
                            )));
                        }
                        break;
                    }
                    Some(op) => output.push(op),
                    None => {
                        return Err(EngineError::Parse(format!(
                            "unmatched '{}'",
                            close_symbol(kind)
                        )));
                    }
                }
            },
            Token::Op(op) => {
                loop {
                    let should_pop = matches!(
                        pending.peek(),
                        Some(Token::Op(top)) if top.precedence() >= op.precedence()
                    );
                    if !should_pop {
                        break;
                    }
                    if let Some(popped) = pending.pop() {
                        output.push(popped);
                    }
                }
                pending.push(Token::Op(op));
            }
        }
    }

    while let Some(token) = pending.pop() {
        match token {
            Token::Open(kind) => {
                return Err(EngineError::Parse(format!(
                    "unclosed '{}'",
                    kind.open_symbol()
                )));
            }
            op => output.push(op),
        }
    }

    Ok(output)
}

fn close_symbol(kind: GroupKind) -> char {
    match kind {
        GroupKind::Paren => ')',
        GroupKind::Bracket => ']',
        GroupKind::Brace => '}',
    }
}

/// Evaluate a formula against a sheet.
///
/// `visited` holds the addresses of formula cells currently being evaluated
/// further up the chain; resolving a reference into one of them is a
/// circular reference. Callers evaluating a stored formula cell must seed
/// it with that cell's own address.
pub fn evaluate(
    expr: &str,
    sheet: &Sheet,
    visited: &mut HashSet<CellRef>,
) -> Result<i64, EngineError> {
    let postfix = to_postfix(tokenize(expr)?)?;
    let mut operands: Stack<i64> = Stack::new();

    for token in postfix {
        match token {
            Token::Literal(n) => operands.push(n),
            Token::Reference(name) => {
                operands.push(resolve_reference(&name, sheet, visited)?);
            }
            Token::Op(op) => {
                // y was pushed after x; order matters for - and /.
                let y = operands.pop().ok_or_else(|| missing_operand(op))?;
                let x = operands.pop().ok_or_else(|| missing_operand(op))?;
                operands.push(op.apply(x, y)?);
            }
            Token::Open(_) | Token::Close(_) => unreachable!("groups are consumed by to_postfix"),
        }
    }

    let result = operands
        .pop()
        .ok_or_else(|| EngineError::Eval("empty expression".to_string()))?;
    if !operands.is_empty() {
        return Err(EngineError::Eval("too many operands".to_string()));
    }
    Ok(result)
}

fn missing_operand(op: BinOp) -> EngineError {
    EngineError::Eval(format!("missing operand for '{}'", op.symbol()))
}

/// Resolve a reference token to a numeric value through the sheet.
///
/// An unparseable or out-of-bounds reference is a defined default (0), not
/// an error. Empty slots are 0. A formula cell already on the `visited`
/// path is a circular reference.
fn resolve_reference(
    name: &str,
    sheet: &Sheet,
    visited: &mut HashSet<CellRef>,
) -> Result<i64, EngineError> {
    let Some(at) = CellRef::from_str(name) else {
        return Ok(0);
    };
    let Some(cell) = sheet.get(at.row, at.col) else {
        return Ok(0);
    };
    match cell {
        Cell::Formula(inner) => {
            if !visited.insert(at.clone()) {
                return Err(EngineError::CircularReference(at));
            }
            let value = evaluate(inner, sheet, visited);
            visited.remove(&at);
            value
        }
        other => Ok(other.scalar_numeric()),
    }
}
