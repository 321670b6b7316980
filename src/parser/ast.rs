use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    VarDecl(VarDecl),
    Print(PrintStmt),
}

/// `name = value;` The initializer is always a literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VarDecl {
    pub name: String,
    pub init: NumberLiteral,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintStmt {
    pub expr: Expr,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Number(NumberLiteral),
    Ident(Identifier),
    Inc(IncrementCall),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberLiteral {
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

/// `inc(argument)`. Nested calls form a chain; `Clone`, `PartialEq`, `Debug`
/// and `Drop` walk it iteratively so any depth is handled without recursion.
pub struct IncrementCall {
    pub argument: Box<Expr>,
}

impl IncrementCall {
    /// The first operand that is not an `inc` call, and how many calls
    /// (this one included) wrap it.
    pub fn innermost(&self) -> (&Expr, usize) {
        let mut expr = self.argument.as_ref();
        let mut depth = 1;
        while let Expr::Inc(call) = expr {
            expr = call.argument.as_ref();
            depth += 1;
        }
        (expr, depth)
    }
}

impl Clone for IncrementCall {
    fn clone(&self) -> Self {
        let (operand, depth) = self.innermost();
        let mut argument = operand.clone();
        for _ in 1..depth {
            argument = Expr::inc(argument);
        }
        IncrementCall {
            argument: Box::new(argument),
        }
    }
}

impl PartialEq for IncrementCall {
    fn eq(&self, other: &Self) -> bool {
        self.innermost() == other.innermost()
    }
}

impl Eq for IncrementCall {}

impl fmt::Debug for IncrementCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (operand, depth) = self.innermost();
        f.debug_struct("IncrementCall")
            .field("depth", &depth)
            .field("operand", operand)
            .finish()
    }
}

impl Expr {
    pub fn number(value: i64) -> Self {
        Expr::Number(NumberLiteral { value })
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(Identifier { name: name.into() })
    }

    pub fn inc(argument: Expr) -> Self {
        Expr::Inc(IncrementCall {
            argument: Box::new(argument),
        })
    }
}

// Unlinks nested calls one level at a time so dropping a deep chain does not
// recurse.
impl Drop for IncrementCall {
    fn drop(&mut self) {
        let mut pending = std::mem::replace(self.argument.as_mut(), Expr::number(0));
        while let Expr::Inc(call) = &mut pending {
            let inner = std::mem::replace(call.argument.as_mut(), Expr::number(0));
            pending = inner;
        }
    }
}
