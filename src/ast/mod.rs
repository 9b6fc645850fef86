/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` capability, the `Stmt`/`Expr` sum types and `Program`
/// - expressions: Definitions for the expression node structs
/// - statements: Definitions for the statement node structs
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
