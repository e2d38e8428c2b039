/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Program` root and the `Stmt`/`Expr` node enums
/// - expressions: Definitions for the expression node types
/// - statements: Definitions for the statement node types
/// - printer: S-expression rendering of the tree
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
