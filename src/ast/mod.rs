/// AST (Abstract Syntax Tree) module
/// Contains the expression tree built by the parser
///
/// Submodules:
/// - ast: Expression nodes and binary operators
pub mod ast;
