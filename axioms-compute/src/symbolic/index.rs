//! Locating the occurrences of variables in an expression tree.

use axioms_parser::parser::ast::{Direction, Node, Path};
use std::collections::BTreeMap;

/// Maps the name of each variable in an expression to the paths of its occurrences, in the order
/// they appear in the expression (from left to right).
pub type VariableIndex = BTreeMap<String, Vec<Path>>;

/// Records the path of every symbol below `node`, where `path` leads to `node`.
fn visit(node: &Node, path: &mut Path, index: &mut VariableIndex) {
    match node {
        Node::Symbol(name) => index.entry(name.clone()).or_default().push(path.clone()),
        // arguments of calls are unparsed text
        Node::Literal(_) | Node::Call(..) => (),
        Node::Unary(_, operand) => {
            path.push(Direction::Right);
            visit(operand, path, index);
            path.pop();
        },
        Node::Binary(_, lhs, rhs) => {
            path.push(Direction::Left);
            visit(lhs, path, index);
            path.pop();

            path.push(Direction::Right);
            visit(rhs, path, index);
            path.pop();
        },
    }
}

/// Builds the index of every variable occurrence in the given tree.
pub fn index(node: &Node) -> VariableIndex {
    let mut index = VariableIndex::new();
    visit(node, &mut Vec::new(), &mut index);
    index
}
