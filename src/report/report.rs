use std::collections::BTreeSet;

use serde_json::{json, Value};

use crate::{
    ast::ast::Expr,
    lexer::tokens::Token,
    parser::{
        parser::ParseOutput,
        trace::{Production, Step},
    },
};

/// Renders tokens as a VALUE / TYPE / POSITION table.
pub fn token_table(tokens: &[Token]) -> String {
    let value_width = tokens
        .iter()
        .map(|token| token.value.chars().count())
        .max()
        .unwrap_or(0)
        .max("VALUE".len());
    let kind_width = "UNKNOWN".len().max("TYPE".len());

    let mut table = format!(
        "{:<value_width$}  {:<kind_width$}  POSITION\n",
        "VALUE", "TYPE"
    );
    for token in tokens {
        table.push_str(&format!(
            "{:<value_width$}  {:<kind_width$}  {}\n",
            token.value,
            token.kind.to_string(),
            token.position
        ));
    }

    table
}

/// Draws the tree top-down with box-drawing connectors.
pub fn render_tree(tree: &Expr) -> String {
    let mut result = format!("{}\n", tree.label());
    render_children(tree, "", &mut result);
    result
}

fn render_children(node: &Expr, prefix: &str, result: &mut String) {
    let children = node.children();
    let last = children.len().saturating_sub(1);

    for (i, child) in children.into_iter().enumerate() {
        let (connector, indent) = if i == last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };

        result.push_str(prefix);
        result.push_str(connector);
        result.push_str(child.label());
        result.push('\n');

        render_children(child, &format!("{}{}", prefix, indent), result);
    }
}

/// Plain-English reading of one step string.
///
/// Matching is on the fixed step prefixes; unrecognised steps come back
/// unchanged.
pub fn narrate_step(step: &str) -> String {
    let sentence = if step.starts_with("expression -> term") {
        "Breaking the expression down into a term."
    } else if step.starts_with("expression -> expression + term") {
        "Found '+', adding another term."
    } else if step.starts_with("expression -> expression - term") {
        "Found '-', subtracting another term."
    } else if step.starts_with("term -> factor") {
        "A term consists of a single factor."
    } else if step.starts_with("term -> term * factor") {
        "Multiplication detected, handling it next."
    } else if step.starts_with("term -> term / factor") {
        "Division detected, handling it next."
    } else if step.starts_with("factor -> NUMBER") {
        "Encountered a number."
    } else if step.starts_with("factor -> LPAREN expression RPAREN") {
        "Processing parentheses first."
    } else {
        return step.to_string();
    };

    sentence.to_string()
}

pub fn render_steps(steps: &[Step], narrate: bool) -> String {
    if steps.is_empty() {
        return String::from("No parsing steps generated.\n");
    }

    steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let text = if narrate {
                narrate_step(&step.to_string())
            } else {
                step.to_string()
            };
            format!("Step {}: {}\n", i + 1, text)
        })
        .collect()
}

pub fn render_rules(rules: &BTreeSet<Production>) -> String {
    if rules.is_empty() {
        return String::from("No rules applied.\n");
    }

    rules.iter().map(|rule| format!("• {}\n", rule)).collect()
}

/// Machine-readable report of one run.
pub fn to_json(expression: &str, tokens: &[Token], output: &ParseOutput) -> Value {
    let narration: Vec<String> = output
        .steps
        .iter()
        .map(|step| narrate_step(&step.to_string()))
        .collect();

    json!({
        "expression": expression,
        "tokens": tokens,
        "tree": output.tree,
        "steps": output.steps,
        "narration": narration,
        "rules": output.rules,
    })
}
