//! Unit tests for report rendering.

use std::collections::BTreeSet;

use super::report::{narrate_step, render_rules, render_steps, render_tree, to_json, token_table};
use crate::{
    lexer::lexer::tokenize,
    parser::{parser::parse, trace::Step},
};

#[test]
fn test_token_table() {
    let table = token_table(&tokenize("12 + 3"));
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("VALUE"));
    assert!(lines[0].ends_with("POSITION"));
    assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), vec!["12", "NUMBER", "1"]);
    assert_eq!(lines[2].split_whitespace().collect::<Vec<_>>(), vec!["+", "PLUS", "4"]);
    assert_eq!(lines[3].split_whitespace().collect::<Vec<_>>(), vec!["3", "NUMBER", "6"]);
}

#[test]
fn test_render_tree() {
    let output = parse(&tokenize("(2+3)*4")).unwrap();

    assert_eq!(
        render_tree(&output.tree),
        "*\n├── +\n│   ├── 2\n│   └── 3\n└── 4\n"
    );
}

#[test]
fn test_render_single_leaf() {
    let output = parse(&tokenize("5")).unwrap();
    assert_eq!(render_tree(&output.tree), "5\n");
}

#[test]
fn test_narrate_step() {
    assert_eq!(
        narrate_step("expression -> term"),
        "Breaking the expression down into a term."
    );
    assert_eq!(
        narrate_step("expression -> expression - term"),
        "Found '-', subtracting another term."
    );
    assert_eq!(
        narrate_step("term -> term * factor"),
        "Multiplication detected, handling it next."
    );
    assert_eq!(narrate_step("factor -> NUMBER (42)"), "Encountered a number.");
    assert_eq!(
        narrate_step("factor -> LPAREN expression RPAREN"),
        "Processing parentheses first."
    );
    assert_eq!(narrate_step("something else"), "something else");
}

#[test]
fn test_every_step_is_narrated() {
    let output = parse(&tokenize("(1+2)-3*4/5")).unwrap();

    for step in output.step_strings() {
        assert_ne!(narrate_step(&step), step);
    }
}

#[test]
fn test_render_steps() {
    let steps = vec![Step::ExpressionToTerm, Step::TermToFactor];

    assert_eq!(
        render_steps(&steps, false),
        "Step 1: expression -> term\nStep 2: term -> factor\n"
    );
    assert_eq!(
        render_steps(&steps, true),
        "Step 1: Breaking the expression down into a term.\nStep 2: A term consists of a single factor.\n"
    );
    assert_eq!(render_steps(&[], false), "No parsing steps generated.\n");
}

#[test]
fn test_render_rules() {
    let output = parse(&tokenize("1*2")).unwrap();
    let rendered = render_rules(&output.rules);

    assert_eq!(rendered.lines().count(), 3);
    assert!(rendered.starts_with("• expression → term"));
    assert_eq!(render_rules(&BTreeSet::new()), "No rules applied.\n");
}

#[test]
fn test_to_json() {
    let tokens = tokenize("1+2");
    let output = parse(&tokens).unwrap();
    let json = to_json("1+2", &tokens, &output);

    assert_eq!(json["expression"], "1+2");
    assert_eq!(json["tokens"][1]["type"], "PLUS");
    assert_eq!(json["tokens"][2]["position"], 3);
    assert_eq!(json["tree"]["name"], "+");
    assert_eq!(json["tree"]["children"][0]["name"], "1");
    assert_eq!(json["steps"][3], "expression -> expression + term");
    assert_eq!(json["narration"][3], "Found '+', adding another term.");
    assert_eq!(json["rules"].as_array().unwrap().len(), 3);
}
