// Document assembly scenarios: script ordering, trimming, determinism.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use svelte_ast_print::ast::{Root, Script, ScriptContext};
use svelte_ast_print::{print, print_with};

fn instance_script(content: &str) -> Script {
    Script {
        context: ScriptContext::Instance,
        attributes: vec![],
        content: content.into(),
    }
}

fn module_script(content: &str) -> Script {
    Script {
        context: ScriptContext::Module,
        attributes: vec![text_attribute("context", "module")],
        content: content.into(),
    }
}

#[test]
fn instance_script_then_markup() {
    let root = Root {
        module: None,
        instance: Some(instance_script("let a;")),
        fragment: fragment(vec![element("main", vec![], vec![text("Hello,World")])]),
    };
    assert_eq!(
        print_with(&root, &compact()).unwrap(),
        "<script>let a;</script><main>Hello,World</main>"
    );
}

#[test]
fn module_script_precedes_instance_script() {
    let root = Root {
        module: Some(module_script("let b;")),
        instance: Some(instance_script("let a;")),
        fragment: fragment(vec![element("main", vec![], vec![text("Hello,World")])]),
    };
    assert_eq!(
        print_with(&root, &compact()).unwrap(),
        "<script context=\"module\">let b;</script><script>let a;</script><main>Hello,World</main>"
    );
}

#[test]
fn default_line_endings_separate_sections() {
    let root = Root {
        module: None,
        instance: Some(instance_script("let a;")),
        fragment: fragment(vec![text("markup")]),
    };
    let printed = print(&root).unwrap();
    assert_eq!(printed, "<script>let a;</script>\nmarkup");
}

#[test]
fn result_is_trimmed() {
    let root = Root {
        module: None,
        instance: None,
        fragment: fragment(vec![text("markup")]),
    };
    // With no scripts, the joining line endings are trimmed away.
    assert_eq!(print(&root).unwrap(), "markup");
}

#[test]
fn printing_is_deterministic_and_leaves_input_unchanged() {
    let root = Root {
        module: Some(module_script("let b;")),
        instance: Some(instance_script("let a;")),
        fragment: fragment(vec![element("main", vec![], vec![])]),
    };
    let before = root.clone();
    let first = print_with(&root, &compact()).unwrap();
    let second = print_with(&root, &compact()).unwrap();
    assert_eq!(first, second);
    assert_eq!(root, before);
}
