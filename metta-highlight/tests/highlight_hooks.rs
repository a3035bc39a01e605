//! A viewer that swaps pages on navigation and re-highlights through the hook

use metta_highlight::hooks::{install_rehighlight, CodeBlock, LifecycleHooks, Page};
use metta_highlight::Highlighter;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Viewer {
    pages: Vec<Vec<CodeBlock>>,
    current: usize,
}

impl Viewer {
    fn navigate(&mut self, page: usize) {
        self.current = page;
    }
}

impl Page for Viewer {
    fn visible_blocks(&mut self) -> &mut [CodeBlock] {
        &mut self.pages[self.current]
    }
}

fn viewer() -> Viewer {
    Viewer {
        pages: vec![
            vec![CodeBlock::new("metta", "(= (inc $n) (S $n))")],
            vec![
                CodeBlock::new("MeTTa", "!(inc Z)"),
                CodeBlock::new("text", "plain prose"),
            ],
        ],
        current: 0,
    }
}

#[test]
fn only_visited_pages_are_highlighted() {
    let viewer = Rc::new(RefCell::new(viewer()));
    let mut hooks = LifecycleHooks::new();
    install_rehighlight(&mut hooks, Rc::new(Highlighter::default()), Rc::clone(&viewer));

    hooks.done_each();
    {
        let v = viewer.borrow();
        assert!(v.pages[0][0].rendered.is_some());
        assert!(v.pages[1][0].rendered.is_none());
    }

    viewer.borrow_mut().navigate(1);
    hooks.done_each();

    let v = viewer.borrow();
    let rendered = v.pages[1][0].rendered.as_deref().unwrap();
    assert!(rendered.starts_with("<span class=\"token execute metta-execute\">!</span>"));
    assert!(rendered.contains("<span class=\"token constructor metta-keyword\">Z</span>"));
    assert!(v.pages[1][1].rendered.is_none());
}

#[test]
fn repeated_setup_and_navigation_is_idempotent() {
    let once = Rc::new(RefCell::new(viewer()));
    let twice = Rc::new(RefCell::new(viewer()));
    let highlighter = Rc::new(Highlighter::default());

    let mut single = LifecycleHooks::new();
    install_rehighlight(&mut single, Rc::clone(&highlighter), Rc::clone(&once));
    single.done_each();

    let mut double = LifecycleHooks::new();
    install_rehighlight(&mut double, Rc::clone(&highlighter), Rc::clone(&twice));
    install_rehighlight(&mut double, Rc::clone(&highlighter), Rc::clone(&twice));
    double.done_each();
    double.done_each();

    assert_eq!(once.borrow().pages, twice.borrow().pages);
}
