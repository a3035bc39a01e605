//! Page lifecycle hooks for documentation viewers
//!
//! A viewer that swaps page content on navigation has to re-highlight the code
//! blocks that just became visible. The viewer owns a [`LifecycleHooks`] table
//! and fires [`LifecycleHooks::done_each`] after every navigation; this crate
//! only contributes a callback through [`install_rehighlight`].
//!
//! Hooks are registered under an id. Registering the same id twice is a no-op,
//! so a host that runs its plugin setup more than once still highlights each
//! page exactly once per navigation.

use crate::highlighter::Highlighter;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Id under which [`install_rehighlight`] registers its callback
pub const REHIGHLIGHT_HOOK: &str = "metta-highlight/rehighlight";

type Hook = Box<dyn FnMut()>;

/// Host-owned table of "content rendered" callbacks
#[derive(Default)]
pub struct LifecycleHooks {
    done_each: Vec<(String, Hook)>,
}

impl LifecycleHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `hook` under `id`
    ///
    /// Returns `false` without replacing anything when `id` is already taken.
    pub fn register(&mut self, id: impl Into<String>, hook: impl FnMut() + 'static) -> bool {
        let id = id.into();
        if self.is_registered(&id) {
            log::debug!("hook '{}' already registered", id);
            return false;
        }
        log::debug!("registering hook '{}'", id);
        self.done_each.push((id, Box::new(hook)));
        true
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.done_each.iter().any(|(existing, _)| existing == id)
    }

    pub fn len(&self) -> usize {
        self.done_each.len()
    }

    pub fn is_empty(&self) -> bool {
        self.done_each.is_empty()
    }

    /// Run every hook in registration order; called by the host after each
    /// navigation
    pub fn done_each(&mut self) {
        for (_, hook) in self.done_each.iter_mut() {
            hook();
        }
    }
}

impl fmt::Debug for LifecycleHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<_> = self.done_each.iter().map(|(id, _)| id.as_str()).collect();
        f.debug_struct("LifecycleHooks").field("done_each", &ids).finish()
    }
}

/// A code block on the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub language: String,
    pub source: String,
    /// Highlighted output, `None` until a highlighter has rendered it
    pub rendered: Option<String>,
}

impl CodeBlock {
    pub fn new(language: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            source: source.into(),
            rendered: None,
        }
    }
}

/// Whatever the host shows; it only needs to expose its code blocks
pub trait Page {
    fn visible_blocks(&mut self) -> &mut [CodeBlock];
}

impl Page for Vec<CodeBlock> {
    fn visible_blocks(&mut self) -> &mut [CodeBlock] {
        self.as_mut_slice()
    }
}

/// Render every block whose language is registered
///
/// Output is always computed from `source`, never from a previous rendering,
/// so running this repeatedly leaves the blocks unchanged. Blocks of unknown
/// languages keep whatever they had. Returns the number of blocks rendered.
pub fn highlight_all(highlighter: &Highlighter, blocks: &mut [CodeBlock]) -> usize {
    let mut rendered = 0;
    for block in blocks.iter_mut() {
        if !highlighter.languages().has(&block.language) {
            continue;
        }
        match highlighter.highlight(&block.language, &block.source) {
            Ok(output) => {
                block.rendered = Some(output);
                rendered += 1;
            }
            Err(e) => log::warn!("cannot highlight {} block: {}", block.language, e),
        }
    }
    log::debug!("highlighted {} of {} blocks", rendered, blocks.len());
    rendered
}

/// Re-highlight `page` after every navigation
///
/// Returns `false` when the hook was already installed.
pub fn install_rehighlight<P: Page + 'static>(
    hooks: &mut LifecycleHooks,
    highlighter: Rc<Highlighter>,
    page: Rc<RefCell<P>>,
) -> bool {
    hooks.register(REHIGHLIGHT_HOOK, move || match page.try_borrow_mut() {
        Ok(mut page) => {
            highlight_all(&highlighter, page.visible_blocks());
        }
        Err(e) => log::warn!("page is busy, skipping re-highlight: {}", e),
    })
}
