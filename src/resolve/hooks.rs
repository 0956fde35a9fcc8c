//! Extension points for the resolution pipeline.
//!
//! Each extension point is a [`HookChain`]: an ordered list of optional
//! callbacks, each scoped to a layout (base + name), a layout base, or
//! everything. Applying a chain threads the current value through every
//! matching slot, most specific tier first and in registration order within
//! a tier. An empty chain returns the input unchanged.

use std::fmt;

/// Which layouts a hook slot applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookScope {
    /// One layout name within one layout base.
    Layout { base: String, name: String },
    /// Every layout of one base.
    Base(String),
    /// Every layout.
    General,
}

impl HookScope {
    /// Scope for a single layout.
    pub fn layout(base: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Layout {
            base: base.into(),
            name: name.into(),
        }
    }

    /// Scope for a layout base.
    pub fn base(base: impl Into<String>) -> Self {
        Self::Base(base.into())
    }

    fn tier(&self) -> u8 {
        match self {
            Self::Layout { .. } => 0,
            Self::Base(_) => 1,
            Self::General => 2,
        }
    }

    fn matches(&self, ctx: &HookContext<'_>) -> bool {
        match self {
            Self::Layout { base, name } => base == ctx.layout_base && name == ctx.layout_name,
            Self::Base(base) => base == ctx.layout_base,
            Self::General => true,
        }
    }
}

/// The layout a hook is being applied for.
#[derive(Debug, Clone, Copy)]
pub struct HookContext<'a> {
    pub layout_name: &'a str,
    pub layout_base: &'a str,
}

impl<'a> HookContext<'a> {
    pub fn new(layout_name: &'a str, layout_base: &'a str) -> Self {
        Self {
            layout_name,
            layout_base,
        }
    }
}

/// A hook callback: receives the current value and returns its replacement.
pub type HookFn<T> = Box<dyn Fn(T, &HookContext<'_>) -> T + Send + Sync>;

struct HookSlot<T> {
    scope: HookScope,
    hook: HookFn<T>,
}

/// Ordered callback slots for one extension point.
pub struct HookChain<T> {
    slots: Vec<HookSlot<T>>,
}

impl<T> Default for HookChain<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> fmt::Debug for HookChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.slots.iter().map(|slot| &slot.scope))
            .finish()
    }
}

impl<T> HookChain<T> {
    /// Add a callback slot.
    pub fn add<F>(&mut self, scope: HookScope, hook: F) -> &mut Self
    where
        F: Fn(T, &HookContext<'_>) -> T + Send + Sync + 'static,
    {
        self.slots.push(HookSlot {
            scope,
            hook: Box::new(hook),
        });
        self
    }

    /// Run `value` through every slot matching `ctx`.
    pub fn apply(&self, value: T, ctx: &HookContext<'_>) -> T {
        let mut value = value;
        for tier in 0..=2 {
            for slot in &self.slots {
                if slot.scope.tier() == tier && slot.scope.matches(ctx) {
                    value = (slot.hook)(value, ctx);
                }
            }
        }
        value
    }

    /// Number of registered slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T: Clone + Send + Sync + 'static> HookChain<T> {
    /// Add a slot that replaces the value with a constant.
    pub fn set(&mut self, scope: HookScope, value: T) -> &mut Self {
        self.add(scope, move |_, _| value.clone())
    }
}

/// Every extension point of the resolution pipeline.
///
/// | Field | Value | Default | Intended scopes |
/// |---|---|---|---|
/// | `layout_name` | effective layout name | identity | base, general |
/// | `include_subdir` | emit `{base}/{name}` candidate | `false` | base, general |
/// | `candidate_names` | candidate filename list | identity | layout, base, general |
/// | `exclude_root_fallback` | drop bare `{base}` candidate | `true` | base, general |
/// | `template_paths` | final candidate path list | identity | layout, base, general |
///
/// `layout_name` is applied before the name is known, so layout-scoped slots
/// on it match against the requested (pre-rewrite) name.
#[derive(Debug, Default)]
pub struct Hooks {
    pub layout_name: HookChain<String>,
    pub include_subdir: HookChain<bool>,
    pub candidate_names: HookChain<Vec<String>>,
    pub exclude_root_fallback: HookChain<bool>,
    pub template_paths: HookChain<Vec<String>>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chain_is_identity() {
        let chain: HookChain<String> = HookChain::default();
        let ctx = HookContext::new("hero", "widget");
        assert_eq!(chain.apply("hero".to_string(), &ctx), "hero");
        assert!(chain.is_empty());
    }

    #[test]
    fn specific_tiers_run_before_general() {
        let mut chain: HookChain<Vec<String>> = HookChain::default();
        chain.add(HookScope::General, |mut v, _| {
            v.push("general".into());
            v
        });
        chain.add(HookScope::base("widget"), |mut v, _| {
            v.push("base".into());
            v
        });
        chain.add(HookScope::layout("widget", "hero"), |mut v, _| {
            v.push("layout".into());
            v
        });

        let ctx = HookContext::new("hero", "widget");
        assert_eq!(
            chain.apply(Vec::new(), &ctx),
            vec!["layout", "base", "general"]
        );
    }

    #[test]
    fn registration_order_kept_within_tier() {
        let mut chain: HookChain<String> = HookChain::default();
        chain.add(HookScope::General, |v, _| format!("{v}-a"));
        chain.add(HookScope::General, |v, _| format!("{v}-b"));

        let ctx = HookContext::new("hero", "widget");
        assert_eq!(chain.apply("x".into(), &ctx), "x-a-b");
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn non_matching_scopes_are_skipped() {
        let mut chain: HookChain<bool> = HookChain::default();
        chain.set(HookScope::base("card"), true);
        chain.set(HookScope::layout("widget", "other"), true);

        let ctx = HookContext::new("hero", "widget");
        assert!(!chain.apply(false, &ctx));
    }

    #[test]
    fn hooks_see_context() {
        let mut chain: HookChain<String> = HookChain::default();
        chain.add(HookScope::General, |v, ctx| format!("{}:{v}", ctx.layout_base));

        let ctx = HookContext::new("hero", "widget");
        assert_eq!(chain.apply("hero".into(), &ctx), "widget:hero");
    }

    #[test]
    fn debug_lists_scopes() {
        let mut chain: HookChain<bool> = HookChain::default();
        chain.set(HookScope::base("widget"), true);
        assert!(format!("{:?}", chain).contains("widget"));
    }
}
