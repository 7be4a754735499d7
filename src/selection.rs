//! Renderer selection policies.
//!
//! Shared figure behaviors (tool targeting, legend assembly) do not operate
//! on the renderer collection directly; they hold a [`RendererSelection`]
//! describing *which* renderers participate, and resolve it against the
//! figure's current collection with [`compute_renderers`] at the moment of
//! use. This keeps "the caller wants nothing" distinct from "the caller
//! wants whatever is attached right now", which matters because renderers
//! are added after figure construction.

use crate::renderer::RendererId;

/// Which renderers participate in a shared figure behavior.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RendererSelection {
    /// No renderers participate.
    None,
    /// Every renderer currently attached to the figure participates.
    #[default]
    Auto,
    /// An explicit ordered list chosen by the caller.
    ///
    /// The list is taken verbatim; it is not validated against the
    /// figure's collection, so it may name renderers that are not (or not
    /// yet) attached. Consumers that must dereference the ids decide how
    /// to treat dangling entries.
    Explicit(Vec<RendererId>),
}

impl RendererSelection {
    /// Build an explicit selection from renderer ids.
    pub fn explicit(ids: impl IntoIterator<Item = RendererId>) -> Self {
        RendererSelection::Explicit(ids.into_iter().collect())
    }

    /// True when the selection can never produce any renderer, regardless
    /// of the figure's collection.
    pub fn is_empty(&self) -> bool {
        match self {
            RendererSelection::None => true,
            RendererSelection::Auto => false,
            RendererSelection::Explicit(ids) => ids.is_empty(),
        }
    }
}

/// Resolve a selection against the figure's current renderer collection.
///
/// The result preserves the ordering of whichever list it came from and
/// never invents, drops, or reorders entries. Every input shape is valid;
/// an empty result is the representation of "no renderers", not a failure.
pub fn compute_renderers(
    selection: &RendererSelection,
    all_renderers: &[RendererId],
) -> Vec<RendererId> {
    match selection {
        RendererSelection::None => Vec::new(),
        RendererSelection::Auto => all_renderers.to_vec(),
        // Explicit ids pass through verbatim, including an empty list.
        RendererSelection::Explicit(ids) => ids.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<RendererId> {
        raw.iter().map(|&r| RendererId::new(r)).collect()
    }

    #[test]
    fn test_none_is_empty_regardless_of_collection() {
        assert!(compute_renderers(&RendererSelection::None, &[]).is_empty());
        assert!(compute_renderers(&RendererSelection::None, &ids(&[1, 2, 3])).is_empty());
    }

    #[test]
    fn test_explicit_empty_is_empty_regardless_of_collection() {
        let empty = RendererSelection::explicit([]);
        assert!(compute_renderers(&empty, &[]).is_empty());
        assert!(compute_renderers(&empty, &ids(&[1, 2, 3])).is_empty());
    }

    #[test]
    fn test_auto_returns_collection_verbatim() {
        assert_eq!(compute_renderers(&RendererSelection::Auto, &[]), ids(&[]));
        let all = ids(&[4, 2, 9]);
        assert_eq!(compute_renderers(&RendererSelection::Auto, &all), all);
    }

    #[test]
    fn test_explicit_ignores_collection() {
        let chosen = ids(&[7, 3]);
        let all = ids(&[1, 2, 3]);
        assert_eq!(
            compute_renderers(&RendererSelection::Explicit(chosen.clone()), &all),
            chosen
        );
    }

    #[test]
    fn test_explicit_keeps_unattached_ids() {
        // Ids that are not in the collection pass through untouched.
        let chosen = ids(&[99]);
        let all = ids(&[1, 2]);
        assert_eq!(
            compute_renderers(&RendererSelection::Explicit(chosen.clone()), &all),
            chosen
        );
    }

    #[test]
    fn test_explicit_keeps_caller_order() {
        let chosen = ids(&[3, 1, 2]);
        let all = ids(&[1, 2, 3]);
        assert_eq!(
            compute_renderers(&RendererSelection::Explicit(chosen.clone()), &all),
            chosen
        );
    }

    #[test]
    fn test_idempotent() {
        let sel = RendererSelection::explicit(ids(&[5, 6]));
        let all = ids(&[5, 6, 7]);
        assert_eq!(
            compute_renderers(&sel, &all),
            compute_renderers(&sel, &all)
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(RendererSelection::None.is_empty());
        assert!(RendererSelection::explicit([]).is_empty());
        assert!(!RendererSelection::Auto.is_empty());
        assert!(!RendererSelection::explicit(ids(&[1])).is_empty());
    }

    #[test]
    fn test_default_is_auto() {
        assert_eq!(RendererSelection::default(), RendererSelection::Auto);
    }
}
