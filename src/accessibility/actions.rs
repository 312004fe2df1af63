//! Custom accessibility actions exposed on the recipe card.
//!
//! An [`ActionKind`] names a logical action independently of the handle the
//! view surface hands back when the action is added. The [`ActionRegistry`]
//! maps each live kind to its handle, so the set of actions currently exposed
//! to assistive technology can be read from a single structure.

use std::collections::BTreeMap;

use super::surface::{ActionHandle, Element, ViewSurface};

/// Logical custom accessibility actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionKind {
    /// Switch the card to fast (summary) navigation
    FastMode,
    /// Switch the card to slow (detailed) navigation
    SlowMode,
    /// Add the recipe to the basket
    AddToBasket,
    /// Mark the recipe as favorite
    FavoriteAdd,
    /// Unmark the recipe as favorite
    FavoriteRemove,
}

impl ActionKind {
    /// Get all action kinds.
    pub fn all() -> &'static [ActionKind] {
        &[
            ActionKind::FastMode,
            ActionKind::SlowMode,
            ActionKind::AddToBasket,
            ActionKind::FavoriteAdd,
            ActionKind::FavoriteRemove,
        ]
    }

    /// Translation key of the label read out by the screen reader.
    pub fn label_key(&self) -> &'static str {
        match self {
            ActionKind::FastMode => "action-fast-mode",
            ActionKind::SlowMode => "action-slow-mode",
            ActionKind::AddToBasket => "action-add-to-basket",
            ActionKind::FavoriteAdd => "action-add-favorite",
            ActionKind::FavoriteRemove => "action-remove-favorite",
        }
    }

    /// Short machine name, used by the console host.
    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::FastMode => "fast",
            ActionKind::SlowMode => "slow",
            ActionKind::AddToBasket => "basket",
            ActionKind::FavoriteAdd => "favorite-add",
            ActionKind::FavoriteRemove => "favorite-remove",
        }
    }

    /// Parse from a short machine name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::all().iter().copied().find(|kind| kind.name() == name)
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Live custom actions, keyed by kind.
///
/// A kind is present if and only if its action is currently registered on the
/// surface. There is never more than one handle per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionRegistry {
    handles: BTreeMap<ActionKind, ActionHandle>,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `kind` to `element` unless it is already registered.
    ///
    /// Returns `true` if a new action was added to the surface.
    pub fn register<S: ViewSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        element: Element,
        kind: ActionKind,
        label: &str,
    ) -> bool {
        if self.handles.contains_key(&kind) {
            tracing::trace!("Action {} already registered on {}", kind, element);
            return false;
        }

        let handle = surface.add_action(element, label, kind);
        self.handles.insert(kind, handle);
        tracing::debug!("Registered action {} on {} as {}", kind, element, handle);
        true
    }

    /// Remove `kind` from `element`.
    ///
    /// An absent kind is a silent no-op: the surface is not called and the
    /// other entries are left untouched.
    pub fn deregister<S: ViewSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        element: Element,
        kind: ActionKind,
    ) -> bool {
        match self.handles.remove(&kind) {
            Some(handle) => {
                surface.remove_action(element, handle);
                tracing::debug!("Deregistered action {} ({}) from {}", kind, handle, element);
                true
            }
            None => false,
        }
    }

    /// Get the handle registered for a kind.
    pub fn handle(&self, kind: ActionKind) -> Option<ActionHandle> {
        self.handles.get(&kind).copied()
    }

    /// Check if a kind is registered.
    pub fn contains(&self, kind: ActionKind) -> bool {
        self.handles.contains_key(&kind)
    }

    /// Registered kinds in stable order.
    pub fn kinds(&self) -> Vec<ActionKind> {
        self.handles.keys().copied().collect()
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Check if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
