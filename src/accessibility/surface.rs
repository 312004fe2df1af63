//! View surface boundary between screen controllers and the UI toolkit.
//!
//! Controllers never touch widgets directly. They describe accessibility and
//! rendering effects through [`ViewSurface`], which the hosting toolkit
//! implements. [`RecordingSurface`] is the in-memory implementation used by
//! the console host and by tests.

use std::collections::{BTreeMap, VecDeque};

use super::actions::ActionKind;
use super::screen_reader::{Announcement, AnnouncementQueue, ScreenReaderSupport};

/// Addressable view elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Element {
    /// Recipe card container
    RecipeCard,
    /// Favorite toggle on the card
    FavoriteButton,
    /// "Add to basket" button on the card
    AddToBasketButton,
    /// Recipe title on the card
    RecipeTitle,
    /// Quantity value of the stepper
    QuantityText,
    /// Stepper "+" button
    IncrementButton,
    /// Stepper "-" button
    DecrementButton,
    /// Pseudonym text input
    PseudonymField,
    /// Pseudonym form submit button
    ValidateButton,
}

impl Element {
    /// Get all elements.
    pub fn all() -> &'static [Element] {
        &[
            Element::RecipeCard,
            Element::FavoriteButton,
            Element::AddToBasketButton,
            Element::RecipeTitle,
            Element::QuantityText,
            Element::IncrementButton,
            Element::DecrementButton,
            Element::PseudonymField,
            Element::ValidateButton,
        ]
    }

    /// Short machine name, used by the console host.
    pub fn name(&self) -> &'static str {
        match self {
            Element::RecipeCard => "card",
            Element::FavoriteButton => "favorite",
            Element::AddToBasketButton => "basket",
            Element::RecipeTitle => "title",
            Element::QuantityText => "quantity",
            Element::IncrementButton => "plus",
            Element::DecrementButton => "minus",
            Element::PseudonymField => "pseudonym",
            Element::ValidateButton => "validate",
        }
    }

    /// Parse from a short machine name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::all().iter().copied().find(|e| e.name() == name)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Opaque handle of a custom action added to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionHandle(u32);

impl ActionHandle {
    /// Wrap a raw surface id.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw surface id.
    pub fn id(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ActionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Icons a controller can place on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Filled heart
    FavoriteOn,
    /// Outlined heart
    FavoriteOff,
    /// Check mark shown at the end of a valid field
    CheckCircle,
}

/// Visual tone of a text field's hint and outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldTone {
    /// Untouched field
    #[default]
    Neutral,
    /// Invalid content (red)
    Error,
    /// Valid content (green)
    Success,
}

/// Capabilities a screen controller needs from its hosting view layer.
///
/// Custom actions are bound to an [`ActionKind`] instead of a closure: when
/// assistive technology invokes one, the host hands the kind back to the
/// owning controller. Implementations must never call back into a controller
/// from inside one of these methods; `trigger_activation` only schedules the
/// activation.
pub trait ViewSurface {
    /// Expose or hide an element in the accessibility tree.
    fn set_important_for_accessibility(&mut self, element: Element, important: bool);

    /// Add a named custom action to an element.
    fn add_action(&mut self, element: Element, label: &str, kind: ActionKind) -> ActionHandle;

    /// Remove a custom action from an element.
    fn remove_action(&mut self, element: Element, handle: ActionHandle);

    /// Relabel an element's default activation action. Behavior is unchanged.
    fn replace_activation_action(&mut self, element: Element, label: &str);

    /// Push an announcement to assistive technology.
    fn announce(&mut self, element: Element, message: &str);

    /// Schedule the element's normal activation (a click).
    fn trigger_activation(&mut self, element: Element);

    /// Set or clear the icon drawn by an element.
    fn set_icon(&mut self, element: Element, icon: Option<Icon>);

    /// Set the visible text of an element.
    fn set_text(&mut self, element: Element, text: &str);

    /// Set the text read by the screen reader in place of the element's content.
    ///
    /// `None` goes back to reading the content itself.
    fn set_content_description(&mut self, element: Element, description: Option<&str>);

    /// Enable or disable an element.
    fn set_enabled(&mut self, element: Element, enabled: bool);

    /// Show or clear an error message on a field.
    fn set_error(&mut self, element: Element, error: Option<&str>);

    /// Set the visual tone of a field.
    fn set_field_tone(&mut self, element: Element, tone: FieldTone);

    /// Show a transient notice (snackbar).
    fn show_notice(&mut self, message: &str);
}

/// A custom action currently attached to an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomAction {
    /// Handle assigned by the surface
    pub handle: ActionHandle,
    /// Label read by the screen reader
    pub label: String,
    /// Logical action dispatched on invocation
    pub kind: ActionKind,
}

/// Recorded state of one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementState {
    /// Explicit accessibility importance (`None` = toolkit default)
    pub important: Option<bool>,
    /// Custom actions in insertion order
    pub actions: Vec<CustomAction>,
    /// Label of the default activation action
    pub activation_label: Option<String>,
    /// Current icon
    pub icon: Option<Icon>,
    /// Visible text
    pub text: String,
    /// Screen reader description
    pub content_description: Option<String>,
    /// Whether the element accepts input
    pub enabled: bool,
    /// Field error message
    pub error: Option<String>,
    /// Field tone
    pub tone: FieldTone,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            important: None,
            actions: Vec::new(),
            activation_label: None,
            icon: None,
            text: String::new(),
            content_description: None,
            enabled: true,
            error: None,
            tone: FieldTone::Neutral,
        }
    }
}

/// In-memory view surface that records every effect.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    /// Last assigned handle id
    last_handle: u32,
    /// Per-element state
    elements: BTreeMap<Element, ElementState>,
    /// Screen reader output
    screen_reader: AnnouncementQueue,
    /// Transient notices not yet consumed
    notices: VecDeque<String>,
    /// Activations scheduled through `trigger_activation`
    pending_activations: VecDeque<Element>,
}

impl RecordingSurface {
    /// Create a surface with announcements enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface with announcements enabled or dropped.
    pub fn with_announcements(enabled: bool) -> Self {
        let mut surface = Self::new();
        surface.screen_reader.set_enabled(enabled);
        surface
    }

    fn state_mut(&mut self, element: Element) -> &mut ElementState {
        self.elements.entry(element).or_default()
    }

    /// Recorded state of an element, if anything was ever applied to it.
    pub fn element(&self, element: Element) -> Option<&ElementState> {
        self.elements.get(&element)
    }

    /// Whether an element is exposed to the accessibility tree.
    ///
    /// Elements without an explicit flag follow the toolkit default (exposed).
    pub fn is_important(&self, element: Element) -> bool {
        self.element(element)
            .and_then(|state| state.important)
            .unwrap_or(true)
    }

    /// Custom actions attached to an element.
    pub fn actions(&self, element: Element) -> &[CustomAction] {
        self.element(element)
            .map(|state| state.actions.as_slice())
            .unwrap_or(&[])
    }

    /// Kinds of the custom actions attached to an element, sorted.
    pub fn action_kinds(&self, element: Element) -> Vec<ActionKind> {
        let mut kinds: Vec<_> = self.actions(element).iter().map(|a| a.kind).collect();
        kinds.sort();
        kinds
    }

    /// Label of an element's default activation action.
    pub fn activation_label(&self, element: Element) -> Option<&str> {
        self.element(element)
            .and_then(|state| state.activation_label.as_deref())
    }

    /// Icon currently drawn by an element.
    pub fn icon(&self, element: Element) -> Option<Icon> {
        self.element(element).and_then(|state| state.icon)
    }

    /// Visible text of an element.
    pub fn text(&self, element: Element) -> &str {
        self.element(element)
            .map(|state| state.text.as_str())
            .unwrap_or("")
    }

    /// Whether an element accepts input.
    pub fn is_enabled(&self, element: Element) -> bool {
        self.element(element).map_or(true, |state| state.enabled)
    }

    /// Text read in place of an element's content, if any.
    pub fn content_description(&self, element: Element) -> Option<&str> {
        self.element(element)
            .and_then(|state| state.content_description.as_deref())
    }

    /// Get the next announcement.
    pub fn pop_announcement(&mut self) -> Option<Announcement> {
        self.screen_reader.pop()
    }

    /// Drain every pending announcement.
    pub fn take_announcements(&mut self) -> Vec<Announcement> {
        self.screen_reader.drain()
    }

    /// Drain every pending notice.
    pub fn take_notices(&mut self) -> Vec<String> {
        self.notices.drain(..).collect()
    }

    /// Drain activations scheduled by `trigger_activation`.
    pub fn take_activations(&mut self) -> Vec<Element> {
        self.pending_activations.drain(..).collect()
    }
}

impl ViewSurface for RecordingSurface {
    fn set_important_for_accessibility(&mut self, element: Element, important: bool) {
        self.state_mut(element).important = Some(important);
    }

    fn add_action(&mut self, element: Element, label: &str, kind: ActionKind) -> ActionHandle {
        self.last_handle += 1;
        let handle = ActionHandle::new(self.last_handle);
        self.state_mut(element).actions.push(CustomAction {
            handle,
            label: label.to_string(),
            kind,
        });
        handle
    }

    fn remove_action(&mut self, element: Element, handle: ActionHandle) {
        let actions = &mut self.state_mut(element).actions;
        let before = actions.len();
        actions.retain(|action| action.handle != handle);
        if actions.len() == before {
            tracing::trace!("No action {} on {}", handle, element);
        }
    }

    fn replace_activation_action(&mut self, element: Element, label: &str) {
        self.state_mut(element).activation_label = Some(label.to_string());
    }

    fn announce(&mut self, element: Element, message: &str) {
        self.screen_reader.announce(element, message);
    }

    fn trigger_activation(&mut self, element: Element) {
        self.pending_activations.push_back(element);
    }

    fn set_icon(&mut self, element: Element, icon: Option<Icon>) {
        self.state_mut(element).icon = icon;
    }

    fn set_text(&mut self, element: Element, text: &str) {
        self.state_mut(element).text = text.to_string();
    }

    fn set_content_description(&mut self, element: Element, description: Option<&str>) {
        self.state_mut(element).content_description = description.map(str::to_string);
    }

    fn set_enabled(&mut self, element: Element, enabled: bool) {
        self.state_mut(element).enabled = enabled;
    }

    fn set_error(&mut self, element: Element, error: Option<&str>) {
        self.state_mut(element).error = error.map(str::to_string);
    }

    fn set_field_tone(&mut self, element: Element, tone: FieldTone) {
        self.state_mut(element).tone = tone;
    }

    fn show_notice(&mut self, message: &str) {
        // Snackbars are read out by screen readers as they appear
        self.screen_reader.announce_urgent(message);
        self.notices.push_back(message.to_string());
    }
}
