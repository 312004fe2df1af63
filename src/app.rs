//! Console host for the three accessibility screens.
//!
//! Plays the role of the UI toolkit: it owns one [`RecordingSurface`] per
//! screen, turns text commands into clicks, custom-action invocations and
//! edits, and prints what a screen reader user would hear.

use std::str::FromStr;

use recipe_a11y::accessibility::{ActionKind, Element, RecordingSurface};
use recipe_a11y::i18n::TranslationService;
use recipe_a11y::storage::config::AppConfig;
use recipe_a11y::ui::screens::recipe_card::CARD_ELEMENTS;
use recipe_a11y::ui::screens::{
    NavigationMode, PseudonymFieldController, QuantityStepperController, RecipeCardController,
    RecipeContent, Screen,
};

/// Stepper elements in reading order.
const STEPPER_ELEMENTS: [Element; 3] = [
    Element::DecrementButton,
    Element::QuantityText,
    Element::IncrementButton,
];

/// Pseudonym form elements in reading order.
const PSEUDONYM_ELEMENTS: [Element; 2] = [Element::PseudonymField, Element::ValidateButton];

/// Console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch to a screen
    Show(Screen),
    /// Click an element
    Click(Element),
    /// Invoke a custom accessibility action on the card
    Action(ActionKind),
    /// Replace the pseudonym field content
    Type(String),
    /// List the custom actions of the card
    Actions,
    /// Describe the accessibility tree of the current screen
    Tree,
    /// Print usage
    Help,
    /// Leave the console
    Quit,
}

/// Command parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Unknown screen: {0}")]
    UnknownScreen(String),

    #[error("Unknown element: {0}")]
    UnknownElement(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match head.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "show" => Screen::from_name(rest)
                .map(Command::Show)
                .ok_or_else(|| CommandError::UnknownScreen(rest.to_string())),
            "click" => Element::from_name(rest)
                .map(Command::Click)
                .ok_or_else(|| CommandError::UnknownElement(rest.to_string())),
            "action" => ActionKind::from_name(rest)
                .map(Command::Action)
                .ok_or_else(|| CommandError::UnknownAction(rest.to_string())),
            // Spaces inside the pseudonym are kept
            "type" => Ok(Command::Type(rest.to_string())),
            "actions" => Ok(Command::Actions),
            "tree" => Ok(Command::Tree),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

/// Usage text.
pub const HELP: &str = "\
show <stepper|card|pseudonym>   switch screen
click <element>                 click an element (card, favorite, basket, title, plus, minus, validate)
action <kind>                   invoke a card action (fast, slow, basket, favorite-add, favorite-remove)
type <text>                     set the pseudonym field content
actions                         list the card's custom actions
tree                            describe the current screen's accessibility tree
quit                            leave";

/// Console application state.
pub struct ConsoleApp {
    /// Current screen
    current: Screen,
    /// Strings for console output
    translations: TranslationService,
    /// Quantity stepper screen
    stepper: QuantityStepperController<RecordingSurface>,
    /// Recipe card screen
    card: RecipeCardController<RecordingSurface>,
    /// Pseudonym form screen
    pseudonym: PseudonymFieldController<RecordingSurface>,
}

impl ConsoleApp {
    /// Build and initialize every screen from the configuration.
    pub fn new(config: &AppConfig, translations: TranslationService) -> Self {
        let announcements = config.accessibility.announcements_enabled;
        let surface = || RecordingSurface::with_announcements(announcements);

        let mut stepper = QuantityStepperController::new(surface(), translations.clone());
        stepper.initialize();

        let defaults = RecipeContent::from_translations(&translations);
        let content = RecipeContent {
            title: config.recipe.title.clone().unwrap_or(defaults.title),
            summary: config.recipe.summary.clone().unwrap_or(defaults.summary),
        };
        let mut card = RecipeCardController::with_content(surface(), translations.clone(), content);
        card.initialize();
        if config.accessibility.initial_mode == NavigationMode::Slow {
            card.enter_slow_mode();
        }

        let mut pseudonym = PseudonymFieldController::with_min_length(
            surface(),
            translations.clone(),
            config.pseudonym.min_length,
        );
        pseudonym.initialize();

        let mut app = Self {
            current: Screen::default(),
            translations,
            stepper,
            card,
            pseudonym,
        };
        // Start-up chatter is not replayed
        app.drain_output();
        app
    }

    /// Current screen.
    pub fn current_screen(&self) -> Screen {
        self.current
    }

    /// Get the recipe card controller.
    pub fn card(&self) -> &RecipeCardController<RecordingSurface> {
        &self.card
    }

    /// Run one command and return the lines to print.
    pub fn handle(&mut self, command: Command) -> Vec<String> {
        let mut output = Vec::new();

        match command {
            Command::Show(screen) => {
                self.current = screen;
                output.push(format!("== {}", self.translations.translate(screen.title_key())));
            }
            Command::Click(element) => {
                if !self.click(element) {
                    output.push(format!("{} does not react to clicks", element));
                }
            }
            Command::Action(kind) => {
                if !self.card.perform_action(kind) {
                    output.push(format!("Action {} is not available", kind));
                }
            }
            Command::Type(text) => {
                let validity = self.pseudonym.on_text_changed(&text);
                output.push(format!("pseudonym: {:?}", validity));
            }
            Command::Actions => {
                for action in self.card.surface().actions(Element::RecipeCard) {
                    output.push(format!("{:<16} {}", action.kind.name(), action.label));
                }
            }
            Command::Tree => output.extend(self.describe_tree()),
            Command::Help => output.extend(HELP.lines().map(str::to_string)),
            Command::Quit => {}
        }

        self.dispatch_activations();
        output.extend(self.drain_output());
        output
    }

    fn click(&mut self, element: Element) -> bool {
        match element {
            Element::IncrementButton | Element::DecrementButton => self.stepper.activate(element),
            Element::ValidateButton => self.pseudonym.surface().is_enabled(element),
            _ if CARD_ELEMENTS.contains(&element) => self.card.activate(element),
            _ => false,
        }
    }

    /// Deliver activations scheduled by custom actions, one at a time.
    fn dispatch_activations(&mut self) {
        loop {
            let pending = self.card.surface_mut().take_activations();
            if pending.is_empty() {
                break;
            }
            for element in pending {
                self.card.activate(element);
            }
        }
    }

    fn describe_tree(&self) -> Vec<String> {
        let surface = match self.current {
            Screen::Stepper => self.stepper.surface(),
            Screen::RecipeCard => self.card.surface(),
            Screen::Pseudonym => self.pseudonym.surface(),
        };
        let elements: &[Element] = match self.current {
            Screen::Stepper => &STEPPER_ELEMENTS,
            Screen::RecipeCard => &CARD_ELEMENTS,
            Screen::Pseudonym => &PSEUDONYM_ELEMENTS,
        };

        elements
            .iter()
            .filter(|element| surface.is_important(**element))
            .map(|element| {
                let mut line = element.name().to_string();
                if let Some(label) = surface.activation_label(*element) {
                    line.push_str(&format!(" [double tap to {}]", label));
                }
                let actions = surface.actions(*element);
                if !actions.is_empty() {
                    line.push_str(&format!(" ({} actions)", actions.len()));
                }
                if !surface.is_enabled(*element) {
                    line.push_str(" (disabled)");
                }
                line
            })
            .collect()
    }

    fn drain_output(&mut self) -> Vec<String> {
        let surfaces = [
            self.stepper.surface_mut(),
            self.card.surface_mut(),
            self.pseudonym.surface_mut(),
        ];

        let mut lines = Vec::new();
        for surface in surfaces {
            // Notices are also announced; print them once
            surface.take_notices();
            for announcement in surface.take_announcements() {
                let tag = if announcement.urgent { "notice" } else { "speak" };
                lines.push(format!("[{}] {}", tag, announcement.message));
            }
        }
        lines
    }
}
