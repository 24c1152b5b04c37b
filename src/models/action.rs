//! Actions bound to key zones.
//!
//! An [`Action`] is an immutable value describing what a gesture should do.
//! Performing it is left to the session layer, which owns the text buffer.

use crate::models::locale::Locale;
use crate::models::modifiers::{ModifierState, ShiftLevel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a text search relative to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchDirection {
    /// Towards the start of the document
    Backwards,
    /// Towards the end of the document
    Forwards,
}

/// Unit of text that delete/jump actions operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextBoundary {
    /// A single character
    Letter,
    /// Up to the next word boundary
    Word,
    /// Up to the start/end of the line
    Line,
    /// Up to the start/end of the document
    Document,
}

impl TextBoundary {
    /// The next larger boundary; `Document` is the largest.
    #[must_use]
    pub const fn larger(self) -> Self {
        match self {
            Self::Letter => Self::Word,
            Self::Word => Self::Line,
            Self::Line | Self::Document => Self::Document,
        }
    }
}

/// Keys forwarded to the host as plain key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassthroughKey {
    /// Tab
    Tab,
    /// Escape
    Escape,
    /// Home
    Home,
    /// End
    End,
    /// Page Up
    PageUp,
    /// Page Down
    PageDown,
}

impl PassthroughKey {
    /// Short label for rendering.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tab => "Tab",
            Self::Escape => "Esc",
            Self::Home => "Home",
            Self::End => "End",
            Self::PageUp => "PgUp",
            Self::PageDown => "PgDn",
        }
    }
}

/// Classification used by the "show letters/symbols/numbers" toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionClass {
    /// Alphabetic text
    Letter,
    /// Numeric text
    Number,
    /// Any other text
    Symbol,
    /// Non-text actions
    Other,
}

/// Icons the renderer is expected to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Icon {
    Backspace,
    ForwardDelete,
    ArrowLeft,
    ArrowRight,
    WordLeft,
    WordRight,
    LineStart,
    LineEnd,
    DocumentStart,
    DocumentEnd,
    ShiftOff,
    ShiftOn,
    CapsLock,
    Select,
    Enter,
    Copy,
    Cut,
    Paste,
    SelectAll,
    Undo,
    Redo,
    Emoji,
    Settings,
    SwitchKeyboard,
}

impl Icon {
    /// Single-glyph stand-in for text renderers.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Backspace => "⌫",
            Self::ForwardDelete => "⌦",
            Self::ArrowLeft => "←",
            Self::ArrowRight => "→",
            Self::WordLeft => "⇠",
            Self::WordRight => "⇢",
            Self::LineStart => "⇤",
            Self::LineEnd => "⇥",
            Self::DocumentStart => "⇞",
            Self::DocumentEnd => "⇟",
            Self::ShiftOff => "⇧",
            Self::ShiftOn => "⬆",
            Self::CapsLock => "⇪",
            Self::Select => "⌶",
            Self::Enter => "⏎",
            Self::Copy => "⎘",
            Self::Cut => "✂",
            Self::Paste => "📋",
            Self::SelectAll => "▣",
            Self::Undo => "↶",
            Self::Redo => "↷",
            Self::Emoji => "☺",
            Self::Settings => "⚙",
            Self::SwitchKeyboard => "⌨",
        }
    }
}

/// What the renderer should draw for an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionVisual {
    /// Text label
    Label(String),
    /// Named icon
    Icon(Icon),
    /// Nothing (hidden actions)
    None,
}

impl fmt::Display for ActionVisual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => f.write_str(label),
            Self::Icon(icon) => write!(f, "[{:?}]", icon),
            Self::None => Ok(()),
        }
    }
}

/// A concrete thing a key zone can do.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Insert text at the cursor.
    Text {
        /// Text to insert
        text: String,
        /// Label suppressed; the gesture still works
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        hidden: bool,
    },
    /// Delete text next to the cursor.
    Delete {
        /// Which side of the cursor
        direction: SearchDirection,
        /// How much text
        boundary: TextBoundary,
    },
    /// Move the cursor.
    Jump {
        /// Which way
        direction: SearchDirection,
        /// How far
        boundary: TextBoundary,
    },
    /// Toggle selection mode
    ToggleSelect,
    /// Cycle the shift level
    ToggleShift,
    /// Toggle ctrl
    ToggleCtrl,
    /// Toggle alt
    ToggleAlt,
    /// Toggle combining-mark mode
    ToggleZalgo,
    /// Insert a newline or submit
    Enter,
    /// Copy selection
    Copy,
    /// Cut selection
    Cut,
    /// Paste clipboard
    Paste,
    /// Select the whole document
    SelectAll,
    /// Undo last edit
    Undo,
    /// Redo last undone edit
    Redo,
    /// Forward a plain key event to the host
    Key {
        /// Key to forward
        key: PassthroughKey,
    },
    /// Open the emoji picker
    ToggleEmojiMode,
    /// Open settings
    Settings,
    /// Ask the host to switch to another input method
    SwitchKeyboard,
}

impl Action {
    /// Shorthand for a visible text action.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            hidden: false,
        }
    }

    /// Shorthand for a letter-wise backspace.
    #[must_use]
    pub const fn backspace() -> Self {
        Self::Delete {
            direction: SearchDirection::Backwards,
            boundary: TextBoundary::Letter,
        }
    }

    /// Shorthand for a jump by `boundary` in `direction`.
    #[must_use]
    pub const fn jump(direction: SearchDirection, boundary: TextBoundary) -> Self {
        Self::Jump {
            direction,
            boundary,
        }
    }

    /// What this action becomes when invoked with a shift gesture.
    ///
    /// Text is upper-cased with `locale`'s rules, deletes and jumps widen
    /// their boundary, undo becomes redo. Anything else maps to itself.
    #[must_use]
    pub fn shift(&self, locale: &Locale) -> Self {
        match self {
            Self::Text { text, hidden } => Self::Text {
                text: locale.to_upper(text),
                hidden: *hidden,
            },
            Self::Delete {
                direction,
                boundary,
            } => Self::Delete {
                direction: *direction,
                boundary: boundary.larger(),
            },
            Self::Jump {
                direction,
                boundary,
            } => Self::Jump {
                direction: *direction,
                boundary: boundary.larger(),
            },
            Self::Undo => Self::Redo,
            other => other.clone(),
        }
    }

    /// Display class of this action.
    #[must_use]
    pub fn class(&self) -> ActionClass {
        match self {
            Self::Text { text, .. } => classify_text(text),
            _ => ActionClass::Other,
        }
    }

    /// Returns a copy whose label is suppressed.
    ///
    /// Only text carries a hidden flag; other actions are returned unchanged.
    #[must_use]
    pub fn hide(&self) -> Self {
        match self {
            Self::Text { text, .. } => Self::Text {
                text: text.clone(),
                hidden: true,
            },
            other => other.clone(),
        }
    }

    /// Returns true if this is a hidden text action.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        matches!(self, Self::Text { hidden: true, .. })
    }

    /// Whether a toggle-style action is currently engaged.
    #[must_use]
    pub const fn is_active(&self, modifiers: &ModifierState) -> bool {
        match self {
            Self::ToggleShift => modifiers.shift.is_shifted(),
            Self::ToggleCtrl => modifiers.ctrl,
            Self::ToggleAlt => modifiers.alt,
            Self::ToggleZalgo => modifiers.zalgo,
            Self::ToggleSelect => modifiers.select,
            _ => false,
        }
    }

    /// What the renderer should draw for this action under `modifiers`.
    ///
    /// Shifted text labels are upper-cased with `locale`'s rules, matching
    /// what a shift flick types.
    #[must_use]
    pub fn visual(&self, modifiers: &ModifierState, locale: &Locale) -> ActionVisual {
        match self {
            Self::Text { hidden: true, .. } => ActionVisual::None,
            Self::Text { text, .. } => {
                let shown = if modifiers.shift.is_shifted() {
                    locale.to_upper(text)
                } else {
                    text.clone()
                };
                ActionVisual::Label(label_for_text(&shown))
            }
            Self::Delete { direction, .. } => ActionVisual::Icon(match direction {
                SearchDirection::Backwards => Icon::Backspace,
                SearchDirection::Forwards => Icon::ForwardDelete,
            }),
            Self::Jump {
                direction,
                boundary,
            } => ActionVisual::Icon(jump_icon(*direction, *boundary)),
            Self::ToggleShift => ActionVisual::Icon(match modifiers.shift {
                ShiftLevel::Normal => Icon::ShiftOff,
                ShiftLevel::Shift => Icon::ShiftOn,
                ShiftLevel::CapsLock => Icon::CapsLock,
            }),
            Self::ToggleCtrl => ActionVisual::Label("Ctrl".to_string()),
            Self::ToggleAlt => ActionVisual::Label("Alt".to_string()),
            Self::ToggleZalgo => ActionVisual::Label("Z\u{338}".to_string()),
            Self::ToggleSelect => ActionVisual::Icon(Icon::Select),
            Self::Enter => ActionVisual::Icon(Icon::Enter),
            Self::Copy => ActionVisual::Icon(Icon::Copy),
            Self::Cut => ActionVisual::Icon(Icon::Cut),
            Self::Paste => ActionVisual::Icon(Icon::Paste),
            Self::SelectAll => ActionVisual::Icon(Icon::SelectAll),
            Self::Undo => ActionVisual::Icon(Icon::Undo),
            Self::Redo => ActionVisual::Icon(Icon::Redo),
            Self::Key { key } => ActionVisual::Label(key.label().to_string()),
            Self::ToggleEmojiMode => ActionVisual::Icon(Icon::Emoji),
            Self::Settings => ActionVisual::Icon(Icon::Settings),
            Self::SwitchKeyboard => ActionVisual::Icon(Icon::SwitchKeyboard),
        }
    }

    /// Returns a copy with paired bracket characters swapped.
    #[must_use]
    pub fn flip_brackets(&self) -> Self {
        match self {
            Self::Text { text, hidden } => Self::Text {
                text: text.chars().map(flip_bracket).collect(),
                hidden: *hidden,
            },
            other => other.clone(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { text, .. } => write!(f, "text({text:?})"),
            Self::Delete {
                direction,
                boundary,
            } => write!(f, "delete({direction:?}, {boundary:?})"),
            Self::Jump {
                direction,
                boundary,
            } => write!(f, "jump({direction:?}, {boundary:?})"),
            Self::Key { key } => write!(f, "key({})", key.label()),
            other => write!(f, "{other:?}"),
        }
    }
}

fn classify_text(text: &str) -> ActionClass {
    if text.is_empty() {
        return ActionClass::Symbol;
    }
    if text.chars().all(char::is_numeric) {
        ActionClass::Number
    } else if text.chars().any(char::is_alphabetic) {
        ActionClass::Letter
    } else {
        ActionClass::Symbol
    }
}

const fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}' | '\u{1AB0}'..='\u{1AFF}' | '\u{20D0}'..='\u{20FF}')
}

/// Combining marks get a dotted circle to sit on.
fn label_for_text(text: &str) -> String {
    match text.chars().next() {
        Some(first) if is_combining_mark(first) => format!("\u{25CC}{text}"),
        _ => match text {
            " " => "\u{2423}".to_string(),
            "\t" => "\u{21E5}".to_string(),
            _ => text.to_string(),
        },
    }
}

const fn jump_icon(direction: SearchDirection, boundary: TextBoundary) -> Icon {
    match (direction, boundary) {
        (SearchDirection::Backwards, TextBoundary::Letter) => Icon::ArrowLeft,
        (SearchDirection::Forwards, TextBoundary::Letter) => Icon::ArrowRight,
        (SearchDirection::Backwards, TextBoundary::Word) => Icon::WordLeft,
        (SearchDirection::Forwards, TextBoundary::Word) => Icon::WordRight,
        (SearchDirection::Backwards, TextBoundary::Line) => Icon::LineStart,
        (SearchDirection::Forwards, TextBoundary::Line) => Icon::LineEnd,
        (SearchDirection::Backwards, TextBoundary::Document) => Icon::DocumentStart,
        (SearchDirection::Forwards, TextBoundary::Document) => Icon::DocumentEnd,
    }
}

const fn flip_bracket(c: char) -> char {
    match c {
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '<' => '>',
        '>' => '<',
        '«' => '»',
        '»' => '«',
        '‹' => '›',
        '›' => '‹',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_shift_uppercases_per_locale() {
        assert_eq!(Action::text("g").shift(&Locale::ENGLISH), Action::text("G"));
        assert_eq!(Action::text("i").shift(&Locale::TURKISH), Action::text("İ"));
        assert_eq!(Action::text("!").shift(&Locale::ENGLISH), Action::text("!"));
    }

    #[test]
    fn test_shift_keeps_hidden_flag() {
        let hidden = Action::text("a").hide();
        assert!(hidden.shift(&Locale::ENGLISH).is_hidden());
    }

    #[test]
    fn test_delete_shift_widens_boundary() {
        let shifted = Action::backspace().shift(&Locale::ENGLISH);
        assert_eq!(
            shifted,
            Action::Delete {
                direction: SearchDirection::Backwards,
                boundary: TextBoundary::Word,
            }
        );
        let doc = Action::jump(SearchDirection::Forwards, TextBoundary::Document);
        assert_eq!(doc.shift(&Locale::ENGLISH), doc);
    }

    #[test]
    fn test_undo_shifts_to_redo() {
        assert_eq!(Action::Undo.shift(&Locale::ENGLISH), Action::Redo);
        assert_eq!(Action::Enter.shift(&Locale::ENGLISH), Action::Enter);
    }

    #[test]
    fn test_classes() {
        assert_eq!(Action::text("a").class(), ActionClass::Letter);
        assert_eq!(Action::text("ж").class(), ActionClass::Letter);
        assert_eq!(Action::text("7").class(), ActionClass::Number);
        assert_eq!(Action::text("٧").class(), ActionClass::Number);
        assert_eq!(Action::text("?").class(), ActionClass::Symbol);
        assert_eq!(Action::text("\u{301}").class(), ActionClass::Symbol);
        assert_eq!(Action::Enter.class(), ActionClass::Other);
    }

    #[test]
    fn test_visual_follows_modifiers() {
        let normal = ModifierState::default();
        let shifted = ModifierState::default().with_shift(ShiftLevel::CapsLock);

        assert_eq!(
            Action::text("q").visual(&normal, &Locale::ENGLISH),
            ActionVisual::Label("q".to_string())
        );
        assert_eq!(
            Action::text("q").visual(&shifted, &Locale::ENGLISH),
            ActionVisual::Label("Q".to_string())
        );
        assert_eq!(
            Action::ToggleShift.visual(&shifted, &Locale::ENGLISH),
            ActionVisual::Icon(Icon::CapsLock)
        );
        assert_eq!(Action::text("q").hide().visual(&normal, &Locale::ENGLISH), ActionVisual::None);
    }

    #[test]
    fn test_shifted_label_matches_typed_text() {
        let shifted = ModifierState::default().with_shift(ShiftLevel::Shift);
        let dotted_i = Action::text("i");
        assert_eq!(
            dotted_i.visual(&shifted, &Locale::TURKISH),
            ActionVisual::Label("İ".to_string())
        );
        assert_eq!(
            dotted_i.visual(&shifted, &Locale::TURKISH),
            ActionVisual::Label(label_for_text(&text_of(&dotted_i.shift(&Locale::TURKISH))))
        );
        assert_eq!(
            dotted_i.visual(&shifted, &Locale::ENGLISH),
            ActionVisual::Label("I".to_string())
        );
    }

    fn text_of(action: &Action) -> String {
        match action {
            Action::Text { text, .. } => text.clone(),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_combining_mark_label() {
        let visual = Action::text("\u{301}").visual(&ModifierState::default(), &Locale::ENGLISH);
        assert_eq!(visual, ActionVisual::Label("\u{25CC}\u{301}".to_string()));
    }

    #[test]
    fn test_is_active() {
        let state = ModifierState::default().with_ctrl(true).with_select(true);
        assert!(Action::ToggleCtrl.is_active(&state));
        assert!(Action::ToggleSelect.is_active(&state));
        assert!(!Action::ToggleAlt.is_active(&state));
        assert!(!Action::ToggleShift.is_active(&state));
        assert!(!Action::Enter.is_active(&state));

        let state = ModifierState::default().with_alt(true).with_zalgo(true);
        assert!(Action::ToggleAlt.is_active(&state));
        assert!(Action::ToggleZalgo.is_active(&state));
        assert!(!Action::ToggleCtrl.is_active(&state));
    }

    #[test]
    fn test_flip_brackets() {
        assert_eq!(Action::text("(").flip_brackets(), Action::text(")"));
        assert_eq!(Action::text("«»").flip_brackets(), Action::text("»«"));
        assert_eq!(Action::text("a").flip_brackets(), Action::text("a"));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(Action::text("x")).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["text"], "x");
        assert!(json.get("hidden").is_none());

        let parsed: Action = serde_json::from_str(r#"{"type":"enter"}"#).unwrap();
        assert_eq!(parsed, Action::Enter);
    }
}
