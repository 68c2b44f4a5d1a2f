//! Keyboard and mouse input, mapped to front-end actions.

use crossterm::event::{KeyCode, KeyModifiers};

/// An input event from the terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Key(Action),
    /// Left button pressed at screen position.
    Press { x: u16, y: u16 },
    /// Pointer moved with the left button held.
    Drag { x: u16, y: u16 },
    Release,
    /// The terminal was resized; the next frame is drawn in full.
    Resize,
}

/// What mouse clicks on the grid place.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaceMode {
    Start,
    End,
    #[default]
    Obstacle,
}

impl PlaceMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Obstacle => "obstacles",
        }
    }
}

/// A key binding's meaning.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Run,
    PauseToggle,
    Faster,
    Slower,
    NextAlgorithm,
    Reset,
    Regenerate,
    ClearObstacles,
    Place(PlaceMode),
    Quit,
}

/// Map a key press to its action.
pub fn action_for(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(code, KeyCode::Char('c')).then_some(Action::Quit);
    }
    let action = match code {
        KeyCode::Enter => Action::Run,
        KeyCode::Char(' ') => Action::PauseToggle,
        KeyCode::Char('+' | '=') | KeyCode::Right => Action::Faster,
        KeyCode::Char('-' | '_') | KeyCode::Left => Action::Slower,
        KeyCode::Tab => Action::NextAlgorithm,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('g') => Action::Regenerate,
        KeyCode::Char('c') => Action::ClearObstacles,
        KeyCode::Char('s') => Action::Place(PlaceMode::Start),
        KeyCode::Char('e') => Action::Place(PlaceMode::End),
        KeyCode::Char('o') => Action::Place(PlaceMode::Obstacle),
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}
