//! Key and pointer mapping from terminal events to game actions.

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::types::GameAction;

/// Actions produced by one pointer press (a move followed by a start).
pub type PointerActions = ArrayVec<GameAction, 2>;

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::MoveRight)
        }

        // Run control
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Reset),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameAction::ToggleMode),

        // Sound
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::ToggleMute),

        _ => None,
    }
}

/// Map a pointer press to actions.
///
/// Presses left of `split_x` (the board's middle column) move left, the rest
/// move right; either way the run starts, like tapping the handheld's screen.
pub fn handle_mouse_event(event: MouseEvent, split_x: u16) -> PointerActions {
    let mut out = PointerActions::new();
    if let MouseEventKind::Down(MouseButton::Left) = event.kind {
        if event.column < split_x {
            out.push(GameAction::MoveLeft);
        } else {
            out.push(GameAction::MoveRight);
        }
        out.push(GameAction::Start);
    }
    out
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
