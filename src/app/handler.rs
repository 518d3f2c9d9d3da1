//! Input handling: maps key/mouse events to slider input.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::gesture::PointerInput;
use crate::core::slider::{DeferredTask, Outcome};

use super::state::AppState;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        _ => {}
    }
}

/// Left-button down/drag/up become gesture start/move/end.  The release
/// column is fed as a final move so the decision uses where the pointer
/// was let go.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let input = PointerInput::Mouse {
        x: f64::from(mouse.column),
    };
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            state.slider.on_start(&input);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            state.slider.on_move(&input);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            state.slider.on_move(&input);
            match state.slider.on_end() {
                Some(Outcome::Committed { to, .. }) => {
                    state.status_message = Some(format!(
                        "card {}/{}",
                        to + 1,
                        state.slider.deck().len()
                    ));
                }
                Some(Outcome::Cancelled) => state.status_message = None,
                None => {}
            }
        }
        _ => {}
    }
}

/// Terminal resized.  Applies to the next drag; a live drag keeps the
/// geometry it started with.
pub fn handle_resize(state: &mut AppState, width: u16) {
    state.slider.stage_mut().resize(width);
}

/// Advance eased motion by one frame.  Returns `true` if anything moved.
pub fn handle_tick(state: &mut AppState) -> bool {
    let stage = state.slider.stage_mut();
    let moving = stage.is_animating();
    stage.tick();
    moving
}

pub fn handle_deferred(state: &mut AppState, task: DeferredTask) {
    state.slider.run_deferred(task);
}
