//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. The mapping depends on the [`InputMode`] of
//! the screen currently on top.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use taskboard_protocol::Message;

use crate::state::InputMode;

/// Default poll timeout for events.
///
/// Also bounds how late a fired reminder can be shown.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// Key releases and repeats are ignored. Mouse clicks only count on the
/// bare board.
#[must_use]
pub fn event_to_message(event: &Event, mode: InputMode) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => key_to_message(*key, mode),
        Event::Mouse(mouse) if mode == InputMode::Board => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Only left-click press events are handled, producing a `ClickAt` message
/// with the click coordinates.
#[must_use]
fn mouse_to_message(mouse: &crossterm::event::MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Converts a terminal key event to an application message.
///
/// `Ctrl+C` quits from every mode.
#[must_use]
pub fn key_to_message(key: KeyEvent, mode: InputMode) -> Option<Message> {
    if is_ctrl_c(key) {
        return Some(Message::Quit);
    }

    match mode {
        InputMode::Board | InputMode::Help => key_to_board_message(key),
        InputMode::Notice => Some(Message::DismissNotice),
        InputMode::Form => key_to_form_message(key),
        InputMode::Prompt => key_to_prompt_message(key),
        InputMode::Calendar => key_to_calendar_message(key),
        InputMode::Confirm => key_to_confirm_message(key),
    }
}

/// Board key bindings.
///
/// | Key | Action |
/// |-----|--------|
/// | `←` `→` `↑` `↓` | Navigate |
/// | `Shift+←` `Shift+→` | Move task to the neighbouring column |
/// | `Shift+↑` `Shift+↓` | Reorder task within its column |
/// | `n` | New task |
/// | `Enter` or `e` | Edit task |
/// | `d` or `Delete` | Delete task |
/// | `c` | Calendar |
/// | `t` | Toggle dark mode |
/// | `x` | Export PDF |
/// | `?` | Toggle help |
/// | `Esc` | Escape |
fn key_to_board_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        match key.code {
            KeyCode::Left => return Some(Message::MoveTaskLeft),
            KeyCode::Right => return Some(Message::MoveTaskRight),
            KeyCode::Up => return Some(Message::MoveTaskUp),
            KeyCode::Down => return Some(Message::MoveTaskDown),
            _ => {}
        }
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Char('n') => Some(Message::NewTask),
        KeyCode::Enter | KeyCode::Char('e') => Some(Message::EditTask),
        KeyCode::Char('d') | KeyCode::Delete => Some(Message::DeleteTask),
        KeyCode::Char('c') => Some(Message::OpenCalendar),
        KeyCode::Char('t') => Some(Message::ToggleTheme),
        KeyCode::Char('x') => Some(Message::ExportPdf),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Task dialog key bindings.
///
/// | Key | Action |
/// |-----|--------|
/// | `Tab` or `↓` | Next field |
/// | `Shift+Tab` or `↑` | Previous field |
/// | `←` `→` | Change priority |
/// | `Enter` | Save |
/// | `Esc` | Cancel |
/// | `Backspace` | Delete character |
/// | Any char | Input |
fn key_to_form_message(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(Message::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(Message::PrevField),
        KeyCode::Left => Some(Message::CycleValue { delta: -1 }),
        KeyCode::Right => Some(Message::CycleValue { delta: 1 }),
        _ => key_to_text_message(key),
    }
}

/// Export prompt key bindings: text input, `Enter` to export, `Esc` to cancel.
fn key_to_prompt_message(key: KeyEvent) -> Option<Message> {
    key_to_text_message(key)
}

fn key_to_text_message(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Enter => Some(Message::Submit),
        KeyCode::Esc => Some(Message::Cancel),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::Input { ch })
        }
        _ => None,
    }
}

/// Calendar key bindings.
///
/// | Key | Action |
/// |-----|--------|
/// | `←` `→` | Previous / next day |
/// | `↑` `↓` | Previous / next week |
/// | `PageUp` `PageDown` | Previous / next month |
/// | `Home` | Today |
/// | `Enter` | Show tasks due on the date |
/// | `Esc` | Close |
fn key_to_calendar_message(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Left => Some(Message::CalendarMoveDays { days: -1 }),
        KeyCode::Right => Some(Message::CalendarMoveDays { days: 1 }),
        KeyCode::Up => Some(Message::CalendarMoveDays { days: -7 }),
        KeyCode::Down => Some(Message::CalendarMoveDays { days: 7 }),
        KeyCode::PageUp => Some(Message::CalendarMoveMonths { months: -1 }),
        KeyCode::PageDown => Some(Message::CalendarMoveMonths { months: 1 }),
        KeyCode::Home => Some(Message::CalendarToday),
        KeyCode::Enter => Some(Message::CalendarSelect),
        KeyCode::Esc => Some(Message::Cancel),
        _ => None,
    }
}

/// Delete confirmation: `y` or `Enter` confirms, `n` or `Esc` cancels.
fn key_to_confirm_message(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Message::ConfirmDelete),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Message::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_mouse_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn board(code: KeyCode) -> Option<Message> {
        key_to_message(make_key(code), InputMode::Board)
    }

    const ALL_MODES: [InputMode; 7] = [
        InputMode::Board,
        InputMode::Help,
        InputMode::Notice,
        InputMode::Form,
        InputMode::Prompt,
        InputMode::Calendar,
        InputMode::Confirm,
    ];

    #[test]
    fn ctrl_c_quits_in_every_mode() {
        let key = make_key_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in ALL_MODES {
            assert_eq!(key_to_message(key, mode), Some(Message::Quit), "{mode:?}");
        }
        assert_eq!(board(KeyCode::Char('q')), None);
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(board(KeyCode::Left), Some(Message::NavigateLeft));
        assert_eq!(board(KeyCode::Right), Some(Message::NavigateRight));
        assert_eq!(board(KeyCode::Up), Some(Message::NavigateUp));
        assert_eq!(board(KeyCode::Down), Some(Message::NavigateDown));
        assert_eq!(board(KeyCode::Esc), Some(Message::Escape));
    }

    #[test]
    fn shifted_arrows_move_tasks() {
        let shifted = |code| {
            key_to_message(
                make_key_with_modifiers(code, KeyModifiers::SHIFT),
                InputMode::Board,
            )
        };
        assert_eq!(shifted(KeyCode::Left), Some(Message::MoveTaskLeft));
        assert_eq!(shifted(KeyCode::Right), Some(Message::MoveTaskRight));
        assert_eq!(shifted(KeyCode::Up), Some(Message::MoveTaskUp));
        assert_eq!(shifted(KeyCode::Down), Some(Message::MoveTaskDown));
    }

    #[test]
    fn action_keys() {
        assert_eq!(board(KeyCode::Char('n')), Some(Message::NewTask));
        assert_eq!(board(KeyCode::Enter), Some(Message::EditTask));
        assert_eq!(board(KeyCode::Char('e')), Some(Message::EditTask));
        assert_eq!(board(KeyCode::Char('d')), Some(Message::DeleteTask));
        assert_eq!(board(KeyCode::Delete), Some(Message::DeleteTask));
        assert_eq!(board(KeyCode::Char('c')), Some(Message::OpenCalendar));
        assert_eq!(board(KeyCode::Char('t')), Some(Message::ToggleTheme));
        assert_eq!(board(KeyCode::Char('x')), Some(Message::ExportPdf));
        assert_eq!(board(KeyCode::Char('?')), Some(Message::ToggleHelp));
    }

    #[test]
    fn unmapped_board_keys_return_none() {
        assert_eq!(board(KeyCode::Char('z')), None);
        assert_eq!(board(KeyCode::F(1)), None);
    }

    #[test]
    fn any_key_dismisses_notice() {
        for code in [KeyCode::Char('n'), KeyCode::Enter, KeyCode::Esc, KeyCode::Left] {
            assert_eq!(
                key_to_message(make_key(code), InputMode::Notice),
                Some(Message::DismissNotice)
            );
        }
    }

    #[test]
    fn form_keys() {
        let form = |code| key_to_message(make_key(code), InputMode::Form);
        assert_eq!(form(KeyCode::Tab), Some(Message::NextField));
        assert_eq!(form(KeyCode::Down), Some(Message::NextField));
        assert_eq!(form(KeyCode::BackTab), Some(Message::PrevField));
        assert_eq!(form(KeyCode::Up), Some(Message::PrevField));
        assert_eq!(form(KeyCode::Left), Some(Message::CycleValue { delta: -1 }));
        assert_eq!(form(KeyCode::Right), Some(Message::CycleValue { delta: 1 }));
        assert_eq!(form(KeyCode::Enter), Some(Message::Submit));
        assert_eq!(form(KeyCode::Esc), Some(Message::Cancel));
        assert_eq!(form(KeyCode::Backspace), Some(Message::Backspace));
        assert_eq!(form(KeyCode::Char('n')), Some(Message::Input { ch: 'n' }));
    }

    #[test]
    fn prompt_keys_are_text_only() {
        let prompt = |code| key_to_message(make_key(code), InputMode::Prompt);
        assert_eq!(prompt(KeyCode::Char('/')), Some(Message::Input { ch: '/' }));
        assert_eq!(prompt(KeyCode::Enter), Some(Message::Submit));
        assert_eq!(prompt(KeyCode::Esc), Some(Message::Cancel));
        assert_eq!(prompt(KeyCode::Tab), None);
    }

    #[test]
    fn control_chars_are_not_typed() {
        let key = make_key_with_modifiers(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(key_to_message(key, InputMode::Prompt), None);
    }

    #[test]
    fn calendar_keys() {
        let cal = |code| key_to_message(make_key(code), InputMode::Calendar);
        assert_eq!(cal(KeyCode::Left), Some(Message::CalendarMoveDays { days: -1 }));
        assert_eq!(cal(KeyCode::Down), Some(Message::CalendarMoveDays { days: 7 }));
        assert_eq!(cal(KeyCode::PageUp), Some(Message::CalendarMoveMonths { months: -1 }));
        assert_eq!(cal(KeyCode::Home), Some(Message::CalendarToday));
        assert_eq!(cal(KeyCode::Enter), Some(Message::CalendarSelect));
        assert_eq!(cal(KeyCode::Esc), Some(Message::Cancel));
    }

    #[test]
    fn confirm_keys() {
        let confirm = |code| key_to_message(make_key(code), InputMode::Confirm);
        assert_eq!(confirm(KeyCode::Char('y')), Some(Message::ConfirmDelete));
        assert_eq!(confirm(KeyCode::Enter), Some(Message::ConfirmDelete));
        assert_eq!(confirm(KeyCode::Char('n')), Some(Message::Cancel));
        assert_eq!(confirm(KeyCode::Esc), Some(Message::Cancel));
        assert_eq!(confirm(KeyCode::Char('d')), None);
    }

    #[test]
    fn mouse_left_click_generates_click_at() {
        assert_eq!(
            mouse_to_message(&make_mouse_click(10, 5)),
            Some(Message::ClickAt { column: 10, row: 5 })
        );
    }

    #[test]
    fn mouse_right_click_ignored() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(mouse_to_message(&mouse), None);
    }

    #[test]
    fn clicks_only_count_on_board() {
        let click = Event::Mouse(make_mouse_click(15, 8));
        assert_eq!(
            event_to_message(&click, InputMode::Board),
            Some(Message::ClickAt { column: 15, row: 8 })
        );
        assert_eq!(event_to_message(&click, InputMode::Form), None);
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut key = make_key(KeyCode::Char('n'));
        assert_eq!(
            event_to_message(&Event::Key(key), InputMode::Board),
            Some(Message::NewTask)
        );
        key.kind = KeyEventKind::Release;
        assert_eq!(event_to_message(&Event::Key(key), InputMode::Board), None);
    }

    #[test]
    fn event_to_message_ignores_resize_events() {
        assert_eq!(event_to_message(&Event::Resize(80, 24), InputMode::Board), None);
    }
}
