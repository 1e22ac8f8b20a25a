use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::boot::Phase;

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    /// Zero-based position in the skin switcher
    SelectSkin(usize),
    NextSkin,
    PreviousSkin,
}

#[derive(Debug, Default)]
pub struct EventHandler {
    should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Map a key press to an action. Skin keys only apply once the splash is gone.
    pub fn handle_key_event(&mut self, key: KeyEvent, phase: Phase) -> EventResult {
        if key.kind != KeyEventKind::Press {
            return EventResult::Continue;
        }

        if is_quit(&key) {
            self.should_quit = true;
            return EventResult::Quit;
        }

        if phase == Phase::Splash {
            return EventResult::Continue;
        }

        match key.code {
            KeyCode::Char(c @ '1'..='9') => EventResult::SelectSkin(c as usize - '1' as usize),
            KeyCode::Tab | KeyCode::Right => EventResult::NextSkin,
            KeyCode::BackTab | KeyCode::Left => EventResult::PreviousSkin,
            _ => EventResult::Continue,
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Esc => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys_in_both_phases() {
        for phase in [Phase::Splash, Phase::Main] {
            let mut handler = EventHandler::new();
            assert_eq!(handler.handle_key_event(press(KeyCode::Char('q')), phase), EventResult::Quit);
            assert!(handler.should_quit());

            let mut handler = EventHandler::new();
            assert_eq!(handler.handle_key_event(press(KeyCode::Esc), phase), EventResult::Quit);

            let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(handler.handle_key_event(ctrl_c, phase), EventResult::Quit);
        }
    }

    #[test]
    fn test_plain_c_does_not_quit() {
        let mut handler = EventHandler::new();
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('c')), Phase::Main),
            EventResult::Continue
        );
        assert!(!handler.should_quit());
    }

    #[test]
    fn test_skin_keys_on_main_view() {
        let mut handler = EventHandler::new();
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('1')), Phase::Main),
            EventResult::SelectSkin(0)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('4')), Phase::Main),
            EventResult::SelectSkin(3)
        );
        assert_eq!(handler.handle_key_event(press(KeyCode::Tab), Phase::Main), EventResult::NextSkin);
        assert_eq!(handler.handle_key_event(press(KeyCode::Right), Phase::Main), EventResult::NextSkin);
        assert_eq!(
            handler.handle_key_event(press(KeyCode::BackTab), Phase::Main),
            EventResult::PreviousSkin
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Left), Phase::Main),
            EventResult::PreviousSkin
        );
    }

    #[test]
    fn test_skin_keys_ignored_during_splash() {
        let mut handler = EventHandler::new();
        for code in [KeyCode::Char('2'), KeyCode::Tab, KeyCode::Left] {
            assert_eq!(handler.handle_key_event(press(code), Phase::Splash), EventResult::Continue);
        }
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut handler = EventHandler::new();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handler.handle_key_event(release, Phase::Main), EventResult::Continue);
        assert!(!handler.should_quit());
    }
}
