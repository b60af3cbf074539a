use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use tienda_artifacts::LoadState;
use tienda_i18n::Language;

use crate::{tabs::Tab, ui};

/// Top-level dashboard state: the settled load result plus the two UI
/// toggles (language, active tab). Both toggles are owned here and passed
/// down to every widget as plain values; nothing reads ambient state.
#[derive(Debug)]
pub struct App {
    state: LoadState,
    language: Language,
    tab: Tab,
    should_exit: bool,
}

impl App {
    #[must_use]
    pub fn new(state: LoadState, language: Language) -> Self {
        Self {
            state,
            language,
            tab: Tab::default(),
            should_exit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        while !self.should_exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match &self.state {
            LoadState::Ready(bundle) => {
                ui::draw_dashboard(frame, bundle, self.language, self.tab);
            }
            LoadState::Error(message) => ui::draw_error_page(frame, message, self.language),
            // The load settles before the TUI starts; kept for completeness.
            LoadState::Loading => ui::draw_loading_page(frame, self.language),
        }
    }

    fn handle_events(&mut self) -> anyhow::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Char('l') => self.language = self.language.toggled(),
            KeyCode::Char(digit @ '1'..='5') => {
                if let Some(tab) = Tab::from_digit(digit) {
                    self.tab = tab;
                }
            }
            KeyCode::Tab | KeyCode::Right => self.tab = self.tab.next(),
            KeyCode::BackTab | KeyCode::Left => self.tab = self.tab.previous(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn test_app() -> App {
        App::new(LoadState::Error("boom".to_owned()), Language::En)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn starts_on_overview() {
        assert_eq!(test_app().tab, Tab::Overview);
    }

    #[test]
    fn number_keys_select_tabs_directly() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.tab, Tab::Areas);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.tab, Tab::Participants);
    }

    #[test]
    fn arrows_cycle_through_tabs() {
        let mut app = test_app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.tab, Tab::Participants);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.tab, Tab::Details);
    }

    #[test]
    fn language_key_toggles() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.language, Language::Es);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.language, Language::En);
    }

    #[test]
    fn quit_keys_request_exit() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_exit);

        let mut app = test_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_exit);
    }

    #[test]
    fn unbound_keys_change_nothing() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.tab, Tab::Overview);
        assert_eq!(app.language, Language::En);
        assert!(!app.should_exit);
    }
}
