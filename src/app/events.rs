//! Key event handling

use crossterm::event::{KeyCode, KeyEvent};

use super::state::App;

impl App {
    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.session.stop();
                self.should_quit = true;
            }
            KeyCode::Char('s') => self.session.start(),
            // Promote is a no-op until the pre-fetched set is ready
            KeyCode::Char('n') | KeyCode::Enter => self.session.promote_next(),
            KeyCode::Char('r') => self.session.retry_prefetch(),
            KeyCode::Char('x') => self.session.stop(),
            _ => {}
        }
    }
}
