//! Application state
//!
//! Thin shell around the session controller; everything that matters
//! happens in `session`, the app only routes keys and draws the view.

use crate::session::Session;

pub struct App {
    pub(super) session: Session,
    pub(super) should_quit: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            should_quit: false,
        }
    }

    /// Advance the session; call once per UI tick
    pub fn tick(&mut self) {
        self.session.pump();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
