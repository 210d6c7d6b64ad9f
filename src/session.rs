//! Suggestion session state machine
//!
//! Owns the session lifecycle, pre-fetch scheduling, and error recovery.
//! One sitting flows through
//! `Inactive → Active(Starting) → Active(InitialAnalysis) → Active(Ready)
//! ⇄ Active(PrefetchInFlight)`, with `Stopped` reachable from any active
//! phase on a fatal error and `Inactive` restored by an explicit stop.
//!
//! All mutation happens on the caller's thread; the advisor worker only
//! communicates over channels. Responses are tagged with a request id, and
//! anything stale (wrong id, or the session no longer active) is discarded,
//! so a late result can never mutate a stopped session.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::advisor::worker::{self, AdvisorRequest, AdvisorResponse};
use crate::advisor::{AdvisorError, MoveAdvisor, SuggestionSet};
use crate::capture::{CaptureBackend, Frame, FrameSource};
use crate::error::SessionError;

/// Substates of an active session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePhase {
    /// Capture acquired, first frame not yet analyzed
    Starting,
    /// First advisor call in flight; nothing to show yet
    InitialAnalysis,
    /// Current suggestions on display, no call in flight
    Ready,
    /// Current suggestions on display, background pre-fetch in flight
    PrefetchInFlight,
}

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Inactive,
    Active(ActivePhase),
    /// Ended by a fatal error; the error stays visible until restart
    Stopped,
}

/// Read-only snapshot of the session for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub state: SessionState,
    pub current_suggestions: Vec<String>,
    pub has_next_ready: bool,
    pub is_background_loading: bool,
    pub is_initial_analysis: bool,
    pub last_error: Option<String>,
}

/// What an in-flight advisor request is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestPurpose {
    /// First analysis of a sitting; a failure here is fatal
    Initial,
    /// Speculative background fetch; a failure here is not
    Prefetch,
}

/// The suggestion session controller
pub struct Session {
    state: SessionState,
    backend: Box<dyn CaptureBackend>,
    source: Option<Box<dyn FrameSource>>,
    /// Suggestions currently shown to the player
    current: SuggestionSet,
    /// Pre-fetched suggestions, hidden until promoted. Present only when a
    /// pre-fetch has completed and not yet been promoted.
    next: Option<SuggestionSet>,
    /// Raw text of the last *shown* set; advisor context for the next call
    last_shown: String,
    last_error: Option<SessionError>,
    request_tx: Option<Sender<AdvisorRequest>>,
    response_rx: Option<Receiver<AdvisorResponse>>,
    /// Monotonic request id; responses with any other id are stale
    request_id: u64,
    in_flight: Option<(u64, RequestPurpose)>,
}

impl Session {
    /// Create a session over the given capture backend
    ///
    /// The advisor channels are wired separately with [`set_channels`]
    /// (or use [`with_worker`] to get both in one step).
    ///
    /// [`set_channels`]: Session::set_channels
    /// [`with_worker`]: Session::with_worker
    pub fn new(backend: Box<dyn CaptureBackend>) -> Self {
        Self {
            state: SessionState::Inactive,
            backend,
            source: None,
            current: SuggestionSet::default(),
            next: None,
            last_shown: String::new(),
            last_error: None,
            request_tx: None,
            response_rx: None,
            request_id: 0,
            in_flight: None,
        }
    }

    /// Create a session and spawn an advisor worker for it
    pub fn with_worker(
        backend: Box<dyn CaptureBackend>,
        advisor: Result<Box<dyn MoveAdvisor>, AdvisorError>,
    ) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        worker::spawn_worker(advisor, request_rx, response_tx);

        let mut session = Self::new(backend);
        session.set_channels(request_tx, response_rx);
        session
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<AdvisorRequest>,
        response_rx: Receiver<AdvisorResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Snapshot the session for rendering
    pub fn view(&self) -> SessionView {
        SessionView {
            state: self.state,
            current_suggestions: self.current.moves().to_vec(),
            has_next_ready: self.next.is_some(),
            is_background_loading: self.state
                == SessionState::Active(ActivePhase::PrefetchInFlight),
            is_initial_analysis: matches!(
                self.state,
                SessionState::Active(ActivePhase::Starting | ActivePhase::InitialAnalysis)
            ),
            last_error: self.last_error.as_ref().map(SessionError::user_message),
        }
    }

    /// Start a new sitting: acquire capture, analyze the first frame
    ///
    /// On capture denial or failure the session reports the error and stays
    /// `Inactive`; nothing is thrown at the caller.
    pub fn start(&mut self) {
        if matches!(self.state, SessionState::Active(_)) {
            return;
        }

        self.clear_session_data();
        match self.backend.acquire() {
            Ok(source) => {
                log::info!("capture stream acquired");
                self.source = Some(source);
                self.state = SessionState::Active(ActivePhase::Starting);
                self.begin_initial_analysis();
            }
            Err(err) => {
                log::warn!("could not acquire capture stream: {err}");
                self.last_error = Some(SessionError::CaptureUnavailable(err));
                self.state = SessionState::Inactive;
            }
        }
    }

    /// Stop the sitting and reset to `Inactive`
    ///
    /// Releases the capture stream and clears all suggestion and error
    /// state. Any advisor response still in flight becomes stale.
    pub fn stop(&mut self) {
        log::info!("session stopped");
        self.source = None;
        self.clear_session_data();
        self.state = SessionState::Inactive;
    }

    /// Promote the pre-fetched set to the display
    ///
    /// No effect unless `next` is ready. Promotion updates the shown text,
    /// empties `next`, and immediately schedules exactly one new pre-fetch
    /// (unless the promoted set was the terminal "no moves" case).
    pub fn promote_next(&mut self) {
        if !matches!(self.state, SessionState::Active(_)) {
            return;
        }
        let Some(next) = self.next.take() else {
            return;
        };

        self.last_shown = next.raw().to_string();
        let terminal = next.is_terminal();
        self.current = next;
        self.last_error = None;

        if terminal {
            self.state = SessionState::Active(ActivePhase::Ready);
        } else {
            self.schedule_prefetch();
        }
    }

    /// Retry the background pre-fetch after a non-fatal failure
    ///
    /// Only meaningful in `Active(Ready)` with no pre-fetched set waiting;
    /// promotion stays disabled until a pre-fetch actually lands.
    pub fn retry_prefetch(&mut self) {
        if self.state != SessionState::Active(ActivePhase::Ready) {
            return;
        }
        if self.next.is_some() || self.in_flight.is_some() || self.current.is_terminal() {
            return;
        }
        self.schedule_prefetch();
    }

    /// Drain worker responses and advance the state machine
    ///
    /// Also notices when the capture source has ended on its own (e.g. the
    /// user revoked sharing) and runs the normal stop transition. Call this
    /// once per UI tick.
    pub fn pump(&mut self) {
        if self.source_has_ended() {
            log::info!("capture source ended externally");
            self.stop();
            return;
        }

        loop {
            let message = match &self.response_rx {
                Some(rx) => match rx.try_recv() {
                    Ok(message) => message,
                    Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
                },
                None => break,
            };
            self.handle_response(message);
        }
    }

    /// Report that the presentation layer cannot render the live preview
    ///
    /// Surfaces a message without changing session state; suggestions keep
    /// flowing even when the preview is broken.
    pub fn report_preview_error(&mut self, detail: impl Into<String>) {
        self.last_error = Some(SessionError::Preview(detail.into()));
    }

    fn source_has_ended(&self) -> bool {
        matches!(self.state, SessionState::Active(_))
            && self.source.as_ref().is_some_and(|s| s.terminated())
    }

    /// Capture the first frame and dispatch the initial advisor call
    fn begin_initial_analysis(&mut self) {
        self.state = SessionState::Active(ActivePhase::InitialAnalysis);

        match self.grab_frame() {
            Ok(frame) => {
                if !self.dispatch(frame, String::new(), RequestPurpose::Initial) {
                    self.fail_stop(SessionError::Communication(AdvisorError::NotConfigured(
                        "the advisor worker is not running".to_string(),
                    )));
                }
            }
            Err(err) => {
                // No first frame means nothing to analyze at all
                self.fail_stop(SessionError::CaptureUnavailable(err));
            }
        }
    }

    fn grab_frame(&mut self) -> Result<Frame, crate::capture::CaptureError> {
        match self.source.as_mut() {
            Some(source) => source.grab(),
            None => Err(crate::capture::CaptureError::NoStream),
        }
    }

    /// Send one advisor request; returns false if the worker is gone
    fn dispatch(&mut self, frame: Frame, prior_moves: String, purpose: RequestPurpose) -> bool {
        let Some(tx) = &self.request_tx else {
            return false;
        };

        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;

        if tx
            .send(AdvisorRequest::Suggest {
                frame,
                prior_moves,
                request_id,
            })
            .is_ok()
        {
            self.in_flight = Some((request_id, purpose));
            true
        } else {
            false
        }
    }

    fn handle_response(&mut self, message: AdvisorResponse) {
        let (request_id, outcome) = match message {
            AdvisorResponse::Suggestion { text, request_id } => (request_id, Ok(text)),
            AdvisorResponse::Failed { error, request_id } => (request_id, Err(error)),
        };

        let Some((expected_id, purpose)) = self.in_flight else {
            log::debug!("discarding advisor response {request_id}: nothing in flight");
            return;
        };
        if request_id != expected_id || !matches!(self.state, SessionState::Active(_)) {
            log::debug!("discarding stale advisor response {request_id}");
            return;
        }
        self.in_flight = None;

        match (purpose, outcome) {
            (RequestPurpose::Initial, Ok(text)) => self.finish_initial_analysis(&text),
            (RequestPurpose::Initial, Err(error)) => {
                // Nothing was ever shown; the sitting cannot continue
                self.fail_stop(SessionError::Communication(error));
            }
            (RequestPurpose::Prefetch, Ok(text)) => {
                self.next = Some(SuggestionSet::parse(&text));
                self.state = SessionState::Active(ActivePhase::Ready);
            }
            (RequestPurpose::Prefetch, Err(error)) => {
                // Non-fatal: the player can keep acting on the current set
                // and retry the pre-fetch later.
                log::warn!("pre-fetch failed: {error}");
                self.last_error = Some(SessionError::Communication(error));
                self.state = SessionState::Active(ActivePhase::Ready);
            }
        }
    }

    fn finish_initial_analysis(&mut self, text: &str) {
        let set = SuggestionSet::parse(text);
        self.last_shown = set.raw().to_string();
        let terminal = set.is_terminal();
        self.current = set;
        self.last_error = None;

        if terminal {
            // Game over (or board unreadable); nothing worth pre-fetching
            self.state = SessionState::Active(ActivePhase::Ready);
        } else {
            self.schedule_prefetch();
        }
    }

    /// Capture a fresh snapshot and fire a background advisor call
    ///
    /// Failures here are never fatal: the current suggestions stay on
    /// display and the pre-fetch can be retried.
    fn schedule_prefetch(&mut self) {
        if self.in_flight.is_some() {
            // One request in flight at a time
            self.state = SessionState::Active(ActivePhase::PrefetchInFlight);
            return;
        }

        match self.grab_frame() {
            Ok(frame) => {
                let prior = self.last_shown.clone();
                if self.dispatch(frame, prior, RequestPurpose::Prefetch) {
                    self.state = SessionState::Active(ActivePhase::PrefetchInFlight);
                } else {
                    self.state = SessionState::Active(ActivePhase::Ready);
                }
            }
            Err(err) => {
                log::warn!("pre-fetch capture failed: {err}");
                self.last_error = Some(SessionError::CaptureUnavailable(err));
                self.state = SessionState::Active(ActivePhase::Ready);
            }
        }
    }

    /// Fatal shutdown: release capture, keep only the error visible
    fn fail_stop(&mut self, error: SessionError) {
        log::warn!("session stopped on error: {error}");
        self.source = None;
        self.clear_session_data();
        self.last_error = Some(error);
        self.state = SessionState::Stopped;
    }

    fn clear_session_data(&mut self) {
        self.current = SuggestionSet::default();
        self.next = None;
        self.last_shown.clear();
        self.last_error = None;
        self.in_flight = None;
    }
}
