//! Per-tick driver: the glue between a frontend's update callback and the session.
//! This module exists so the frontend only samples keys, measures time and draws.
//! It does not own rendering or key polling.

use std::time::Duration;

use crate::info_text::{health_text, info_text};
use crate::input::{InputLatch, KeyState};
use crate::journal::MatchJournal;
use crate::opponent::ActionSource;
use crate::session::{Phase, Session};
use crate::types::{Exchange, Outcome};

/// Receives the three text fields of the fight screen.
pub trait Presenter {
    fn set_player_health_text(&mut self, text: &str);
    fn set_opponent_health_text(&mut self, text: &str);
    fn set_info_text(&mut self, text: &str);
}

/// Switches away from the fight once the post-match delay has run out.
pub trait SceneTransition {
    fn load_outcome_scene(&mut self, won: bool);
}

/// What happened during one call to [`FightDriver::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickEvent {
    Idle,
    Resolved(Exchange),
    SceneLoaded(Outcome),
}

pub struct FightDriver<O> {
    session: Session,
    latch: InputLatch,
    opponent: O,
    journal: Option<MatchJournal>,
}

impl<O: ActionSource> FightDriver<O> {
    pub fn new(session: Session, opponent: O) -> Self {
        Self { session, latch: InputLatch::new(), opponent, journal: None }
    }

    /// Record every resolved player action into `journal`.
    pub fn with_journal(mut self, journal: MatchJournal) -> Self {
        self.journal = Some(journal);
        self
    }

    /// Push the starting health values to the presenter.
    pub fn start(&self, presenter: &mut impl Presenter) {
        self.render_health(presenter);
    }

    pub fn update(
        &mut self,
        keys: KeyState,
        dt: Duration,
        presenter: &mut impl Presenter,
        scenes: &mut impl SceneTransition,
    ) -> TickEvent {
        match self.session.phase() {
            Phase::Active => {
                let player_action = self.latch.sample(keys);
                if player_action.is_none() {
                    return TickEvent::Idle;
                }
                let opponent_action = self.opponent.next_action();
                let Some(exchange) = self.session.play(player_action, opponent_action) else {
                    return TickEvent::Idle;
                };
                if let Some(journal) = &mut self.journal {
                    journal.record(player_action);
                }
                self.render_health(presenter);
                presenter.set_info_text(&info_text(&exchange));
                TickEvent::Resolved(exchange)
            }
            Phase::Ending { .. } => match self.session.advance_time(dt) {
                Some(outcome) => {
                    scenes.load_outcome_scene(outcome.is_win());
                    TickEvent::SceneLoaded(outcome)
                }
                None => TickEvent::Idle,
            },
            Phase::Terminal(_) => TickEvent::Idle,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn journal(&self) -> Option<&MatchJournal> {
        self.journal.as_ref()
    }

    fn render_health(&self, presenter: &mut impl Presenter) {
        presenter.set_player_health_text(&health_text(self.session.player_health()));
        presenter.set_opponent_health_text(&health_text(self.session.opponent_health()));
    }
}
