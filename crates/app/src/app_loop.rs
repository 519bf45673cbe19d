use std::time::Duration;

use fight_core::{
    ActionSource, ConfigError, FightDriver, KeyState, MatchConfig, MatchJournal, Outcome,
    Presenter, RandomOpponent, SceneTransition, Session, TickEvent,
};

/// Everything sampled from the keyboard for one rendered frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    pub keys: KeyState,
    pub rematch: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppScreen {
    #[default]
    Fight,
    Outcome(Outcome),
}

impl SceneTransition for AppScreen {
    fn load_outcome_scene(&mut self, won: bool) {
        *self = AppScreen::Outcome(if won { Outcome::Won } else { Outcome::Lost });
    }
}

/// The three text fields of the fight screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FightTexts {
    pub player_health: String,
    pub opponent_health: String,
    pub info: String,
}

impl Presenter for FightTexts {
    fn set_player_health_text(&mut self, text: &str) {
        self.player_health = text.to_string();
    }

    fn set_opponent_health_text(&mut self, text: &str) {
        self.opponent_health = text.to_string();
    }

    fn set_info_text(&mut self, text: &str) {
        self.info = text.to_string();
    }
}

#[derive(Default)]
pub struct AppState {
    pub screen: AppScreen,
    pub texts: FightTexts,
    /// Set on the outcome screen; the caller builds a fresh session and calls `begin`.
    pub rematch_requested: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the screen for a new match and show its starting health.
    pub fn begin<O: ActionSource>(&mut self, driver: &FightDriver<O>) {
        self.screen = AppScreen::Fight;
        self.texts = FightTexts::default();
        self.rematch_requested = false;
        driver.start(&mut self.texts);
    }

    /// Process input and logic for a single frame.
    pub fn tick<O: ActionSource>(
        &mut self,
        driver: &mut FightDriver<O>,
        input: &FrameInput,
        dt: Duration,
    ) -> TickEvent {
        let screen = self.screen;
        match screen {
            AppScreen::Fight => driver.update(input.keys, dt, &mut self.texts, &mut self.screen),
            AppScreen::Outcome(_) => {
                if input.rematch {
                    self.rematch_requested = true;
                }
                TickEvent::Idle
            }
        }
    }
}

/// A driver against the random opponent that journals every player action.
pub fn build_driver(
    seed: u64,
    config: MatchConfig,
) -> Result<FightDriver<RandomOpponent>, ConfigError> {
    let session = Session::new(config)?;
    Ok(FightDriver::new(session, RandomOpponent::new(seed))
        .with_journal(MatchJournal::new(seed, config)))
}
