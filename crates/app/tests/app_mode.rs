use std::time::Duration;

use fight_app::app_loop::{AppScreen, AppState, FrameInput, build_driver};
use fight_core::{
    Action, FightDriver, KeyState, LogicalKey, MatchConfig, Outcome, ScriptedOpponent, Session,
    TickEvent,
};

const FRAME: Duration = Duration::from_millis(16);

fn scripted_driver(
    config: MatchConfig,
    actions: impl IntoIterator<Item = Action>,
) -> FightDriver<ScriptedOpponent> {
    let session = Session::new(config).expect("valid config");
    FightDriver::new(session, ScriptedOpponent::new(actions))
}

fn press(key: LogicalKey) -> FrameInput {
    FrameInput { keys: KeyState::from_pressed(&[key]), rematch: false }
}

fn release() -> FrameInput {
    FrameInput::default()
}

#[test]
fn test_exchange_updates_all_three_text_fields() {
    let mut driver = scripted_driver(MatchConfig::default(), [Action::AttackLow]);
    let mut app = AppState::new();
    app.begin(&driver);

    app.tick(&mut driver, &press(LogicalKey::AttackHigh), FRAME);

    assert_eq!(app.texts.player_health, "89");
    assert_eq!(app.texts.opponent_health, "85");
    assert_eq!(app.texts.info, "You attacked high: 15\nEnemy attacked low: 11");
    assert_eq!(app.screen, AppScreen::Fight);
}

#[test]
fn test_knockout_switches_to_won_screen_after_delay() {
    let config = MatchConfig { starting_health: 10, ..MatchConfig::default() };
    let mut driver = scripted_driver(config, [Action::BlockLow]);
    let mut app = AppState::new();
    app.begin(&driver);

    app.tick(&mut driver, &press(LogicalKey::AttackHigh), FRAME);
    assert_eq!(app.texts.opponent_health, "0");
    assert_eq!(app.screen, AppScreen::Fight, "outcome screen waits for the delay");

    let mut frames = 0;
    while app.screen == AppScreen::Fight {
        app.tick(&mut driver, &release(), FRAME);
        frames += 1;
        assert!(frames < 1_000, "outcome screen never appeared");
    }

    assert_eq!(app.screen, AppScreen::Outcome(Outcome::Won));
    // 2s at 16ms per frame.
    assert_eq!(frames, 125);
}

#[test]
fn test_fight_keys_are_ignored_on_outcome_screen() {
    let config = MatchConfig {
        starting_health: 1,
        game_over_delay_secs: 0.0,
        ..MatchConfig::default()
    };
    let mut driver = scripted_driver(config, [Action::AttackHigh, Action::AttackHigh]);
    let mut app = AppState::new();
    app.begin(&driver);

    app.tick(&mut driver, &press(LogicalKey::BlockLow), FRAME);
    let event = app.tick(&mut driver, &release(), FRAME);
    assert_eq!(event, TickEvent::SceneLoaded(Outcome::Lost));
    assert_eq!(app.screen, AppScreen::Outcome(Outcome::Lost));

    let event = app.tick(&mut driver, &press(LogicalKey::AttackLow), FRAME);
    assert_eq!(event, TickEvent::Idle);
    assert_eq!(driver.session().exchanges_resolved(), 1);
}

#[test]
fn test_rematch_restarts_with_fresh_session() {
    let config = MatchConfig {
        starting_health: 1,
        game_over_delay_secs: 0.0,
        ..MatchConfig::default()
    };
    let mut driver = build_driver(3, config).expect("valid config");
    let mut app = AppState::new();
    app.begin(&driver);

    // Keep attacking high until something lands; BlockHigh is the only counter.
    for _ in 0..200 {
        if app.screen != AppScreen::Fight {
            break;
        }
        app.tick(&mut driver, &press(LogicalKey::AttackHigh), FRAME);
        app.tick(&mut driver, &release(), FRAME);
    }
    assert!(matches!(app.screen, AppScreen::Outcome(_)));

    let rematch = FrameInput { rematch: true, ..FrameInput::default() };
    app.tick(&mut driver, &rematch, FRAME);
    assert!(app.rematch_requested);

    let driver = build_driver(4, config).expect("valid config");
    app.begin(&driver);
    assert_eq!(app.screen, AppScreen::Fight);
    assert!(!app.rematch_requested);
    assert_eq!(app.texts.player_health, "1");
    assert!(app.texts.info.is_empty());
}
