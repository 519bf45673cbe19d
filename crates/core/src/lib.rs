pub mod combat;
pub mod config;
pub mod driver;
pub mod info_text;
pub mod input;
pub mod journal;
pub mod opponent;
pub mod replay;
pub mod session;
pub mod types;

pub use combat::{Resolution, VictoryCheck, check_victory, resolve};
pub use config::{ConfigError, MatchConfig};
pub use driver::{FightDriver, Presenter, SceneTransition, TickEvent};
pub use input::{InputLatch, KeyState, LogicalKey};
pub use journal::MatchJournal;
pub use opponent::{ActionSource, RandomOpponent, ScriptedOpponent};
pub use replay::{ReplayError, ReplayResult, replay};
pub use session::{Phase, Session};
pub use types::*;
