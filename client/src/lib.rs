mod api;
mod audio;
mod config;
mod gallery;
mod renderer;
mod source;
pub mod view;

pub use api::PokeApi;
pub use audio::{CryPlayer, SilentPlayer};
pub use config::{ApiConfig, DEFAULT_ROSTER};
pub use gallery::{Gallery, UiEvent};
pub use renderer::Renderer;
pub use source::{ApiError, CreatureSource, fetch_catalog};
pub use view::{BattleView, CardView, DetailView, Notice};

pub use pokedex_battle::{
    BattleResult, CreatureRecord, Session, SessionPhase, SpeciesDetail, Winner,
};
