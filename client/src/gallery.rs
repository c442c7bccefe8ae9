use anyhow::{Context, Result};
use pokedex_battle::{SelectionError, Session, SessionError, Toggle};
use pokedex_protocol::cry_url;

use crate::audio::CryPlayer;
use crate::config::ApiConfig;
use crate::renderer::Renderer;
use crate::source::{CreatureSource, fetch_catalog};
use crate::view::{BattleView, CardView, DetailView, Notice};

/// User interactions the rendering surface reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Card body clicked: toggles selection
    CardClicked(usize),
    /// Info button on a card: opens the detail view only
    InfoClicked(usize),
    /// Cry button on a card: plays audio only
    CryClicked(usize),
    BattleClicked,
    ModalCloseClicked,
    ClickedOutsideModal,
}

/// Drives a [`Session`] from UI events and pushes the results to a
/// [`Renderer`].
pub struct Gallery<S, R, A> {
    session: Session,
    source: S,
    renderer: R,
    player: A,
    roster: Vec<String>,
    cry_base: String,
    detail_open: bool,
}

impl<S, R, A> Gallery<S, R, A>
where
    S: CreatureSource,
    R: Renderer,
    A: CryPlayer,
{
    pub fn new(config: &ApiConfig, source: S, renderer: R, player: A) -> Self {
        Self {
            session: Session::new(),
            source,
            renderer,
            player,
            roster: config.roster.clone(),
            cry_base: config.cry_base.clone(),
            detail_open: false,
        }
    }

    /// Fetch the roster and render the gallery, or the load error.
    ///
    /// Returns `Err` only on misuse (calling twice); a failed fetch is a
    /// normal outcome that leaves the session in the failed phase.
    pub async fn start(&mut self) -> Result<()> {
        self.session
            .begin_loading()
            .context("Gallery already started")?;
        self.renderer.render_loading();

        match fetch_catalog(&self.source, &self.roster).await {
            Ok(records) => {
                self.session.finish_loading(records)?;
                let cards: Vec<CardView> = self
                    .session
                    .catalog()
                    .iter()
                    .enumerate()
                    .map(|(index, record)| CardView::new(index, record))
                    .collect();

                tracing::info!(cards = cards.len(), "Gallery ready");
                self.renderer.render_gallery(&cards);
                self.renderer.set_battle_enabled(false);
            }
            Err(e) => {
                let message = format!("Could not load the catalog: {e}");
                self.session.fail_loading(message.clone())?;
                self.renderer.render_load_error(&message);
            }
        }

        Ok(())
    }

    /// Handle one UI event.
    ///
    /// User-facing failures are rendered; `Err` means the caller sent an
    /// event that cannot refer to anything (e.g. an unknown card index).
    pub async fn dispatch(&mut self, event: UiEvent) -> Result<()> {
        tracing::debug!(?event, "Dispatching");

        match event {
            UiEvent::CardClicked(index) => self.toggle(index),
            UiEvent::InfoClicked(index) => self.show_details(index).await,
            UiEvent::CryClicked(index) => self.play_cry(index),
            UiEvent::BattleClicked => self.battle(),
            UiEvent::ModalCloseClicked | UiEvent::ClickedOutsideModal => {
                self.close_details();
                Ok(())
            }
        }
    }

    fn toggle(&mut self, index: usize) -> Result<()> {
        match self.session.toggle(index) {
            Ok(change) => {
                self.renderer
                    .set_card_selected(index, change.toggle == Toggle::Selected);
                self.renderer.set_battle_enabled(change.battle_ready);
            }
            Err(SessionError::Selection(SelectionError::CapacityExceeded)) => {
                self.renderer.show_notice(Notice::SelectionFull);
                self.renderer
                    .set_battle_enabled(self.session.selection().is_battle_ready());
            }
            Err(e) => return Err(e).with_context(|| format!("Cannot toggle card {index}")),
        }
        Ok(())
    }

    async fn show_details(&mut self, index: usize) -> Result<()> {
        let record = self
            .session
            .catalog()
            .get(index)
            .with_context(|| format!("Cannot show details for card {index}"))?
            .clone();

        match self.source.fetch_species(record.id).await {
            Ok(species) => {
                let detail = DetailView::new(&record, &species);
                self.renderer.show_detail(&detail);
                self.detail_open = true;
            }
            Err(e) => {
                tracing::warn!(creature = %record.name, error = %e, "Detail fetch failed");
                self.renderer
                    .show_error(&format!("Could not load details for {}: {e}", record.name));
            }
        }
        Ok(())
    }

    fn close_details(&mut self) {
        if self.detail_open {
            self.detail_open = false;
            self.renderer.hide_detail();
        }
    }

    fn play_cry(&mut self, index: usize) -> Result<()> {
        let record = self
            .session
            .catalog()
            .get(index)
            .with_context(|| format!("Cannot play cry for card {index}"))?;
        let url = cry_url(&self.cry_base, &record.name);

        if let Err(e) = self.player.play(&url) {
            tracing::warn!(url = %url, error = %e, "Cry playback failed");
        }
        Ok(())
    }

    fn battle(&mut self) -> Result<()> {
        match self.session.battle() {
            Ok(result) => {
                tracing::info!(
                    first = %result.first.name,
                    second = %result.second.name,
                    winner = ?result.winner,
                    "Battle finished"
                );
                self.renderer.render_battle(&BattleView::new(&result));
            }
            Err(SessionError::BattleIncomplete { .. }) => {
                self.renderer.show_notice(Notice::BattleIncomplete);
            }
            Err(SessionError::Battle(e)) => {
                tracing::error!(error = %e, "Battle failed on malformed creature data");
                self.renderer.show_error(&format!("Battle failed: {e}"));
            }
            Err(e) => return Err(e).context("Cannot run battle"),
        }
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail_open
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn player(&self) -> &A {
        &self.player
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashMap;

    use pokedex_battle::{CreatureRecord, SessionPhase, SpeciesDetail, Stats};

    use super::*;
    use crate::audio::SilentPlayer;
    use crate::source::ApiError;

    struct FixtureSource {
        creatures: HashMap<String, CreatureRecord>,
        species: HashMap<u32, SpeciesDetail>,
        species_fetches: Cell<usize>,
    }

    impl CreatureSource for FixtureSource {
        async fn fetch_creature(&self, name: &str) -> Result<CreatureRecord, ApiError> {
            self.creatures.get(name).cloned().ok_or_else(|| ApiError::Status {
                url: format!("fixture://pokemon/{name}"),
                status: reqwest::StatusCode::NOT_FOUND,
            })
        }

        async fn fetch_species(&self, id: u32) -> Result<SpeciesDetail, ApiError> {
            self.species_fetches.set(self.species_fetches.get() + 1);
            self.species.get(&id).cloned().ok_or_else(|| ApiError::Status {
                url: format!("fixture://pokemon-species/{id}"),
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            })
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Drawn {
        Loading,
        Gallery(Vec<CardView>),
        LoadError(String),
        CardSelected(usize, bool),
        BattleEnabled(bool),
        Notice(Notice),
        Detail(DetailView),
        HideDetail,
        Battle(BattleView),
        Error(String),
    }

    #[derive(Default)]
    struct RecordingRenderer {
        drawn: Vec<Drawn>,
    }

    impl RecordingRenderer {
        fn take(&mut self) -> Vec<Drawn> {
            std::mem::take(&mut self.drawn)
        }
    }

    impl Renderer for RecordingRenderer {
        fn render_loading(&mut self) {
            self.drawn.push(Drawn::Loading);
        }
        fn render_gallery(&mut self, cards: &[CardView]) {
            self.drawn.push(Drawn::Gallery(cards.to_vec()));
        }
        fn render_load_error(&mut self, message: &str) {
            self.drawn.push(Drawn::LoadError(message.to_string()));
        }
        fn set_card_selected(&mut self, index: usize, selected: bool) {
            self.drawn.push(Drawn::CardSelected(index, selected));
        }
        fn set_battle_enabled(&mut self, enabled: bool) {
            self.drawn.push(Drawn::BattleEnabled(enabled));
        }
        fn show_notice(&mut self, notice: Notice) {
            self.drawn.push(Drawn::Notice(notice));
        }
        fn show_detail(&mut self, detail: &DetailView) {
            self.drawn.push(Drawn::Detail(detail.clone()));
        }
        fn hide_detail(&mut self) {
            self.drawn.push(Drawn::HideDetail);
        }
        fn render_battle(&mut self, battle: &BattleView) {
            self.drawn.push(Drawn::Battle(battle.clone()));
        }
        fn show_error(&mut self, message: &str) {
            self.drawn.push(Drawn::Error(message.to_string()));
        }
    }

    struct BrokenSpeaker;

    impl CryPlayer for BrokenSpeaker {
        fn play(&mut self, _url: &str) -> Result<()> {
            anyhow::bail!("no audio device")
        }
    }

    fn creature(id: u32, name: &str, stats: &[(&str, u32)]) -> CreatureRecord {
        CreatureRecord {
            id,
            name: name.to_string(),
            height: 10,
            weight: 100,
            abilities: vec!["static".to_string()],
            moves: vec![format!("{name}-strike"), format!("{name}-guard")],
            stats: stats.iter().copied().collect::<Stats>(),
            sprite_url: Some(format!("https://img.example/{id}.png")),
        }
    }

    fn fixture() -> FixtureSource {
        let creatures = [
            creature(1, "x", &[("hp", 160), ("attack", 80), ("defense", 60)]),
            creature(2, "y", &[("hp", 110), ("attack", 50), ("defense", 90)]),
            creature(3, "z", &[("hp", 100), ("attack", 75), ("defense", 70)]),
            creature(4, "glitch", &[("hp", 10), ("attack", 10)]),
        ];
        let species = HashMap::from([(
            1,
            SpeciesDetail {
                color: "yellow".to_string(),
                shape: Some("quadruped".to_string()),
                egg_groups: vec!["field".to_string()],
            },
        )]);

        FixtureSource {
            creatures: creatures
                .into_iter()
                .map(|c| (c.name.clone(), c))
                .collect(),
            species,
            species_fetches: Cell::new(0),
        }
    }

    fn config(roster: &[&str]) -> ApiConfig {
        ApiConfig::default().with_roster(roster.iter().copied())
    }

    async fn started(
        roster: &[&str],
    ) -> Gallery<FixtureSource, RecordingRenderer, SilentPlayer> {
        let mut gallery = Gallery::new(
            &config(roster),
            fixture(),
            RecordingRenderer::default(),
            SilentPlayer::new(),
        );
        gallery.start().await.unwrap();
        gallery.renderer_mut().take();
        gallery
    }

    #[tokio::test]
    async fn test_start_renders_gallery() {
        let mut gallery = Gallery::new(
            &config(&["x", "y", "z"]),
            fixture(),
            RecordingRenderer::default(),
            SilentPlayer::new(),
        );
        gallery.start().await.unwrap();

        assert!(gallery.session().is_ready());
        let drawn = gallery.renderer_mut().take();
        assert_eq!(drawn.len(), 3);
        assert_eq!(drawn[0], Drawn::Loading);
        match &drawn[1] {
            Drawn::Gallery(cards) => {
                let names: Vec<_> = cards.iter().map(|c| c.name.as_str()).collect();
                assert_eq!(names, vec!["x", "y", "z"]);
                assert_eq!(cards[2].index, 2);
            }
            other => panic!("expected gallery, got {other:?}"),
        }
        assert_eq!(drawn[2], Drawn::BattleEnabled(false));
    }

    #[tokio::test]
    async fn test_start_failure_is_visible() {
        let mut gallery = Gallery::new(
            &config(&["x", "missingno"]),
            fixture(),
            RecordingRenderer::default(),
            SilentPlayer::new(),
        );
        gallery.start().await.unwrap();

        assert!(matches!(gallery.session().phase(), SessionPhase::Failed(_)));
        let drawn = gallery.renderer_mut().take();
        assert_eq!(drawn[0], Drawn::Loading);
        match &drawn[1] {
            Drawn::LoadError(message) => assert!(message.contains("missingno")),
            other => panic!("expected load error, got {other:?}"),
        }
        assert_eq!(gallery.session().catalog().size(), 0);
    }

    #[tokio::test]
    async fn test_start_twice_rejected() {
        let mut gallery = started(&["x"]).await;
        assert!(gallery.start().await.is_err());
    }

    #[tokio::test]
    async fn test_selection_flow() {
        let mut gallery = started(&["x", "y", "z"]).await;

        gallery.dispatch(UiEvent::CardClicked(0)).await.unwrap();
        gallery.dispatch(UiEvent::CardClicked(1)).await.unwrap();
        assert_eq!(
            gallery.renderer_mut().take(),
            vec![
                Drawn::CardSelected(0, true),
                Drawn::BattleEnabled(false),
                Drawn::CardSelected(1, true),
                Drawn::BattleEnabled(true),
            ]
        );

        gallery.dispatch(UiEvent::CardClicked(2)).await.unwrap();
        assert_eq!(
            gallery.renderer_mut().take(),
            vec![
                Drawn::Notice(Notice::SelectionFull),
                Drawn::BattleEnabled(true)
            ]
        );
        assert_eq!(gallery.session().selection().indices(), &[0, 1]);

        gallery.dispatch(UiEvent::CardClicked(0)).await.unwrap();
        assert_eq!(
            gallery.renderer_mut().take(),
            vec![Drawn::CardSelected(0, false), Drawn::BattleEnabled(false)]
        );
    }

    #[tokio::test]
    async fn test_unknown_card_is_an_error() {
        let mut gallery = started(&["x"]).await;

        assert!(gallery.dispatch(UiEvent::CardClicked(5)).await.is_err());
        assert!(gallery.dispatch(UiEvent::InfoClicked(5)).await.is_err());
        assert!(gallery.dispatch(UiEvent::CryClicked(5)).await.is_err());
        assert!(gallery.session().selection().is_empty());
    }

    #[tokio::test]
    async fn test_info_does_not_select_and_is_not_cached() {
        let mut gallery = started(&["x", "y"]).await;

        gallery.dispatch(UiEvent::InfoClicked(0)).await.unwrap();
        let drawn = gallery.renderer_mut().take();
        match drawn.as_slice() {
            [Drawn::Detail(detail)] => {
                assert_eq!(detail.title, "X");
                assert_eq!(detail.color, "yellow");
                assert_eq!(detail.base_stats, "hp: 160, attack: 80, defense: 60");
            }
            other => panic!("expected detail, got {other:?}"),
        }
        assert!(gallery.is_detail_open());
        assert!(gallery.session().selection().is_empty());

        gallery.dispatch(UiEvent::ModalCloseClicked).await.unwrap();
        gallery.dispatch(UiEvent::InfoClicked(0)).await.unwrap();
        assert_eq!(gallery.source.species_fetches.get(), 2);
    }

    #[tokio::test]
    async fn test_close_detail() {
        let mut gallery = started(&["x"]).await;

        // Nothing open yet
        gallery.dispatch(UiEvent::ClickedOutsideModal).await.unwrap();
        assert!(gallery.renderer_mut().take().is_empty());

        gallery.dispatch(UiEvent::InfoClicked(0)).await.unwrap();
        gallery.dispatch(UiEvent::ClickedOutsideModal).await.unwrap();
        let drawn = gallery.renderer_mut().take();
        assert_eq!(drawn.last(), Some(&Drawn::HideDetail));
        assert!(!gallery.is_detail_open());

        gallery.dispatch(UiEvent::ModalCloseClicked).await.unwrap();
        assert!(gallery.renderer_mut().take().is_empty());
    }

    #[tokio::test]
    async fn test_detail_fetch_failure_shown() {
        let mut gallery = started(&["x", "y"]).await;

        gallery.dispatch(UiEvent::InfoClicked(1)).await.unwrap();
        let drawn = gallery.renderer_mut().take();
        match drawn.as_slice() {
            [Drawn::Error(message)] => {
                assert!(message.contains("details for y"));
                assert!(message.contains("503"));
            }
            other => panic!("expected error, got {other:?}"),
        }
        assert!(!gallery.is_detail_open());
    }

    #[tokio::test]
    async fn test_cry_does_not_select() {
        let mut gallery = started(&["x", "y"]).await;

        gallery.dispatch(UiEvent::CryClicked(1)).await.unwrap();

        assert_eq!(
            gallery.player().played(),
            &["https://play.pokemonshowdown.com/audio/cries/y.mp3".to_string()]
        );
        assert!(gallery.session().selection().is_empty());
        assert!(gallery.renderer_mut().take().is_empty());
    }

    #[tokio::test]
    async fn test_cry_failure_is_swallowed() {
        let mut gallery = Gallery::new(
            &config(&["x"]),
            fixture(),
            RecordingRenderer::default(),
            BrokenSpeaker,
        );
        gallery.start().await.unwrap();

        assert!(gallery.dispatch(UiEvent::CryClicked(0)).await.is_ok());
    }

    #[tokio::test]
    async fn test_battle_incomplete_notice() {
        let mut gallery = started(&["x", "y"]).await;
        gallery.dispatch(UiEvent::CardClicked(0)).await.unwrap();
        gallery.renderer_mut().take();

        gallery.dispatch(UiEvent::BattleClicked).await.unwrap();
        assert_eq!(
            gallery.renderer_mut().take(),
            vec![Drawn::Notice(Notice::BattleIncomplete)]
        );
    }

    #[tokio::test]
    async fn test_battle_renders_result() {
        let mut gallery = started(&["x", "y", "z"]).await;
        gallery.dispatch(UiEvent::CardClicked(2)).await.unwrap();
        gallery.dispatch(UiEvent::CardClicked(0)).await.unwrap();
        gallery.renderer_mut().take();

        gallery.dispatch(UiEvent::BattleClicked).await.unwrap();
        let drawn = gallery.renderer_mut().take();
        match drawn.as_slice() {
            [Drawn::Battle(view)] => {
                assert_eq!(view.winner, "x");
                assert_eq!(view.moves_used[0], "z-strike, z-guard (by z)");
                assert_eq!(view.damage_caused[0], "z dealt 15 damage.");
                assert_eq!(view.damage_caused[1], "x dealt 10 damage.");
            }
            other => panic!("expected battle, got {other:?}"),
        }
        assert!(gallery.session().selection().is_battle_ready());
    }

    #[tokio::test]
    async fn test_battle_with_missing_stat_shows_error() {
        let mut gallery = started(&["x", "glitch"]).await;
        gallery.dispatch(UiEvent::CardClicked(0)).await.unwrap();
        gallery.dispatch(UiEvent::CardClicked(1)).await.unwrap();
        gallery.renderer_mut().take();

        gallery.dispatch(UiEvent::BattleClicked).await.unwrap();
        let drawn = gallery.renderer_mut().take();
        match drawn.as_slice() {
            [Drawn::Error(message)] => {
                assert!(message.contains("glitch"));
                assert!(message.contains("defense"));
            }
            other => panic!("expected error, got {other:?}"),
        }
        assert_eq!(gallery.session().selection().indices(), &[0, 1]);
    }
}
