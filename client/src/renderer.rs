use crate::view::{BattleView, CardView, DetailView, Notice};

/// Trait for the surface the gallery draws on.
///
/// Implement this trait to display the gallery. All methods have default
/// no-op implementations, so you only need to implement the parts your
/// surface shows.
///
/// # Example
///
/// ```ignore
/// struct Console;
///
/// impl Renderer for Console {
///     fn show_notice(&mut self, notice: Notice) {
///         println!("{}", notice.message());
///     }
/// }
/// ```
pub trait Renderer {
    /// Called once when the startup fetch begins.
    fn render_loading(&mut self) {}

    /// Called once with every card after the catalog is loaded.
    fn render_gallery(&mut self, cards: &[CardView]) {
        let _ = cards;
    }

    /// Called instead of `render_gallery` when the startup fetch failed.
    fn render_load_error(&mut self, message: &str) {
        let _ = message;
    }

    /// Called when a card enters or leaves the selection.
    fn set_card_selected(&mut self, index: usize, selected: bool) {
        let _ = (index, selected);
    }

    /// Called after every selection change and once after loading.
    fn set_battle_enabled(&mut self, enabled: bool) {
        let _ = enabled;
    }

    /// Called for blocking, user-recoverable notices.
    fn show_notice(&mut self, notice: Notice) {
        let _ = notice;
    }

    fn show_detail(&mut self, detail: &DetailView) {
        let _ = detail;
    }

    fn hide_detail(&mut self) {}

    fn render_battle(&mut self, battle: &BattleView) {
        let _ = battle;
    }

    /// Called when an action failed in a way the user should see
    /// (detail fetch failed, malformed stats in a battle).
    fn show_error(&mut self, message: &str) {
        let _ = message;
    }
}
