use anyhow::Result;

/// Best-effort audio output for creature cries.
///
/// `play` should start playback and return without waiting for it to
/// finish. Errors are logged by the caller and never fail the interaction.
pub trait CryPlayer {
    fn play(&mut self, url: &str) -> Result<()>;
}

/// Player that only records what it was asked to play
#[derive(Debug, Default)]
pub struct SilentPlayer {
    played: Vec<String>,
}

impl SilentPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs requested so far, oldest first
    pub fn played(&self) -> &[String] {
        &self.played
    }
}

impl CryPlayer for SilentPlayer {
    fn play(&mut self, url: &str) -> Result<()> {
        tracing::debug!(url, "Cry requested (silent)");
        self.played.push(url.to_string());
        Ok(())
    }
}
