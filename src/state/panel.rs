//! Lazy annotation panel lifecycle state.
//!
//! DESIGN
//! ======
//! Every annotation card owns one `PanelState`. The status starts `Empty`,
//! moves to `Loading` when a fetch starts, and lands in `Loaded` or
//! `Failed`. Only `begin_load` decides whether a new fetch may start, so
//! repeated expansion can never stack requests. Rendering reads this state
//! and nothing else.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

/// Lifecycle phase of one annotation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelStatus {
    /// Never fetched; the content slot is empty.
    #[default]
    Empty,
    /// A fetch is in flight.
    Loading,
    /// Content arrived and is displayed.
    Loaded,
    /// The last fetch failed; the slot shows a message.
    Failed,
}

/// State for one annotation panel holding content of type `T`.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelState<T> {
    pub status: PanelStatus,
    pub content: Option<T>,
    pub error: Option<String>,
}

impl<T> Default for PanelState<T> {
    fn default() -> Self {
        Self { status: PanelStatus::Empty, content: None, error: None }
    }
}

impl<T> PanelState<T> {
    /// Gate for starting a fetch.
    ///
    /// Returns `true` and enters `Loading` when the panel has never loaded
    /// or its last attempt failed. Returns `false` while a fetch is in
    /// flight or once content is displayed, which makes re-expansion a
    /// no-op.
    pub fn begin_load(&mut self) -> bool {
        match self.status {
            PanelStatus::Empty | PanelStatus::Failed => {
                self.status = PanelStatus::Loading;
                self.error = None;
                true
            }
            PanelStatus::Loading | PanelStatus::Loaded => false,
        }
    }

    /// Record a successful fetch.
    pub fn complete(&mut self, content: T) {
        self.status = PanelStatus::Loaded;
        self.content = Some(content);
        self.error = None;
    }

    /// Record a failed fetch with the message shown in the slot.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = PanelStatus::Failed;
        self.content = None;
        self.error = Some(message.into());
    }

    /// Forget everything, returning the panel to `Empty`.
    ///
    /// Used when the page switches to a different feature so a later
    /// expansion refetches for the new one.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
