use crate::net::GenerateBackend;

use super::ViewerSession;

/// Visibility state of the configuration sidebar.
///
/// Configuration controls are only interactable while the sidebar is open;
/// generation collapses it so the chart takes the full viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self { open: true }
    }
}

impl SidebarState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    #[must_use]
    pub fn controls_enabled(self) -> bool {
        self.open
    }
}

impl<B: GenerateBackend> ViewerSession<B> {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar.toggle();
    }

    #[must_use]
    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar.is_open()
    }

    /// Whether configuration controls accept input right now.
    #[must_use]
    pub fn controls_enabled(&self) -> bool {
        self.sidebar.controls_enabled()
    }
}
