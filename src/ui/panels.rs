//! Overlay panel visibility
//!
//! Each panel is an independent open/closed flag. Opening an open panel or
//! closing a closed one is a no-op.

/// Overlay panels of the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Title / author / genre filter form
    Search,
    /// Theme selector
    Settings,
    /// Selected book details
    Detail,
    /// Keybind reference
    Help,
}

impl Panel {
    /// Panels from topmost to bottommost
    pub const STACKING: [Self; 4] = [Self::Help, Self::Detail, Self::Settings, Self::Search];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Search => " Search ",
            Self::Settings => " Settings ",
            Self::Detail => " Book Details ",
            Self::Help => " Help ",
        }
    }
}

/// Open/closed state of every overlay panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlays {
    search: bool,
    settings: bool,
    detail: bool,
    help: bool,
}

impl Overlays {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            search: false,
            settings: false,
            detail: false,
            help: false,
        }
    }

    const fn flag(&mut self, panel: Panel) -> &mut bool {
        match panel {
            Panel::Search => &mut self.search,
            Panel::Settings => &mut self.settings,
            Panel::Detail => &mut self.detail,
            Panel::Help => &mut self.help,
        }
    }

    /// Set a panel open or closed
    pub const fn set(&mut self, panel: Panel, open: bool) {
        *self.flag(panel) = open;
    }

    pub const fn open(&mut self, panel: Panel) {
        self.set(panel, true);
    }

    pub const fn close(&mut self, panel: Panel) {
        self.set(panel, false);
    }

    #[must_use]
    pub const fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::Search => self.search,
            Panel::Settings => self.settings,
            Panel::Detail => self.detail,
            Panel::Help => self.help,
        }
    }

    /// The open panel that receives keyboard input, if any
    #[must_use]
    pub fn topmost(&self) -> Option<Panel> {
        Panel::STACKING.into_iter().find(|&panel| self.is_open(panel))
    }

    /// Open panels from bottom to top, in drawing order
    #[must_use]
    pub fn open_panels(&self) -> Vec<Panel> {
        Panel::STACKING
            .into_iter()
            .rev()
            .filter(|&panel| self.is_open(panel))
            .collect()
    }

    /// Close the topmost panel; returns the panel that was closed
    pub fn close_topmost(&mut self) -> Option<Panel> {
        let panel = self.topmost()?;
        self.close(panel);
        Some(panel)
    }

    #[must_use]
    pub const fn any_open(&self) -> bool {
        self.search || self.settings || self.detail || self.help
    }
}
