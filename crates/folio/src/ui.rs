//! UI state store.
//!
//! Holds the theme preference together with the other editor chrome flags.
//! This store is the only owner of the [`ThemePreference`]; everything else
//! reads it through a [`UiStore`] handle.

use folio_render::ThemePreference;
use serde::{Deserialize, Serialize};

use crate::store::{Reducer, Store};

/// Smallest zoom level, in percent.
pub const MIN_ZOOM: u16 = 25;
/// Largest zoom level, in percent.
pub const MAX_ZOOM: u16 = 400;
/// Zoom step used by [`UiAction::ZoomIn`] and [`UiAction::ZoomOut`].
pub const ZOOM_STEP: u16 = 25;

/// The active editing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Select,
    Text,
    Highlight,
    Draw,
    Erase,
}

/// Editor chrome state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiState {
    pub theme: ThemePreference,
    pub sidebar_open: bool,
    /// Zoom level in percent.
    pub zoom: u16,
    pub tool: Tool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Auto,
            sidebar_open: true,
            zoom: 100,
            tool: Tool::Select,
        }
    }
}

/// Changes to [`UiState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    SetTheme(ThemePreference),
    /// light -> dark -> auto -> light
    CycleTheme,
    ToggleSidebar,
    SetZoom(u16),
    ZoomIn,
    ZoomOut,
    SetTool(Tool),
}

impl Reducer for UiState {
    type Action = UiAction;

    fn reduce(&mut self, action: UiAction) -> bool {
        match action {
            UiAction::SetTheme(theme) => replace(&mut self.theme, theme),
            UiAction::CycleTheme => {
                let next = self.theme.cycle();
                replace(&mut self.theme, next)
            }
            UiAction::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
                true
            }
            UiAction::SetZoom(zoom) => replace(&mut self.zoom, clamp_zoom(zoom)),
            UiAction::ZoomIn => {
                let next = clamp_zoom(self.zoom.saturating_add(ZOOM_STEP));
                replace(&mut self.zoom, next)
            }
            UiAction::ZoomOut => {
                let next = clamp_zoom(self.zoom.saturating_sub(ZOOM_STEP));
                replace(&mut self.zoom, next)
            }
            UiAction::SetTool(tool) => replace(&mut self.tool, tool),
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

fn clamp_zoom(zoom: u16) -> u16 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Shared handle to the UI state.
pub type UiStore = Store<UiState>;

/// Owns the UI store at the top of the provider tree.
#[derive(Debug)]
pub struct UiProvider {
    store: UiStore,
}

impl UiProvider {
    /// Creates the provider with the given initial state.
    pub fn new(initial: UiState) -> Self {
        Self {
            store: Store::new(initial),
        }
    }

    /// A handle to the UI store.
    pub fn use_ui(&self) -> UiStore {
        self.store.clone()
    }

    /// Borrowing access to the UI store.
    pub fn store(&self) -> &UiStore {
        &self.store
    }
}
