//! Saved cabinet configuration parameters
//!
//! Projects store one flat record per configuration with the opening, the
//! frame stock and the split all together. These convert into the opening and
//! settings pair the calculator works on.

use crate::types::{CabinetOpening, DrawerSplitMode, GlobalSettings, Overlay};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Material thickness assumed for saved configurations, which do not record one.
pub const DEFAULT_THICKNESS: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    #[default]
    Door,
    Drawer,
}

impl fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Door => write!(f, "door"),
            Self::Drawer => write!(f, "drawer"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinetParams {
    pub opening_width: f64,
    pub opening_height: f64,
    pub top_overlap: f64,
    pub bottom_overlap: f64,
    pub left_overlap: f64,
    pub right_overlap: f64,
    pub gap: f64,
    #[serde(rename = "type")]
    pub kind: OpeningKind,
    pub quantity: u32,
    pub stile_width: f64,
    pub rail_width: f64,
    /// Router bit depth, used as the tongue-and-groove depth
    pub router_depth: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_hinges: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawer_split_mode: Option<DrawerSplitMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawer_ratios: Option<Vec<f64>>,
}

impl Default for CabinetParams {
    fn default() -> Self {
        Self {
            opening_width: 24.0,
            opening_height: 30.0,
            top_overlap: 0.5,
            bottom_overlap: 0.5,
            left_overlap: 0.5,
            right_overlap: 0.5,
            gap: 0.125,
            kind: OpeningKind::Door,
            quantity: 2,
            stile_width: 1.0,
            rail_width: 1.0,
            router_depth: 0.375,
            include_hinges: None,
            drawer_split_mode: Some(DrawerSplitMode::Even),
            drawer_ratios: Some(Vec::new()),
        }
    }
}

impl CabinetParams {
    pub fn is_door(&self) -> bool {
        self.kind == OpeningKind::Door
    }

    /// Layout description used in exports.
    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            OpeningKind::Door => "Doors (Side by Side)",
            OpeningKind::Drawer => "Drawers (Stacked)",
        }
    }

    pub fn overlay(&self) -> Overlay {
        Overlay::new(
            self.top_overlap,
            self.bottom_overlap,
            self.left_overlap,
            self.right_overlap,
        )
    }

    pub fn to_opening(&self, name: impl Into<String>) -> CabinetOpening {
        CabinetOpening {
            width: self.opening_width,
            height: self.opening_height,
            overlay: self.overlay(),
            quantity: self.quantity,
            is_door: self.is_door(),
            name: name.into(),
            drawer_split_mode: self.drawer_split_mode.unwrap_or_default(),
            drawer_ratios: self.drawer_ratios.clone().unwrap_or_default(),
        }
    }

    pub fn to_settings(&self, thickness: f64) -> GlobalSettings {
        GlobalSettings {
            rail_width: self.rail_width,
            stile_width: self.stile_width,
            thickness,
            gap_size: self.gap,
            tongue_groove_depth: self.router_depth,
        }
    }

    /// Rebuild parameters from a calculator opening and its frame stock.
    pub fn from_opening(opening: &CabinetOpening, settings: &GlobalSettings) -> Self {
        Self {
            opening_width: opening.width,
            opening_height: opening.height,
            top_overlap: opening.overlay.top,
            bottom_overlap: opening.overlay.bottom,
            left_overlap: opening.overlay.left,
            right_overlap: opening.overlay.right,
            gap: settings.gap_size,
            kind: if opening.is_door {
                OpeningKind::Door
            } else {
                OpeningKind::Drawer
            },
            quantity: opening.quantity,
            stile_width: settings.stile_width,
            rail_width: settings.rail_width,
            router_depth: settings.tongue_groove_depth,
            include_hinges: None,
            drawer_split_mode: Some(opening.drawer_split_mode),
            drawer_ratios: Some(opening.drawer_ratios.clone()),
        }
    }
}
