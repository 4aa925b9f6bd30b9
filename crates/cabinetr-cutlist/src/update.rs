//! Typed single-field edits
//!
//! Form fields change one value at a time. Each edit is one variant here and
//! is applied in place, keeping dependent state (drawer ratios) consistent.

use crate::ratios::even_ratios;
use crate::types::{CabinetOpening, DrawerSplitMode, GlobalSettings};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlaySide {
    Top,
    Bottom,
    Left,
    Right,
}

/// One edit to a cabinet opening.
#[derive(Debug, Clone, PartialEq)]
pub enum OpeningUpdate {
    Width(f64),
    Height(f64),
    Overlay(OverlaySide, f64),
    /// Resets drawer ratios to an even split when their count no longer fits
    Quantity(u32),
    IsDoor(bool),
    Name(String),
    /// Switching to custom seeds an even split when needed
    DrawerSplitMode(DrawerSplitMode),
    DrawerRatios(Vec<f64>),
}

impl OpeningUpdate {
    pub fn apply(self, opening: &mut CabinetOpening) {
        match self {
            Self::Width(v) => opening.width = v,
            Self::Height(v) => opening.height = v,
            Self::Overlay(side, v) => match side {
                OverlaySide::Top => opening.overlay.top = v,
                OverlaySide::Bottom => opening.overlay.bottom = v,
                OverlaySide::Left => opening.overlay.left = v,
                OverlaySide::Right => opening.overlay.right = v,
            },
            Self::Quantity(q) => {
                opening.quantity = q;
                let stale = opening.drawer_ratios.len() != q as usize;
                if !opening.drawer_ratios.is_empty() && stale {
                    opening.drawer_ratios = even_ratios(q as usize);
                }
            }
            Self::IsDoor(is_door) => opening.is_door = is_door,
            Self::Name(name) => opening.name = name,
            Self::DrawerSplitMode(mode) => {
                opening.drawer_split_mode = mode;
                let seeded = opening.drawer_ratios.len() == opening.quantity as usize;
                if mode == DrawerSplitMode::Custom && !seeded {
                    opening.drawer_ratios = even_ratios(opening.quantity as usize);
                }
            }
            Self::DrawerRatios(ratios) => opening.drawer_ratios = ratios,
        }
    }
}

/// One edit to the shared frame stock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsUpdate {
    RailWidth(f64),
    StileWidth(f64),
    Thickness(f64),
    GapSize(f64),
    TongueGrooveDepth(f64),
}

impl SettingsUpdate {
    pub fn apply(self, settings: &mut GlobalSettings) {
        match self {
            Self::RailWidth(v) => settings.rail_width = v,
            Self::StileWidth(v) => settings.stile_width = v,
            Self::Thickness(v) => settings.thickness = v,
            Self::GapSize(v) => settings.gap_size = v,
            Self::TongueGrooveDepth(v) => settings.tongue_groove_depth = v,
        }
    }
}
