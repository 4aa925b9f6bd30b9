//! Type definitions for the cutlist calculator

use crate::error::{check_non_negative, check_positive, ParameterError, ParameterResult};
use crate::ratios::{ratio_sum, validate_ratios, DEFAULT_RATIO_TOLERANCE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Frame stock shared by every opening in a calculation. All values in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalSettings {
    /// Stock width of the horizontal members
    pub rail_width: f64,
    /// Stock width of the vertical members
    pub stile_width: f64,
    /// Material thickness, copied onto every piece
    pub thickness: f64,
    /// Space between neighbouring doors or drawer fronts in one opening
    pub gap_size: f64,
    /// How far tongues reach into the mating groove
    pub tongue_groove_depth: f64,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            rail_width: 1.0,
            stile_width: 1.0,
            thickness: 0.75,
            gap_size: 0.125,
            tongue_groove_depth: 0.375,
        }
    }
}

impl GlobalSettings {
    /// Check the stock dimensions. The calculator does not call this.
    pub fn validate(&self) -> ParameterResult<()> {
        check_positive("railWidth", self.rail_width)?;
        check_positive("stileWidth", self.stile_width)?;
        check_positive("thickness", self.thickness)?;
        check_non_negative("gapSize", self.gap_size)?;
        check_non_negative("tongueGrooveDepth", self.tongue_groove_depth)?;
        Ok(())
    }
}

/// Overhang of a door or drawer front past the cabinet opening on each side.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Overlay {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Overlay {
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Same overhang on all four sides.
    pub fn uniform(amount: f64) -> Self {
        Self::new(amount, amount, amount, amount)
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }
}

/// How a stacked drawer set divides its height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerSplitMode {
    #[default]
    Even,
    Custom,
}

impl fmt::Display for DrawerSplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Even => write!(f, "even"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// One cabinet opening covered by `quantity` doors (side by side) or drawer
/// fronts (stacked).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinetOpening {
    pub width: f64,
    pub height: f64,
    pub overlay: Overlay,
    pub quantity: u32,
    pub is_door: bool,
    /// Group key for the emitted pieces (`<name>_rails` and so on)
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub drawer_split_mode: DrawerSplitMode,
    /// Percent of the available height per drawer, top to bottom
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub drawer_ratios: Vec<f64>,
}

impl CabinetOpening {
    /// A single door with no overlay.
    pub fn door(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            overlay: Overlay::default(),
            quantity: 1,
            is_door: true,
            name: name.into(),
            drawer_split_mode: DrawerSplitMode::Even,
            drawer_ratios: Vec::new(),
        }
    }

    /// A single drawer front with no overlay.
    pub fn drawer(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            is_door: false,
            ..Self::door(name, width, height)
        }
    }

    pub fn with_overlay(mut self, overlay: Overlay) -> Self {
        self.overlay = overlay;
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Switch to a custom drawer split using the given percentages.
    pub fn with_ratios(mut self, ratios: Vec<f64>) -> Self {
        self.drawer_split_mode = DrawerSplitMode::Custom;
        self.drawer_ratios = ratios;
        self
    }

    /// True when a custom split was requested for a drawer set.
    pub fn wants_custom_split(&self) -> bool {
        !self.is_door && self.drawer_split_mode == DrawerSplitMode::Custom
    }

    /// The custom ratios when they can be applied: drawer set, custom mode,
    /// one ratio per front and a valid sum.
    pub fn custom_ratios(&self) -> Option<&[f64]> {
        let applicable = self.wants_custom_split()
            && self.drawer_ratios.len() == self.quantity as usize
            && validate_ratios(&self.drawer_ratios, DEFAULT_RATIO_TOLERANCE);
        applicable.then_some(self.drawer_ratios.as_slice())
    }

    /// False only for a custom split that cannot be applied.
    pub fn ratios_ready(&self) -> bool {
        !self.wants_custom_split() || self.custom_ratios().is_some()
    }

    /// Sum of the configured drawer ratios.
    pub fn ratio_total(&self) -> f64 {
        ratio_sum(&self.drawer_ratios)
    }

    /// Check the opening dimensions. The calculator does not call this.
    pub fn validate(&self) -> ParameterResult<()> {
        check_positive("width", self.width)?;
        check_positive("height", self.height)?;
        check_non_negative("overlay.top", self.overlay.top)?;
        check_non_negative("overlay.bottom", self.overlay.bottom)?;
        check_non_negative("overlay.left", self.overlay.left)?;
        check_non_negative("overlay.right", self.overlay.right)?;
        if self.quantity == 0 {
            return Err(ParameterError::ZeroQuantity);
        }
        Ok(())
    }
}

/// Kind of frame-and-panel piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Rail,
    Stile,
    Panel,
}

impl PieceKind {
    /// Suffix appended to the opening name to form the group key.
    pub fn group_suffix(&self) -> &'static str {
        match self {
            Self::Rail => "rails",
            Self::Stile => "stiles",
            Self::Panel => "panel",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rail => write!(f, "Rail"),
            Self::Stile => write!(f, "Stile"),
            Self::Panel => write!(f, "Panel"),
        }
    }
}

/// One line of the cutlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutlistItem {
    pub piece: PieceKind,
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub thickness: f64,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_builders() {
        let opening = CabinetOpening::drawer("DRWR1", 18.0, 6.0)
            .with_overlay(Overlay::uniform(0.5))
            .with_quantity(2);
        assert!(!opening.is_door);
        assert_eq!(opening.quantity, 2);
        assert_eq!(opening.overlay.vertical(), 1.0);
        assert_eq!(opening.overlay.horizontal(), 1.0);
    }

    #[test]
    fn test_custom_ratios_require_matching_count() {
        let opening = CabinetOpening::drawer("DRWR1", 20.0, 12.0)
            .with_quantity(3)
            .with_ratios(vec![50.0, 50.0]);
        assert!(opening.wants_custom_split());
        assert!(opening.custom_ratios().is_none());
        assert!(!opening.ratios_ready());
    }

    #[test]
    fn test_custom_ratios_ignored_for_doors() {
        let mut opening = CabinetOpening::door("DOOR1", 20.0, 12.0)
            .with_quantity(2)
            .with_ratios(vec![30.0, 70.0]);
        assert!(!opening.wants_custom_split());
        assert!(opening.custom_ratios().is_none());
        assert!(opening.ratios_ready());

        opening.is_door = false;
        assert_eq!(opening.custom_ratios(), Some(&[30.0, 70.0][..]));
    }

    #[test]
    fn test_validate_opening() {
        assert!(CabinetOpening::door("A", 12.0, 24.0).validate().is_ok());
        assert!(matches!(
            CabinetOpening::door("A", 0.0, 24.0).validate(),
            Err(ParameterError::NotPositive { .. })
        ));
        assert_eq!(
            CabinetOpening::door("A", 12.0, 24.0)
                .with_quantity(0)
                .validate(),
            Err(ParameterError::ZeroQuantity)
        );
        let negative = CabinetOpening::door("A", 12.0, 24.0).with_overlay(Overlay::uniform(-0.5));
        assert!(matches!(
            negative.validate(),
            Err(ParameterError::Negative { .. })
        ));
    }

    #[test]
    fn test_validate_settings() {
        assert!(GlobalSettings::default().validate().is_ok());
        let settings = GlobalSettings {
            stile_width: 0.0,
            ..GlobalSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_opening_serde_uses_camel_case() {
        let opening = CabinetOpening::door("DOOR1", 12.0, 24.0);
        let json = serde_json::to_value(&opening).unwrap();
        assert_eq!(json["isDoor"], true);
        assert_eq!(json["drawerSplitMode"], "even");
        assert!(json.get("drawerRatios").is_none());

        let parsed: CabinetOpening = serde_json::from_str(
            r#"{"width":12,"height":24,"overlay":{"top":0.5,"bottom":0.5,"left":0.5,"right":0.5},
                "quantity":1,"isDoor":true,"name":"DOOR1"}"#,
        )
        .unwrap();
        assert_eq!(parsed.overlay, Overlay::uniform(0.5));
        assert_eq!(parsed.drawer_split_mode, DrawerSplitMode::Even);
    }

    #[test]
    fn test_piece_kind_display() {
        assert_eq!(PieceKind::Rail.to_string(), "Rail");
        assert_eq!(PieceKind::Stile.group_suffix(), "stiles");
        assert_eq!(PieceKind::Panel.group_suffix(), "panel");
    }
}
