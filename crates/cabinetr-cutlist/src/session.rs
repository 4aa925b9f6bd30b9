//! Editable list of openings
//!
//! [`OpeningSession`] is the state behind an interactive cutlist: the
//! openings entered so far, the shared frame stock and the counters used to
//! name openings the user left unnamed.

use crate::calculator::CutlistCalculator;
use crate::error::{CutlistError, CutlistResult};
use crate::formula::FormulaOptions;
use crate::layout::OpeningLayout;
use crate::types::{CabinetOpening, CutlistItem, GlobalSettings};
use crate::update::{OpeningUpdate, SettingsUpdate};
use tracing::{debug, info};

/// Hands out `DOOR<n>` and `DRWR<n>` names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoNamer {
    doors: u32,
    drawers: u32,
}

impl AutoNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the trimmed `requested` name, or the next generated one when it
    /// is blank. Counters advance only for generated names.
    pub fn resolve(&mut self, requested: &str, is_door: bool) -> String {
        let trimmed = requested.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
        let (prefix, counter) = if is_door {
            ("DOOR", &mut self.doors)
        } else {
            ("DRWR", &mut self.drawers)
        };
        *counter += 1;
        format!("{prefix}{counter}")
    }

    pub fn door_count(&self) -> u32 {
        self.doors
    }

    pub fn drawer_count(&self) -> u32 {
        self.drawers
    }
}

#[derive(Debug, Clone, Default)]
pub struct OpeningSession {
    openings: Vec<CabinetOpening>,
    calculator: CutlistCalculator,
    namer: AutoNamer,
}

impl OpeningSession {
    pub fn new(settings: GlobalSettings) -> Self {
        Self::with_options(settings, FormulaOptions::canonical())
    }

    pub fn with_options(settings: GlobalSettings, options: FormulaOptions) -> Self {
        Self {
            openings: Vec::new(),
            calculator: CutlistCalculator::with_options(settings, options),
            namer: AutoNamer::new(),
        }
    }

    pub fn settings(&self) -> &GlobalSettings {
        self.calculator.settings()
    }

    pub fn update_settings(&mut self, update: SettingsUpdate) {
        let mut settings = *self.calculator.settings();
        update.apply(&mut settings);
        self.calculator = CutlistCalculator::with_options(settings, *self.calculator.options());
        debug!("Settings updated: {:?}", update);
    }

    pub fn openings(&self) -> &[CabinetOpening] {
        &self.openings
    }

    pub fn namer(&self) -> &AutoNamer {
        &self.namer
    }

    /// Append `draft`, naming it when its name is blank. Returns the index.
    pub fn add_opening(&mut self, mut draft: CabinetOpening) -> usize {
        draft.name = self.namer.resolve(&draft.name, draft.is_door);
        info!(
            "Added opening '{}' ({}\" x {}\", qty {})",
            draft.name, draft.width, draft.height, draft.quantity
        );
        self.openings.push(draft);
        self.openings.len() - 1
    }

    pub fn update_opening(&mut self, index: usize, update: OpeningUpdate) -> CutlistResult<()> {
        let opening = self
            .openings
            .get_mut(index)
            .ok_or(CutlistError::OpeningNotFound(index))?;
        update.apply(opening);
        Ok(())
    }

    pub fn remove_opening(&mut self, index: usize) -> CutlistResult<CabinetOpening> {
        if index >= self.openings.len() {
            return Err(CutlistError::OpeningNotFound(index));
        }
        let removed = self.openings.remove(index);
        info!("Removed opening '{}'", removed.name);
        Ok(removed)
    }

    /// Drop every opening. Name counters keep running.
    pub fn clear(&mut self) {
        self.openings.clear();
    }

    pub fn cutlist(&self) -> Vec<CutlistItem> {
        self.calculator.calculate(&self.openings)
    }

    pub fn layout(&self, index: usize) -> CutlistResult<OpeningLayout> {
        self.openings
            .get(index)
            .map(|o| self.calculator.layout(o))
            .ok_or(CutlistError::OpeningNotFound(index))
    }

    /// Fails on the first opening whose custom drawer split cannot be applied.
    pub fn check_ratios(&self) -> CutlistResult<()> {
        match self.openings.iter().find(|o| !o.ratios_ready()) {
            Some(o) => Err(CutlistError::InvalidRatios {
                name: o.name.clone(),
                sum: o.ratio_total(),
            }),
            None => Ok(()),
        }
    }

    pub fn can_export_csv(&self) -> bool {
        !self.openings.is_empty() && self.check_ratios().is_ok()
    }
}
