//! Filter state and the program predicate built from it.

use std::collections::BTreeSet;

use acad_api::{InstitutionQuery, ProgramQuery};
use acad_core::entities::{Institution, Program};
use acad_core::enums::{AcademicLevel, City, DurationBucket, FilterOption, Modality};
use acad_core::text::{contains_ignore_case, fold};
use serde::Serialize;

/// Search term plus the selected checkboxes of every filter group.
///
/// An empty group places no constraint. Recomputed from scratch on every
/// call; nothing is cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    term: String,
    modalities: BTreeSet<Modality>,
    durations: BTreeSet<DurationBucket>,
    levels: BTreeSet<AcademicLevel>,
    cities: BTreeSet<City>,
}

/// Ties a filter option type to its group inside [`FilterState`].
pub trait GroupSelection: FilterOption {
    fn selected(state: &FilterState) -> &BTreeSet<Self>;
    fn selected_mut(state: &mut FilterState) -> &mut BTreeSet<Self>;
}

impl GroupSelection for Modality {
    fn selected(state: &FilterState) -> &BTreeSet<Self> {
        &state.modalities
    }
    fn selected_mut(state: &mut FilterState) -> &mut BTreeSet<Self> {
        &mut state.modalities
    }
}

impl GroupSelection for DurationBucket {
    fn selected(state: &FilterState) -> &BTreeSet<Self> {
        &state.durations
    }
    fn selected_mut(state: &mut FilterState) -> &mut BTreeSet<Self> {
        &mut state.durations
    }
}

impl GroupSelection for AcademicLevel {
    fn selected(state: &FilterState) -> &BTreeSet<Self> {
        &state.levels
    }
    fn selected_mut(state: &mut FilterState) -> &mut BTreeSet<Self> {
        &mut state.levels
    }
}

impl GroupSelection for City {
    fn selected(state: &FilterState) -> &BTreeSet<Self> {
        &state.cities
    }
    fn selected_mut(state: &mut FilterState) -> &mut BTreeSet<Self> {
        &mut state.cities
    }
}

/// A removable chip for one selected checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveChip {
    pub group: &'static str,
    pub key: &'static str,
    pub label: &'static str,
}

impl ActiveChip {
    fn of<O: FilterOption>(option: O) -> Self {
        Self {
            group: O::GROUP,
            key: option.as_str(),
            label: option.label(),
        }
    }
}

impl FilterState {
    #[must_use]
    pub fn with_term(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    /// Check or uncheck one option.
    pub fn toggle<O: GroupSelection>(&mut self, option: O, checked: bool) {
        let group = O::selected_mut(self);
        if checked {
            group.insert(option);
        } else {
            group.remove(&option);
        }
    }

    #[must_use]
    pub fn is_selected<O: GroupSelection>(&self, option: O) -> bool {
        O::selected(self).contains(&option)
    }

    /// Uncheck every option in every group. The search term is kept.
    pub fn clear(&mut self) {
        self.modalities.clear();
        self.durations.clear();
        self.levels.clear();
        self.cities.clear();
    }

    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.active_count() > 0
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.modalities.len() + self.durations.len() + self.levels.len() + self.cities.len()
    }

    /// Selected options in modality → level → city → duration order.
    #[must_use]
    pub fn active_chips(&self) -> Vec<ActiveChip> {
        self.modalities
            .iter()
            .copied()
            .map(ActiveChip::of)
            .chain(self.levels.iter().copied().map(ActiveChip::of))
            .chain(self.cities.iter().copied().map(ActiveChip::of))
            .chain(self.durations.iter().copied().map(ActiveChip::of))
            .collect()
    }

    /// Uncheck the option a chip stands for.
    pub fn remove_chip(&mut self, chip: &ActiveChip) {
        fn drop_key<O: GroupSelection>(state: &mut FilterState, key: &str) {
            O::selected_mut(state).retain(|o| o.as_str() != key);
        }
        if chip.group == Modality::GROUP {
            drop_key::<Modality>(self, chip.key);
        } else if chip.group == AcademicLevel::GROUP {
            drop_key::<AcademicLevel>(self, chip.key);
        } else if chip.group == City::GROUP {
            drop_key::<City>(self, chip.key);
        } else if chip.group == DurationBucket::GROUP {
            drop_key::<DurationBucket>(self, chip.key);
        }
    }

    /// Text AND every non-empty group.
    #[must_use]
    pub fn matches(&self, program: &Program) -> bool {
        self.matches_term(program)
            && self.matches_modality(program)
            && self.matches_level(program)
            && self.matches_city(program)
            && self.matches_duration(program)
    }

    /// Keep the matching programs, preserving input order.
    #[must_use]
    pub fn apply(&self, programs: Vec<Program>) -> Vec<Program> {
        programs.into_iter().filter(|p| self.matches(p)).collect()
    }

    /// Keep the institutions whose name, city or type contain the term.
    #[must_use]
    pub fn apply_to_institutions(&self, institutions: Vec<Institution>) -> Vec<Institution> {
        institutions
            .into_iter()
            .filter(|i| institution_matches_term(i, &self.term))
            .collect()
    }

    /// Program listing query. A group is pushed down only when exactly one
    /// option is selected, since the API takes a single value per field.
    #[must_use]
    pub fn program_query(&self) -> ProgramQuery {
        ProgramQuery {
            level: single(&self.levels).map(|l| l.label().to_string()),
            modality: single(&self.modalities).map(|m| m.label().to_string()),
            municipality: single(&self.cities).map(|c| c.label().to_string()),
            duration: single(&self.durations).map(|d| d.as_str().to_string()),
            ..ProgramQuery::default()
        }
    }

    #[must_use]
    pub fn institution_query(&self) -> InstitutionQuery {
        InstitutionQuery {
            city: single(&self.cities).map(|c| c.label().to_string()),
            ..InstitutionQuery::default()
        }
    }

    fn matches_term(&self, program: &Program) -> bool {
        let term = self.term.trim();
        term.is_empty()
            || [
                &program.name,
                &program.level,
                &program.modality,
                &program.municipality,
            ]
            .iter()
            .any(|field| contains_ignore_case(field, term))
    }

    fn matches_modality(&self, program: &Program) -> bool {
        let modality = fold(&program.modality);
        self.modalities.is_empty()
            || self
                .modalities
                .iter()
                .any(|m| modality == fold(m.label()))
    }

    fn matches_level(&self, program: &Program) -> bool {
        let level = fold(&program.level);
        self.levels.is_empty() || self.levels.iter().any(|l| level.contains(&fold(l.label())))
    }

    fn matches_city(&self, program: &Program) -> bool {
        let municipality = fold(&program.municipality);
        self.cities.is_empty()
            || self
                .cities
                .iter()
                .any(|c| municipality.contains(&fold(c.label())))
    }

    fn matches_duration(&self, program: &Program) -> bool {
        self.durations.is_empty() || self.durations.contains(&program.duration_bucket())
    }
}

/// Case-insensitive term match against name, city or institution type.
#[must_use]
pub fn institution_matches_term(institution: &Institution, term: &str) -> bool {
    let term = term.trim();
    term.is_empty()
        || [
            &institution.name,
            &institution.city,
            &institution.institution_type,
        ]
        .iter()
        .any(|field| contains_ignore_case(field, term))
}

fn single<O: Copy>(set: &BTreeSet<O>) -> Option<O> {
    if set.len() == 1 {
        set.iter().next().copied()
    } else {
        None
    }
}
