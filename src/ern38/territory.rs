/*!
 * Territory-scoped sections of ERN 3.8 resources and releases.
 *
 * Every `…DetailsByTerritory` composite is keyed by a set of included
 * territory codes or, exclusively, a set of excluded codes. Builders keep
 * one section "in focus" and route territory-scoped setters into it.
 */

use log::{debug, warn};

/// Whether a section lists the territories it applies to or the ones it skips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerritoryScope {
    Included,
    Excluded,
}

/// Common access to the territory keys of a `…DetailsByTerritory` composite
pub trait TerritorySection: Default {
    fn territory_codes(&self) -> &[String];
    fn excluded_territory_codes(&self) -> &[String];
    fn set_codes(&mut self, scope: TerritoryScope, codes: Vec<String>);

    /// Codes of the given scope
    fn codes(&self, scope: TerritoryScope) -> &[String] {
        match scope {
            TerritoryScope::Included => self.territory_codes(),
            TerritoryScope::Excluded => self.excluded_territory_codes(),
        }
    }

    /// Describes why the section's keys are unusable, if they are
    fn scope_problem(&self) -> Option<&'static str> {
        match (self.territory_codes().is_empty(), self.excluded_territory_codes().is_empty()) {
            (true, true) => Some("neither TerritoryCode nor ExcludedTerritoryCode is set"),
            (false, false) => Some("both TerritoryCode and ExcludedTerritoryCode are set"),
            _ => None,
        }
    }
}

macro_rules! territory_section {
    ($($section:ty),* $(,)?) => {
        $(
            impl $crate::ern38::territory::TerritorySection for $section {
                fn territory_codes(&self) -> &[String] {
                    &self.territory_code
                }

                fn excluded_territory_codes(&self) -> &[String] {
                    &self.excluded_territory_code
                }

                fn set_codes(
                    &mut self,
                    scope: $crate::ern38::territory::TerritoryScope,
                    codes: Vec<String>,
                ) {
                    use $crate::ern38::territory::TerritoryScope;
                    match scope {
                        TerritoryScope::Included => self.territory_code = codes,
                        TerritoryScope::Excluded => self.excluded_territory_code = codes,
                    }
                }
            }
        )*
    };
}

pub(crate) use territory_section;

/// Index of the section in focus for one territory-scoped builder
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TerritoryCursor {
    current: Option<usize>,
}

impl TerritoryCursor {
    /// Look up a section whose first code of `scope` equals the first given
    /// code, or append a new one, and focus it.
    ///
    /// Only the first code is compared: `["US", "CA"]` and `["US"]` resolve
    /// to the same section.
    pub(crate) fn focus<T: TerritorySection>(
        &mut self,
        sections: &mut Vec<T>,
        codes: &[&str],
        scope: TerritoryScope,
    ) -> usize {
        if let Some(first) = codes.first() {
            let existing = sections
                .iter()
                .position(|section| {
                    section.codes(scope).first().map(String::as_str) == Some(*first)
                });
            if let Some(index) = existing {
                debug!("Focusing existing territory section {} ({:?} {})", index, scope, first);
                self.current = Some(index);
                return index;
            }
        } else {
            warn!("Territory section requested without codes; it will fail validation");
        }

        let mut section = T::default();
        section.set_codes(scope, codes.iter().map(|code| code.to_string()).collect());
        sections.push(section);

        let index = sections.len() - 1;
        debug!("Created territory section {} ({:?} {:?})", index, scope, codes);
        self.current = Some(index);
        index
    }

    /// Section in focus, creating/focusing `default_territory` when none is
    pub(crate) fn ensure<T: TerritorySection>(
        &mut self,
        sections: &mut Vec<T>,
        default_territory: &str,
    ) -> usize {
        match self.current {
            Some(index) => index,
            None => self.focus(sections, &[default_territory], TerritoryScope::Included),
        }
    }
}
