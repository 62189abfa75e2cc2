/*!
 * Sub-builders for ERN 3.8 releases and their resource groups.
 */

use log::{debug, warn};

use super::{Builder, non_empty};
use crate::ern38::common::{
    AvRating, CLine, DisplayArtist, EventDate, Genre, LocalizedText, Name, PLine, ProprietaryId,
    ReferenceTitle, Title,
};
use crate::ern38::release::{
    Icpn, LinkedReleaseResourceReference, RelatedRelease, Release, ReleaseDetailsByTerritory,
    ReleaseId, ReleaseResourceReferenceList, ResourceGroup, ResourceGroupContentItem,
};
use crate::ern38::territory::{TerritoryCursor, TerritoryScope};
use crate::identifiers::{validate_ean, validate_upc};

/// Builds one `Release` of the release list
pub struct ReleaseBuilder<'a> {
    builder: &'a mut Builder,
    index: usize,
    territory: TerritoryCursor,
}

impl<'a> ReleaseBuilder<'a> {
    pub(super) fn new(builder: &'a mut Builder, index: usize) -> Self {
        Self { builder, index, territory: TerritoryCursor::default() }
    }

    fn release(&mut self) -> &mut Release {
        &mut self.builder.message.release_list.release[self.index]
    }

    /// Index of the section in focus, creating the default one when needed
    fn details_index(&mut self) -> usize {
        let Builder { message, config } = &mut *self.builder;
        let sections = &mut message.release_list.release[self.index].release_details_by_territory;
        self.territory.ensure(sections, &config.default_territory)
    }

    fn details(&mut self) -> &mut ReleaseDetailsByTerritory {
        let at = self.details_index();
        &mut self.release().release_details_by_territory[at]
    }

    fn message_language(&self) -> String {
        self.builder.message.language_and_script_code.clone()
    }

    fn localized(&self, value: &str, language: &str) -> LocalizedText {
        let language = if language.is_empty() {
            self.message_language()
        } else {
            language.to_string()
        };
        LocalizedText::new(value, Some(language.as_str()))
    }

    /// Release-level `ReferenceTitle`
    pub fn with_title(mut self, title: &str, subtitle: &str) -> Self {
        self.release().reference_title = Some(ReferenceTitle {
            title_text: title.to_string(),
            sub_title: non_empty(subtitle),
        });
        self
    }

    /// `Title` of the territory section in focus
    pub fn with_territory_title(mut self, title: &str, subtitle: &str) -> Self {
        self.details().title.push(Title::new(title, subtitle));
        self
    }

    /// Focus the section whose first territory code matches, creating it if needed
    pub fn with_territory(mut self, codes: &[&str]) -> Self {
        let sections =
            &mut self.builder.message.release_list.release[self.index].release_details_by_territory;
        self.territory.focus(sections, codes, TerritoryScope::Included);
        self
    }

    pub fn with_excluded_territory(mut self, codes: &[&str]) -> Self {
        let sections =
            &mut self.builder.message.release_list.release[self.index].release_details_by_territory;
        self.territory.focus(sections, codes, TerritoryScope::Excluded);
        self
    }

    pub fn with_display_artist_name(mut self, name: &str, language: &str) -> Self {
        let name = self.localized(name, language);
        self.details().display_artist_name.push(name);
        self
    }

    pub fn with_artist(mut self, name: &str, role: &str, sequence: u32) -> Self {
        if !name.is_empty() {
            self.details().display_artist.push(DisplayArtist {
                sequence_number: Some(sequence),
                party_name: vec![Name::new(name)],
                artist_role: vec![role.to_string()],
                ..Default::default()
            });
        }
        self
    }

    pub fn with_label(mut self, label: &str, language: &str) -> Self {
        let label = self.localized(label, language);
        self.details().label_name.push(label);
        self
    }

    /// Release-level P-line
    pub fn with_pline(mut self, year: i32, text: &str) -> Self {
        self.release().p_line.push(PLine { year: Some(year), p_line_text: text.to_string() });
        self
    }

    pub fn with_territory_pline(mut self, year: i32, text: &str) -> Self {
        self.details().p_line.push(PLine { year: Some(year), p_line_text: text.to_string() });
        self
    }

    /// Release-level C-line
    pub fn with_cline(mut self, year: i32, text: &str) -> Self {
        self.release().c_line.push(CLine { year: Some(year), c_line_text: text.to_string() });
        self
    }

    pub fn with_territory_cline(mut self, year: i32, text: &str) -> Self {
        self.details().c_line.push(CLine { year: Some(year), c_line_text: text.to_string() });
        self
    }

    pub fn with_duration(mut self, duration: &str) -> Self {
        self.release().duration = Some(duration.to_string());
        self
    }

    pub fn with_release_date(mut self, date: &str) -> Self {
        self.details().release_date = Some(EventDate::new(date, false));
        self
    }

    pub fn with_original_release_date(mut self, date: &str) -> Self {
        self.details().original_release_date = Some(EventDate::new(date, false));
        self
    }

    pub fn with_genre(mut self, genre: &str, sub_genre: &str) -> Self {
        self.details().genre.push(Genre {
            genre_text: genre.to_string(),
            sub_genre: non_empty(sub_genre),
        });
        self
    }

    pub fn with_parental_warning(mut self, warning_type: &str) -> Self {
        self.details().parental_warning_type.push(warning_type.to_string());
        self
    }

    pub fn with_av_rating(mut self, rating: &str, agency: &str) -> Self {
        self.details().av_rating.push(AvRating {
            rating_text: rating.to_string(),
            rating_agency: non_empty(agency),
        });
        self
    }

    /// YouTube's "made for kids" flag
    pub fn with_made_for_kids(self) -> Self {
        self.with_av_rating("MadeForKids", "UserDefined")
    }

    pub fn with_marketing_comment(mut self, comment: &str, language: &str) -> Self {
        let comment = self.localized(comment, language);
        self.details().marketing_comment = Some(comment);
        self
    }

    pub fn with_keywords(mut self, keywords: &str, language: &str) -> Self {
        let keywords = self.localized(keywords, language);
        self.details().keywords.push(keywords);
        self
    }

    /// UPC or EAN; 13-digit codes are flagged `IsEan`
    pub fn with_icpn(mut self, icpn: &str) -> Self {
        self.release().release_id.push(ReleaseId {
            icpn: Some(Icpn::new(icpn)),
            ..Default::default()
        });
        self
    }

    pub fn with_upc(self, upc: &str) -> Self {
        if !validate_upc(upc) {
            warn!("UPC {} fails its check digit", upc);
        }
        self.with_icpn(upc)
    }

    pub fn with_ean(self, ean: &str) -> Self {
        if !validate_ean(ean) {
            warn!("EAN {} fails its check digit", ean);
        }
        self.with_icpn(ean)
    }

    pub fn with_grid(mut self, grid: &str) -> Self {
        self.release().release_id.push(ReleaseId {
            grid: Some(grid.to_string()),
            ..Default::default()
        });
        self
    }

    /// Only meaningful for releases of a single recording or video
    pub fn with_isrc(mut self, isrc: &str) -> Self {
        self.release().release_id.push(ReleaseId {
            isrc: Some(isrc.to_string()),
            ..Default::default()
        });
        self
    }

    pub fn with_catalog_number(mut self, catalog_number: &str) -> Self {
        self.release().release_id.push(ReleaseId {
            catalog_number: Some(catalog_number.to_string()),
            ..Default::default()
        });
        self
    }

    /// Adds to the first `ReleaseId`, creating one if the release has none
    pub fn add_proprietary_id(mut self, namespace: &str, value: &str) -> Self {
        let ids = &mut self.release().release_id;
        if ids.is_empty() {
            ids.push(ReleaseId::default());
        }
        ids[0].proprietary_id.push(ProprietaryId::new(namespace, value));
        self
    }

    pub fn add_release_resource_reference(mut self, resource_reference: &str) -> Self {
        self.release()
            .release_resource_reference_list
            .get_or_insert_with(ReleaseResourceReferenceList::default)
            .release_resource_reference
            .push(resource_reference.to_string());
        self
    }

    pub fn add_related_release(mut self, relationship_type: &str, release_id: ReleaseId) -> Self {
        self.details().related_release.push(RelatedRelease {
            release_relationship_type: relationship_type.to_string(),
            release_id,
        });
        self
    }

    /// Append a resource group to the section in focus
    pub fn add_resource_group(mut self, title: &str, sequence: u32) -> ResourceGroupBuilder<'a> {
        let details = self.details_index();
        let groups = &mut self.details().resource_group;
        groups.push(ResourceGroup {
            title: if title.is_empty() { Vec::new() } else { vec![Title::new(title, "")] },
            sequence_number: Some(sequence),
            ..Default::default()
        });
        let group = groups.len() - 1;

        debug!("Added resource group {} (sequence {})", group, sequence);
        ResourceGroupBuilder { release: self, details, group }
    }

    pub fn done(self) -> &'a mut Builder {
        self.builder
    }
}

/// Builds one `ResourceGroup`; finishing returns the release builder
pub struct ResourceGroupBuilder<'a> {
    release: ReleaseBuilder<'a>,
    details: usize,
    group: usize,
}

impl<'a> ResourceGroupBuilder<'a> {
    fn group(&mut self) -> &mut ResourceGroup {
        let (details, group) = (self.details, self.group);
        &mut self.release.release().release_details_by_territory[details].resource_group[group]
    }

    pub fn add_content_item(mut self, sequence: u32, resource_reference: &str) -> Self {
        self.group().resource_group_content_item.push(ResourceGroupContentItem {
            sequence_number: Some(sequence),
            release_resource_reference: resource_reference.to_string(),
            ..Default::default()
        });
        self
    }

    /// Link a resource (e.g. cover art) to the most recent content item.
    ///
    /// Without any content item there is nothing to link to and the call is ignored.
    pub fn add_linked_resource(mut self, description: &str, resource_reference: &str) -> Self {
        match self.group().resource_group_content_item.last_mut() {
            Some(item) => {
                item.linked_release_resource_reference.push(LinkedReleaseResourceReference {
                    link_description: non_empty(description),
                    value: resource_reference.to_string(),
                })
            }
            None => warn!(
                "Linked resource {} ignored: resource group has no content item yet",
                resource_reference
            ),
        }
        self
    }

    pub fn done(self) -> ReleaseBuilder<'a> {
        self.release
    }
}
