/*!
 * Sub-builders for ERN 4.3 releases and their resource groups.
 */

use log::{debug, warn};

use super::{Builder, non_empty};
use crate::ern43::common::{
    AvRating, CLine, DisplayArtist, DisplayTitle, EventDate, Genre, LocalizedText, PLine,
    ProprietaryId,
};
use crate::ern43::release::{
    AdditionalTitle, Icpn, LinkedReleaseResourceReference, RelatedResource, Release, ReleaseId,
    ReleaseLabelReference, ResourceGroup, ResourceGroupContentItem,
};
use crate::ern43::resource::ResourceId;
use crate::identifiers::{validate_ean, validate_upc};

/// Builds one `Release` of the release list
pub struct ReleaseBuilder<'a> {
    builder: &'a mut Builder,
    index: usize,
}

impl<'a> ReleaseBuilder<'a> {
    pub(super) fn new(builder: &'a mut Builder, index: usize) -> Self {
        Self { builder, index }
    }

    fn release(&mut self) -> &mut Release {
        &mut self.builder.message.release_list.release[self.index]
    }

    fn localized(&self, value: &str, language: &str) -> LocalizedText {
        let language = if language.is_empty() {
            self.builder.message.language_and_script_code.as_str()
        } else {
            language
        };
        LocalizedText::new(value, Some(language))
    }

    /// Sets both `DisplayTitleText` and a structured `DisplayTitle`
    pub fn with_title(mut self, title: &str, subtitle: &str) -> Self {
        let text = self.localized(title, "");
        let release = self.release();
        release.display_title_text.push(text);
        release.display_title.push(DisplayTitle::new(title, subtitle));
        self
    }

    /// Title shown only in one territory
    pub fn with_territory_title(mut self, territory: &str, title: &str, subtitle: &str) -> Self {
        self.release().display_title.push(DisplayTitle {
            applicable_territory_code: Some(territory.to_string()),
            ..DisplayTitle::new(title, subtitle)
        });
        self
    }

    pub fn with_display_artist_name(mut self, name: &str, language: &str) -> Self {
        let name = self.localized(name, language);
        self.release().display_artist_name.push(name);
        self
    }

    pub fn with_artist(mut self, party_reference: &str, role: &str, sequence: u32) -> Self {
        if !party_reference.is_empty() {
            self.release().display_artist.push(DisplayArtist {
                sequence_number: Some(sequence),
                artist_party_reference: party_reference.to_string(),
                display_artist_role: role.to_string(),
            });
        }
        self
    }

    /// Label credit by party reference; an empty territory applies everywhere
    pub fn with_label(mut self, party_reference: &str, territory: &str) -> Self {
        self.release().release_label_reference.push(ReleaseLabelReference {
            applicable_territory_code: non_empty(territory),
            value: party_reference.to_string(),
        });
        self
    }

    pub fn with_pline(mut self, year: i32, text: &str) -> Self {
        self.release().p_line.push(PLine { year: Some(year), p_line_text: text.to_string() });
        self
    }

    pub fn with_cline(mut self, year: i32, text: &str) -> Self {
        self.release().c_line.push(CLine { year: Some(year), c_line_text: text.to_string() });
        self
    }

    pub fn with_duration(mut self, duration: &str) -> Self {
        self.release().duration = Some(duration.to_string());
        self
    }

    pub fn with_release_date(mut self, date: &str) -> Self {
        self.release().release_date = Some(EventDate::new(date, false));
        self
    }

    pub fn with_original_release_date(mut self, date: &str) -> Self {
        self.release().original_release_date = Some(EventDate::new(date, false));
        self
    }

    pub fn with_genre(mut self, genre: &str, sub_genre: &str) -> Self {
        self.release().genre.push(Genre {
            genre_text: genre.to_string(),
            sub_genre: non_empty(sub_genre),
        });
        self
    }

    pub fn with_parental_warning(mut self, warning_type: &str) -> Self {
        self.release().parental_warning_type.push(warning_type.to_string());
        self
    }

    pub fn with_av_rating(mut self, rating: &str, agency: &str) -> Self {
        self.release().av_rating.push(AvRating {
            rating: rating.to_string(),
            agency: non_empty(agency),
        });
        self
    }

    pub fn with_made_for_kids(self) -> Self {
        self.with_av_rating("MadeForKids", "UserDefined")
    }

    pub fn with_marketing_comment(mut self, comment: &str, language: &str) -> Self {
        let comment = self.localized(comment, language);
        self.release().marketing_comment = Some(comment);
        self
    }

    pub fn with_keywords(mut self, keywords: &str, language: &str) -> Self {
        let keywords = self.localized(keywords, language);
        self.release().keywords.push(keywords);
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

    /// Resource outside the release identified by ISRC (e.g. `HasAudioTrack`)
    pub fn add_related_resource(mut self, relationship_type: &str, isrc: &str) -> Self {
        self.release().related_resource.push(RelatedResource {
            resource_relationship_type: relationship_type.to_string(),
            resource_id: ResourceId { isrc: Some(isrc.to_string()), ..Default::default() },
        });
        self
    }

    pub fn add_resource_group(mut self, title: &str, sequence: u32) -> ResourceGroupBuilder<'a> {
        let groups = &mut self.release().resource_group;
        groups.push(ResourceGroup {
            additional_title: non_empty(title)
                .map(|title_text| AdditionalTitle { title_text })
                .into_iter()
                .collect(),
            sequence_number: Some(sequence),
            ..Default::default()
        });
        let group = groups.len() - 1;

        debug!("Added resource group {} (sequence {})", group, sequence);
        ResourceGroupBuilder { release: self, group }
    }

    pub fn done(self) -> &'a mut Builder {
        self.builder
    }
}

/// Builds one `ResourceGroup`; finishing returns the release builder
pub struct ResourceGroupBuilder<'a> {
    release: ReleaseBuilder<'a>,
    group: usize,
}

impl<'a> ResourceGroupBuilder<'a> {
    fn group(&mut self) -> &mut ResourceGroup {
        let group = self.group;
        &mut self.release.release().resource_group[group]
    }

    pub fn add_content_item(mut self, sequence: u32, resource_reference: &str) -> Self {
        self.group().resource_group_content_item.push(ResourceGroupContentItem {
            sequence_number: Some(sequence),
            release_resource_reference: resource_reference.to_string(),
            ..Default::default()
        });
        self
    }

    /// Link a resource to the most recent content item; ignored without one
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
