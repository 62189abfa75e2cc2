/*!
 * Sub-builders for ERN 3.8 resources.
 *
 * Resource-level fields (identifiers, duration, creation date) are set on
 * the resource. Everything else goes into the territory section in focus;
 * when no section was chosen, the configured default territory is created.
 */

use super::Builder;
use crate::ern38::common::{
    CLine, DelegatedUsageRights, DisplayArtist, EventDate, Genre, LocalizedText, Name, PLine,
    ProprietaryId, ReferenceTitle, ResourceContributor, RightsController, TechnicalDetails, Title,
};
use crate::ern38::resource::{
    Image, ImageDetailsByTerritory, ResourceId, SoundRecording, SoundRecordingDetailsByTerritory,
    Text, Video, VideoDetailsByTerritory,
};
use crate::ern38::territory::{TerritoryCursor, TerritoryScope};
use crate::identifiers::format_duration;

fn display_artist(name: &str, role: &str, sequence: u32) -> DisplayArtist {
    DisplayArtist {
        sequence_number: Some(sequence),
        party_name: vec![Name::new(name)],
        artist_role: vec![role.to_string()],
        ..Default::default()
    }
}

fn contributor(name: &str, roles: &[&str], sequence: u32) -> ResourceContributor {
    ResourceContributor {
        sequence_number: Some(sequence),
        party_name: vec![Name::new(name)],
        role: roles.iter().map(|role| role.to_string()).collect(),
        ..Default::default()
    }
}

fn keywords(values: &[&str], language: Option<&str>) -> Vec<LocalizedText> {
    values.iter().map(|value| LocalizedText::new(value, language)).collect()
}

/// Language of a text element; an empty argument falls back to the message language
fn language_or<'l>(language: &'l str, builder: &'l Builder) -> &'l str {
    if language.is_empty() {
        &builder.message.language_and_script_code
    } else {
        language
    }
}

/// Builds one `Video` of the resource list
pub struct VideoBuilder<'a> {
    builder: &'a mut Builder,
    index: usize,
    territory: TerritoryCursor,
}

impl<'a> VideoBuilder<'a> {
    pub(super) fn new(builder: &'a mut Builder, index: usize) -> Self {
        Self { builder, index, territory: TerritoryCursor::default() }
    }

    fn video(&mut self) -> &mut Video {
        &mut self.builder.message.resource_list.video[self.index]
    }

    fn details(&mut self) -> &mut VideoDetailsByTerritory {
        let Builder { message, config } = &mut *self.builder;
        let sections = &mut message.resource_list.video[self.index].video_details_by_territory;
        let at = self.territory.ensure(sections, &config.default_territory);
        &mut sections[at]
    }

    /// Focus the section whose first territory code matches, creating it if needed
    pub fn with_territory(mut self, codes: &[&str]) -> Self {
        let sections =
            &mut self.builder.message.resource_list.video[self.index].video_details_by_territory;
        self.territory.focus(sections, codes, TerritoryScope::Included);
        self
    }

    /// Focus a section applying everywhere except the given territories
    pub fn with_excluded_territory(mut self, codes: &[&str]) -> Self {
        let sections =
            &mut self.builder.message.resource_list.video[self.index].video_details_by_territory;
        self.territory.focus(sections, codes, TerritoryScope::Excluded);
        self
    }

    pub fn with_title(mut self, title: &str, subtitle: &str) -> Self {
        self.video().reference_title.get_or_insert_with(|| ReferenceTitle {
            title_text: title.to_string(),
            sub_title: None,
        });
        self.details().title.push(Title::new(title, subtitle));
        self
    }

    pub fn with_display_artist_name(mut self, name: &str, language: &str) -> Self {
        let language = language_or(language, self.builder).to_string();
        self.details().display_artist_name.push(LocalizedText::new(name, Some(language.as_str())));
        self
    }

    pub fn with_artist(mut self, name: &str, role: &str, sequence: u32) -> Self {
        if !name.is_empty() {
            self.details().display_artist.push(display_artist(name, role, sequence));
        }
        self
    }

    /// Contributor with one or more roles (Producer, Director, ...); ignored without roles
    pub fn with_contributor(mut self, name: &str, roles: &[&str], sequence: u32) -> Self {
        if !name.is_empty() && !roles.is_empty() {
            self.details().resource_contributor.push(contributor(name, roles, sequence));
        }
        self
    }

    /// Rights controller delegating user-provided usage in `territories`
    /// (the default territory when empty)
    pub fn with_rights_controller(
        mut self,
        name: &str,
        percentage: f64,
        territories: &[&str],
    ) -> Self {
        let territories: Vec<String> = if territories.is_empty() {
            vec![self.builder.config.default_territory.clone()]
        } else {
            territories.iter().map(|t| t.to_string()).collect()
        };

        self.details().rights_controller.push(RightsController {
            party_name: vec![Name::new(name)],
            rights_controller_role: vec!["RightsController".to_string()],
            right_share_percentage: Some(format!("{:.2}", percentage)),
            delegated_usage_rights: vec![DelegatedUsageRights {
                use_type: vec!["UserMakeAvailableUserProvided".to_string()],
                territory_of_rights_delegation: territories,
            }],
            ..Default::default()
        });
        self
    }

    /// ISO 8601 duration such as "PT3M10S"
    pub fn with_duration(mut self, duration: &str) -> Self {
        self.video().duration = Some(duration.to_string());
        self
    }

    pub fn with_duration_seconds(self, seconds: u64) -> Self {
        self.with_duration(&format_duration(seconds))
    }

    pub fn with_creation_date(mut self, date: &str, is_approximate: bool) -> Self {
        self.video().creation_date = Some(EventDate::new(date, is_approximate));
        self
    }

    pub fn with_parental_warning(mut self, warning_type: &str) -> Self {
        self.details().parental_warning_type.push(warning_type.to_string());
        self
    }

    pub fn with_pline(mut self, year: i32, text: &str) -> Self {
        self.details().p_line.push(PLine { year: Some(year), p_line_text: text.to_string() });
        self
    }

    pub fn with_cline(mut self, year: i32, text: &str) -> Self {
        self.details().c_line.push(CLine { year: Some(year), c_line_text: text.to_string() });
        self
    }

    pub fn with_genre(mut self, genre: &str, sub_genre: &str) -> Self {
        self.details().genre.push(Genre {
            genre_text: genre.to_string(),
            sub_genre: super::non_empty(sub_genre),
        });
        self
    }

    pub fn with_technical_details(mut self, reference: &str, file_uri: &str) -> Self {
        self.details().technical_video_details.push(TechnicalDetails::new(reference, file_uri));
        self
    }

    pub fn with_isrc(mut self, isrc: &str) -> Self {
        self.video().video_id.push(ResourceId {
            isrc: Some(isrc.to_string()),
            ..Default::default()
        });
        self
    }

    pub fn add_keywords(mut self, values: &[&str]) -> Self {
        self.details().keywords.extend(keywords(values, None));
        self
    }

    pub fn add_keywords_with_language(mut self, language: &str, values: &[&str]) -> Self {
        self.details().keywords.extend(keywords(values, Some(language)));
        self
    }

    /// Proprietary identifier such as a YouTube channel id
    pub fn add_proprietary_id(mut self, namespace: &str, value: &str) -> Self {
        self.video().video_id.push(ResourceId {
            proprietary_id: vec![ProprietaryId::new(namespace, value)],
            ..Default::default()
        });
        self
    }

    pub fn done(self) -> &'a mut Builder {
        self.builder
    }
}

/// Builds one `Image` of the resource list
pub struct ImageBuilder<'a> {
    builder: &'a mut Builder,
    index: usize,
    territory: TerritoryCursor,
}

impl<'a> ImageBuilder<'a> {
    pub(super) fn new(builder: &'a mut Builder, index: usize) -> Self {
        Self { builder, index, territory: TerritoryCursor::default() }
    }

    fn image(&mut self) -> &mut Image {
        &mut self.builder.message.resource_list.image[self.index]
    }

    fn details(&mut self) -> &mut ImageDetailsByTerritory {
        let Builder { message, config } = &mut *self.builder;
        let sections = &mut message.resource_list.image[self.index].image_details_by_territory;
        let at = self.territory.ensure(sections, &config.default_territory);
        &mut sections[at]
    }

    pub fn with_territory(mut self, codes: &[&str]) -> Self {
        let sections =
            &mut self.builder.message.resource_list.image[self.index].image_details_by_territory;
        self.territory.focus(sections, codes, TerritoryScope::Included);
        self
    }

    pub fn with_excluded_territory(mut self, codes: &[&str]) -> Self {
        let sections =
            &mut self.builder.message.resource_list.image[self.index].image_details_by_territory;
        self.territory.focus(sections, codes, TerritoryScope::Excluded);
        self
    }

    pub fn with_title(mut self, title: &str, subtitle: &str) -> Self {
        self.details().title.push(Title::new(title, subtitle));
        self
    }

    pub fn add_proprietary_id(mut self, namespace: &str, value: &str) -> Self {
        self.image().image_id.push(ResourceId {
            proprietary_id: vec![ProprietaryId::new(namespace, value)],
            ..Default::default()
        });
        self
    }

    pub fn with_creation_date(mut self, date: &str, is_approximate: bool) -> Self {
        self.image().creation_date = Some(EventDate::new(date, is_approximate));
        self
    }

    pub fn with_parental_warning(mut self, warning_type: &str) -> Self {
        self.details().parental_warning_type.push(warning_type.to_string());
        self
    }

    pub fn with_cline(mut self, year: i32, text: &str) -> Self {
        self.details().c_line.push(CLine { year: Some(year), c_line_text: text.to_string() });
        self
    }

    pub fn add_keywords(mut self, values: &[&str]) -> Self {
        self.details().keywords.extend(keywords(values, None));
        self
    }

    pub fn with_technical_details(mut self, reference: &str, file_uri: &str) -> Self {
        self.details().technical_image_details.push(TechnicalDetails::new(reference, file_uri));
        self
    }

    pub fn done(self) -> &'a mut Builder {
        self.builder
    }
}

/// Builds one `SoundRecording` of the resource list
pub struct SoundRecordingBuilder<'a> {
    builder: &'a mut Builder,
    index: usize,
    territory: TerritoryCursor,
}

impl<'a> SoundRecordingBuilder<'a> {
    pub(super) fn new(builder: &'a mut Builder, index: usize) -> Self {
        Self { builder, index, territory: TerritoryCursor::default() }
    }

    fn recording(&mut self) -> &mut SoundRecording {
        &mut self.builder.message.resource_list.sound_recording[self.index]
    }

    fn details(&mut self) -> &mut SoundRecordingDetailsByTerritory {
        let Builder { message, config } = &mut *self.builder;
        let recording = &mut message.resource_list.sound_recording[self.index];
        let sections = &mut recording.sound_recording_details_by_territory;
        let at = self.territory.ensure(sections, &config.default_territory);
        &mut sections[at]
    }

    pub fn with_territory(mut self, codes: &[&str]) -> Self {
        let recording = &mut self.builder.message.resource_list.sound_recording[self.index];
        let sections = &mut recording.sound_recording_details_by_territory;
        self.territory.focus(sections, codes, TerritoryScope::Included);
        self
    }

    pub fn with_excluded_territory(mut self, codes: &[&str]) -> Self {
        let recording = &mut self.builder.message.resource_list.sound_recording[self.index];
        let sections = &mut recording.sound_recording_details_by_territory;
        self.territory.focus(sections, codes, TerritoryScope::Excluded);
        self
    }

    pub fn with_title(mut self, title: &str, subtitle: &str) -> Self {
        self.recording().reference_title.get_or_insert_with(|| ReferenceTitle {
            title_text: title.to_string(),
            sub_title: None,
        });
        self.details().title.push(Title::new(title, subtitle));
        self
    }

    pub fn with_display_artist_name(mut self, name: &str, language: &str) -> Self {
        let language = language_or(language, self.builder).to_string();
        self.details().display_artist_name.push(LocalizedText::new(name, Some(language.as_str())));
        self
    }

    pub fn with_artist(mut self, name: &str, role: &str, sequence: u32) -> Self {
        if !name.is_empty() {
            self.details().display_artist.push(display_artist(name, role, sequence));
        }
        self
    }

    pub fn with_contributor(mut self, name: &str, roles: &[&str], sequence: u32) -> Self {
        if !name.is_empty() && !roles.is_empty() {
            self.details().resource_contributor.push(contributor(name, roles, sequence));
        }
        self
    }

    pub fn with_label(mut self, label: &str, language: &str) -> Self {
        let language = language_or(language, self.builder).to_string();
        self.details().label_name.push(LocalizedText::new(label, Some(language.as_str())));
        self
    }

    pub fn with_duration(mut self, duration: &str) -> Self {
        self.recording().duration = Some(duration.to_string());
        self
    }

    pub fn with_duration_seconds(self, seconds: u64) -> Self {
        self.with_duration(&format_duration(seconds))
    }

    pub fn with_creation_date(mut self, date: &str, is_approximate: bool) -> Self {
        self.recording().creation_date = Some(EventDate::new(date, is_approximate));
        self
    }

    pub fn with_parental_warning(mut self, warning_type: &str) -> Self {
        self.details().parental_warning_type.push(warning_type.to_string());
        self
    }

    pub fn with_pline(mut self, year: i32, text: &str) -> Self {
        self.details().p_line.push(PLine { year: Some(year), p_line_text: text.to_string() });
        self
    }

    pub fn with_genre(mut self, genre: &str, sub_genre: &str) -> Self {
        self.details().genre.push(Genre {
            genre_text: genre.to_string(),
            sub_genre: super::non_empty(sub_genre),
        });
        self
    }

    pub fn with_technical_details(mut self, reference: &str, file_uri: &str) -> Self {
        self.details()
            .technical_sound_recording_details
            .push(TechnicalDetails::new(reference, file_uri));
        self
    }

    pub fn with_isrc(mut self, isrc: &str) -> Self {
        self.recording()
            .sound_recording_id
            .push(ResourceId { isrc: Some(isrc.to_string()), ..Default::default() });
        self
    }

    pub fn add_keywords(mut self, values: &[&str]) -> Self {
        self.details().keywords.extend(keywords(values, None));
        self
    }

    pub fn add_proprietary_id(mut self, namespace: &str, value: &str) -> Self {
        self.recording().sound_recording_id.push(ResourceId {
            proprietary_id: vec![ProprietaryId::new(namespace, value)],
            ..Default::default()
        });
        self
    }

    pub fn done(self) -> &'a mut Builder {
        self.builder
    }
}

/// Builds one `Text` of the resource list; texts carry no territory sections
pub struct TextBuilder<'a> {
    builder: &'a mut Builder,
    index: usize,
}

impl<'a> TextBuilder<'a> {
    pub(super) fn new(builder: &'a mut Builder, index: usize) -> Self {
        Self { builder, index }
    }

    fn text(&mut self) -> &mut Text {
        &mut self.builder.message.resource_list.text[self.index]
    }

    pub fn with_title(mut self, title: &str, subtitle: &str) -> Self {
        self.text().reference_title = Some(ReferenceTitle {
            title_text: title.to_string(),
            sub_title: super::non_empty(subtitle),
        });
        self
    }

    pub fn add_proprietary_id(mut self, namespace: &str, value: &str) -> Self {
        self.text().text_id.push(ResourceId {
            proprietary_id: vec![ProprietaryId::new(namespace, value)],
            ..Default::default()
        });
        self
    }

    pub fn done(self) -> &'a mut Builder {
        self.builder
    }
}
