/*!
 * Sub-builders for ERN 4.3 resources.
 *
 * Every setter writes straight onto the resource. Artists, contributors and
 * rights controllers are given as party references registered through
 * `Builder::add_party*`; validation reports references with no party.
 */

use super::{Builder, non_empty};
use crate::ern43::common::{
    CLine, Contributor, DelegatedUsageRights, DisplayArtist, DisplayTitle, EventDate, Genre,
    LocalizedText, PLine, ProprietaryId, ResourceRightsController, TechnicalDetails,
};
use crate::ern43::resource::{Image, ResourceId, SoundRecording, Text, Video};
use crate::identifiers::format_duration;

fn display_artist(party_reference: &str, role: &str, sequence: u32) -> DisplayArtist {
    DisplayArtist {
        sequence_number: Some(sequence),
        artist_party_reference: party_reference.to_string(),
        display_artist_role: role.to_string(),
    }
}

fn contributor(party_reference: &str, roles: &[&str], sequence: u32) -> Contributor {
    Contributor {
        sequence_number: Some(sequence),
        contributor_party_reference: party_reference.to_string(),
        role: roles.iter().map(|role| role.to_string()).collect(),
    }
}

fn rights_controller(
    party_reference: &str,
    percentage: f64,
    territories: Vec<String>,
) -> ResourceRightsController {
    ResourceRightsController {
        rights_controller_party_reference: party_reference.to_string(),
        rights_control_type: vec!["RightsController".to_string()],
        right_share_percentage: Some(format!("{:.2}", percentage)),
        delegated_usage_rights: vec![DelegatedUsageRights {
            use_type: vec!["UserMakeAvailableUserProvided".to_string()],
            territory_of_rights_delegation: territories,
        }],
    }
}

fn keywords(values: &[&str], language: Option<&str>) -> Vec<LocalizedText> {
    values.iter().map(|value| LocalizedText::new(value, language)).collect()
}

/// Text in `language`, or in the message language when `language` is empty
fn localized(builder: &Builder, value: &str, language: &str) -> LocalizedText {
    let language = if language.is_empty() {
        builder.message.language_and_script_code.as_str()
    } else {
        language
    };
    LocalizedText::new(value, Some(language))
}

/// Delegation territories, defaulting to the configured territory
fn delegation_territories(builder: &Builder, territories: &[&str]) -> Vec<String> {
    if territories.is_empty() {
        vec![builder.config.default_territory.clone()]
    } else {
        territories.iter().map(|t| t.to_string()).collect()
    }
}

fn proprietary_resource_id(namespace: &str, value: &str) -> ResourceId {
    ResourceId {
        proprietary_id: vec![ProprietaryId::new(namespace, value)],
        ..Default::default()
    }
}

/// Builds one `Video` of the resource list
pub struct VideoBuilder<'a> {
    builder: &'a mut Builder,
    index: usize,
}

impl<'a> VideoBuilder<'a> {
    pub(super) fn new(builder: &'a mut Builder, index: usize) -> Self {
        Self { builder, index }
    }

    fn video(&mut self) -> &mut Video {
        &mut self.builder.message.resource_list.video[self.index]
    }

    /// Sets both `DisplayTitleText` and a structured `DisplayTitle`
    pub fn with_title(mut self, title: &str, subtitle: &str) -> Self {
        let text = localized(self.builder, title, "");
        let video = self.video();
        video.display_title_text.push(text);
        video.display_title.push(DisplayTitle::new(title, subtitle));
        self
    }

    pub fn with_display_artist_name(mut self, name: &str, language: &str) -> Self {
        let name = localized(self.builder, name, language);
        self.video().display_artist_name.push(name);
        self
    }

    pub fn with_artist(mut self, party_reference: &str, role: &str, sequence: u32) -> Self {
        if !party_reference.is_empty() {
            self.video().display_artist.push(display_artist(party_reference, role, sequence));
        }
        self
    }

    /// Contributor with one or more roles; ignored without roles
    pub fn with_contributor(
        mut self,
        party_reference: &str,
        roles: &[&str],
        sequence: u32,
    ) -> Self {
        if !party_reference.is_empty() && !roles.is_empty() {
            self.video().contributor.push(contributor(party_reference, roles, sequence));
        }
        self
    }

    pub fn with_rights_controller(
        mut self,
        party_reference: &str,
        percentage: f64,
        territories: &[&str],
    ) -> Self {
        let territories = delegation_territories(self.builder, territories);
        self.video()
            .resource_rights_controller
            .push(rights_controller(party_reference, percentage, territories));
        self
    }

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
        self.video().parental_warning_type.push(warning_type.to_string());
        self
    }

    pub fn with_pline(mut self, year: i32, text: &str) -> Self {
        self.video().p_line.push(PLine { year: Some(year), p_line_text: text.to_string() });
        self
    }

    pub fn with_cline(mut self, year: i32, text: &str) -> Self {
        self.video().c_line.push(CLine { year: Some(year), c_line_text: text.to_string() });
        self
    }

    pub fn with_genre(mut self, genre: &str, sub_genre: &str) -> Self {
        self.video().genre.push(Genre {
            genre_text: genre.to_string(),
            sub_genre: non_empty(sub_genre),
        });
        self
    }

    pub fn with_technical_details(mut self, reference: &str, file_uri: &str) -> Self {
        self.video().technical_details.push(TechnicalDetails::new(reference, file_uri));
        self
    }

    pub fn with_isrc(mut self, isrc: &str) -> Self {
        self.video().resource_id.push(ResourceId {
            isrc: Some(isrc.to_string()),
            ..Default::default()
        });
        self
    }

    pub fn add_keywords(mut self, values: &[&str]) -> Self {
        self.video().keywords.extend(keywords(values, None));
        self
    }

    pub fn add_keywords_with_language(mut self, language: &str, values: &[&str]) -> Self {
        self.video().keywords.extend(keywords(values, Some(language)));
        self
    }

    pub fn add_proprietary_id(mut self, namespace: &str, value: &str) -> Self {
        self.video().resource_id.push(proprietary_resource_id(namespace, value));
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
}

impl<'a> ImageBuilder<'a> {
    pub(super) fn new(builder: &'a mut Builder, index: usize) -> Self {
        Self { builder, index }
    }

    fn image(&mut self) -> &mut Image {
        &mut self.builder.message.resource_list.image[self.index]
    }

    pub fn with_title(mut self, title: &str) -> Self {
        let text = localized(self.builder, title, "");
        self.image().display_title_text.push(text);
        self
    }

    pub fn with_creation_date(mut self, date: &str, is_approximate: bool) -> Self {
        self.image().creation_date = Some(EventDate::new(date, is_approximate));
        self
    }

    pub fn with_parental_warning(mut self, warning_type: &str) -> Self {
        self.image().parental_warning_type.push(warning_type.to_string());
        self
    }

    pub fn with_cline(mut self, year: i32, text: &str) -> Self {
        self.image().c_line.push(CLine { year: Some(year), c_line_text: text.to_string() });
        self
    }

    pub fn with_technical_details(mut self, reference: &str, file_uri: &str) -> Self {
        self.image().technical_details.push(TechnicalDetails::new(reference, file_uri));
        self
    }

    pub fn add_proprietary_id(mut self, namespace: &str, value: &str) -> Self {
        self.image().resource_id.push(proprietary_resource_id(namespace, value));
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
}

impl<'a> SoundRecordingBuilder<'a> {
    pub(super) fn new(builder: &'a mut Builder, index: usize) -> Self {
        Self { builder, index }
    }

    fn recording(&mut self) -> &mut SoundRecording {
        &mut self.builder.message.resource_list.sound_recording[self.index]
    }

    pub fn with_title(mut self, title: &str, subtitle: &str) -> Self {
        let text = localized(self.builder, title, "");
        let recording = self.recording();
        recording.display_title_text.push(text);
        recording.display_title.push(DisplayTitle::new(title, subtitle));
        self
    }

    pub fn with_display_artist_name(mut self, name: &str, language: &str) -> Self {
        let name = localized(self.builder, name, language);
        self.recording().display_artist_name.push(name);
        self
    }

    pub fn with_artist(mut self, party_reference: &str, role: &str, sequence: u32) -> Self {
        if !party_reference.is_empty() {
            self.recording().display_artist.push(display_artist(party_reference, role, sequence));
        }
        self
    }

    pub fn with_contributor(
        mut self,
        party_reference: &str,
        roles: &[&str],
        sequence: u32,
    ) -> Self {
        if !party_reference.is_empty() && !roles.is_empty() {
            self.recording().contributor.push(contributor(party_reference, roles, sequence));
        }
        self
    }

    pub fn with_rights_controller(
        mut self,
        party_reference: &str,
        percentage: f64,
        territories: &[&str],
    ) -> Self {
        let territories = delegation_territories(self.builder, territories);
        self.recording()
            .resource_rights_controller
            .push(rights_controller(party_reference, percentage, territories));
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
        self.recording().parental_warning_type.push(warning_type.to_string());
        self
    }

    pub fn with_pline(mut self, year: i32, text: &str) -> Self {
        self.recording().p_line.push(PLine { year: Some(year), p_line_text: text.to_string() });
        self
    }

    pub fn with_genre(mut self, genre: &str, sub_genre: &str) -> Self {
        self.recording().genre.push(Genre {
            genre_text: genre.to_string(),
            sub_genre: non_empty(sub_genre),
        });
        self
    }

    pub fn with_technical_details(mut self, reference: &str, file_uri: &str) -> Self {
        self.recording().technical_details.push(TechnicalDetails::new(reference, file_uri));
        self
    }

    pub fn with_isrc(mut self, isrc: &str) -> Self {
        self.recording()
            .resource_id
            .push(ResourceId { isrc: Some(isrc.to_string()), ..Default::default() });
        self
    }

    pub fn add_keywords(mut self, values: &[&str]) -> Self {
        self.recording().keywords.extend(keywords(values, None));
        self
    }

    pub fn add_proprietary_id(mut self, namespace: &str, value: &str) -> Self {
        self.recording().resource_id.push(proprietary_resource_id(namespace, value));
        self
    }

    pub fn done(self) -> &'a mut Builder {
        self.builder
    }
}

/// Builds one `Text` of the resource list
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

    pub fn with_title(mut self, title: &str) -> Self {
        let text = localized(self.builder, title, "");
        self.text().display_title_text.push(text);
        self
    }

    pub fn add_proprietary_id(mut self, namespace: &str, value: &str) -> Self {
        self.text().resource_id.push(proprietary_resource_id(namespace, value));
        self
    }

    pub fn done(self) -> &'a mut Builder {
        self.builder
    }
}
