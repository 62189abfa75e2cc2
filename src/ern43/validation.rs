/*!
 * Consistency checks for a finished ERN 4.3 message.
 */

use std::collections::HashSet;

use log::debug;

use super::common::{Contributor, DisplayArtist, ResourceRightsController};
use super::message::NewReleaseMessage;
use crate::errors::ValidationError;

impl NewReleaseMessage {
    /// Check the message for missing mandatory parts and dangling references.
    ///
    /// Order: header, releases and deals, resource references, party references.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_header()?;
        self.validate_deals()?;
        self.validate_resource_references()?;
        self.validate_party_references()?;

        debug!(
            "ERN 4.3 message valid: {} parties, {} releases",
            self.party_list.party.len(),
            self.release_list.release.len()
        );
        Ok(())
    }

    fn validate_header(&self) -> Result<(), ValidationError> {
        let header = self.message_header.as_ref().ok_or(ValidationError::MissingHeader)?;

        if header.message_id.trim().is_empty() {
            return Err(ValidationError::MissingMessageId);
        }
        if header.message_thread_id.trim().is_empty() {
            return Err(ValidationError::MissingThreadId);
        }
        if header.message_sender.is_none() {
            return Err(ValidationError::MissingSender);
        }
        if header.message_recipient.is_empty() {
            return Err(ValidationError::MissingRecipient);
        }
        Ok(())
    }

    fn validate_deals(&self) -> Result<(), ValidationError> {
        let releases = &self.release_list.release;
        let first = releases.first().ok_or(ValidationError::NoReleases)?;

        let release_deals = &self.deal_list.release_deal;
        if release_deals.iter().all(|release_deal| release_deal.deal.is_empty()) {
            return Err(ValidationError::NoDeals(first.release_reference.clone()));
        }

        let known: HashSet<&str> = releases.iter().map(|r| r.release_reference.as_str()).collect();
        if let Some(orphan) = release_deals
            .iter()
            .find(|release_deal| !known.contains(release_deal.deal_release_reference.as_str()))
        {
            return Err(ValidationError::UnknownRelease(orphan.deal_release_reference.clone()));
        }

        let covered: HashSet<&str> = release_deals
            .iter()
            .filter(|release_deal| !release_deal.deal.is_empty())
            .map(|release_deal| release_deal.deal_release_reference.as_str())
            .collect();
        match releases.iter().find(|r| !covered.contains(r.release_reference.as_str())) {
            Some(release) => Err(ValidationError::NoDealForRelease(
                release.release_reference.clone(),
            )),
            None => Ok(()),
        }
    }

    fn validate_resource_references(&self) -> Result<(), ValidationError> {
        let resources: HashSet<&str> = self.resource_list.references().collect();

        for release in &self.release_list.release {
            let dangling = release
                .resource_group
                .iter()
                .flat_map(|group| group.resource_group_content_item.iter())
                .flat_map(|item| {
                    std::iter::once(item.release_resource_reference.as_str()).chain(
                        item.linked_release_resource_reference
                            .iter()
                            .map(|linked| linked.value.as_str()),
                    )
                })
                .find(|reference| !resources.contains(*reference));

            if let Some(resource) = dangling {
                return Err(ValidationError::UnknownResource {
                    release: release.release_reference.clone(),
                    resource: resource.to_string(),
                });
            }
        }
        Ok(())
    }

    fn validate_party_references(&self) -> Result<(), ValidationError> {
        let parties: HashSet<&str> = self
            .party_list
            .party
            .iter()
            .map(|party| party.party_reference.as_str())
            .collect();

        let resources = &self.resource_list;
        for video in &resources.video {
            check_parties(
                &parties,
                &video.resource_reference,
                resource_parties(
                    &video.display_artist,
                    &video.contributor,
                    &video.resource_rights_controller,
                ),
            )?;
        }
        for recording in &resources.sound_recording {
            check_parties(
                &parties,
                &recording.resource_reference,
                resource_parties(
                    &recording.display_artist,
                    &recording.contributor,
                    &recording.resource_rights_controller,
                ),
            )?;
        }
        for release in &self.release_list.release {
            let references = release
                .display_artist
                .iter()
                .map(|artist| artist.artist_party_reference.as_str())
                .chain(release.release_label_reference.iter().map(|label| label.value.as_str()))
                .collect();
            check_parties(&parties, &release.release_reference, references)?;
        }
        Ok(())
    }
}

fn resource_parties<'m>(
    artists: &'m [DisplayArtist],
    contributors: &'m [Contributor],
    controllers: &'m [ResourceRightsController],
) -> Vec<&'m str> {
    artists
        .iter()
        .map(|artist| artist.artist_party_reference.as_str())
        .chain(contributors.iter().map(|c| c.contributor_party_reference.as_str()))
        .chain(controllers.iter().map(|c| c.rights_controller_party_reference.as_str()))
        .collect()
}

fn check_parties(
    parties: &HashSet<&str>,
    owner: &str,
    references: Vec<&str>,
) -> Result<(), ValidationError> {
    match references.into_iter().find(|reference| !parties.contains(*reference)) {
        Some(party) => Err(ValidationError::UnknownParty {
            owner: owner.to_string(),
            party: party.to_string(),
        }),
        None => Ok(()),
    }
}
