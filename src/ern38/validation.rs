/*!
 * Consistency checks for a finished ERN 3.8 message.
 *
 * Checks run in a fixed order and the first failure is reported: header,
 * releases, deals, resource references, then territory keys.
 */

use std::collections::HashSet;

use log::debug;

use super::message::NewReleaseMessage;
use super::release::Release;
use super::territory::TerritorySection;
use crate::errors::ValidationError;

impl NewReleaseMessage {
    /// Check the message for missing mandatory parts and dangling references
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_header()?;
        self.validate_deals()?;
        self.validate_resource_references()?;
        self.validate_territories()?;

        debug!(
            "ERN 3.8 message valid: {} release(s), {} release deal(s)",
            self.release_list.release.len(),
            self.deal_list.release_deal.len()
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
            if let Some(resource) =
                referenced_resources(release).find(|r| !resources.contains(*r))
            {
                return Err(ValidationError::UnknownResource {
                    release: release.release_reference.clone(),
                    resource: resource.to_string(),
                });
            }
        }
        Ok(())
    }

    fn validate_territories(&self) -> Result<(), ValidationError> {
        let resources = &self.resource_list;
        for video in &resources.video {
            check_sections(&video.resource_reference, &video.video_details_by_territory)?;
        }
        for image in &resources.image {
            check_sections(&image.resource_reference, &image.image_details_by_territory)?;
        }
        for recording in &resources.sound_recording {
            check_sections(
                &recording.resource_reference,
                &recording.sound_recording_details_by_territory,
            )?;
        }
        for release in &self.release_list.release {
            check_sections(&release.release_reference, &release.release_details_by_territory)?;
        }
        Ok(())
    }
}

/// Resource references a release points at: its reference list and every
/// content item (with linked resources) of its resource groups
fn referenced_resources(release: &Release) -> impl Iterator<Item = &str> {
    let listed = release
        .release_resource_reference_list
        .iter()
        .flat_map(|list| list.release_resource_reference.iter())
        .map(String::as_str);

    let grouped = release
        .release_details_by_territory
        .iter()
        .flat_map(|details| details.resource_group.iter())
        .flat_map(|group| group.resource_group_content_item.iter())
        .flat_map(|item| {
            std::iter::once(item.release_resource_reference.as_str()).chain(
                item.linked_release_resource_reference
                    .iter()
                    .map(|linked| linked.value.as_str()),
            )
        });

    listed.chain(grouped)
}

fn check_sections<T: TerritorySection>(owner: &str, sections: &[T]) -> Result<(), ValidationError> {
    match sections.iter().find_map(|section| section.scope_problem()) {
        Some(reason) => Err(ValidationError::InvalidTerritoryScope {
            owner: owner.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
