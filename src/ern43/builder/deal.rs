/*!
 * Sub-builders for ERN 4.3 release deals and deals.
 */

use log::debug;

use super::Builder;
use crate::ern43::deal::{Deal, DealTerms, ReleaseDeal, RightsClaimPolicy, ValidityPeriod};

/// Builds the deals of one `ReleaseDeal`
pub struct ReleaseDealBuilder<'a> {
    builder: &'a mut Builder,
    index: usize,
}

impl<'a> ReleaseDealBuilder<'a> {
    pub(super) fn new(builder: &'a mut Builder, index: usize) -> Self {
        Self { builder, index }
    }

    fn release_deal(&mut self) -> &mut ReleaseDeal {
        &mut self.builder.message.deal_list.release_deal[self.index]
    }

    pub fn add_deal(mut self) -> DealBuilder<'a> {
        let deals = &mut self.release_deal().deal;
        deals.push(Deal::default());
        let index = deals.len() - 1;

        debug!("Added deal {} to release deal {}", index, self.index);
        DealBuilder { release_deal: self, index }
    }

    pub fn done(self) -> &'a mut Builder {
        self.builder
    }
}

/// Builds one `Deal`; its terms are created on the first setter
pub struct DealBuilder<'a> {
    release_deal: ReleaseDealBuilder<'a>,
    index: usize,
}

impl<'a> DealBuilder<'a> {
    fn terms(&mut self) -> &mut DealTerms {
        let index = self.index;
        self.release_deal.release_deal().deal[index]
            .deal_terms
            .get_or_insert_with(DealTerms::default)
    }

    pub fn with_territory(mut self, code: &str) -> Self {
        self.terms().territory_code.push(code.to_string());
        self
    }

    pub fn with_territories(mut self, codes: &[&str]) -> Self {
        self.terms().territory_code.extend(codes.iter().map(|code| code.to_string()));
        self
    }

    pub fn with_excluded_territories(mut self, codes: &[&str]) -> Self {
        self.terms().excluded_territory_code.extend(codes.iter().map(|code| code.to_string()));
        self
    }

    pub fn with_validity_period(mut self, start: &str, end: Option<&str>) -> Self {
        self.terms().validity_period.push(ValidityPeriod {
            start_date: Some(start.to_string()),
            end_date: end.map(str::to_string),
            ..Default::default()
        });
        self
    }

    pub fn with_validity_period_date_time(mut self, start: &str, end: Option<&str>) -> Self {
        self.terms().validity_period.push(ValidityPeriod {
            start_date_time: Some(start.to_string()),
            end_date_time: end.map(str::to_string),
            ..Default::default()
        });
        self
    }

    pub fn with_commercial_model(mut self, model_type: &str) -> Self {
        self.terms().commercial_model_type.push(model_type.to_string());
        self
    }

    /// Use types are listed directly in the terms
    pub fn with_use_type(mut self, use_type: &str) -> Self {
        self.terms().use_type.push(use_type.to_string());
        self
    }

    pub fn with_rights_claim_policy(mut self, policy_type: &str) -> Self {
        self.terms().rights_claim_policy.push(RightsClaimPolicy {
            rights_claim_policy_type: policy_type.to_string(),
        });
        self
    }

    pub fn done(self) -> ReleaseDealBuilder<'a> {
        self.release_deal
    }
}
