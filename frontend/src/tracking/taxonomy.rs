//! Closed vocabulary used as analytics dimensions.
//!
//! Components name lead sources and property types through these enums only,
//! so a typo can't open a new dimension in the analytics property.

use serde::{Serialize, Serializer};

/// The UI surface that triggered a lead-capture action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeadSource {
    Hero,
    Overview,
    Pricing,
    MasterPlan,
    Location,
    Footer,
    ContactFormLink,
    Unknown,
}

impl LeadSource {
    pub const ALL: [LeadSource; 8] = [
        LeadSource::Hero,
        LeadSource::Overview,
        LeadSource::Pricing,
        LeadSource::MasterPlan,
        LeadSource::Location,
        LeadSource::Footer,
        LeadSource::ContactFormLink,
        LeadSource::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::Hero => "hero_banner",
            LeadSource::Overview => "overview_section",
            LeadSource::Pricing => "pricing_section",
            LeadSource::MasterPlan => "master_plan_section",
            LeadSource::Location => "location_section",
            LeadSource::Footer => "footer_section",
            LeadSource::ContactFormLink => "contact_form_internal_link",
            LeadSource::Unknown => "unknown_source",
        }
    }
}

impl Serialize for LeadSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Plot sizes on offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyType {
    Sqft2400,
    Sqft4000,
}

impl PropertyType {
    pub const ALL: [PropertyType; 2] = [PropertyType::Sqft2400, PropertyType::Sqft4000];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Sqft2400 => "2400 sq.ft",
            PropertyType::Sqft4000 => "4000 sq.ft",
        }
    }
}

impl Serialize for PropertyType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Forms that can be opened or submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormType {
    Contact,
    SiteVisit,
}

impl FormType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::Contact => "contact_form",
            FormType::SiteVisit => "site_visit_form",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lead_source_identifiers_are_distinct() {
        let values: HashSet<&str> = LeadSource::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(values.len(), LeadSource::ALL.len());
    }

    #[test]
    fn identifiers_match_analytics_dimensions() {
        assert_eq!(LeadSource::Hero.as_str(), "hero_banner");
        assert_eq!(LeadSource::ContactFormLink.as_str(), "contact_form_internal_link");
        assert_eq!(PropertyType::Sqft2400.as_str(), "2400 sq.ft");
        assert_eq!(FormType::SiteVisit.as_str(), "site_visit_form");
    }

    #[test]
    fn serializes_as_canonical_string() {
        let json = serde_json::to_string(&LeadSource::MasterPlan).unwrap();
        assert_eq!(json, "\"master_plan_section\"");
        let json = serde_json::to_string(&Some(PropertyType::Sqft4000)).unwrap();
        assert_eq!(json, "\"4000 sq.ft\"");
    }
}
