use serde::Serialize;

use super::taxonomy::FormType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EventCategory {
    #[serde(rename = "Button Click")]
    ButtonClick,
    #[serde(rename = "Form Submission")]
    FormSubmission,
    #[serde(rename = "Form Interaction")]
    FormInteraction,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::ButtonClick => "Button Click",
            EventCategory::FormSubmission => "Form Submission",
            EventCategory::FormInteraction => "Form Interaction",
        }
    }
}

/// How far along the interest-to-conversion path an event sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FunnelStage {
    Interest,
    Consideration,
    Lead,
    SiteVisitRequest,
}

impl FunnelStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            FunnelStage::Interest => "interest",
            FunnelStage::Consideration => "consideration",
            FunnelStage::Lead => "lead",
            FunnelStage::SiteVisitRequest => "site_visit_request",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CustomParameters {
    pub lead_source: String,
    pub property_type: Option<String>,
    pub funnel_stage: FunnelStage,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub category: EventCategory,
    pub action: String,
    pub label: String,
    pub custom_parameters: CustomParameters,
}

impl AnalyticsEvent {
    fn new(
        category: EventCategory,
        action: String,
        label: String,
        source: &str,
        property_type: Option<&str>,
        funnel_stage: FunnelStage,
    ) -> Self {
        Self {
            category,
            action,
            label,
            custom_parameters: CustomParameters {
                lead_source: source.to_string(),
                property_type: property_type.map(str::to_string),
                funnel_stage,
            },
        }
    }

    /// A call to action was clicked.
    ///
    /// `_label` is the button caption the caller shows; the event label is always
    /// derived from the source so that it stays a bounded dimension.
    pub fn button_click(source: &str, action: &str, _label: &str, property_type: Option<&str>) -> Self {
        Self::new(
            EventCategory::ButtonClick,
            action.to_string(),
            suffixed_label(source, property_type),
            source,
            property_type,
            FunnelStage::Interest,
        )
    }

    /// A form was opened. The property type is left out of the label when the
    /// source already names it, e.g. `pricing_section` opened for `pricing_section`.
    pub fn form_open(source: &str, form_type: FormType, property_type: Option<&str>) -> Self {
        let label = match property_type {
            Some(p) if !normalize(source).contains(&normalize(p)) => format!("{} - {}", source, p),
            _ => source.to_string(),
        };

        Self::new(
            EventCategory::FormInteraction,
            format!("{}_opened", form_type.as_str()),
            label,
            source,
            property_type,
            FunnelStage::Consideration,
        )
    }

    pub fn form_submission(source: &str, form_type: FormType, property_type: Option<&str>) -> Self {
        let funnel_stage = match form_type {
            FormType::Contact => FunnelStage::Lead,
            FormType::SiteVisit => FunnelStage::SiteVisitRequest,
        };

        Self::new(
            EventCategory::FormSubmission,
            format!("{}_submit", form_type.as_str()),
            suffixed_label(source, property_type),
            source,
            property_type,
            funnel_stage,
        )
    }
}

fn suffixed_label(source: &str, property_type: Option<&str>) -> String {
    match property_type {
        Some(p) if !p.is_empty() => format!("{} - {}", source, p),
        _ => source.to_string(),
    }
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// The single page view sent on startup, carrying campaign attribution.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PageView {
    pub page_path: String,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
}

impl PageView {
    /// Builds the page view from `location.pathname` and `location.search`.
    pub fn from_location(pathname: &str, search: &str) -> Self {
        Self {
            page_path: pathname.to_string(),
            utm_source: query_param(search, "utm_source"),
            utm_medium: query_param(search, "utm_medium"),
            utm_campaign: query_param(search, "utm_campaign"),
        }
    }
}

/// First value of `key` in a query string. Values that fail to decode count as absent.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            if decode(name)? == key {
                Some(decode(value))
            } else {
                None
            }
        })
        .flatten()
}

fn decode(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .ok()
        .map(|value| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::taxonomy::{LeadSource, PropertyType};

    #[test]
    fn button_click_carries_source_and_property_type() {
        for source in LeadSource::ALL {
            for property_type in PropertyType::ALL {
                let event = AnalyticsEvent::button_click(
                    source.as_str(),
                    "enquire_click",
                    "Enquire",
                    Some(property_type.as_str()),
                );
                assert_eq!(event.category, EventCategory::ButtonClick);
                assert_eq!(event.custom_parameters.lead_source, source.as_str());
                assert_eq!(
                    event.custom_parameters.property_type.as_deref(),
                    Some(property_type.as_str())
                );
                assert_eq!(event.custom_parameters.funnel_stage, FunnelStage::Interest);
            }
        }
    }

    #[test]
    fn button_click_label_without_property_type() {
        let event = AnalyticsEvent::button_click("pricing_section", "get_pricing_click", "Get Pricing", None);
        assert_eq!(event.action, "get_pricing_click");
        assert_eq!(event.label, "pricing_section");
        assert_eq!(event.custom_parameters.property_type, None);
    }

    #[test]
    fn form_open_skips_redundant_suffix() {
        let event = AnalyticsEvent::form_open("pricing_section", FormType::Contact, Some("pricing_section"));
        assert_eq!(event.label, "pricing_section");
        assert_eq!(event.action, "contact_form_opened");
        assert_eq!(event.category, EventCategory::FormInteraction);
        assert_eq!(event.custom_parameters.funnel_stage, FunnelStage::Consideration);
    }

    #[test]
    fn form_open_normalizes_before_comparing() {
        let event = AnalyticsEvent::form_open("pricing_section", FormType::Contact, Some("Pricing Section"));
        assert_eq!(event.label, "pricing_section");
    }

    #[test]
    fn form_open_appends_distinct_property_type() {
        let event = AnalyticsEvent::form_open("hero_banner", FormType::Contact, Some("2400 sq.ft"));
        assert_eq!(event.label, "hero_banner - 2400 sq.ft");
    }

    #[test]
    fn form_submission_funnel_stage_follows_form_type() {
        let lead = AnalyticsEvent::form_submission("footer_section", FormType::Contact, None);
        assert_eq!(lead.custom_parameters.funnel_stage, FunnelStage::Lead);
        assert_eq!(lead.action, "contact_form_submit");

        let visit = AnalyticsEvent::form_submission("footer_section", FormType::SiteVisit, Some("4000 sq.ft"));
        assert_eq!(visit.custom_parameters.funnel_stage, FunnelStage::SiteVisitRequest);
        assert_eq!(visit.action, "site_visit_form_submit");
        assert_eq!(visit.label, "footer_section - 4000 sq.ft");
    }

    #[test]
    fn unknown_strings_are_accepted() {
        let event = AnalyticsEvent::button_click("somewhere_else", "click", "Click", Some("villa"));
        assert_eq!(event.custom_parameters.lead_source, "somewhere_else");
        assert_eq!(event.label, "somewhere_else - villa");
    }

    #[test]
    fn event_serializes_with_collector_field_names() {
        let event = AnalyticsEvent::form_submission("hero_banner", FormType::SiteVisit, None);
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["category"], "Form Submission");
        assert_eq!(value["custom_parameters"]["funnel_stage"], "site_visit_request");
        assert!(value["custom_parameters"]["property_type"].is_null());
    }

    #[test]
    fn page_view_reads_utm_parameters() {
        let view = PageView::from_location(
            "/amenities",
            "?utm_source=google&utm_medium=cpc&utm_campaign=launch%20week&gclid=abc",
        );
        assert_eq!(view.page_path, "/amenities");
        assert_eq!(view.utm_source.as_deref(), Some("google"));
        assert_eq!(view.utm_medium.as_deref(), Some("cpc"));
        assert_eq!(view.utm_campaign.as_deref(), Some("launch week"));
    }

    #[test]
    fn page_view_without_query_has_no_campaign() {
        let view = PageView::from_location("/", "");
        assert_eq!(view, PageView { page_path: "/".to_string(), ..Default::default() });
    }

    #[test]
    fn query_param_edge_cases() {
        assert_eq!(query_param("utm_source=a&utm_source=b", "utm_source").as_deref(), Some("a"));
        assert_eq!(query_param("?utm_source=news+letter", "utm_source").as_deref(), Some("news letter"));
        assert_eq!(query_param("?utm_source", "utm_source").as_deref(), Some(""));
        assert_eq!(query_param("?utm_source=%FF", "utm_source"), None);
        assert_eq!(query_param("?utm_medium=email", "utm_source"), None);
    }
}
