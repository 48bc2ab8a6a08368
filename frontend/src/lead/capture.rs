use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::tracking::sink::Tracker;
use crate::tracking::taxonomy::{FormType, LeadSource, PropertyType};

/// Which call to action opened the enquiry modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeadContext {
    pub source: LeadSource,
    pub property_type: Option<PropertyType>,
}

impl LeadContext {
    pub fn property_type_str(&self) -> Option<&'static str> {
        self.property_type.map(|p| p.as_str())
    }

    /// Shown in the enquiry form, e.g. `overview_section - 2400 sq.ft`.
    pub fn describe(&self) -> String {
        match self.property_type {
            Some(p) => format!("{} - {}", self.source.as_str(), p.as_str()),
            None => self.source.as_str().to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadCaptureState {
    pub is_modal_open: bool,
    pub lead_source: Option<LeadContext>,
}

pub enum LeadCaptureAction {
    Open(LeadContext),
    Close,
}

impl Reducible for LeadCaptureState {
    type Action = LeadCaptureAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            // Replaces the previous source outright.
            LeadCaptureAction::Open(context) => Rc::new(LeadCaptureState {
                is_modal_open: true,
                lead_source: Some(context),
            }),
            // The last source stays readable while the modal is closed.
            LeadCaptureAction::Close => Rc::new(LeadCaptureState {
                is_modal_open: false,
                lead_source: self.lead_source,
            }),
        }
    }
}

/// Records the form open against the new source and returns the action that
/// makes the modal visible. The event is always emitted first.
pub fn begin_capture(
    tracker: &Tracker,
    source: LeadSource,
    property_type: Option<PropertyType>,
) -> LeadCaptureAction {
    let context = LeadContext { source, property_type };
    tracker.track_form_open(source.as_str(), FormType::Contact, context.property_type_str());
    LeadCaptureAction::Open(context)
}

/// Shared lead-capture handle. Calls to action only ever go through
/// [`LeadCapture::open_modal`], never by toggling visibility themselves.
#[derive(Clone, PartialEq)]
pub struct LeadCapture {
    state: UseReducerHandle<LeadCaptureState>,
    tracker: Tracker,
}

impl LeadCapture {
    pub fn is_modal_open(&self) -> bool {
        self.state.is_modal_open
    }

    pub fn lead_source(&self) -> Option<LeadContext> {
        self.state.lead_source
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn open_modal(&self, source: LeadSource, property_type: Option<PropertyType>) {
        info!("Opening enquiry form from {}", source.as_str());
        self.state.dispatch(begin_capture(&self.tracker, source, property_type));
    }

    pub fn close_modal(&self) {
        self.state.dispatch(LeadCaptureAction::Close);
    }

    /// Click handler for a call to action: records the click, then opens the modal.
    pub fn cta(
        &self,
        source: LeadSource,
        action: &'static str,
        label: &'static str,
        property_type: Option<PropertyType>,
    ) -> Callback<MouseEvent> {
        let lead_capture = self.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            lead_capture.tracker.track_button_click(
                source.as_str(),
                action,
                label,
                property_type.map(|p| p.as_str()),
            );
            lead_capture.open_modal(source, property_type);
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadCaptureProviderProps {
    pub tracker: Tracker,
    #[prop_or_default]
    pub children: Children,
}

/// Owns the page-wide lead-capture state and hands it to every descendant.
#[function_component(LeadCaptureProvider)]
pub fn lead_capture_provider(props: &LeadCaptureProviderProps) -> Html {
    let state = use_reducer(LeadCaptureState::default);
    let lead_capture = LeadCapture {
        state,
        tracker: props.tracker.clone(),
    };

    html! {
        <ContextProvider<LeadCapture> context={lead_capture}>
            { for props.children.iter() }
        </ContextProvider<LeadCapture>>
    }
}

#[hook]
pub fn use_lead_capture() -> LeadCapture {
    use_context::<LeadCapture>().expect("LeadCaptureProvider missing from component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::events::{EventCategory, FunnelStage};
    use crate::tracking::sink::testing::recording_tracker;

    fn apply(state: LeadCaptureState, action: LeadCaptureAction) -> LeadCaptureState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn open(source: LeadSource, property_type: Option<PropertyType>) -> LeadCaptureAction {
        LeadCaptureAction::Open(LeadContext { source, property_type })
    }

    #[test]
    fn starts_closed_without_source() {
        let state = LeadCaptureState::default();
        assert!(!state.is_modal_open);
        assert_eq!(state.lead_source, None);
    }

    #[test]
    fn later_open_replaces_source() {
        let state = apply(LeadCaptureState::default(), open(LeadSource::Footer, Some(PropertyType::Sqft2400)));
        let state = apply(state, open(LeadSource::Pricing, None));
        assert!(state.is_modal_open);
        assert_eq!(
            state.lead_source,
            Some(LeadContext { source: LeadSource::Pricing, property_type: None })
        );
    }

    #[test]
    fn close_keeps_last_source() {
        let state = apply(LeadCaptureState::default(), open(LeadSource::Hero, None));
        let state = apply(state, LeadCaptureAction::Close);
        assert!(!state.is_modal_open);
        assert_eq!(state.lead_source.map(|c| c.source), Some(LeadSource::Hero));
    }

    #[test]
    fn describe_names_source_and_plot_size() {
        let context = LeadContext { source: LeadSource::Overview, property_type: Some(PropertyType::Sqft2400) };
        assert_eq!(context.describe(), "overview_section - 2400 sq.ft");
        let context = LeadContext { source: LeadSource::Pricing, property_type: None };
        assert_eq!(context.describe(), "pricing_section");
    }

    #[test]
    fn begin_capture_tracks_new_source_before_opening() {
        let (tracker, sink) = recording_tracker();
        let state = apply(LeadCaptureState::default(), begin_capture(&tracker, LeadSource::Footer, None));
        assert_eq!(sink.events.borrow().len(), 1);

        let action = begin_capture(&tracker, LeadSource::Overview, Some(PropertyType::Sqft4000));
        {
            let events = sink.events.borrow();
            let last = events.last().unwrap();
            assert_eq!(last.category, EventCategory::FormInteraction);
            assert_eq!(last.action, "contact_form_opened");
            assert_eq!(last.label, "overview_section - 4000 sq.ft");
            assert_eq!(last.custom_parameters.lead_source, "overview_section");
            assert_eq!(last.custom_parameters.funnel_stage, FunnelStage::Consideration);
        }

        let state = apply(state, action);
        assert_eq!(state.lead_source.map(|c| c.source), Some(LeadSource::Overview));
        assert_eq!(sink.events.borrow().len(), 2);
    }
}
