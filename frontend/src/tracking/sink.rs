use std::rc::Rc;

use log::{debug, info, warn};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

use super::events::{AnalyticsEvent, PageView};
use super::taxonomy::FormType;

const GTAG_LOADER: &str = "https://www.googletagmanager.com/gtag/js";

/// Receiver of shaped analytics calls. Delivery is best effort; implementations
/// must not panic or block the interaction that produced the event.
pub trait EventSink {
    fn send_event(&self, event: &AnalyticsEvent);
    fn send_page_view(&self, view: &PageView);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = window, js_name = gtag, catch)]
    fn gtag_call(command: &str, name: &JsValue, params: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = window, js_name = gtag, catch)]
    fn gtag_js(command: &str, date: &JsValue) -> Result<(), JsValue>;
}

#[derive(Serialize)]
struct GtagEventParams<'a> {
    event_category: &'a str,
    event_label: &'a str,
    lead_source: &'a str,
    property_type: Option<&'a str>,
    funnel_stage: &'a str,
}

#[derive(Serialize)]
struct GtagConfig {
    send_page_view: bool,
}

/// Forwards events to Google Analytics through `window.gtag`.
pub struct GtagSink;

impl GtagSink {
    /// Injects the gtag loader and configures the property with automatic page
    /// views turned off, since the startup page view is sent by hand.
    pub fn install(measurement_id: &str) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

        if js_sys::Reflect::get(&window, &"dataLayer".into())?.is_undefined() {
            js_sys::Reflect::set(&window, &"dataLayer".into(), &js_sys::Array::new())?;
        }
        let gtag = js_sys::Function::new_no_args("window.dataLayer.push(arguments);");
        js_sys::Reflect::set(&window, &"gtag".into(), &gtag)?;

        let script = document.create_element("script")?;
        script.set_attribute("async", "")?;
        script.set_attribute("src", &format!("{}?id={}", GTAG_LOADER, measurement_id))?;
        if let Some(head) = document.head() {
            head.append_child(&script)?;
        }

        gtag_js("js", &js_sys::Date::new_0().into())?;
        let config = GtagConfig { send_page_view: false }.serialize(&Serializer::json_compatible())?;
        gtag_call("config", &JsValue::from_str(measurement_id), &config)?;

        info!("Analytics initialised for {}", measurement_id);
        Ok(GtagSink)
    }

    fn dispatch<T: Serialize>(&self, name: &str, params: &T) {
        // json_compatible keeps absent values as null rather than undefined
        let params = match params.serialize(&Serializer::json_compatible()) {
            Ok(params) => params,
            Err(e) => {
                warn!("Could not encode analytics params for {}: {}", name, e);
                return;
            }
        };
        if let Err(e) = gtag_call("event", &JsValue::from_str(name), &params) {
            warn!("Analytics collector rejected {}: {:?}", name, e);
        }
    }
}

impl EventSink for GtagSink {
    fn send_event(&self, event: &AnalyticsEvent) {
        debug!("Sending {} event {} ({})", event.category.as_str(), event.action, event.label);
        self.dispatch(
            &event.action,
            &GtagEventParams {
                event_category: event.category.as_str(),
                event_label: &event.label,
                lead_source: &event.custom_parameters.lead_source,
                property_type: event.custom_parameters.property_type.as_deref(),
                funnel_stage: event.custom_parameters.funnel_stage.as_str(),
            },
        );
    }

    fn send_page_view(&self, view: &PageView) {
        debug!("Sending page view for {}", view.page_path);
        self.dispatch("page_view", view);
    }
}

/// Used when no measurement id is configured; events only reach the console.
pub struct LogSink;

impl EventSink for LogSink {
    fn send_event(&self, event: &AnalyticsEvent) {
        info!(
            "[analytics] {} / {} / {} / {:?}",
            event.category.as_str(),
            event.action,
            event.label,
            event.custom_parameters
        );
    }

    fn send_page_view(&self, view: &PageView) {
        info!("[analytics] page_view {:?}", view);
    }
}

/// Shared handle through which every component reports interactions.
#[derive(Clone)]
pub struct Tracker {
    sink: Rc<dyn EventSink>,
}

impl PartialEq for Tracker {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.sink, &other.sink)
    }
}

impl Tracker {
    pub fn new(sink: Rc<dyn EventSink>) -> Self {
        Self { sink }
    }

    /// Picks the gtag collector when a measurement id is available, falling back
    /// to console logging when it isn't or when the loader can't be installed.
    pub fn from_config(measurement_id: Option<&str>) -> Self {
        let sink: Rc<dyn EventSink> = match measurement_id {
            Some(id) => match GtagSink::install(id) {
                Ok(sink) => Rc::new(sink),
                Err(e) => {
                    warn!("Analytics unavailable, logging events instead: {:?}", e);
                    Rc::new(LogSink)
                }
            },
            None => {
                info!("No measurement id configured, logging analytics events");
                Rc::new(LogSink)
            }
        };
        Self::new(sink)
    }

    pub fn track_button_click(&self, source: &str, action: &str, label: &str, property_type: Option<&str>) {
        self.sink
            .send_event(&AnalyticsEvent::button_click(source, action, label, property_type));
    }

    pub fn track_form_open(&self, source: &str, form_type: FormType, property_type: Option<&str>) {
        self.sink
            .send_event(&AnalyticsEvent::form_open(source, form_type, property_type));
    }

    pub fn track_form_submission(&self, source: &str, form_type: FormType, property_type: Option<&str>) {
        self.sink
            .send_event(&AnalyticsEvent::form_submission(source, form_type, property_type));
    }

    pub fn track_page_view(&self, view: &PageView) {
        self.sink.send_page_view(view);
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    pub struct RecordingSink {
        pub events: RefCell<Vec<AnalyticsEvent>>,
        pub page_views: RefCell<Vec<PageView>>,
    }

    impl EventSink for RecordingSink {
        fn send_event(&self, event: &AnalyticsEvent) {
            self.events.borrow_mut().push(event.clone());
        }

        fn send_page_view(&self, view: &PageView) {
            self.page_views.borrow_mut().push(view.clone());
        }
    }

    pub fn recording_tracker() -> (Tracker, Rc<RecordingSink>) {
        let sink = Rc::new(RecordingSink::default());
        (Tracker::new(sink.clone()), sink)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::recording_tracker;
    use super::*;
    use crate::tracking::events::{EventCategory, FunnelStage};

    #[test]
    fn each_call_emits_exactly_one_event() {
        let (tracker, sink) = recording_tracker();
        tracker.track_button_click("hero_banner", "enquire_now_click", "Enquire Now", None);
        tracker.track_form_open("hero_banner", FormType::Contact, None);
        tracker.track_form_submission("hero_banner", FormType::Contact, None);

        let events = sink.events.borrow();
        let categories: Vec<EventCategory> = events.iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![
                EventCategory::ButtonClick,
                EventCategory::FormInteraction,
                EventCategory::FormSubmission
            ]
        );
        assert_eq!(events[2].custom_parameters.funnel_stage, FunnelStage::Lead);
    }

    #[test]
    fn page_view_goes_to_sink_unchanged() {
        let (tracker, sink) = recording_tracker();
        let view = PageView::from_location("/gallery", "?utm_medium=social");
        tracker.track_page_view(&view);
        assert_eq!(sink.page_views.borrow().as_slice(), &[view]);
        assert!(sink.events.borrow().is_empty());
    }

    #[test]
    fn trackers_compare_by_sink() {
        let (a, _) = recording_tracker();
        let (b, _) = recording_tracker();
        assert!(a == a.clone());
        assert!(a != b);
    }
}
