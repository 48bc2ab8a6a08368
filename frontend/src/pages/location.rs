use yew::prelude::*;

use crate::lead::capture::use_lead_capture;
use crate::tracking::sink::Tracker;
use crate::tracking::taxonomy::LeadSource;

const MAPS_URL: &str = "https://www.google.com/maps/place/Malur,+Karnataka/@12.999567,77.941132,13577m";

const HIGHLIGHTS: [&str; 5] = [
    "Links Whitefield, Indiranagar, Marathahalli, and MG Road",
    "Near KR Puram railway station",
    "Metro (Purple Line) connecting to Whitefield",
    "ISKCON - 7 mins",
    "Close to schools, hospitals, malls, and IT hubs",
];

/// Outbound link, so only the click is recorded; the modal stays closed.
pub fn record_maps_click(tracker: &Tracker) {
    tracker.track_button_click(
        LeadSource::Location.as_str(),
        "open_google_maps_click",
        "Open in Google Maps",
        None,
    );
}

#[function_component(LocationPage)]
pub fn location_page() -> Html {
    let lead_capture = use_lead_capture();
    let on_maps_click = {
        let tracker = lead_capture.tracker().clone();
        Callback::from(move |_: MouseEvent| record_maps_click(&tracker))
    };

    html! {
        <section id="location" class="location">
            <div class="location__map">
                <img src="/assets/mapimage.png" alt="Location map" loading="lazy" />
            </div>
            <div class="location__text">
                <h2 class="section-title">{"Location for every aspect of your life"}</h2>
                <ul>
                    { for HIGHLIGHTS.iter().map(|h| html! { <li>{*h}</li> }) }
                </ul>
                <a href={MAPS_URL} target="_blank" rel="noopener noreferrer" class="location__maps-link" onclick={on_maps_click}>
                    {"Open in Google Maps"}
                </a>
            </div>
            <style>
                {r#"
                .location {
                    display: flex;
                    gap: 2.5rem;
                    padding: 4rem 2.5rem;
                    scroll-margin-top: 4rem;
                }

                .location__map,
                .location__text {
                    flex: 1;
                }

                .location__map img {
                    width: 100%;
                    height: auto;
                }

                .location__maps-link {
                    display: inline-block;
                    margin-top: 1rem;
                    padding: 0.6rem 1.8rem;
                    border: 2px solid #26650B;
                    border-radius: 999px;
                    color: #000000;
                    text-decoration: none;
                    font-weight: 600;
                }

                @media (max-width: 768px) {
                    .location {
                        flex-direction: column-reverse;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::events::{EventCategory, FunnelStage};
    use crate::tracking::sink::testing::recording_tracker;

    #[test]
    fn maps_click_is_recorded_as_interest() {
        let (tracker, sink) = recording_tracker();
        record_maps_click(&tracker);

        let events = sink.events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].category, EventCategory::ButtonClick);
        assert_eq!(events[0].action, "open_google_maps_click");
        assert_eq!(events[0].label, "location_section");
        assert_eq!(events[0].custom_parameters.lead_source, "location_section");
        assert_eq!(events[0].custom_parameters.funnel_stage, FunnelStage::Interest);
    }
}
