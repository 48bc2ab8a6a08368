use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::lead::capture::use_lead_capture;
use crate::tracking::taxonomy::LeadSource;
use crate::Route;

/// The header button is a site-wide shortcut into the contact form.
pub const HEADER_ENQUIRY_SOURCE: LeadSource = LeadSource::ContactFormLink;

const NAV_ITEMS: [(Route, &str); 6] = [
    (Route::Home, "Home"),
    (Route::Overview, "Overview"),
    (Route::Floorplan, "Floor Plan"),
    (Route::Location, "Location"),
    (Route::Gallery, "Gallery"),
    (Route::Amenities, "Amenities"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let lead_capture = use_lead_capture();
    let menu_open = use_state(|| false);
    let enquire = lead_capture.cta(HEADER_ENQUIRY_SOURCE, "header_enquire_click", "Enquire", None);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Root} classes="nav-logo">
                    {"Malur Greens"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        NAV_ITEMS.iter().map(|(route, title)| html! {
                            <div onclick={close_menu.clone()} key={*title}>
                                <Link<Route> to={route.clone()} classes="nav-link">
                                    {*title}
                                </Link<Route>>
                            </div>
                        }).collect::<Html>()
                    }
                    <button class="nav-enquire" onclick={enquire}>{"Enquire"}</button>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.95);
                    box-shadow: 0 1px 6px rgba(0, 0, 0, 0.06);
                }

                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem 2.5rem;
                }

                .nav-logo {
                    color: #26650B;
                    font-weight: 700;
                    font-size: 1.3rem;
                    text-decoration: none;
                }

                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .nav-link {
                    color: #1a1a1a;
                    text-decoration: none;
                }

                .nav-enquire {
                    padding: 0.4rem 1.4rem;
                    border: 2px solid #26650B;
                    border-radius: 999px;
                    background: #26650B;
                    color: #ffffff;
                    font-weight: 600;
                    cursor: pointer;
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    margin: 5px 0;
                    background: #1a1a1a;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: block;
                    }

                    .nav-links {
                        display: none;
                    }

                    .nav-links.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1rem 2.5rem;
                        background: #ffffff;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::capture::{begin_capture, LeadCaptureAction};
    use crate::tracking::sink::testing::recording_tracker;

    #[test]
    fn header_enquiry_opens_as_contact_form_link() {
        let (tracker, sink) = recording_tracker();
        let action = begin_capture(&tracker, HEADER_ENQUIRY_SOURCE, None);

        match action {
            LeadCaptureAction::Open(context) => {
                assert_eq!(context.source.as_str(), "contact_form_internal_link");
                assert_eq!(context.property_type, None);
            }
            LeadCaptureAction::Close => panic!("expected the modal to open"),
        }
        let events = sink.events.borrow();
        assert_eq!(events[0].custom_parameters.lead_source, "contact_form_internal_link");
        assert_eq!(events[0].label, "contact_form_internal_link");
    }
}
