use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// In-page anchors a route can ask the viewport to jump to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Home,
    Overview,
    Location,
    Amenities,
    Gallery,
    Floorplan,
}

impl ScrollTarget {
    /// Element id of the section carrying this anchor.
    pub fn anchor_id(&self) -> &'static str {
        match self {
            ScrollTarget::Home => "home",
            ScrollTarget::Overview => "overview",
            ScrollTarget::Location => "location",
            ScrollTarget::Amenities => "amenities",
            ScrollTarget::Gallery => "gallery",
            ScrollTarget::Floorplan => "floorplan",
        }
    }
}

impl Route {
    pub fn scroll_target(&self) -> Option<ScrollTarget> {
        match self {
            Route::Root | Route::NotFound => None,
            Route::Home => Some(ScrollTarget::Home),
            Route::Overview => Some(ScrollTarget::Overview),
            Route::Location => Some(ScrollTarget::Location),
            Route::Amenities => Some(ScrollTarget::Amenities),
            Route::Gallery => Some(ScrollTarget::Gallery),
            Route::Floorplan => Some(ScrollTarget::Floorplan),
        }
    }
}

/// Scroll target requested by `path`, if any. The router does the same
/// through `Switch`, which hands the recognized route to `scroll_target`.
#[cfg(test)]
pub fn resolve(path: &str) -> Option<ScrollTarget> {
    Route::recognize(path).and_then(|route| route.scroll_target())
}

/// Scrolls the element with the anchor's id into view. Does nothing when the
/// section is not in the document.
pub fn scroll_to_anchor(target: ScrollTarget) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(target.anchor_id()));

    match element {
        Some(element) => {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("No section with id '{}' to scroll to", target.anchor_id()),
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollToSectionProps {
    #[prop_or_default]
    pub target: Option<ScrollTarget>,
    #[prop_or_default]
    pub children: Children,
}

/// Renders its children and, once they are mounted, scrolls to `target`.
#[function_component(ScrollToSection)]
pub fn scroll_to_section(props: &ScrollToSectionProps) -> Html {
    {
        use_effect_with_deps(
            move |target: &Option<ScrollTarget>| {
                // Wait one tick so the sections have been laid out.
                let pending = target.map(|target| {
                    debug!("Scheduling scroll to '{}'", target.anchor_id());
                    Timeout::new(0, move || scroll_to_anchor(target))
                });
                move || drop(pending)
            },
            props.target,
        );
    }

    html! {
        <>
            { for props.children.iter() }
        </>
    }
}
