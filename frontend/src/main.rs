use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::use_mount;
use log::{info, warn, Level};

mod config;
mod tracking {
    pub mod taxonomy;
    pub mod events;
    pub mod sink;
}
mod navigation {
    pub mod scroll;
}
mod lead {
    pub mod capture;
}
mod pages {
    pub mod home;
    pub mod overview;
    pub mod plot_details;
    pub mod location;
    pub mod standards;
    pub mod lifestyle;
}
mod components {
    pub mod header;
    pub mod footer;
    pub mod enquiry_modal;
}

use components::{
    header::Header,
    footer::Footer,
    enquiry_modal::EnquiryModal,
};
use pages::{
    home::HomePage,
    overview::OverviewPage,
    plot_details::PlotDetailsPage,
    location::LocationPage,
    standards::StandardsPage,
    lifestyle::LifestylePage,
};
use lead::capture::LeadCaptureProvider;
use navigation::scroll::ScrollToSection;
use tracking::{events::PageView, sink::Tracker};


// Every route renders the whole page; the path only decides where to scroll.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/home")]
    Home,
    #[at("/overview")]
    Overview,
    #[at("/location")]
    Location,
    #[at("/amenities")]
    Amenities,
    #[at("/gallery")]
    Gallery,
    #[at("/floorplan")]
    Floorplan,
    #[not_found]
    #[at("/404")]
    NotFound,
}


#[function_component(FullLayout)]
fn full_layout() -> Html {
    html! {
        <main>
            <HomePage />
            <OverviewPage />
            <PlotDetailsPage />
            <LocationPage />
            <StandardsPage />
            <LifestylePage />
        </main>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::NotFound => warn!("Unknown path, rendering page without scrolling"),
        _ => info!("Rendering page for {:?}", route),
    }
    html! {
        <ScrollToSection target={route.scroll_target()}>
            <FullLayout />
        </ScrollToSection>
    }
}


fn current_page_view() -> PageView {
    let location = web_sys::window().map(|w| w.location());
    let pathname = location
        .as_ref()
        .and_then(|l| l.pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    let search = location
        .as_ref()
        .and_then(|l| l.search().ok())
        .unwrap_or_default();
    PageView::from_location(&pathname, &search)
}


#[function_component]
fn App() -> Html {
    // Created once per page session.
    let tracker = use_state(|| Tracker::from_config(config::get_measurement_id()));

    {
        let tracker = (*tracker).clone();
        use_mount(move || {
            let view = current_page_view();
            info!("Page view for {}", view.page_path);
            tracker.track_page_view(&view);
        });
    }

    html! {
        <LeadCaptureProvider tracker={(*tracker).clone()}>
            <BrowserRouter>
                <Header />
                <Switch<Route> render={switch} />
                <Footer />
                <EnquiryModal />
            </BrowserRouter>
        </LeadCaptureProvider>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
