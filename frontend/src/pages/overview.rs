use yew::prelude::*;

use crate::lead::capture::use_lead_capture;
use crate::tracking::taxonomy::{LeadSource, PropertyType};

struct PlotOffer {
    property_type: PropertyType,
    dimensions: &'static str,
    summary: &'static str,
}

const PLOT_OFFERS: [PlotOffer; 2] = [
    PlotOffer {
        property_type: PropertyType::Sqft2400,
        dimensions: "40 x 60",
        summary: "East and north facing plots along the avenue",
    },
    PlotOffer {
        property_type: PropertyType::Sqft4000,
        dimensions: "50 x 80",
        summary: "Corner plots facing the central orchard",
    },
];

#[function_component(OverviewPage)]
pub fn overview_page() -> Html {
    let lead_capture = use_lead_capture();

    html! {
        <section id="overview" class="overview">
            <h2 class="section-title">{"Project Overview"}</h2>
            <ul class="overview__facts">
                <li><strong>{"32 acres"}</strong>{" of gated layout"}</li>
                <li><strong>{"70%"}</strong>{" open and green space"}</li>
                <li><strong>{"DTCP"}</strong>{" approved, RERA registered"}</li>
            </ul>
            <div class="overview__plots">
                {
                    PLOT_OFFERS.iter().map(|offer| {
                        let details = lead_capture.cta(
                            LeadSource::Overview,
                            "plot_details_click",
                            "Get Details",
                            Some(offer.property_type),
                        );
                        html! {
                            <div class="plot-card" key={offer.property_type.as_str()}>
                                <h3>{offer.property_type.as_str()}</h3>
                                <p class="plot-card__dimensions">{offer.dimensions}{" ft"}</p>
                                <p>{offer.summary}</p>
                                <button class="plot-card__cta" onclick={details}>
                                    {"Get Details"}
                                </button>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .overview {
                    padding: 4rem 2.5rem;
                    scroll-margin-top: 4rem;
                }

                .section-title {
                    color: #26650B;
                    font-size: 2rem;
                    margin-bottom: 2rem;
                }

                .overview__facts {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 2rem;
                    list-style: none;
                    padding: 0;
                }

                .overview__plots {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                    margin-top: 2.5rem;
                }

                .plot-card {
                    border: 1px solid #e0eeda;
                    border-radius: 12px;
                    padding: 1.5rem;
                    background: #ffffff;
                }

                .plot-card__cta {
                    margin-top: 1rem;
                    padding: 0.6rem 1.8rem;
                    border: 2px solid #26650B;
                    border-radius: 999px;
                    background: transparent;
                    font-weight: 600;
                    cursor: pointer;
                }

                .plot-card__cta:hover {
                    background: #26650B;
                    color: #ffffff;
                }
                "#}
            </style>
        </section>
    }
}
