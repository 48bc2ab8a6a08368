use yew::prelude::*;

use crate::lead::capture::use_lead_capture;
use crate::tracking::taxonomy::LeadSource;

const PLOT_DATA: [(&str, &str); 4] = [
    ("1 BHK", "₹ 97 lakhs onwards*"),
    ("2 BHK", "₹ 1.5 Cr onwards*"),
    ("2.5 BHK", "₹ 1.7 Cr onwards*"),
    ("3 BHK", "₹ 1.9 Cr onwards*"),
];

#[function_component(PlotDetailsPage)]
pub fn plot_details_page() -> Html {
    let lead_capture = use_lead_capture();
    let get_pricing = lead_capture.cta(LeadSource::Pricing, "get_pricing_click", "Get Pricing", None);

    html! {
        <section id="floorplan" class="configurations">
            <h2 class="configurations__badge">{"Configurations"}</h2>
            <div class="configurations__grid">
                <div class="configurations__cards">
                    {
                        PLOT_DATA.iter().map(|(config, price)| html! {
                            <div class="config-card" key={*config}>
                                <p class="config-card__key">{"Configuration:"}</p>
                                <p class="config-card__value">{*config}</p>
                                <p class="config-card__key">{"Price:"}</p>
                                <p class="config-card__value">{*price}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="configurations__plan">
                    <img src="/assets/plot.png" alt="Plot plan" loading="lazy" />
                    <button class="configurations__cta" onclick={get_pricing}>
                        {"Get Pricing"}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .configurations {
                    background: #f2fbe7;
                    padding: 4rem 2.5rem;
                    scroll-margin-top: 4rem;
                }

                .configurations__badge {
                    width: fit-content;
                    border: 1px solid #26650B;
                    border-radius: 999px;
                    padding: 0.25rem 1.5rem;
                    color: #26650B;
                    font-size: 1.1rem;
                }

                .configurations__grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    margin-top: 3rem;
                }

                .configurations__cards {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }

                .config-card {
                    background: #ffffff;
                    border: 1px solid #e0eeda;
                    border-radius: 8px;
                    padding: 1.25rem;
                    color: #26650B;
                }

                .config-card__value {
                    font-weight: 700;
                    font-size: 1.1rem;
                }

                .configurations__plan {
                    position: relative;
                    border-radius: 16px;
                    overflow: hidden;
                }

                .configurations__plan img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: blur(1.2px);
                }

                .configurations__cta {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    padding: 0.6rem 4rem;
                    border: none;
                    border-radius: 12px;
                    background: #000000;
                    color: #ffffff;
                    font-weight: 600;
                    cursor: pointer;
                }

                @media (max-width: 768px) {
                    .configurations__grid,
                    .configurations__cards {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
