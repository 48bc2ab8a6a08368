use yew::prelude::*;

use crate::lead::capture::use_lead_capture;
use crate::tracking::taxonomy::LeadSource;

const STANDARDS: [(&str, &str); 4] = [
    ("Roads", "40 ft and 30 ft asphalt roads with stormwater drains"),
    ("Utilities", "Underground electrical and water lines to every plot"),
    ("Water", "Rainwater harvesting and a sewage treatment plant"),
    ("Security", "Gated entry, compound wall and CCTV along the perimeter"),
];

const GALLERY: [&str; 3] = [
    "/assets/gallery-entrance.webp",
    "/assets/gallery-avenue.webp",
    "/assets/gallery-orchard.webp",
];

#[function_component(StandardsPage)]
pub fn standards_page() -> Html {
    let lead_capture = use_lead_capture();
    let master_plan = lead_capture.cta(
        LeadSource::MasterPlan,
        "master_plan_click",
        "Download Master Plan",
        None,
    );

    html! {
        <section id="gallery" class="standards">
            <h2 class="section-title">{"Built to a standard"}</h2>
            <div class="standards__list">
                {
                    STANDARDS.iter().map(|(title, detail)| html! {
                        <div class="standards__item" key={*title}>
                            <h3>{*title}</h3>
                            <p>{*detail}</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <div class="standards__gallery">
                { for GALLERY.iter().map(|src| html! { <img src={*src} alt="Site photo" loading="lazy" /> }) }
            </div>
            <div class="standards__master-plan">
                <img src="/assets/master-plan.webp" alt="Master plan" loading="lazy" />
                <button class="standards__cta" onclick={master_plan}>
                    {"Download Master Plan"}
                </button>
            </div>
            <style>
                {r#"
                .standards {
                    padding: 4rem 2.5rem;
                    scroll-margin-top: 4rem;
                }

                .standards__list {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }

                .standards__gallery {
                    display: flex;
                    gap: 1rem;
                    overflow-x: auto;
                    margin: 2.5rem 0;
                }

                .standards__gallery img {
                    height: 240px;
                    border-radius: 12px;
                }

                .standards__master-plan {
                    position: relative;
                    text-align: center;
                }

                .standards__master-plan img {
                    width: 100%;
                    filter: blur(2px);
                }

                .standards__cta {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    padding: 0.75rem 2.5rem;
                    border: none;
                    border-radius: 12px;
                    background: #26650B;
                    color: #ffffff;
                    font-weight: 600;
                    cursor: pointer;
                }
                "#}
            </style>
        </section>
    }
}
