use yew::prelude::*;

use crate::lead::capture::use_lead_capture;
use crate::tracking::taxonomy::LeadSource;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let lead_capture = use_lead_capture();
    let enquire = lead_capture.cta(LeadSource::Hero, "enquire_now_click", "Enquire Now", None);

    html! {
        <section id="home" class="hero">
            <div class="hero__background">
                <img src="/assets/hero.webp" alt="Aerial view of the layout" />
            </div>
            <div class="hero__content">
                <p class="hero__eyebrow">{"Malur, East Bengaluru"}</p>
                <h1 class="hero__title">{"Malur Greens"}</h1>
                <p class="hero__subtitle">
                    {"Gated villa plots set among orchards, forty minutes from Whitefield."}
                </p>
                <button class="hero__cta" onclick={enquire}>
                    {"Enquire Now"}
                </button>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 90vh;
                    display: flex;
                    align-items: flex-end;
                    padding: 6rem 2.5rem;
                    color: #ffffff;
                    overflow: hidden;
                }

                .hero__background {
                    position: absolute;
                    inset: 0;
                    z-index: -1;
                }

                .hero__background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: brightness(0.7);
                }

                .hero__eyebrow {
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    font-size: 0.9rem;
                }

                .hero__title {
                    font-size: 4rem;
                    font-weight: 700;
                    margin: 0.5rem 0 1rem;
                }

                .hero__subtitle {
                    max-width: 520px;
                    font-size: 1.2rem;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }

                .hero__cta {
                    padding: 0.9rem 2.5rem;
                    border: none;
                    border-radius: 999px;
                    background: #26650B;
                    color: #ffffff;
                    font-size: 1.1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }

                .hero__cta:hover {
                    transform: scale(1.05);
                }

                @media (max-width: 768px) {
                    .hero {
                        padding: 4rem 1.25rem;
                    }

                    .hero__title {
                        font-size: 2.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
