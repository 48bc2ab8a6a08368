use yew::prelude::*;

const AMENITIES: [(&str, &str); 8] = [
    ("🏊", "Swimming pool"),
    ("🏸", "Badminton court"),
    ("🧘", "Yoga deck"),
    ("🌳", "Orchard walk"),
    ("🚴", "Cycling track"),
    ("🧒", "Children's play area"),
    ("🏛", "Clubhouse"),
    ("🔥", "Barbecue lawn"),
];

#[function_component(LifestylePage)]
pub fn lifestyle_page() -> Html {
    html! {
        <section id="amenities" class="lifestyle">
            <h2 class="section-title">{"Lifestyle amenities"}</h2>
            <div class="lifestyle__grid">
                {
                    AMENITIES.iter().map(|(icon, name)| html! {
                        <div class="lifestyle__item" key={*name}>
                            <span class="lifestyle__icon">{*icon}</span>
                            <p>{*name}</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .lifestyle {
                    background: #f2fbe7;
                    padding: 4rem 2.5rem;
                    scroll-margin-top: 4rem;
                }

                .lifestyle__grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }

                .lifestyle__item {
                    text-align: center;
                    background: #ffffff;
                    border-radius: 12px;
                    padding: 1.5rem 1rem;
                }

                .lifestyle__icon {
                    font-size: 2rem;
                }

                @media (max-width: 768px) {
                    .lifestyle__grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
