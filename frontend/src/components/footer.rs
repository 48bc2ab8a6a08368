use yew::prelude::*;

use crate::lead::capture::use_lead_capture;
use crate::tracking::taxonomy::LeadSource;

#[function_component(Footer)]
pub fn footer() -> Html {
    let lead_capture = use_lead_capture();
    let book_visit = lead_capture.cta(LeadSource::Footer, "book_site_visit_click", "Book a Site Visit", None);
    let contact_link = lead_capture.cta(LeadSource::ContactFormLink, "contact_us_click", "Contact Us", None);

    html! {
        <footer class="footer">
            <div class="footer__cta">
                <h2>{"Come walk the layout"}</h2>
                <p>{"Site visits run every day from 9 am to 6 pm, with pickup from Whitefield."}</p>
                <button class="footer__button" onclick={book_visit}>
                    {"Book a Site Visit"}
                </button>
            </div>
            <div class="footer__bottom">
                <span>{"© Malur Greens. RERA No. PRM/KA/RERA/1251/446/PR/000000"}</span>
                <a href="#" class="footer__link" onclick={contact_link}>{"Contact us"}</a>
            </div>
            <style>
                {r#"
                .footer {
                    background: #1f3d12;
                    color: #ffffff;
                    padding: 3rem 2.5rem 1.5rem;
                }

                .footer__cta {
                    text-align: center;
                    margin-bottom: 2.5rem;
                }

                .footer__button {
                    padding: 0.8rem 2.5rem;
                    border: none;
                    border-radius: 999px;
                    background: #ffffff;
                    color: #1f3d12;
                    font-weight: 600;
                    cursor: pointer;
                }

                .footer__bottom {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.85rem;
                    opacity: 0.8;
                }

                .footer__link {
                    color: #ffffff;
                }
                "#}
            </style>
        </footer>
    }
}
