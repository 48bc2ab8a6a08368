use chrono::{DateTime, Utc};
use gloo_net::http::Request;
use log::info;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::lead::capture::use_lead_capture;
use crate::tracking::taxonomy::{FormType, LeadSource, PropertyType};

#[derive(Serialize, Debug)]
pub struct EnquiryRequest {
    name: String,
    phone: String,
    email: Option<String>,
    form_type: &'static str,
    lead_source: LeadSource,
    property_type: Option<PropertyType>,
    submitted_at: DateTime<Utc>,
}

/// Checks the form before anything is sent. Email is optional.
pub fn validate_enquiry(name: &str, phone: &str, email: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Please enter your name".to_string());
    }

    let phone = phone.trim();
    if phone.chars().any(|c| !(c.is_ascii_digit() || c == ' ' || c == '+' || c == '-')) {
        return Err("Phone number can only contain digits, spaces, + and -".to_string());
    }
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if !(10..=15).contains(&digits) {
        return Err("Please enter a valid phone number".to_string());
    }

    let email = email.trim();
    if !email.is_empty() && !email.contains('@') {
        return Err("Please enter a valid email address".to_string());
    }

    Ok(())
}

/// Counts how many times the form has been closed. A reply that comes back
/// after a close belongs to a form the user already left and must not touch
/// the state of the next one.
#[derive(Debug, Default)]
pub struct FormSession {
    generation: u32,
}

impl FormSession {
    pub fn ticket(&self) -> u32 {
        self.generation
    }

    pub fn close(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn accepts(&self, ticket: u32) -> bool {
        self.generation == ticket
    }
}

async fn send_enquiry(endpoint: &str, enquiry: &EnquiryRequest) -> Result<(), String> {
    let response = Request::post(endpoint)
        .json(enquiry)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        Ok(())
    } else {
        Err(format!("Enquiry rejected with status {}", response.status()))
    }
}

#[function_component(EnquiryModal)]
pub fn enquiry_modal() -> Html {
    let lead_capture = use_lead_capture();
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let email = use_state(String::new);
    let site_visit = use_state(|| false);
    let error = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);
    let submitted = use_state(|| false);
    let session = use_mut_ref(FormSession::default);

    if !lead_capture.is_modal_open() {
        return html! {};
    }

    let context = lead_capture.lead_source();
    let form_type = if *site_visit { FormType::SiteVisit } else { FormType::Contact };

    let on_close = {
        let lead_capture = lead_capture.clone();
        let (name, phone, email) = (name.clone(), phone.clone(), email.clone());
        let (site_visit, error, submitted) = (site_visit.clone(), error.clone(), submitted.clone());
        let (is_submitting, session) = (is_submitting.clone(), session.clone());
        Callback::from(move |_: MouseEvent| {
            session.borrow_mut().close();
            name.set(String::new());
            phone.set(String::new());
            email.set(String::new());
            site_visit.set(false);
            error.set(None);
            submitted.set(false);
            is_submitting.set(false);
            lead_capture.close_modal();
        })
    };

    let onsubmit = {
        let lead_capture = lead_capture.clone();
        let (name, phone, email) = (name.clone(), phone.clone(), email.clone());
        let (error, is_submitting, submitted) = (error.clone(), is_submitting.clone(), submitted.clone());
        let session = session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            if let Err(message) = validate_enquiry(&name, &phone, &email) {
                error.set(Some(message));
                return;
            }

            let source = context.map(|c| c.source).unwrap_or(LeadSource::Unknown);
            let property_type = context.and_then(|c| c.property_type);
            let email_value = email.trim().to_string();
            let enquiry = EnquiryRequest {
                name: name.trim().to_string(),
                phone: phone.trim().to_string(),
                email: (!email_value.is_empty()).then_some(email_value),
                form_type: form_type.as_str(),
                lead_source: source,
                property_type,
                submitted_at: Utc::now(),
            };

            error.set(None);
            is_submitting.set(true);
            let tracker = lead_capture.tracker().clone();
            let session = session.clone();
            let ticket = session.borrow().ticket();
            let (error, is_submitting, submitted) = (error.clone(), is_submitting.clone(), submitted.clone());
            spawn_local(async move {
                let result = match config::get_enquiry_endpoint() {
                    Some(endpoint) => send_enquiry(&endpoint, &enquiry).await,
                    None => {
                        info!("No enquiry endpoint configured, not uploading {:?}", enquiry);
                        Ok(())
                    }
                };

                // The enquiry reached the backend even if the form was closed meanwhile.
                if result.is_ok() {
                    tracker.track_form_submission(
                        source.as_str(),
                        form_type,
                        property_type.map(|p| p.as_str()),
                    );
                }
                if !session.borrow().accepts(ticket) {
                    info!("Enquiry reply arrived after the form was closed");
                    return;
                }

                match result {
                    Ok(()) => {
                        submitted.set(true);
                    }
                    Err(message) => {
                        gloo_console::error!("Failed to submit enquiry:", message);
                        error.set(Some("Something went wrong, please try again".to_string()));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_site_visit = {
        let site_visit = site_visit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            site_visit.set(input.checked());
        })
    };

    html! {
        <div class="enquiry-overlay">
            <div class="enquiry-modal" role="dialog" aria-modal="true">
                <button class="enquiry-close" onclick={on_close.clone()} aria-label="Close">{"×"}</button>
                if *submitted {
                    <div class="enquiry-success">
                        <h2>{"Thank you!"}</h2>
                        <p>{"Our team will call you back shortly."}</p>
                        <button class="enquiry-submit" onclick={on_close}>{"Close"}</button>
                    </div>
                } else {
                    <h2>{"Enquire Now"}</h2>
                    if let Some(context) = context {
                        <p class="enquiry-context">{context.describe()}</p>
                    }
                    <form {onsubmit}>
                        <input type="text" placeholder="Name" value={(*name).clone()} oninput={on_name} />
                        <input type="tel" placeholder="Phone" value={(*phone).clone()} oninput={on_phone} />
                        <input type="email" placeholder="Email (optional)" value={(*email).clone()} oninput={on_email} />
                        <label class="enquiry-checkbox">
                            <input type="checkbox" checked={*site_visit} onchange={on_site_visit} />
                            {"I'd like to schedule a site visit"}
                        </label>
                        if let Some(message) = (*error).as_ref() {
                            <div class="error-message">{message}</div>
                        }
                        <button type="submit" class="enquiry-submit" disabled={*is_submitting}>
                            { if *is_submitting { "Sending..." } else { "Submit" } }
                        </button>
                    </form>
                }
            </div>
            <style>
                {r#"
                .enquiry-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.5);
                }

                .enquiry-modal {
                    position: relative;
                    width: 100%;
                    max-width: 420px;
                    background: #ffffff;
                    border-radius: 16px;
                    padding: 2.5rem 2rem;
                }

                .enquiry-modal form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.9rem;
                }

                .enquiry-modal input[type="text"],
                .enquiry-modal input[type="tel"],
                .enquiry-modal input[type="email"] {
                    padding: 0.75rem 1rem;
                    border: 1px solid #cde4b9;
                    border-radius: 8px;
                    font-size: 1rem;
                }

                .enquiry-close {
                    position: absolute;
                    top: 0.75rem;
                    right: 1rem;
                    border: none;
                    background: none;
                    font-size: 1.5rem;
                    cursor: pointer;
                }

                .enquiry-context {
                    color: #26650B;
                    font-weight: 600;
                }

                .enquiry-submit {
                    padding: 0.8rem;
                    border: none;
                    border-radius: 999px;
                    background: #26650B;
                    color: #ffffff;
                    font-weight: 600;
                    cursor: pointer;
                }

                .enquiry-submit:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }

                .error-message {
                    color: #c0392b;
                    font-size: 0.9rem;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_complete_enquiry() {
        assert!(validate_enquiry("Asha", "+91 98450-12345", "asha@example.com").is_ok());
        assert!(validate_enquiry("Asha", "9845012345", "").is_ok());
    }

    #[test]
    fn requires_name() {
        assert_eq!(
            validate_enquiry("   ", "9845012345", ""),
            Err("Please enter your name".to_string())
        );
    }

    #[test]
    fn rejects_bad_phone_numbers() {
        assert!(validate_enquiry("Asha", "12345", "").is_err());
        assert!(validate_enquiry("Asha", "98450 1234x", "").is_err());
        assert!(validate_enquiry("Asha", "1234567890123456", "").is_err());
    }

    #[test]
    fn email_needs_at_sign_when_given() {
        assert_eq!(
            validate_enquiry("Asha", "9845012345", "asha.example.com"),
            Err("Please enter a valid email address".to_string())
        );
    }

    #[test]
    fn closing_drops_replies_for_the_old_form() {
        let mut session = FormSession::default();
        let ticket = session.ticket();
        assert!(session.accepts(ticket));

        session.close();
        assert!(!session.accepts(ticket));
        assert!(session.accepts(session.ticket()));
    }

    #[test]
    fn each_close_starts_a_new_form() {
        let mut session = FormSession::default();
        let first = session.ticket();
        session.close();
        let second = session.ticket();
        session.close();
        assert_ne!(first, second);
        assert!(!session.accepts(first));
        assert!(!session.accepts(second));
    }

    #[test]
    fn request_serializes_canonical_identifiers() {
        let request = EnquiryRequest {
            name: "Asha".to_string(),
            phone: "9845012345".to_string(),
            email: None,
            form_type: FormType::SiteVisit.as_str(),
            lead_source: LeadSource::Overview,
            property_type: Some(PropertyType::Sqft2400),
            submitted_at: Utc::now(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["form_type"], "site_visit_form");
        assert_eq!(value["lead_source"], "overview_section");
        assert_eq!(value["property_type"], "2400 sq.ft");
        assert!(value["email"].is_null());
    }
}
