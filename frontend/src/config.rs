#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    match option_env!("ENQUIRY_API_URL") {
        Some(url) => url,
        None => "",  // Same origin
    }
}

/// Measurement id of the analytics property, e.g. `G-XXXXXXX`.
/// Without one, events are only written to the console.
pub fn get_measurement_id() -> Option<&'static str> {
    option_env!("GA_MEASUREMENT_ID").filter(|id| !id.trim().is_empty())
}

#[cfg(debug_assertions)]
pub fn get_enquiry_endpoint() -> Option<String> {
    Some(format!("{}/api/enquiries", get_backend_url()))
}

// Release builds only post enquiries when an API host was baked in.
#[cfg(not(debug_assertions))]
pub fn get_enquiry_endpoint() -> Option<String> {
    option_env!("ENQUIRY_API_URL").map(|_| format!("{}/api/enquiries", get_backend_url()))
}
