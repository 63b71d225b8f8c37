use log::Level;

/// Where the contact form posts its fields.
pub fn get_form_endpoint() -> &'static str {
    "https://formspree.io/f/mrebnprk"
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
