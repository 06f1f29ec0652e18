use crate::contact::Delivery;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

pub const CONTACT_ENDPOINT: &str = "/api/contact";

pub const SUBMIT_TIMEOUT_MS: u32 = 15_000;

pub const CONTACT_DELIVERY: Delivery = Delivery::Network;

/// Recruiting inbox used by the mail-draft path.
pub const RECRUIT_MAILBOX: &str = "dekanyon@icloud.com";

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/mallow_nagata/";

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3261.0551669939396!2d136.89851287619566!3d35.18857197275282!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x600376e5cf4e2bb9%3A0xb8c55047e62e557b!2zmallow!5e0!3m2!1sja!2sjp!4v1711604847736!5m2!1sja!2sjp";
