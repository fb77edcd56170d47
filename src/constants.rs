/// Default contact details shown on the page
pub mod contact {
    /// Placeholder WhatsApp business number
    pub const PHONE: &str = "+1234567890";

    /// Placeholder inquiry mailbox
    pub const EMAIL: &str = "contact@smarthomeit.com";

    /// Pre-filled WhatsApp greeting
    pub const WHATSAPP_MESSAGE: &str = "Hi! I'm interested in your IT smart home solutions.";

    /// Pre-filled email subject
    pub const EMAIL_SUBJECT: &str = "Inquiry about IT Smart Home Solutions";

    /// Pre-filled email body
    pub const EMAIL_BODY: &str =
        "Hello,\n\nI'm interested in learning more about your smart home IT solutions.\n\nBest regards";
}

/// Maximum stored lengths, in characters
pub mod limits {
    pub const NAME: usize = 100;
    pub const EMAIL: usize = 255;
    pub const PHONE: usize = 20;
    pub const MESSAGE: usize = 2000;
    pub const USER_AGENT: usize = 500;
    pub const REFERRER: usize = 500;
    pub const SESSION_ID: usize = 100;
    pub const PAGE_PATH: usize = 200;

    /// Largest accepted contact form body, in bytes
    pub const FORM_BODY: usize = 16 * 1024;
}

/// Contact form rate limiting
pub mod rate_limit {
    /// Submissions allowed per anonymized IP within the window
    pub const MAX_SUBMISSIONS: usize = 3;

    /// Window length in seconds
    pub const WINDOW_SECS: i64 = 60 * 60;
}

/// Server defaults
pub mod server {
    pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

    /// Site configuration key overriding the page title
    pub const PAGE_TITLE_KEY: &str = "page_title";
}
