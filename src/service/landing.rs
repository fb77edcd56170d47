//! Landing page service
//!
//! Loads page content from the store, seeds defaults, accepts contact form
//! submissions and records page views.

use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{error, info, warn};

use crate::{
    constants::{limits, rate_limit, server::PAGE_TITLE_KEY},
    content::{default_benefits, default_services, HeroSection, PageContent},
    storage::{ContactSubmission, NewPageView, NewSubmission, PageView, StorageError, Store},
    validation::{anonymize_ip, sanitize, truncate, validate_email, validate_phone},
};

/// Visitor-supplied contact form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Request metadata recorded for a page view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageVisit {
    pub page_path: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid phone number")]
    InvalidPhone,

    #[error("too many submissions, try again later")]
    RateLimited,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Service for the landing page's data access
#[derive(Clone)]
pub struct LandingService {
    store: Arc<Mutex<Store>>,
}

impl LandingService {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Content for the page, falling back to the shipped copy part by part
    pub fn page_content(&self) -> PageContent {
        let store = self.store();
        let mut content = PageContent::default();

        match store.active_hero() {
            Ok(Some(hero)) => content.hero = hero.item,
            Ok(None) => {}
            Err(e) => error!("Error fetching hero section: {}", e),
        }

        match store.services() {
            Ok(services) if !services.is_empty() => content.services = services,
            Ok(_) => {}
            Err(e) => error!("Error fetching services: {}", e),
        }

        match store.benefits() {
            Ok(benefits) if !benefits.is_empty() => content.benefits = benefits,
            Ok(_) => {}
            Err(e) => error!("Error fetching benefits: {}", e),
        }

        match store.cta_buttons() {
            Ok(buttons) if !buttons.is_empty() => content.cta_buttons = buttons,
            Ok(_) => {}
            Err(e) => error!("Error fetching CTA buttons: {}", e),
        }

        match store.active_footer() {
            Ok(Some(footer)) => content.footer = footer.item,
            Ok(None) => {}
            Err(e) => error!("Error fetching footer content: {}", e),
        }

        match store.site_config(PAGE_TITLE_KEY) {
            Ok(Some(title)) => content.title = title,
            Ok(None) => {}
            Err(e) => error!("Error fetching site config for key {}: {}", PAGE_TITLE_KEY, e),
        }

        content
    }

    /// Seed hero, services and benefits when the store has none
    pub fn initialize_default_data(&self) -> Result<(), StorageError> {
        let mut store = self.store();

        if store.active_hero()?.is_none() {
            info!("Creating default hero section");
            store.create_hero(&HeroSection::default())?;
        }

        if store.services()?.is_empty() {
            info!("Creating default services");
            for service in default_services() {
                store.create_service(&service)?;
            }
        }

        if store.benefits()?.is_empty() {
            info!("Creating default benefits");
            for benefit in default_benefits() {
                store.create_benefit(&benefit)?;
            }
        }

        info!("Default landing page data initialization completed");
        Ok(())
    }

    pub fn submit_contact(
        &self,
        form: ContactForm,
        ip_address: Option<&str>,
        user_agent: Option<&str>,
    ) -> Result<ContactSubmission, SubmissionError> {
        self.submit_contact_at(form, ip_address, user_agent, Utc::now())
    }

    /// Validate, rate-limit, sanitize and store a contact form submission
    pub fn submit_contact_at(
        &self,
        form: ContactForm,
        ip_address: Option<&str>,
        user_agent: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<ContactSubmission, SubmissionError> {
        let email = form.email.trim();
        if !validate_email(email) {
            warn!("Invalid email format submitted");
            return Err(SubmissionError::InvalidEmail);
        }

        let phone = form.phone.as_deref().map(str::trim).filter(|p| !p.is_empty());
        if !validate_phone(phone) {
            warn!("Invalid phone format submitted");
            return Err(SubmissionError::InvalidPhone);
        }

        if form.name.trim().is_empty() {
            return Err(SubmissionError::MissingField("name"));
        }
        if form.message.trim().is_empty() {
            return Err(SubmissionError::MissingField("message"));
        }

        let anonymized_ip = ip_address.map(anonymize_ip);
        let store = self.store();

        if let Some(ip) = anonymized_ip.as_deref() {
            let since = now - Duration::seconds(rate_limit::WINDOW_SECS);
            match store.recent_submissions(ip, since) {
                Ok(count) if count >= rate_limit::MAX_SUBMISSIONS => {
                    warn!("Rate limit exceeded for IP: {}", ip);
                    return Err(SubmissionError::RateLimited);
                }
                Ok(_) => {}
                // Allow the submission if the check itself fails
                Err(e) => error!("Error checking rate limit: {}", e),
            }
        }

        let submission = NewSubmission {
            name: sanitize(&form.name, limits::NAME),
            email: truncate(&email.to_lowercase(), limits::EMAIL),
            phone: phone.map(|p| truncate(p, limits::PHONE)),
            message: sanitize(&form.message, limits::MESSAGE),
            ip_address: anonymized_ip,
            user_agent: user_agent.map(|ua| truncate(ua, limits::USER_AGENT)),
        };

        let saved = store.insert_submission(&submission, now)?;
        info!("Stored contact submission {}", saved.id);
        Ok(saved)
    }

    /// Record a page view; failures are logged and swallowed
    pub fn log_page_view(&self, visit: PageVisit) -> Option<PageView> {
        let view = NewPageView {
            page_path: truncate(&visit.page_path, limits::PAGE_PATH),
            ip_address: visit.ip_address.as_deref().map(anonymize_ip),
            user_agent: visit.user_agent.map(|v| truncate(&v, limits::USER_AGENT)),
            referrer: visit.referrer.map(|v| truncate(&v, limits::REFERRER)),
            session_id: visit.session_id.map(|v| truncate(&v, limits::SESSION_ID)),
        };

        match self.store().insert_page_view(&view, Utc::now()) {
            Ok(saved) => Some(saved),
            Err(e) => {
                error!("Error logging page view: {}", e);
                None
            }
        }
    }

    pub fn site_config(&self, key: &str) -> Option<String> {
        match self.store().site_config(key) {
            Ok(value) => value,
            Err(e) => {
                error!("Error fetching site config for key {}: {}", key, e);
                None
            }
        }
    }

    pub fn set_site_config(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.store().set_site_config(key, value, None)
    }

    #[cfg(test)]
    pub(crate) fn last_page_view(&self) -> Option<PageView> {
        self.store().last_page_view().ok().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactAction;
    use crate::content::{default_cta_buttons, CtaButton, FooterContent};

    fn service() -> LandingService {
        LandingService::new(Store::open_in_memory().unwrap())
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: Some("555-123-4567".to_string()),
            message: "I'm interested in your services.".to_string(),
        }
    }

    #[test]
    fn test_empty_store_renders_defaults() {
        let content = service().page_content();
        assert_eq!(content, PageContent::default());
    }

    #[test]
    fn test_initialize_default_data_is_idempotent() {
        let service = service();
        service.initialize_default_data().unwrap();
        service.initialize_default_data().unwrap();

        let store = service.store();
        assert_eq!(store.services().unwrap().len(), 6);
        assert_eq!(store.benefits().unwrap().len(), 6);
        assert!(store
            .active_hero()
            .unwrap()
            .unwrap()
            .item
            .highlight
            .unwrap()
            .contains("Smart IT Solutions"));
    }

    #[test]
    fn test_page_content_uses_stored_cta_and_footer() {
        let service = service();
        {
            let mut store = service.store();
            store
                .create_cta_button(&CtaButton {
                    text: "Call Now".to_string(),
                    action: ContactAction::Phone,
                    action_value: "+1 555 000 1111".to_string(),
                    style: "phone".to_string(),
                    display_order: 1,
                })
                .unwrap();
            store
                .create_footer(&FooterContent {
                    company_name: "Stored Co".to_string(),
                    ..FooterContent::default()
                })
                .unwrap();
        }

        let content = service.page_content();
        assert_eq!(content.cta_buttons.len(), 1);
        assert_eq!(content.cta_buttons[0].text, "Call Now");
        assert_eq!(content.footer.company_name, "Stored Co");
        // Untouched parts keep their defaults
        assert_eq!(content.services, default_services());
    }

    #[test]
    fn test_broken_cta_rows_fall_back_to_defaults() {
        let service = service();
        service
            .store()
            .create_cta_button(&CtaButton {
                text: "Chat".to_string(),
                action: ContactAction::WhatsApp,
                action_value: String::new(),
                style: "whatsapp".to_string(),
                display_order: 1,
            })
            .unwrap();
        assert_eq!(service.page_content().cta_buttons[0].text, "Chat");

        service
            .store()
            .connection()
            .execute("UPDATE call_to_actions SET action_type = 'fax'", [])
            .unwrap();
        assert_eq!(service.page_content().cta_buttons, default_cta_buttons());
    }

    #[test]
    fn test_page_content_uses_stored_title() {
        let service = service();
        service.set_site_config(PAGE_TITLE_KEY, "Custom Title").unwrap();
        assert_eq!(service.page_content().title, "Custom Title");
        assert_eq!(
            service.site_config(PAGE_TITLE_KEY).as_deref(),
            Some("Custom Title")
        );
        assert!(service.site_config("non_existent_key").is_none());
    }

    #[test]
    fn test_valid_submission_is_sanitized() {
        let mut form = form();
        form.name = "  John Doe  ".to_string();
        form.email = "John@Example.com".to_string();

        let saved = service()
            .submit_contact(form, Some("192.168.1.1"), Some("Test Browser"))
            .unwrap();
        assert_eq!(saved.name, "John Doe");
        assert_eq!(saved.email, "john@example.com");
        assert_eq!(saved.phone.as_deref(), Some("555-123-4567"));
        assert_eq!(saved.status, "new");
        assert_eq!(saved.ip_address.as_deref(), Some("192.168.1.0"));
        assert_eq!(saved.user_agent.as_deref(), Some("Test Browser"));
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let mut form = form();
        form.email = "invalid-email".to_string();
        assert!(matches!(
            service().submit_contact(form, None, None),
            Err(SubmissionError::InvalidEmail)
        ));
    }

    #[test]
    fn test_invalid_phone_is_rejected() {
        let mut form = form();
        form.phone = Some("abc123".to_string());
        assert!(matches!(
            service().submit_contact(form, None, None),
            Err(SubmissionError::InvalidPhone)
        ));
    }

    #[test]
    fn test_blank_phone_is_stored_as_none() {
        let mut form = form();
        form.phone = Some("   ".to_string());
        let saved = service().submit_contact(form, None, None).unwrap();
        assert!(saved.phone.is_none());
    }

    #[test]
    fn test_missing_message_is_rejected() {
        let mut form = form();
        form.message = "  ".to_string();
        assert!(matches!(
            service().submit_contact(form, None, None),
            Err(SubmissionError::MissingField("message"))
        ));
    }

    #[test]
    fn test_rate_limit_per_anonymized_ip() {
        let service = service();
        let now = Utc::now();
        for _ in 0..3 {
            service
                .submit_contact_at(form(), Some("192.168.1.100"), None, now)
                .unwrap();
        }

        // Same /24, so the anonymized address matches
        assert!(matches!(
            service.submit_contact_at(form(), Some("192.168.1.7"), None, now),
            Err(SubmissionError::RateLimited)
        ));

        // Another network is unaffected
        assert!(service
            .submit_contact_at(form(), Some("10.0.0.1"), None, now)
            .is_ok());

        // The window expires after an hour
        assert!(service
            .submit_contact_at(form(), Some("192.168.1.100"), None, now + Duration::minutes(61))
            .is_ok());
    }

    #[test]
    fn test_submissions_without_ip_are_not_rate_limited() {
        let service = service();
        for _ in 0..5 {
            assert!(service.submit_contact(form(), None, None).is_ok());
        }
    }

    #[test]
    fn test_long_fields_are_truncated() {
        let mut form = form();
        form.name = format!("John {}", "a".repeat(200));
        form.message = format!("Message {}", "a".repeat(3000));

        let saved = service()
            .submit_contact(form, None, Some(&"u".repeat(600)))
            .unwrap();
        assert_eq!(saved.name.chars().count(), 100);
        assert_eq!(saved.message.chars().count(), 2000);
        assert_eq!(saved.user_agent.unwrap().len(), 500);
    }

    #[test]
    fn test_page_view_is_anonymized() {
        let view = service()
            .log_page_view(PageVisit {
                page_path: "/".to_string(),
                ip_address: Some("192.168.1.1".to_string()),
                user_agent: Some("Test Browser".to_string()),
                referrer: Some("https://google.com".to_string()),
                session_id: Some("test-session-123".to_string()),
            })
            .unwrap();
        assert_eq!(view.page_path, "/");
        assert_eq!(view.ip_address.as_deref(), Some("192.168.1.0"));
        assert_eq!(view.referrer.as_deref(), Some("https://google.com"));
        assert_eq!(view.session_id.as_deref(), Some("test-session-123"));
    }

    #[test]
    fn test_page_view_with_only_path() {
        let view = service()
            .log_page_view(PageVisit {
                page_path: "/test".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert!(view.ip_address.is_none());
    }
}
