//! Outbound contact links
//!
//! Builds the WhatsApp deep link and the mailto link shown in the hero and
//! call-to-action sections.

use crate::constants::contact;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Where the business can be reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactProfile {
    #[serde(default = "default_phone")]
    pub phone: String,

    #[serde(default = "default_email")]
    pub email: String,
}

/// Text pre-filled into the visitor's chat or mail client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplates {
    #[serde(default = "default_whatsapp")]
    pub whatsapp: String,

    #[serde(default = "default_subject")]
    pub email_subject: String,

    #[serde(default = "default_body")]
    pub email_body: String,
}

fn default_phone() -> String {
    contact::PHONE.to_string()
}

fn default_email() -> String {
    contact::EMAIL.to_string()
}

fn default_whatsapp() -> String {
    contact::WHATSAPP_MESSAGE.to_string()
}

fn default_subject() -> String {
    contact::EMAIL_SUBJECT.to_string()
}

fn default_body() -> String {
    contact::EMAIL_BODY.to_string()
}

impl Default for ContactProfile {
    fn default() -> Self {
        Self {
            phone: default_phone(),
            email: default_email(),
        }
    }
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            whatsapp: default_whatsapp(),
            email_subject: default_subject(),
            email_body: default_body(),
        }
    }
}

/// How the browser should open a link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// New browsing context with no handle back to this page
    NewContext,
    /// Navigate the current window
    SameWindow,
}

impl LinkTarget {
    /// Extra anchor attributes, each with a leading space
    pub fn attributes(self) -> &'static str {
        match self {
            LinkTarget::NewContext => r#" target="_blank" rel="noopener noreferrer""#,
            LinkTarget::SameWindow => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub href: String,
    pub target: LinkTarget,
}

/// Channel a call-to-action button opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactAction {
    WhatsApp,
    Email,
    Phone,
}

impl ContactAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactAction::WhatsApp => "whatsapp",
            ContactAction::Email => "email",
            ContactAction::Phone => "phone",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "whatsapp" => Some(ContactAction::WhatsApp),
            "email" => Some(ContactAction::Email),
            "phone" => Some(ContactAction::Phone),
            _ => None,
        }
    }
}

/// Both outbound links for one contact profile, plus the profile itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLinks {
    pub profile: ContactProfile,
    pub messages: MessageTemplates,
    pub whatsapp: ContactLink,
    pub email: ContactLink,
}

impl ContactLinks {
    pub fn new(profile: &ContactProfile, messages: &MessageTemplates) -> Self {
        Self {
            profile: profile.clone(),
            messages: messages.clone(),
            whatsapp: ContactLink {
                href: whatsapp_link(&profile.phone, &messages.whatsapp),
                target: LinkTarget::NewContext,
            },
            email: ContactLink {
                href: mailto_link(&profile.email, &messages.email_subject, &messages.email_body),
                target: LinkTarget::SameWindow,
            },
        }
    }

    /// Link for `action`; an empty `value` means the configured profile
    pub fn link_for(&self, action: ContactAction, value: &str) -> ContactLink {
        let value = value.trim();
        match action {
            ContactAction::WhatsApp if value.is_empty() => self.whatsapp.clone(),
            ContactAction::WhatsApp => ContactLink {
                href: whatsapp_link(value, &self.messages.whatsapp),
                target: LinkTarget::NewContext,
            },
            ContactAction::Email if value.is_empty() => self.email.clone(),
            ContactAction::Email => ContactLink {
                href: mailto_link(value, &self.messages.email_subject, &self.messages.email_body),
                target: LinkTarget::SameWindow,
            },
            ContactAction::Phone => ContactLink {
                href: tel_link(if value.is_empty() { &self.profile.phone } else { value }),
                target: LinkTarget::SameWindow,
            },
        }
    }
}

impl Default for ContactLinks {
    fn default() -> Self {
        Self::new(&ContactProfile::default(), &MessageTemplates::default())
    }
}

/// Keep only ASCII digits, dropping `+`, spaces, dashes and parentheses
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// `https://wa.me/<digits>?text=<encoded message>`
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        phone_digits(phone),
        urlencoding::encode(message)
    )
}

/// `tel:<number>`, keeping digits and a leading `+`
pub fn tel_link(phone: &str) -> String {
    let digits = phone_digits(phone);
    if phone.trim_start().starts_with('+') {
        format!("tel:+{}", digits)
    } else {
        format!("tel:{}", digits)
    }
}

/// `mailto:<address>?subject=<encoded>&body=<encoded>`
///
/// The address is used verbatim.
pub fn mailto_link(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        address,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}
