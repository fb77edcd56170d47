//! Page content model and the shipped marketing copy

use crate::contact::ContactAction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSection {
    pub headline: String,
    /// Trailing part of the headline rendered with the highlight style
    pub highlight: Option<String>,
    pub description: String,
    pub background_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub display_order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub display_order: i64,
}

/// Button in the call-to-action section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaButton {
    pub text: String,
    pub action: ContactAction,
    /// Phone number or address; empty means the configured contact profile
    pub action_value: String,
    pub style: String,
    pub display_order: i64,
}

/// Footer block. Email and phone fall back to the configured contact
/// profile when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContent {
    pub company_name: String,
    pub tagline: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub copyright: String,
    /// Network name to profile URL
    pub social_links: BTreeMap<String, String>,
}

/// Everything the renderer needs apart from contact links and menu state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub title: String,
    pub hero: HeroSection,
    pub services: Vec<Service>,
    pub benefits: Vec<Benefit>,
    pub cta_buttons: Vec<CtaButton>,
    pub footer: FooterContent,
}

pub const DEFAULT_TITLE: &str = "SmartHome IT - Smart Home Solutions";

impl Default for PageContent {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            hero: HeroSection::default(),
            services: default_services(),
            benefits: default_benefits(),
            cta_buttons: default_cta_buttons(),
            footer: FooterContent::default(),
        }
    }
}

impl Default for HeroSection {
    fn default() -> Self {
        Self {
            headline: "Transform Your Home with".to_string(),
            highlight: Some("Smart IT Solutions".to_string()),
            description: "Experience the future of home automation with our cutting-edge IT \
                          solutions. From intelligent lighting to advanced security systems, we \
                          bring technology and comfort together seamlessly."
                .to_string(),
            background_image_url: None,
        }
    }
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            company_name: "SmartHome IT".to_string(),
            tagline: "Leading provider of intelligent home automation and IT solutions. \
                      Transforming homes with cutting-edge technology since 2018."
                .to_string(),
            email: None,
            phone: None,
            address: Some("123 Tech Street, Smart City, SC 12345".to_string()),
            copyright: "© 2024 SmartHome IT Solutions. All rights reserved.".to_string(),
            social_links: BTreeMap::new(),
        }
    }
}

fn service(order: i64, icon: &str, title: &str, description: &str, features: [&str; 4]) -> Service {
    Service {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        display_order: order,
    }
}

fn benefit(order: i64, icon: &str, title: &str, description: &str) -> Benefit {
    Benefit {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        display_order: order,
    }
}

/// WhatsApp and email buttons pointing at the configured profile
pub fn default_cta_buttons() -> Vec<CtaButton> {
    vec![
        CtaButton {
            text: "Start WhatsApp Chat".to_string(),
            action: ContactAction::WhatsApp,
            action_value: String::new(),
            style: "whatsapp".to_string(),
            display_order: 1,
        },
        CtaButton {
            text: "Send Email Inquiry".to_string(),
            action: ContactAction::Email,
            action_value: String::new(),
            style: "email".to_string(),
            display_order: 2,
        },
    ]
}

pub fn default_services() -> Vec<Service> {
    vec![
        service(
            1,
            "💡",
            "Smart Lighting",
            "Intelligent lighting systems that adapt to your lifestyle. Control brightness, \
             color, and schedules from anywhere.",
            [
                "Voice control integration",
                "Energy-efficient LED systems",
                "Automated scheduling",
                "Remote access control",
            ],
        ),
        service(
            2,
            "🔒",
            "Security Systems",
            "Advanced security solutions with real-time monitoring and instant alerts for \
             complete peace of mind.",
            [
                "24/7 monitoring systems",
                "Smart door locks",
                "HD security cameras",
                "Motion detection alerts",
            ],
        ),
        service(
            3,
            "⚡",
            "Energy Management",
            "Optimize your home's energy consumption with smart monitoring and automated \
             efficiency controls.",
            [
                "Real-time energy tracking",
                "Smart thermostat integration",
                "Automated power management",
                "Cost optimization reports",
            ],
        ),
        service(
            4,
            "🏠",
            "Home Automation",
            "Complete home automation systems that integrate all your smart devices into one \
             seamless experience.",
            [
                "Centralized control hub",
                "Multi-device integration",
                "Custom automation rules",
                "Voice assistant compatibility",
            ],
        ),
        service(
            5,
            "📡",
            "Network Infrastructure",
            "Robust networking solutions to ensure all your smart devices stay connected and \
             perform optimally.",
            [
                "High-speed Wi-Fi coverage",
                "Network security protocols",
                "IoT device management",
                "24/7 technical support",
            ],
        ),
        service(
            6,
            "🎵",
            "Entertainment Systems",
            "Immersive audio-visual experiences with integrated smart entertainment solutions \
             throughout your home.",
            [
                "Multi-room audio systems",
                "Smart TV integration",
                "Streaming optimization",
                "Theater room setups",
            ],
        ),
    ]
}

pub fn default_benefits() -> Vec<Benefit> {
    vec![
        benefit(
            1,
            "🎯",
            "Expert Installation",
            "Our certified technicians ensure seamless installation and configuration of all \
             smart home systems with minimal disruption.",
        ),
        benefit(
            2,
            "🛡️",
            "Enhanced Security",
            "Advanced cybersecurity measures protect your smart home network and personal data \
             from potential threats.",
        ),
        benefit(
            3,
            "💰",
            "Cost Savings",
            "Smart energy management and automation reduce utility bills while increasing your \
             home's value and efficiency.",
        ),
        benefit(
            4,
            "🚀",
            "Future-Ready Technology",
            "Stay ahead with cutting-edge solutions that adapt and scale with emerging smart \
             home technologies.",
        ),
        benefit(
            5,
            "🔧",
            "24/7 Support",
            "Round-the-clock technical support ensures your smart home systems operate smoothly \
             without interruption.",
        ),
        benefit(
            6,
            "📱",
            "Easy Control",
            "Intuitive mobile apps and voice controls make managing your smart home simple and \
             convenient.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_has_six_cards_each() {
        let content = PageContent::default();
        assert_eq!(content.services.len(), 6);
        assert_eq!(content.benefits.len(), 6);
        assert!(content.services.iter().all(|s| s.features.len() == 4));
    }

    #[test]
    fn test_default_cta_and_footer_defer_to_contact_profile() {
        let buttons = default_cta_buttons();
        assert_eq!(buttons.len(), 2);
        assert!(buttons.iter().all(|b| b.action_value.is_empty()));

        let footer = FooterContent::default();
        assert!(footer.email.is_none());
        assert!(footer.phone.is_none());
    }

    #[test]
    fn test_default_ordering_is_ascending() {
        let orders: Vec<i64> = default_services().iter().map(|s| s.display_order).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted);
    }
}
