//! Tests for the contact link builder

use super::*;

fn query_value<'a>(url: &'a str, key: &str) -> &'a str {
    let query = url.split_once('?').map(|(_, q)| q).unwrap();
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix(&format!("{}=", key)))
        .unwrap()
}

#[test]
fn test_phone_digits_strips_formatting() {
    assert_eq!(phone_digits("+1 (234) 567-8900"), "12345678900");
    assert_eq!(phone_digits("+1234567890"), "1234567890");
    assert_eq!(phone_digits("+1 (555) 123-SMART"), "1555123");
    assert_eq!(phone_digits("no digits"), "");
}

#[test]
fn test_whatsapp_link_exact_encoding() {
    let link = whatsapp_link(
        "+1234567890",
        "Hi! I'm interested in your IT smart home solutions.",
    );
    assert_eq!(
        link,
        "https://wa.me/1234567890?text=Hi%21%20I%27m%20interested%20in%20your%20IT%20smart%20home%20solutions."
    );
}

#[test]
fn test_whatsapp_link_path_is_digits_only() {
    for phone in ["+1 (234) 567-8900", "555.123.4567", "  +44 20 7946 0958 "] {
        let link = whatsapp_link(phone, "hello");
        let path = link
            .strip_prefix("https://wa.me/")
            .and_then(|rest| rest.split_once('?'))
            .map(|(digits, _)| digits)
            .unwrap();
        assert!(!path.is_empty());
        assert!(path.chars().all(|c| c.is_ascii_digit()), "{}", path);
    }
}

#[test]
fn test_whatsapp_message_decodes_to_template() {
    let messages = MessageTemplates::default();
    let link = whatsapp_link(contact::PHONE, &messages.whatsapp);
    let decoded = urlencoding::decode(query_value(&link, "text")).unwrap();
    assert_eq!(decoded, messages.whatsapp);
}

#[test]
fn test_mailto_address_is_unaltered() {
    let link = mailto_link("contact@smarthomeit.com", "subject", "body");
    let address = link
        .strip_prefix("mailto:")
        .and_then(|rest| rest.split_once('?'))
        .map(|(address, _)| address)
        .unwrap();
    assert_eq!(address, "contact@smarthomeit.com");
}

#[test]
fn test_mailto_subject_and_body_decode_to_templates() {
    let messages = MessageTemplates::default();
    let link = mailto_link(contact::EMAIL, &messages.email_subject, &messages.email_body);

    let subject = urlencoding::decode(query_value(&link, "subject")).unwrap();
    let body = urlencoding::decode(query_value(&link, "body")).unwrap();
    assert_eq!(subject, messages.email_subject);
    assert_eq!(body, messages.email_body);

    // Newlines and apostrophes must not leak into the URL unescaped
    assert!(!link.contains('\n'));
    assert!(!link.contains('\''));
    assert!(link.contains("%0A%0A"));
}

#[test]
fn test_contact_links_targets() {
    let links = ContactLinks::default();
    assert_eq!(links.whatsapp.target, LinkTarget::NewContext);
    assert_eq!(links.email.target, LinkTarget::SameWindow);
    assert!(links.whatsapp.href.starts_with("https://wa.me/1234567890?text="));
    assert!(links
        .email
        .href
        .starts_with("mailto:contact@smarthomeit.com?subject="));
}

#[test]
fn test_new_context_attributes_prevent_opener_access() {
    let attrs = LinkTarget::NewContext.attributes();
    assert!(attrs.contains(r#"target="_blank""#));
    assert!(attrs.contains("noopener"));
    assert!(attrs.contains("noreferrer"));
    assert_eq!(LinkTarget::SameWindow.attributes(), "");
}

#[test]
fn test_link_for_empty_value_uses_profile() {
    let links = ContactLinks::default();
    assert_eq!(links.link_for(ContactAction::WhatsApp, ""), links.whatsapp);
    assert_eq!(links.link_for(ContactAction::Email, "  "), links.email);
    assert_eq!(
        links.link_for(ContactAction::Phone, "").href,
        "tel:+1234567890"
    );
}

#[test]
fn test_link_for_explicit_value() {
    let links = ContactLinks::default();

    let whatsapp = links.link_for(ContactAction::WhatsApp, "+44 20 7946 0958");
    assert!(whatsapp.href.starts_with("https://wa.me/442079460958?text=Hi%21"));
    assert_eq!(whatsapp.target, LinkTarget::NewContext);

    let email = links.link_for(ContactAction::Email, "sales@example.org");
    assert!(email.href.starts_with("mailto:sales@example.org?subject="));
    assert_eq!(email.target, LinkTarget::SameWindow);

    let phone = links.link_for(ContactAction::Phone, "(555) 123-4567");
    assert_eq!(phone.href, "tel:5551234567");
    assert_eq!(phone.target, LinkTarget::SameWindow);
}

#[test]
fn test_contact_action_names() {
    for action in [ContactAction::WhatsApp, ContactAction::Email, ContactAction::Phone] {
        assert_eq!(ContactAction::parse(action.as_str()), Some(action));
    }
    assert_eq!(ContactAction::parse(" WhatsApp "), Some(ContactAction::WhatsApp));
    assert_eq!(ContactAction::parse("fax"), None);
}
