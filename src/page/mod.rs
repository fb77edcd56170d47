//! HTML rendering for the landing page
//!
//! The page is a pure function of its content, the contact links and the menu
//! state. All text goes through [`escape`].

use crate::contact::{ContactAction, ContactLink, ContactLinks};
use crate::content::{Benefit, CtaButton, FooterContent, HeroSection, PageContent, Service};
use crate::menu::MenuState;

mod style;


/// Anchors shown in the navigation menu, in order
pub const NAV_SECTIONS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("services", "Services"),
    ("benefits", "Benefits"),
    ("contact", "Contact"),
];

/// Escape text for use in element content and double-quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Make a URL safe to place inside a single-quoted CSS `url('...')`
///
/// Characters that could close the string or the `url(` token are
/// percent-encoded, as are whitespace and control characters.
pub fn css_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            '\'' | '"' | '(' | ')' | '\\' => out.push_str(&format!("%{:02X}", c as u32)),
            c if c.is_whitespace() || c.is_control() => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("%{:02X}", byte));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Render the full HTML document
pub fn render_page(content: &PageContent, links: &ContactLinks, menu: MenuState) -> String {
    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n");
    html.push_str(&head(&content.title));
    html.push_str("<body>\n<div class=\"app\">\n");
    html.push_str(&nav(menu));
    html.push_str(&hero(&content.hero, links));
    html.push_str(&services(&content.services));
    html.push_str(&benefits(&content.benefits));
    html.push_str(&cta(&content.cta_buttons, links));
    html.push_str(&footer(&content.footer, links));
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn head(title: &str) -> String {
    format!(
        r#"<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<meta name="description" content="Professional IT Smart Home Solutions - Transform your home with cutting-edge technology">
<meta name="keywords" content="smart home, IT solutions, home automation, security systems, energy management">
<meta name="robots" content="index, follow">
<meta name="referrer" content="strict-origin-when-cross-origin">
<title>{}</title>
<style>{}</style>
</head>
"#,
        escape(title),
        style::STYLESHEET
    )
}

fn nav(menu: MenuState) -> String {
    let links: String = NAV_SECTIONS
        .iter()
        .map(|(id, label)| format!("<a href=\"#{}\" class=\"nav-link\">{}</a>", id, label))
        .collect();

    format!(
        r#"<nav class="nav">
<div class="nav-container">
<div class="nav-brand"><span class="brand-text">SmartHome IT</span></div>
<a class="{}" href="{}" role="button" aria-label="Toggle navigation menu" aria-expanded="{}"><span></span><span></span><span></span></a>
<div class="{}">{}</div>
</div>
</nav>
"#,
        menu.toggle_class(),
        menu.toggle().as_query(),
        menu.is_open(),
        menu.menu_class(),
        links
    )
}

fn contact_button(link: &ContactLink, class: &str, label: &str, aria: &str, icon: &str) -> String {
    format!(
        "<a class=\"btn {}\" href=\"{}\"{} aria-label=\"{}\"><span class=\"btn-icon\">{}</span>{}</a>",
        class,
        escape(&link.href),
        link.target.attributes(),
        escape(aria),
        icon,
        escape(label)
    )
}

fn hero(hero: &HeroSection, links: &ContactLinks) -> String {
    let highlight = hero
        .highlight
        .as_deref()
        .map(|h| format!("<span class=\"hero-highlight\"> {}</span>", escape(h)))
        .unwrap_or_default();
    let background = hero
        .background_image_url
        .as_deref()
        .map(|url| format!(" style=\"background-image: url('{}')\"", escape(&css_url(url))))
        .unwrap_or_default();

    format!(
        r#"<section id="home" class="hero"{}>
<div class="hero-container">
<div class="hero-content">
<h1 class="hero-title">{}{}</h1>
<p class="hero-description">{}</p>
<div class="hero-actions">
{}
{}
</div>
</div>
<div class="hero-visual"><div class="smart-grid">{}</div></div>
</div>
</section>
"#,
        background,
        escape(&hero.headline),
        highlight,
        escape(&hero.description),
        contact_button(&links.whatsapp, "btn-whatsapp", "WhatsApp Us", "Contact us via WhatsApp", "📱"),
        contact_button(&links.email, "btn-email", "Email Us", "Contact us via email", "✉️"),
        ["🏠", "💡", "🔒", "📱", "🌡️", "📊"]
            .iter()
            .map(|icon| format!("<div class=\"grid-item\">{}</div>", icon))
            .collect::<String>()
    )
}

fn section_header(title: &str, description: &str) -> String {
    format!(
        "<div class=\"section-header\"><h2 class=\"section-title\">{}</h2><p class=\"section-description\">{}</p></div>\n",
        escape(title),
        escape(description)
    )
}

fn services(services: &[Service]) -> String {
    let cards: String = services
        .iter()
        .map(|s| {
            let features: String = s
                .features
                .iter()
                .map(|f| format!("<li>{}</li>", escape(f)))
                .collect();
            format!(
                "<div class=\"service-card\"><div class=\"service-icon\">{}</div><h3 class=\"service-title\">{}</h3><p class=\"service-description\">{}</p><ul class=\"service-features\">{}</ul></div>\n",
                escape(&s.icon),
                escape(&s.title),
                escape(&s.description),
                features
            )
        })
        .collect();

    format!(
        "<section id=\"services\" class=\"services\">\n<div class=\"container\">\n{}<div class=\"services-grid\">\n{}</div>\n</div>\n</section>\n",
        section_header(
            "Our Services",
            "Comprehensive smart home solutions tailored to your needs"
        ),
        cards
    )
}

fn benefits(benefits: &[Benefit]) -> String {
    let items: String = benefits
        .iter()
        .map(|b| {
            format!(
                "<div class=\"benefit-item\"><div class=\"benefit-icon\">{}</div><h3 class=\"benefit-title\">{}</h3><p class=\"benefit-description\">{}</p></div>\n",
                escape(&b.icon),
                escape(&b.title),
                escape(&b.description)
            )
        })
        .collect();

    format!(
        "<section id=\"benefits\" class=\"benefits\">\n<div class=\"container\">\n{}<div class=\"benefits-grid\">\n{}</div>\n</div>\n</section>\n",
        section_header(
            "Why Choose Us",
            "Experience the advantages of professional smart home IT solutions"
        ),
        items
    )
}

fn cta_button(button: &CtaButton, links: &ContactLinks) -> String {
    let (aria, icon) = match button.action {
        ContactAction::WhatsApp => ("Start consultation via WhatsApp", "📱"),
        ContactAction::Email => ("Send consultation request via email", "✉️"),
        ContactAction::Phone => ("Call us for a consultation", "📞"),
    };
    let class: String = button
        .style
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    contact_button(
        &links.link_for(button.action, &button.action_value),
        &format!("btn-{}", class),
        &button.text,
        aria,
        icon,
    )
}

fn cta(buttons: &[CtaButton], links: &ContactLinks) -> String {
    let buttons: Vec<String> = buttons.iter().map(|b| cta_button(b, links)).collect();
    format!(
        r#"<section id="contact" class="cta">
<div class="container">
<div class="cta-content">
<h2 class="cta-title">Ready to Transform Your Home?</h2>
<p class="cta-description">Get started with a free consultation and discover how our IT smart home solutions can enhance your lifestyle, security, and energy efficiency.</p>
<div class="cta-actions">
{}
</div>
<div class="cta-info"><p class="cta-note">✨ Free consultation • 🏆 5+ years experience • 🛡️ Fully insured</p></div>
</div>
</div>
</section>
"#,
        buttons.join("\n")
    )
}

fn social_links(links: &std::collections::BTreeMap<String, String>) -> String {
    let anchors: String = links
        .iter()
        .filter(|(_, url)| url.starts_with("https://") || url.starts_with("http://"))
        .map(|(name, url)| {
            format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape(url),
                escape(name)
            )
        })
        .collect();
    if anchors.is_empty() {
        String::new()
    } else {
        format!("<div class=\"footer-social\">{}</div>", anchors)
    }
}

fn footer(footer: &FooterContent, links: &ContactLinks) -> String {
    let email = footer.email.as_deref().unwrap_or(&links.profile.email);
    let phone = footer.phone.as_deref().unwrap_or(&links.profile.phone);
    let address = footer
        .address
        .as_deref()
        .map(|a| format!("<p>📍 {}</p>", escape(a)))
        .unwrap_or_default();

    format!(
        r##"<footer class="footer">
<div class="container">
<div class="footer-content">
<div class="footer-section"><h3 class="footer-title">{}</h3><p class="footer-description">{}</p>{}</div>
<div class="footer-section"><h4 class="footer-heading">Services</h4>
<ul class="footer-links"><li><a href="#services">Smart Lighting</a></li><li><a href="#services">Security Systems</a></li><li><a href="#services">Energy Management</a></li><li><a href="#services">Home Automation</a></li></ul>
</div>
<div class="footer-section"><h4 class="footer-heading">Contact</h4>
<div class="footer-contact"><p>📧 {}</p><p>📱 {}</p>{}</div>
</div>
</div>
<div class="footer-bottom"><p>{}</p></div>
</div>
</footer>
"##,
        escape(&footer.company_name),
        escape(&footer.tagline),
        social_links(&footer.social_links),
        escape(email),
        escape(phone),
        address,
        escape(&footer.copyright)
    )
}
