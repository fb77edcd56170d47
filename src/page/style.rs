pub const STYLESHEET: &str = r#"
:root {
  --primary-blue: #2563eb;
  --light-blue: #3b82f6;
  --dark-bg: #0f172a;
  --darker-bg: #020617;
  --text-light: #e2e8f0;
  --text-gray: #64748b;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
html { scroll-behavior: smooth; }
body { font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif; background: var(--darker-bg); color: var(--text-light); line-height: 1.6; }
a { color: inherit; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }

.nav { position: sticky; top: 0; z-index: 10; background: rgba(2, 6, 23, 0.9); border-bottom: 1px solid rgba(59, 130, 246, 0.2); }
.nav-container { max-width: 1200px; margin: 0 auto; padding: 1rem 1.5rem; display: flex; align-items: center; justify-content: space-between; }
.brand-text { font-size: 1.5rem; font-weight: 700; color: #fff; }
.nav-toggle { display: none; flex-direction: column; gap: 4px; padding: 0.5rem; }
.nav-toggle span { display: block; width: 24px; height: 2px; background: var(--text-light); transition: transform 0.3s ease; }
.nav-toggle.active span:nth-child(1) { transform: translateY(6px) rotate(45deg); }
.nav-toggle.active span:nth-child(2) { opacity: 0; }
.nav-toggle.active span:nth-child(3) { transform: translateY(-6px) rotate(-45deg); }
.nav-menu { display: flex; gap: 2rem; }
.nav-link { text-decoration: none; color: var(--text-light); }
.nav-link:hover { color: var(--light-blue); }

.hero { min-height: 90vh; display: flex; align-items: center; background: linear-gradient(135deg, var(--darker-bg) 0%, var(--dark-bg) 50%, var(--primary-blue) 100%); background-size: cover; }
.hero-container { max-width: 1200px; margin: 0 auto; padding: 4rem 1.5rem; display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
.hero-title { font-size: 3.5rem; line-height: 1.1; color: #fff; margin-bottom: 1.5rem; }
.hero-highlight { color: var(--light-blue); }
.hero-description { font-size: 1.25rem; color: #cbd5e1; margin-bottom: 2.5rem; }
.hero-actions, .cta-actions { display: flex; gap: 1rem; flex-wrap: wrap; }
.smart-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.grid-item { font-size: 2.5rem; text-align: center; padding: 1.5rem; border-radius: 1rem; background: rgba(15, 23, 42, 0.8); border: 1px solid rgba(59, 130, 246, 0.2); }

.btn { display: inline-flex; align-items: center; gap: 0.5rem; padding: 1rem 2rem; border-radius: 0.75rem; font-weight: 600; text-decoration: none; color: #fff; transition: transform 0.3s ease, box-shadow 0.3s ease; }
.btn:hover { transform: translateY(-2px); box-shadow: 0 10px 20px rgba(37, 99, 235, 0.3); }
.btn:focus { outline: 2px solid var(--primary-blue); outline-offset: 2px; }
.btn-whatsapp { background: linear-gradient(45deg, #25d366, #128c7e); }
.btn-email { background: linear-gradient(45deg, var(--primary-blue), #1d4ed8); }
.btn-phone, .btn-primary { background: linear-gradient(45deg, var(--primary-blue), #7c3aed); }

.services, .benefits, .cta { padding: 5rem 0; }
.benefits { background: rgba(15, 23, 42, 0.5); }
.section-header { text-align: center; margin-bottom: 3rem; }
.section-title { font-size: 2.5rem; color: #fff; margin-bottom: 0.75rem; }
.section-description { font-size: 1.2rem; color: #94a3b8; }
.services-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
.service-card { background: var(--dark-bg); border: 1px solid rgba(59, 130, 246, 0.1); border-radius: 1rem; padding: 2rem; }
.service-icon { font-size: 2.5rem; margin-bottom: 1rem; }
.service-title { color: #fff; margin-bottom: 0.75rem; }
.service-features { margin-top: 1rem; padding-left: 1.2rem; color: #cbd5e1; }
.benefits-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2rem; }
.benefit-item { background: rgba(15, 23, 42, 0.6); border-left: 4px solid var(--primary-blue); border-radius: 0.75rem; padding: 1.5rem; }
.benefit-icon { font-size: 2rem; }
.benefit-title { color: #fff; margin: 0.5rem 0; }

.cta-content { text-align: center; max-width: 800px; margin: 0 auto; }
.cta-title { font-size: 2.5rem; color: #fff; margin-bottom: 1rem; }
.cta-description { font-size: 1.2rem; color: #cbd5e1; margin-bottom: 2.5rem; }
.cta-actions { justify-content: center; }
.cta-note { margin-top: 2rem; color: #94a3b8; }

.footer { background: #020617; border-top: 1px solid #1e293b; padding: 3rem 0; }
.footer-content { display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 2rem; }
.footer-title { color: #fff; margin-bottom: 1rem; }
.footer-heading { color: #fff; margin-bottom: 0.75rem; }
.footer-links { list-style: none; }
.footer-links a { text-decoration: none; color: #94a3b8; }
.footer-description, .footer-contact { color: #94a3b8; }
.footer-social { display: flex; gap: 1rem; margin-top: 1rem; }
.footer-social a { color: #94a3b8; text-decoration: none; }
.footer-bottom { border-top: 1px solid #1e293b; margin-top: 2rem; padding-top: 2rem; text-align: center; color: var(--text-gray); user-select: none; }

@media (max-width: 768px) {
  .nav-toggle { display: flex; }
  .nav-menu { display: none; position: absolute; top: 100%; left: 0; right: 0; flex-direction: column; gap: 1rem; padding: 1.5rem; background: var(--darker-bg); }
  .nav-menu.active { display: flex; }
  .hero-container, .services-grid, .benefits-grid, .footer-content { grid-template-columns: 1fr; }
  .hero-title { font-size: 2.5rem; }
}
"#;
