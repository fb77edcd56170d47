//! SQLite-backed content store
//!
//! Holds the editable page content (hero, services, benefits, call-to-action
//! buttons, footer, site settings) together with contact form submissions and
//! page view records.

use crate::contact::ContactAction;
use crate::content::{Benefit, CtaButton, FooterContent, HeroSection, Service};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::fs;
use std::path::Path;
use tracing::debug;


#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("failed to encode or decode stored JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to create database directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown call-to-action type: {0}")]
    UnknownAction(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// A row read back from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stored<T> {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub item: T,
}

/// Contact form submission ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewPageView {
    pub page_path: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub id: i64,
    pub page_path: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
    pub session_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS hero_sections (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    headline TEXT NOT NULL,
    highlight TEXT,
    description TEXT NOT NULL,
    background_image_url TEXT,
    is_active INTEGER NOT NULL DEFAULT 1,
    created_at INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS services (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    icon TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    features TEXT NOT NULL DEFAULT '[]',
    display_order INTEGER NOT NULL DEFAULT 0,
    is_active INTEGER NOT NULL DEFAULT 1,
    created_at INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS benefits (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    icon TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    display_order INTEGER NOT NULL DEFAULT 0,
    is_active INTEGER NOT NULL DEFAULT 1,
    created_at INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS call_to_actions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    button_text TEXT NOT NULL,
    action_type TEXT NOT NULL,
    action_value TEXT NOT NULL DEFAULT '',
    button_style TEXT NOT NULL DEFAULT 'primary',
    display_order INTEGER NOT NULL DEFAULT 0,
    is_active INTEGER NOT NULL DEFAULT 1,
    created_at INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS footer_contents (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    company_name TEXT NOT NULL,
    tagline TEXT NOT NULL DEFAULT '',
    address TEXT,
    phone TEXT,
    email TEXT,
    copyright_text TEXT NOT NULL,
    social_links TEXT NOT NULL DEFAULT '{}',
    is_active INTEGER NOT NULL DEFAULT 1,
    created_at INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS site_configurations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    config_key TEXT NOT NULL UNIQUE,
    config_value TEXT NOT NULL,
    description TEXT,
    is_active INTEGER NOT NULL DEFAULT 1,
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS contact_submissions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT,
    message TEXT NOT NULL,
    ip_address TEXT,
    user_agent TEXT,
    status TEXT NOT NULL DEFAULT 'new',
    created_at INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_submissions_ip_created
    ON contact_submissions (ip_address, created_at);
CREATE TABLE IF NOT EXISTS page_views (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    page_path TEXT NOT NULL,
    ip_address TEXT,
    user_agent TEXT,
    referrer TEXT,
    session_id TEXT,
    created_at INTEGER NOT NULL
);
"#;

fn to_datetime(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (creating if needed) the database at `path`; `:memory:` is accepted
    pub fn open(path: &Path) -> Result<Self> {
        if path.as_os_str() == ":memory:" {
            return Self::open_in_memory();
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        debug!("Opening database at {}", path.display());
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode = WAL;")?;
        let store = Self { conn };
        store.init()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.init()?;
        Ok(store)
    }

    /// Create all tables; safe to call repeatedly
    pub fn init(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    pub fn active_hero(&self) -> Result<Option<Stored<HeroSection>>> {
        let hero = self
            .conn
            .query_row(
                "SELECT id, headline, highlight, description, background_image_url, created_at
                 FROM hero_sections WHERE is_active = 1 ORDER BY id DESC LIMIT 1",
                [],
                |row| {
                    Ok(Stored {
                        id: row.get(0)?,
                        item: HeroSection {
                            headline: row.get(1)?,
                            highlight: row.get(2)?,
                            description: row.get(3)?,
                            background_image_url: row.get(4)?,
                        },
                        created_at: to_datetime(row.get(5)?),
                    })
                },
            )
            .optional()?;
        Ok(hero)
    }

    /// Insert a hero section and make it the only active one
    pub fn create_hero(&mut self, hero: &HeroSection) -> Result<i64> {
        let tx = self.conn.transaction()?;
        tx.execute("UPDATE hero_sections SET is_active = 0 WHERE is_active = 1", [])?;
        tx.execute(
            "INSERT INTO hero_sections
                (headline, highlight, description, background_image_url, is_active, created_at)
             VALUES (?1, ?2, ?3, ?4, 1, ?5)",
            params![
                hero.headline,
                hero.highlight,
                hero.description,
                hero.background_image_url,
                Utc::now().timestamp()
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
    }

    /// Active services in display order
    pub fn services(&self) -> Result<Vec<Service>> {
        let mut stmt = self.conn.prepare(
            "SELECT icon, title, description, features, display_order FROM services
             WHERE is_active = 1 ORDER BY display_order ASC, id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, i64>(4)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (icon, title, description, features, display_order) = row?;
            out.push(Service {
                icon,
                title,
                description,
                features: serde_json::from_str(&features)?,
                display_order,
            });
        }
        Ok(out)
    }

    pub fn create_service(&self, service: &Service) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO services (icon, title, description, features, display_order, is_active, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6)",
            params![
                service.icon,
                service.title,
                service.description,
                serde_json::to_string(&service.features)?,
                service.display_order,
                Utc::now().timestamp()
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Active benefits in display order
    pub fn benefits(&self) -> Result<Vec<Benefit>> {
        let mut stmt = self.conn.prepare(
            "SELECT icon, title, description, display_order FROM benefits
             WHERE is_active = 1 ORDER BY display_order ASC, id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Benefit {
                icon: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
                display_order: row.get(3)?,
            })
        })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    pub fn create_benefit(&self, benefit: &Benefit) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO benefits (icon, title, description, display_order, is_active, created_at)
             VALUES (?1, ?2, ?3, ?4, 1, ?5)",
            params![
                benefit.icon,
                benefit.title,
                benefit.description,
                benefit.display_order,
                Utc::now().timestamp()
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Active call-to-action buttons in display order
    pub fn cta_buttons(&self) -> Result<Vec<CtaButton>> {
        let mut stmt = self.conn.prepare(
            "SELECT button_text, action_type, action_value, button_style, display_order
             FROM call_to_actions WHERE is_active = 1 ORDER BY display_order ASC, id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, i64>(4)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (text, action, action_value, style, display_order) = row?;
            out.push(CtaButton {
                text,
                action: ContactAction::parse(&action).ok_or(StorageError::UnknownAction(action))?,
                action_value,
                style,
                display_order,
            });
        }
        Ok(out)
    }

    pub fn create_cta_button(&self, button: &CtaButton) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO call_to_actions
                (button_text, action_type, action_value, button_style, display_order, is_active, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6)",
            params![
                button.text,
                button.action.as_str(),
                button.action_value,
                button.style,
                button.display_order,
                Utc::now().timestamp()
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn active_footer(&self) -> Result<Option<Stored<FooterContent>>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, company_name, tagline, address, phone, email, copyright_text,
                        social_links, created_at
                 FROM footer_contents WHERE is_active = 1 ORDER BY id DESC LIMIT 1",
                [],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        FooterContent {
                            company_name: row.get(1)?,
                            tagline: row.get(2)?,
                            address: row.get(3)?,
                            phone: row.get(4)?,
                            email: row.get(5)?,
                            copyright: row.get(6)?,
                            social_links: Default::default(),
                        },
                        row.get::<_, String>(7)?,
                        row.get::<_, i64>(8)?,
                    ))
                },
            )
            .optional()?;

        match row {
            Some((id, mut item, social_links, created_at)) => {
                item.social_links = serde_json::from_str(&social_links)?;
                Ok(Some(Stored {
                    id,
                    created_at: to_datetime(created_at),
                    item,
                }))
            }
            None => Ok(None),
        }
    }

    /// Insert footer content and make it the only active one
    pub fn create_footer(&mut self, footer: &FooterContent) -> Result<i64> {
        let social_links = serde_json::to_string(&footer.social_links)?;
        let tx = self.conn.transaction()?;
        tx.execute("UPDATE footer_contents SET is_active = 0 WHERE is_active = 1", [])?;
        tx.execute(
            "INSERT INTO footer_contents
                (company_name, tagline, address, phone, email, copyright_text, social_links,
                 is_active, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 1, ?8)",
            params![
                footer.company_name,
                footer.tagline,
                footer.address,
                footer.phone,
                footer.email,
                footer.copyright,
                social_links,
                Utc::now().timestamp()
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
    }

    pub fn site_config(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT config_value FROM site_configurations
                 WHERE config_key = ?1 AND is_active = 1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn set_site_config(&self, key: &str, value: &str, description: Option<&str>) -> Result<()> {
        let now = Utc::now().timestamp();
        self.conn.execute(
            r#"
            INSERT INTO site_configurations
                (config_key, config_value, description, is_active, created_at, updated_at)
            VALUES (?1, ?2, ?3, 1, ?4, ?4)
            ON CONFLICT(config_key) DO UPDATE SET
                config_value = excluded.config_value,
                description = COALESCE(excluded.description, description),
                is_active = 1,
                updated_at = excluded.updated_at
            "#,
            params![key, value, description, now],
        )?;
        Ok(())
    }

    pub fn insert_submission(
        &self,
        submission: &NewSubmission,
        created_at: DateTime<Utc>,
    ) -> Result<ContactSubmission> {
        self.conn.execute(
            "INSERT INTO contact_submissions
                (name, email, phone, message, ip_address, user_agent, status, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, 'new', ?7)",
            params![
                submission.name,
                submission.email,
                submission.phone,
                submission.message,
                submission.ip_address,
                submission.user_agent,
                created_at.timestamp()
            ],
        )?;
        Ok(ContactSubmission {
            id: self.conn.last_insert_rowid(),
            name: submission.name.clone(),
            email: submission.email.clone(),
            phone: submission.phone.clone(),
            message: submission.message.clone(),
            ip_address: submission.ip_address.clone(),
            user_agent: submission.user_agent.clone(),
            status: "new".to_string(),
            created_at: to_datetime(created_at.timestamp()),
        })
    }

    /// Number of submissions from `ip_address` at or after `since`
    pub fn recent_submissions(&self, ip_address: &str, since: DateTime<Utc>) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM contact_submissions WHERE ip_address = ?1 AND created_at >= ?2",
            params![ip_address, since.timestamp()],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    pub fn insert_page_view(&self, view: &NewPageView, created_at: DateTime<Utc>) -> Result<PageView> {
        self.conn.execute(
            "INSERT INTO page_views (page_path, ip_address, user_agent, referrer, session_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                view.page_path,
                view.ip_address,
                view.user_agent,
                view.referrer,
                view.session_id,
                created_at.timestamp()
            ],
        )?;
        Ok(PageView {
            id: self.conn.last_insert_rowid(),
            page_path: view.page_path.clone(),
            ip_address: view.ip_address.clone(),
            user_agent: view.user_agent.clone(),
            referrer: view.referrer.clone(),
            session_id: view.session_id.clone(),
            created_at: to_datetime(created_at.timestamp()),
        })
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }

    #[cfg(test)]
    pub(crate) fn page_view_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM page_views", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    #[cfg(test)]
    pub(crate) fn last_page_view(&self) -> Result<Option<PageView>> {
        let view = self
            .conn
            .query_row(
                "SELECT id, page_path, ip_address, user_agent, referrer, session_id, created_at
                 FROM page_views ORDER BY id DESC LIMIT 1",
                [],
                |row| {
                    Ok(PageView {
                        id: row.get(0)?,
                        page_path: row.get(1)?,
                        ip_address: row.get(2)?,
                        user_agent: row.get(3)?,
                        referrer: row.get(4)?,
                        session_id: row.get(5)?,
                        created_at: to_datetime(row.get(6)?),
                    })
                },
            )
            .optional()?;
        Ok(view)
    }
}
