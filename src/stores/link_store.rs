//! Link store backed by SQLite.
//!
//! Implements `LinkStoreTrait` — dedup-by-URL saves, lookups, search, and
//! category clustering. Category labels live in the `link_categories` child
//! table, ordered by position, so the label list round-trips intact.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::database::Database;
use crate::types::errors::LinkError;
use crate::types::link::{Link, LinkInput, UNCATEGORIZED};

/// Trait defining link store operations.
pub trait LinkStoreTrait {
    /// Saves a link, merging into an existing record when the URL is already
    /// stored. Returns the record as persisted.
    fn save(&mut self, input: LinkInput) -> Result<Link, LinkError>;
    fn get_all(&self) -> Result<Vec<Link>, LinkError>;
    fn get_by_id(&self, id: &str) -> Result<Option<Link>, LinkError>;
    /// Deletes a link. Unknown ids are a no-op.
    fn delete(&mut self, id: &str) -> Result<(), LinkError>;
    /// Case-insensitive substring search over title, description, URL, and
    /// category labels. An empty query returns everything.
    fn search(&self, query: &str) -> Result<Vec<Link>, LinkError>;
    /// Groups links by category label; a link appears once per label it carries.
    fn cluster_by_category(&self) -> Result<HashMap<String, Vec<Link>>, LinkError>;
}

/// Link store over the shared database handle.
pub struct LinkStore {
    db: Arc<Database>,
}

impl LinkStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Reads the ordered category labels for a link.
    fn load_categories(conn: &Connection, link_id: &str) -> Result<Vec<String>, LinkError> {
        let mut stmt = conn
            .prepare(
                "SELECT category FROM link_categories WHERE link_id = ?1 ORDER BY position",
            )
            .map_err(|e| LinkError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map(params![link_id], |row| row.get::<_, String>(0))
            .map_err(|e| LinkError::DatabaseError(e.to_string()))?;

        let mut categories = Vec::new();
        for row in rows {
            categories.push(row.map_err(|e| LinkError::DatabaseError(e.to_string()))?);
        }
        Ok(categories)
    }

    /// Replaces a link's category rows with the given labels.
    fn store_categories(
        conn: &Connection,
        link_id: &str,
        categories: &[String],
    ) -> Result<(), LinkError> {
        conn.execute(
            "DELETE FROM link_categories WHERE link_id = ?1",
            params![link_id],
        )
        .map_err(|e| LinkError::DatabaseError(e.to_string()))?;

        for (position, category) in categories.iter().enumerate() {
            conn.execute(
                "INSERT INTO link_categories (link_id, position, category) VALUES (?1, ?2, ?3)",
                params![link_id, position as i64, category],
            )
            .map_err(|e| LinkError::DatabaseError(e.to_string()))?;
        }
        Ok(())
    }

    /// Reads a bare `links` row (categories filled in separately).
    fn row_to_link(row: &rusqlite::Row) -> rusqlite::Result<Link> {
        Ok(Link {
            id: row.get(0)?,
            url: row.get(1)?,
            title: row.get(2)?,
            description: row.get(3)?,
            image_url: row.get(4)?,
            categories: Vec::new(),
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }

    /// Runs a SELECT returning full links (with categories).
    fn query_links(
        &self,
        sql: &str,
        sql_params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<Link>, LinkError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| LinkError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map(sql_params, Self::row_to_link)
            .map_err(|e| LinkError::DatabaseError(e.to_string()))?;

        let mut links = Vec::new();
        for row in rows {
            let mut link = row.map_err(|e| LinkError::DatabaseError(e.to_string()))?;
            link.categories = Self::load_categories(conn, &link.id)?;
            links.push(link);
        }
        Ok(links)
    }

    /// Looks up a stored link by exact URL.
    fn find_by_url(&self, url: &str) -> Result<Option<Link>, LinkError> {
        let conn = self.db.connection();
        let link = conn
            .query_row(
                "SELECT id, url, title, description, image_url, created_at, updated_at \
                 FROM links WHERE url = ?1",
                params![url],
                Self::row_to_link,
            )
            .optional()
            .map_err(|e| LinkError::DatabaseError(e.to_string()))?;

        match link {
            Some(mut link) => {
                link.categories = Self::load_categories(conn, &link.id)?;
                Ok(Some(link))
            }
            None => Ok(None),
        }
    }
}

const LINK_COLUMNS: &str = "id, url, title, description, image_url, created_at, updated_at";

impl LinkStoreTrait for LinkStore {
    /// Merge policy on duplicate URLs: non-empty input fields win, empty ones
    /// keep the stored value. Clearing a field through save is therefore not
    /// possible; `updated_at` refreshes either way.
    fn save(&mut self, input: LinkInput) -> Result<Link, LinkError> {
        let conn = self.db.connection();
        let now = Self::now();

        if let Some(existing) = self.find_by_url(&input.url)? {
            let title = if input.title.is_empty() {
                existing.title
            } else {
                input.title
            };
            let description = match input.description {
                Some(d) if !d.is_empty() => d,
                _ => existing.description,
            };
            let image_url = match input.image_url {
                Some(u) if !u.is_empty() => Some(u),
                _ => existing.image_url,
            };
            let categories = match input.categories {
                Some(c) if !c.is_empty() => c,
                _ => existing.categories,
            };

            conn.execute(
                "UPDATE links SET title = ?1, description = ?2, image_url = ?3, updated_at = ?4 \
                 WHERE id = ?5",
                params![title, description, image_url, now, existing.id],
            )
            .map_err(|e| LinkError::DatabaseError(e.to_string()))?;
            Self::store_categories(conn, &existing.id, &categories)?;

            tracing::debug!(url = %input.url, id = %existing.id, "merged duplicate link");

            return Ok(Link {
                id: existing.id,
                url: existing.url,
                title,
                description,
                image_url,
                categories,
                created_at: existing.created_at,
                updated_at: now,
            });
        }

        let id = Uuid::new_v4().to_string();
        let description = input.description.unwrap_or_default();
        let image_url = input.image_url.filter(|u| !u.is_empty());
        let categories = match input.categories {
            Some(c) if !c.is_empty() => c,
            _ => vec![UNCATEGORIZED.to_string()],
        };

        conn.execute(
            "INSERT INTO links (id, url, title, description, image_url, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![id, input.url, input.title, description, image_url, now, now],
        )
        .map_err(|e| LinkError::DatabaseError(e.to_string()))?;
        Self::store_categories(conn, &id, &categories)?;

        tracing::debug!(url = %input.url, id = %id, "inserted link");

        Ok(Link {
            id,
            url: input.url,
            title: input.title,
            description,
            image_url,
            categories,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns all links in no particular order; callers sort for display.
    fn get_all(&self) -> Result<Vec<Link>, LinkError> {
        self.query_links(&format!("SELECT {} FROM links", LINK_COLUMNS), &[])
    }

    fn get_by_id(&self, id: &str) -> Result<Option<Link>, LinkError> {
        let conn = self.db.connection();
        let link = conn
            .query_row(
                &format!("SELECT {} FROM links WHERE id = ?1", LINK_COLUMNS),
                params![id],
                Self::row_to_link,
            )
            .optional()
            .map_err(|e| LinkError::DatabaseError(e.to_string()))?;

        match link {
            Some(mut link) => {
                link.categories = Self::load_categories(conn, &link.id)?;
                Ok(Some(link))
            }
            None => Ok(None),
        }
    }

    fn delete(&mut self, id: &str) -> Result<(), LinkError> {
        self.db
            .connection()
            .execute("DELETE FROM links WHERE id = ?1", params![id])
            .map_err(|e| LinkError::DatabaseError(e.to_string()))?;
        // Category rows go with the link via ON DELETE CASCADE
        Ok(())
    }

    fn search(&self, query: &str) -> Result<Vec<Link>, LinkError> {
        if query.is_empty() {
            return self.get_all();
        }

        let pattern = format!("%{}%", query);
        self.query_links(
            &format!(
                "SELECT {} FROM links \
                 WHERE title LIKE ?1 OR description LIKE ?1 OR url LIKE ?1 \
                 OR EXISTS (SELECT 1 FROM link_categories lc \
                            WHERE lc.link_id = links.id AND lc.category LIKE ?1)",
                LINK_COLUMNS
            ),
            &[&pattern],
        )
    }

    fn cluster_by_category(&self) -> Result<HashMap<String, Vec<Link>>, LinkError> {
        let mut clusters: HashMap<String, Vec<Link>> = HashMap::new();

        for link in self.get_all()? {
            if link.categories.is_empty() {
                clusters
                    .entry(UNCATEGORIZED.to_string())
                    .or_default()
                    .push(link);
                continue;
            }
            for category in &link.categories {
                clusters
                    .entry(category.clone())
                    .or_default()
                    .push(link.clone());
            }
        }

        Ok(clusters)
    }
}
