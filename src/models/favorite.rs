//! Favorite cocktail model
//!
//! A favorite is just a cocktail id with the time it was starred.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;

/// A starred cocktail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub cocktail_id: String,
    pub created_at: String,
}

impl Favorite {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            cocktail_id: row.get("cocktail_id")?,
            created_at: row.get("created_at")?,
        })
    }

    /// Star a cocktail. Starring twice keeps the original timestamp.
    /// Returns true if the cocktail was not already a favorite.
    pub fn add(conn: &Connection, cocktail_id: &str) -> DbResult<bool> {
        let rows = conn.execute(
            "INSERT OR IGNORE INTO favorites (cocktail_id) VALUES (?1)",
            params![cocktail_id],
        )?;
        Ok(rows > 0)
    }

    /// Unstar a cocktail. Returns true if it was a favorite.
    pub fn remove(conn: &Connection, cocktail_id: &str) -> DbResult<bool> {
        let rows = conn.execute(
            "DELETE FROM favorites WHERE cocktail_id = ?1",
            params![cocktail_id],
        )?;
        Ok(rows > 0)
    }

    pub fn contains(conn: &Connection, cocktail_id: &str) -> DbResult<bool> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM favorites WHERE cocktail_id = ?1",
            [cocktail_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// All favorites, oldest first
    pub fn list(conn: &Connection) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM favorites ORDER BY rowid")?;
        let favorites = stmt
            .query_map([], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(favorites)
    }

    /// Favorite ids, oldest first
    pub fn list_ids(conn: &Connection) -> DbResult<Vec<String>> {
        Ok(Self::list(conn)?.into_iter().map(|f| f.cocktail_id).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn test_add_is_idempotent() {
        let conn = conn();
        assert!(Favorite::add(&conn, "mojito").unwrap());
        assert!(!Favorite::add(&conn, "mojito").unwrap());
        assert_eq!(Favorite::list_ids(&conn).unwrap(), vec!["mojito".to_string()]);
    }

    #[test]
    fn test_remove_and_contains() {
        let conn = conn();
        Favorite::add(&conn, "negroni").unwrap();
        assert!(Favorite::contains(&conn, "negroni").unwrap());
        assert!(Favorite::remove(&conn, "negroni").unwrap());
        assert!(!Favorite::contains(&conn, "negroni").unwrap());
        assert!(!Favorite::remove(&conn, "negroni").unwrap());
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let conn = conn();
        for id in ["paloma", "daiquiri", "manhattan"] {
            Favorite::add(&conn, id).unwrap();
        }
        assert_eq!(
            Favorite::list_ids(&conn).unwrap(),
            vec!["paloma".to_string(), "daiquiri".to_string(), "manhattan".to_string()]
        );
    }
}
