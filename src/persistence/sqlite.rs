use super::RosterStore;
use crate::error::TrackerResult;
use crate::record::PersonRecord;
use crate::roster::Roster;
use rusqlite::{Connection, params};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// SQLite-backed roster store: one JSON-blob row per person, rewritten as a
/// whole inside a transaction on every save.
pub struct SqliteRosterStore {
    connection: Mutex<Connection>,
}

impl SqliteRosterStore {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> TrackerResult<Self> {
        let connection = Connection::open(path)?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn initialize_schema(connection: &Connection) -> TrackerResult<()> {
        connection.execute_batch(
            "CREATE TABLE IF NOT EXISTS people (
                name TEXT PRIMARY KEY,
                record_json TEXT NOT NULL
            );",
        )?;
        Ok(())
    }
}

impl RosterStore for SqliteRosterStore {
    fn save_roster(&self, roster: &Roster) -> TrackerResult<()> {
        let mut conn = self.connection.lock().expect("sqlite mutex poisoned");
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM people", [])?;
        {
            let mut stmt = tx.prepare("INSERT INTO people (name, record_json) VALUES (?1, ?2)")?;
            for (name, record) in roster.iter() {
                let json = serde_json::to_string(record)?;
                stmt.execute(params![name, json])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn load_roster(&self) -> TrackerResult<Option<Roster>> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        let mut stmt = conn.prepare("SELECT name, record_json FROM people ORDER BY name ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut people = BTreeMap::new();
        for row in rows {
            let (name, json) = row?;
            let record: PersonRecord = serde_json::from_str(&json)?;
            people.insert(name, record);
        }

        if people.is_empty() {
            return Ok(None);
        }
        Ok(Some(Roster::from_people(people)))
    }
}
