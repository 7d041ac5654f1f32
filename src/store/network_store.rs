//! SQLite-backed source of tourist spots and their connections.

use crate::core::error::StoreError;
use crate::core::types::{Connection, Network, Spot};
use rusqlite::Connection as Db;

pub struct NetworkStore {
    conn: Db,
}

impl NetworkStore {
    pub fn open(db_path: &str) -> Result<Self, StoreError> {
        let conn = Db::open(db_path)?;
        let store = Self { conn };
        store.create_tables()?;
        Ok(store)
    }

    /// Load all spots, then every connection whose endpoints both resolve.
    pub fn load_network(&self) -> Result<Network, StoreError> {
        let spots = self.load_spots()?;
        let mut network = Network::new(spots, Vec::new());

        let mut stmt = self.conn.prepare(
            "SELECT ts1.name AS source_name, ts2.name AS target_name, c.distance
             FROM Connections c
             JOIN TouristSpots ts1 ON c.source_id = ts1.id
             JOIN TouristSpots ts2 ON c.target_id = ts2.id
             ORDER BY c.id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, f64>(2)?,
            ))
        })?;

        let mut connections = Vec::new();
        for row in rows {
            let (source, target, distance) = row?;
            if network.find_spot(&source).is_none() || network.find_spot(&target).is_none() {
                log::debug!("dropping connection {} -> {}: unknown spot", source, target);
                continue;
            }
            connections.push(Connection::new(&source, &target, distance));
        }
        network.connections = connections;

        log::info!(
            "loaded {} spot(s) and {} connection(s)",
            network.spots.len(),
            network.connections.len()
        );
        Ok(network)
    }

    fn load_spots(&self) -> Result<Vec<Spot>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, latitude, longitude FROM TouristSpots ORDER BY id")?;
        let spots = stmt
            .query_map([], |row| {
                let name: String = row.get(0)?;
                Ok(Spot::new(&name, row.get(1)?, row.get(2)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(spots)
    }

    // ===== Internal =====

    fn create_tables(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS TouristSpots (
                id          INTEGER PRIMARY KEY,
                name        TEXT NOT NULL UNIQUE,
                latitude    REAL NOT NULL,
                longitude   REAL NOT NULL
            );
            CREATE TABLE IF NOT EXISTS Connections (
                id          INTEGER PRIMARY KEY,
                source_id   INTEGER NOT NULL,
                target_id   INTEGER NOT NULL,
                distance    REAL NOT NULL
            );
            ",
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::params;
    use tempfile::TempDir;

    fn seeded() -> (TempDir, NetworkStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("travel.db");
        let store = NetworkStore::open(path.to_str().unwrap()).unwrap();
        let spots = [
            (1, "Dehradun", 30.3165, 78.0322),
            (2, "Mussoorie", 30.4598, 78.0644),
            (3, "Rishikesh", 30.0869, 78.2676),
        ];
        for (id, name, lat, lon) in spots {
            store
                .conn
                .execute(
                    "INSERT INTO TouristSpots (id, name, latitude, longitude) VALUES (?1, ?2, ?3, ?4)",
                    params![id, name, lat, lon],
                )
                .unwrap();
        }
        let conns = [(1, 1, 2, 35.0), (2, 1, 3, 44.0), (3, 2, 99, 5.0), (4, 3, 2, 77.0)];
        for (id, a, b, d) in conns {
            store
                .conn
                .execute(
                    "INSERT INTO Connections (id, source_id, target_id, distance) VALUES (?1, ?2, ?3, ?4)",
                    params![id, a, b, d],
                )
                .unwrap();
        }
        (dir, store)
    }

    #[test]
    fn test_load_network_in_insertion_order() {
        let (_dir, store) = seeded();
        let net = store.load_network().unwrap();
        assert_eq!(net.spots.len(), 3);
        assert_eq!(net.spots[0].name(), "Dehradun");
        assert_eq!(net.connections.len(), 3);
        assert_eq!(net.connections[0].source.as_str(), "Dehradun");
        assert_eq!(net.connections[0].target.as_str(), "Mussoorie");
        assert_eq!(net.connections[2].distance, 77.0);
    }

    #[test]
    fn test_empty_database_loads_empty_network() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.db");
        let store = NetworkStore::open(path.to_str().unwrap()).unwrap();
        let net = store.load_network().unwrap();
        assert!(net.is_empty());
        assert!(net.connections.is_empty());
    }

    #[test]
    fn test_open_fails_on_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(NetworkStore::open(dir.path().to_str().unwrap()).is_err());
    }
}
