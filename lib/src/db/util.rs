use crate::db::{Db, DbResult};
use crate::types::City;

/// Look up a single city, `None` when the identifier matches no row.
///
/// When the identifier unexpectedly matches more than one row, the
/// first in engine result order is returned.
pub fn lookup_city<D>(db: &D, id: i64) -> DbResult<Option<City>>
where
    D: Db + ?Sized,
{
    db.find_cities(id).map(|cs| cs.into_iter().next())
}

#[cfg(test)]
mod tests {
    use crate::db::{Db, DbResult};
    use crate::types::City;
    use super::lookup_city;

    /// In-memory stand-in for the engine gateway.
    struct FakeDb {
        rows: Vec<City>,
    }

    impl Db for FakeDb {
        fn load_dataset(&mut self, _source: &str) -> DbResult<u64> {
            Ok(self.rows.len() as u64)
        }

        fn dataset_loaded(&self) -> bool {
            true
        }

        fn dataset_rows(&self) -> u64 {
            self.rows.len() as u64
        }

        fn find_cities(&self, id: i64) -> DbResult<Vec<City>> {
            Ok(self.rows.iter()
                .filter(|c| c.id == id)
                .cloned()
                .collect())
        }
    }

    fn city(id: i64, name: &str) -> City {
        City { id, name: name.to_owned(), population: 100 * id }
    }

    #[test]
    fn lookup_returns_match() {
        let db = FakeDb { rows: vec![city(1, "Alpha"), city(2, "Beta")] };
        assert_eq!(lookup_city(&db, 2), Ok(Some(city(2, "Beta"))));
    }

    #[test]
    fn lookup_absent_id_returns_none() {
        let db = FakeDb { rows: vec![city(1, "Alpha")] };
        assert_eq!(lookup_city(&db, 9), Ok(None));
    }

    #[test]
    fn lookup_duplicate_ids_returns_first() {
        let db = FakeDb { rows: vec![city(3, "Gamma"), city(3, "Delta")] };
        assert_eq!(lookup_city(&db, 3), Ok(Some(city(3, "Gamma"))));
    }
}
