use serde::{Deserialize, Serialize};

/// One row of the imported city dataset.
///
/// The table schema is inferred by the embedded engine from the JSON
/// source; these are the columns citylook relies on being present.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub population: i64,
}
