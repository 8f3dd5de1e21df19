use serde::{Deserialize, Serialize};

/// Row of the upstream `/negaras` endpoint, field names as on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryRecord {
    pub id_negara: i64,
    pub nama_negara: String,
}

/// Normalized country used by the selection form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub nama: String,
}

impl From<CountryRecord> for Country {
    fn from(record: CountryRecord) -> Self {
        Self {
            id: record.id_negara,
            nama: record.nama_negara,
        }
    }
}
