use serde::{Deserialize, Serialize};

/// Row of the upstream `/pelabuhans` endpoint, field names as on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortRecord {
    pub id_pelabuhan: i64,
    pub nama_pelabuhan: String,
}

/// Normalized port used by the selection form. Belongs to exactly one
/// country; the association only exists as the fetch filter, the record
/// itself does not carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub id: i64,
    pub nama: String,
}

impl From<PortRecord> for Port {
    fn from(record: PortRecord) -> Self {
        Self {
            id: record.id_pelabuhan,
            nama: record.nama_pelabuhan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_upstream_record() {
        let json = r#"[{"id_pelabuhan": 7, "nama_pelabuhan": "Tanjung Priok"}]"#;
        let records: Vec<PortRecord> = serde_json::from_str(json).unwrap();
        let ports: Vec<Port> = records.into_iter().map(Port::from).collect();
        assert_eq!(ports[0].id, 7);
        assert_eq!(ports[0].nama, "Tanjung Priok");
    }
}
