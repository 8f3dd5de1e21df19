use serde::{Deserialize, Serialize};

/// Row of the upstream `/barangs` endpoint. Used in wire shape directly:
/// the form reads `harga`/`diskon` to seed its editable fields and never
/// writes back, so there is nothing to gain from a normalized copy.
///
/// Upstream rows are not guaranteed to carry every field; the numeric ones
/// and the description default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Good {
    pub id_barang: i64,
    pub nama_barang: String,
    #[serde(default)]
    pub description: String,
    /// Price in rupiah, integral on the wire.
    #[serde(default)]
    pub harga: i64,
    /// Discount percentage, may be fractional.
    #[serde(default)]
    pub diskon: f64,
    #[serde(default)]
    pub id_pelabuhan: Option<i64>,
}

impl Good {
    /// Display label used in the goods dropdown: `"{id} - {name}"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.id_barang, self.nama_barang)
    }
}
