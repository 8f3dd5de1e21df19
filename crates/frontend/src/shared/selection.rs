//! Cascading selection state for the country → port → good form.
//!
//! All transitions go through one reducer-style `apply` so the parent-to-
//! child reset rules live in a single place instead of scattered effect
//! handlers, and can be unit-tested without a DOM.

use contracts::domain::{Country, Good, Port};

use super::format::{clamp_discount, parse_price};

/// Current form state: the three-level selection plus the two editable
/// overrides seeded from the selected good. The overrides never write back
/// to the good or the remote service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub country: Option<Country>,
    pub port: Option<Port>,
    pub good: Option<Good>,
    /// Editable discount percentage, clamped to `[0, 100]`.
    pub discount: f64,
    /// Editable price in whole rupiah.
    pub price: i64,
}

/// State transitions. Picking `None` models clearing that level.
#[derive(Debug, Clone)]
pub enum SelectionAction {
    PickCountry(Option<Country>),
    PickPort(Option<Port>),
    PickGood(Option<Good>),
    EditDiscount(String),
    EditPrice(String),
}

impl Selection {
    /// Apply one transition. Invariant: changing an ancestor always clears
    /// every descendant selection and resets the editable fields.
    pub fn apply(&mut self, action: SelectionAction) {
        match action {
            SelectionAction::PickCountry(country) => {
                self.country = country;
                self.port = None;
                self.set_good(None);
            }
            SelectionAction::PickPort(port) => {
                self.port = port;
                self.set_good(None);
            }
            SelectionAction::PickGood(good) => {
                self.set_good(good);
            }
            SelectionAction::EditDiscount(input) => {
                self.discount = clamp_discount(&input);
            }
            SelectionAction::EditPrice(input) => {
                self.price = parse_price(&input);
            }
        }
    }

    fn set_good(&mut self, good: Option<Good>) {
        match &good {
            Some(g) => {
                self.discount = g.diskon;
                self.price = g.harga;
            }
            None => {
                self.discount = 0.0;
                self.price = 0;
            }
        }
        self.good = good;
    }

    /// Derived total: `price × (discount ÷ 100)`. Recomputed on demand,
    /// never stored.
    pub fn total(&self) -> f64 {
        self.price as f64 * (self.discount / 100.0)
    }

    pub fn complete(&self) -> bool {
        self.country.is_some() && self.port.is_some() && self.good.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(id: i64, nama: &str) -> Country {
        Country {
            id,
            nama: nama.to_string(),
        }
    }

    fn port(id: i64, nama: &str) -> Port {
        Port {
            id,
            nama: nama.to_string(),
        }
    }

    fn good(harga: i64, diskon: f64) -> Good {
        Good {
            id_barang: 101,
            nama_barang: "Kopi Gayo".to_string(),
            description: String::new(),
            harga,
            diskon,
            id_pelabuhan: Some(7),
        }
    }

    fn full_selection() -> Selection {
        let mut s = Selection::default();
        s.apply(SelectionAction::PickCountry(Some(country(1, "Indonesia"))));
        s.apply(SelectionAction::PickPort(Some(port(7, "Tanjung Priok"))));
        s.apply(SelectionAction::PickGood(Some(good(500000, 15.0))));
        s
    }

    #[test]
    fn test_good_pick_seeds_editable_fields_exactly() {
        let s = full_selection();
        assert_eq!(s.discount, 15.0);
        assert_eq!(s.price, 500000);
        assert!(s.complete());
    }

    #[test]
    fn test_country_change_clears_descendants() {
        let mut s = full_selection();
        s.apply(SelectionAction::PickCountry(Some(country(2, "Malaysia"))));
        assert!(s.port.is_none());
        assert!(s.good.is_none());
        assert_eq!(s.discount, 0.0);
        assert_eq!(s.price, 0);
    }

    #[test]
    fn test_port_change_clears_good() {
        let mut s = full_selection();
        s.apply(SelectionAction::PickPort(Some(port(8, "Belawan"))));
        assert_eq!(s.country.as_ref().map(|c| c.id), Some(1));
        assert!(s.good.is_none());
        assert_eq!(s.discount, 0.0);
        assert_eq!(s.price, 0);
    }

    #[test]
    fn test_clearing_good_resets_edits() {
        let mut s = full_selection();
        s.apply(SelectionAction::EditDiscount("40".to_string()));
        s.apply(SelectionAction::PickGood(None));
        assert_eq!(s.discount, 0.0);
        assert_eq!(s.price, 0);
        assert_eq!(s.total(), 0.0);
    }

    #[test]
    fn test_edits_go_through_input_policy() {
        let mut s = full_selection();
        s.apply(SelectionAction::EditDiscount("150".to_string()));
        assert_eq!(s.discount, 100.0);
        s.apply(SelectionAction::EditDiscount("abc".to_string()));
        assert_eq!(s.discount, 0.0);
        s.apply(SelectionAction::EditPrice("1.250.000".to_string()));
        assert_eq!(s.price, 1250000);
        s.apply(SelectionAction::EditPrice("xyz".to_string()));
        assert_eq!(s.price, 0);
    }

    #[test]
    fn test_total_arithmetic() {
        let mut s = full_selection();
        s.apply(SelectionAction::EditPrice("200000".to_string()));
        s.apply(SelectionAction::EditDiscount("10".to_string()));
        assert_eq!(s.total(), 20000.0);

        // the end-to-end scenario values
        let s = full_selection();
        assert_eq!(s.total(), 75000.0);
    }
}
