//! Material and sales-document taxonomies.

/// Material type (`MTART`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialType {
    /// Trading goods.
    Hawa,
    /// Finished products.
    Fert,
    /// Raw materials.
    Roh,
    /// Services; carry no physical attributes.
    Dien,
    /// Packaging.
    Verp,
}

impl MaterialType {
    pub const ALL: [MaterialType; 5] = [
        MaterialType::Hawa,
        MaterialType::Fert,
        MaterialType::Roh,
        MaterialType::Dien,
        MaterialType::Verp,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            MaterialType::Hawa => "HAWA",
            MaterialType::Fert => "FERT",
            MaterialType::Roh => "ROH",
            MaterialType::Dien => "DIEN",
            MaterialType::Verp => "VERP",
        }
    }

    pub fn is_service(&self) -> bool {
        matches!(self, MaterialType::Dien)
    }
}

impl core::fmt::Display for MaterialType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

/// Material groups (`MATKL`).
pub const MATERIAL_GROUPS: [&str; 5] = ["001", "002", "003", "004", "005"];

/// Base units of measure (`MEINS`).
pub const UNITS: [&str; 6] = ["EA", "ST", "KG", "BOX", "PAL", "ROL"];

/// Sales document types (`AUART`).
pub const ORDER_TYPES: [&str; 4] = ["TA", "OR", "ZRE", "ZCR"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_display() {
        let codes: Vec<String> = MaterialType::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(codes, vec!["HAWA", "FERT", "ROH", "DIEN", "VERP"]);
    }

    #[test]
    fn only_dien_is_a_service() {
        let services: Vec<_> = MaterialType::ALL.iter().filter(|t| t.is_service()).collect();
        assert_eq!(services, vec![&MaterialType::Dien]);
    }
}
