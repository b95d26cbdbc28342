//! Countries with their regions, cities, currency and phone dialing code.

/// One country of the customer base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// ISO 3166 alpha-2 code (`LAND1`).
    pub code: &'static str,
    /// ISO 4217 currency used on orders of customers from this country.
    pub currency: &'static str,
    pub dialing_code: &'static str,
    /// Region codes (`REGIO`).
    pub regions: &'static [&'static str],
    pub cities: &'static [&'static str],
}

/// City used when a country has no city list.
pub const FALLBACK_CITY: &str = "City";

const FALLBACK_CURRENCY: &str = "EUR";
const FALLBACK_DIALING_CODE: &str = "+1";

pub const COUNTRIES: [Country; 10] = [
    Country {
        code: "DE",
        currency: "EUR",
        dialing_code: "+49",
        regions: &["16", "BY", "HH", "HE", "BW", "NW"],
        cities: &["Berlin", "Munich", "Hamburg", "Frankfurt", "Stuttgart", "Cologne", "Düsseldorf"],
    },
    Country {
        code: "GB",
        currency: "GBP",
        dialing_code: "+44",
        regions: &["ENG", "SCT", "WLS"],
        cities: &["London", "Manchester", "Birmingham", "Glasgow", "Edinburgh", "Liverpool"],
    },
    Country {
        code: "US",
        currency: "USD",
        dialing_code: "+1",
        regions: &["NY", "CA", "TX", "FL", "IL"],
        cities: &["New York", "Los Angeles", "Chicago", "Houston", "Miami", "Seattle", "Boston"],
    },
    Country {
        code: "FR",
        currency: "EUR",
        dialing_code: "+33",
        regions: &["75", "13", "69", "31", "06"],
        cities: &["Paris", "Lyon", "Marseille", "Toulouse", "Nice", "Bordeaux"],
    },
    Country {
        code: "IT",
        currency: "EUR",
        dialing_code: "+39",
        regions: &["MI", "RM", "NA", "TO"],
        cities: &["Milan", "Rome", "Naples", "Turin", "Florence", "Venice"],
    },
    Country {
        code: "ES",
        currency: "EUR",
        dialing_code: "+34",
        regions: &["MD", "B", "CT"],
        cities: &["Madrid", "Barcelona", "Valencia", "Seville", "Bilbao"],
    },
    Country {
        code: "NL",
        currency: "EUR",
        dialing_code: "+31",
        regions: &["NH", "ZH", "UT"],
        cities: &["Amsterdam", "Rotterdam", "The Hague", "Utrecht", "Eindhoven"],
    },
    Country {
        code: "BE",
        currency: "EUR",
        dialing_code: "+32",
        regions: &["BRU", "VAN", "OVL"],
        cities: &["Brussels", "Antwerp", "Ghent", "Bruges", "Liège"],
    },
    Country {
        code: "CH",
        currency: "CHF",
        dialing_code: "+41",
        regions: &["ZH", "GE", "BS"],
        cities: &["Zurich", "Geneva", "Basel", "Bern", "Lausanne"],
    },
    Country {
        code: "AT",
        currency: "EUR",
        dialing_code: "+43",
        regions: &["9", "1", "7"],
        cities: &["Vienna", "Graz", "Linz", "Salzburg", "Innsbruck"],
    },
];

pub fn country(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code == code)
}

pub fn currency_for(code: &str) -> &'static str {
    country(code).map_or(FALLBACK_CURRENCY, |c| c.currency)
}

pub fn dialing_code_for(code: &str) -> &'static str {
    country(code).map_or(FALLBACK_DIALING_CODE, |c| c.dialing_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_country_has_regions_and_cities() {
        for c in &COUNTRIES {
            assert!(!c.regions.is_empty(), "{} has no regions", c.code);
            assert!(!c.cities.is_empty(), "{} has no cities", c.code);
        }
    }

    #[test]
    fn country_codes_are_unique() {
        let mut codes: Vec<&str> = COUNTRIES.iter().map(|c| c.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), COUNTRIES.len());
    }

    #[test]
    fn lookups_fall_back_for_unknown_country() {
        assert_eq!(currency_for("GB"), "GBP");
        assert_eq!(currency_for("CH"), "CHF");
        assert_eq!(currency_for("XX"), "EUR");
        assert_eq!(dialing_code_for("DE"), "+49");
        assert_eq!(dialing_code_for("XX"), "+1");
    }
}
