use chrono::NaiveDateTime;

use erpseed_core::schedule::format_timestamp;
use erpseed_core::{
    CustomerNumber, DomainResult, Entity, GenContext, GeneratorConfig, LoadSchedule, SeedRecord,
    VersionPolicy,
};
use erpseed_reference::{
    COMPANY_MIDDLES, COMPANY_PREFIXES, COMPANY_SUFFIXES, COUNTRIES, Country, FALLBACK_CITY,
    dialing_code_for,
};

/// Account group of every generated customer (`KTOK`).
pub const ACCOUNT_GROUP: &str = "KUND";

/// Probability that a company name gets a middle word.
const MIDDLE_NAME_PROBABILITY: f64 = 0.3;

/// One version of a customer master record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub number: CustomerNumber,
    pub name: String,
    pub city: String,
    pub country: String,
    pub region: String,
    pub postal_code: String,
    pub street: String,
    pub phone: String,
    pub account_group: String,
    pub record_source: String,
    pub load_date: NaiveDateTime,
}

impl Entity for Customer {
    type Id = CustomerNumber;

    fn id(&self) -> &Self::Id {
        &self.number
    }

    fn load_date(&self) -> NaiveDateTime {
        self.load_date
    }
}

impl SeedRecord for Customer {
    const TABLE: &'static str = "kna1";
    const COLUMNS: &'static [&'static str] = &[
        "KUNNR",
        "NAME1",
        "ORT01",
        "LAND1",
        "REGIO",
        "PSTLZ",
        "STRAS",
        "TELF1",
        "KTOK",
        "RECORD_SOURCE",
        "LOAD_DATE",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.number.to_string(),
            self.name.clone(),
            self.city.clone(),
            self.country.clone(),
            self.region.clone(),
            self.postal_code.clone(),
            self.street.clone(),
            self.phone.clone(),
            self.account_group.clone(),
            self.record_source.clone(),
            format_timestamp(self.load_date),
        ]
    }
}

/// Fields that change between versions of one customer.
struct Contact {
    name: String,
    postal_code: String,
    street: String,
    phone: String,
}

fn company_name(ctx: &mut GenContext) -> String {
    let prefix = ctx.pick(&COMPANY_PREFIXES).copied().unwrap_or_default();
    let suffix = ctx.pick(&COMPANY_SUFFIXES).copied().unwrap_or_default();
    if ctx.chance(MIDDLE_NAME_PROBABILITY) {
        let middle = ctx.pick(&COMPANY_MIDDLES).copied().unwrap_or_default();
        return format!("{prefix} {middle} {suffix}");
    }
    format!("{prefix} {suffix}")
}

fn phone_number(ctx: &mut GenContext, country: &Country) -> String {
    format!("{}{}", dialing_code_for(country.code), ctx.digits(9))
}

fn contact(ctx: &mut GenContext, country: &Country) -> Contact {
    Contact {
        name: company_name(ctx),
        postal_code: ctx.int_between(10_000, 99_999).to_string(),
        street: format!("Street {}", ctx.int_between(1, 999)),
        phone: phone_number(ctx, country),
    }
}

/// Generate `config.customers` customers, each followed directly by its
/// second version when it gets one.
pub fn generate_customers(
    ctx: &mut GenContext,
    config: &GeneratorConfig,
    schedule: &LoadSchedule,
) -> DomainResult<Vec<Customer>> {
    let policy = VersionPolicy {
        initial_load_count: config.initial_load_count,
        update_probability: config.customer_update_probability,
    };
    let mut customers = Vec::with_capacity(config.customers as usize);
    let mut updated = 0usize;

    for seq in 1..=config.customers {
        let number = CustomerNumber::from_sequence(seq)?;
        let country = ctx.pick(&COUNTRIES).copied().unwrap_or(COUNTRIES[0]);
        let region = ctx.pick(country.regions).copied().unwrap_or_default();
        let city = ctx.pick(country.cities).copied().unwrap_or(FALLBACK_CITY);
        let (first_index, first_load) = policy.first_load(ctx, schedule);

        let build = |contact: Contact, load_date: NaiveDateTime| Customer {
            number,
            name: contact.name,
            city: city.to_string(),
            country: country.code.to_string(),
            region: region.to_string(),
            postal_code: contact.postal_code,
            street: contact.street,
            phone: contact.phone,
            account_group: ACCOUNT_GROUP.to_string(),
            record_source: config.record_source.clone(),
            load_date,
        };

        customers.push(build(contact(ctx, &country), first_load));

        if let Some(update_load) = policy.update_load(ctx, schedule, first_index) {
            customers.push(build(contact(ctx, &country), update_load));
            updated += 1;
        }
    }

    tracing::debug!(
        customers = config.customers,
        updated,
        rows = customers.len(),
        "generated customers"
    );
    Ok(customers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use erpseed_core::check_history;
    use erpseed_reference::country;
    use proptest::prelude::*;

    fn test_config(customers: u64) -> GeneratorConfig {
        GeneratorConfig {
            customers,
            ..GeneratorConfig::default()
        }
    }

    fn generate(seed: u64, config: &GeneratorConfig) -> Vec<Customer> {
        let schedule = config.validate().unwrap();
        let mut ctx = GenContext::from_seed(seed);
        generate_customers(&mut ctx, config, &schedule).unwrap()
    }

    #[test]
    fn one_first_version_per_customer() {
        let config = test_config(300);
        let customers = generate(42, &config);

        let mut numbers: Vec<_> = customers.iter().map(|c| c.number).collect();
        numbers.dedup();
        assert_eq!(numbers.len(), 300);
        assert_eq!(numbers[0].to_string(), "0001000001");
        assert_eq!(numbers[299].to_string(), "0001000300");
        assert!(customers.len() >= 300);
        assert!(customers.len() <= 600);
    }

    #[test]
    fn fields_are_consistent_with_country() {
        let customers = generate(42, &test_config(200));
        for c in &customers {
            let country = country(&c.country).expect("generated country must exist");
            assert!(country.regions.contains(&c.region.as_str()));
            assert!(country.cities.contains(&c.city.as_str()));
            assert!(c.phone.starts_with(country.dialing_code));
            assert_eq!(c.phone.len(), country.dialing_code.len() + 9);
            assert_eq!(c.postal_code.len(), 5);
            assert!(c.street.starts_with("Street "));
            assert_eq!(c.account_group, ACCOUNT_GROUP);
            assert_eq!(c.record_source, "SAP");
        }
    }

    #[test]
    fn second_version_keeps_location_and_moves_forward() {
        let config = GeneratorConfig {
            customer_update_probability: 1.0,
            ..test_config(100)
        };
        let schedule = config.validate().unwrap();
        let customers = generate(3, &config);
        assert_eq!(check_history(&customers, &schedule).unwrap(), 100);

        let pairs = customers
            .windows(2)
            .filter(|w| w[0].number == w[1].number);
        let mut seen = 0;
        for pair in pairs {
            assert_eq!(pair[0].city, pair[1].city);
            assert_eq!(pair[0].country, pair[1].country);
            assert_eq!(pair[0].region, pair[1].region);
            assert!(pair[1].load_date > pair[0].load_date);
            seen += 1;
        }
        // Every customer first loaded in one of the first four loads can be
        // updated, so with probability 1 every one of them is.
        assert_eq!(seen, 100);
    }

    #[test]
    fn zero_probability_yields_single_versions() {
        let config = GeneratorConfig {
            customer_update_probability: 0.0,
            ..test_config(50)
        };
        assert_eq!(generate(9, &config).len(), 50);
    }

    #[test]
    fn same_seed_same_customers() {
        let config = test_config(50);
        assert_eq!(generate(11, &config), generate(11, &config));
    }

    #[test]
    fn row_matches_column_order() {
        let customers = generate(42, &test_config(1));
        let row = customers[0].to_row();
        assert_eq!(row.len(), Customer::COLUMNS.len());
        assert_eq!(row[0], "0001000001");
        assert_eq!(row[8], "KUND");
        assert_eq!(row[10], format_timestamp(customers[0].load_date));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 64,
            ..ProptestConfig::default()
        })]

        /// Property: whatever the seed, version history is well formed.
        #[test]
        fn version_history_is_well_formed(seed in any::<u64>(), count in 1u64..60) {
            let config = test_config(count);
            let schedule = config.validate().unwrap();
            let customers = generate(seed, &config);
            prop_assert_eq!(check_history(&customers, &schedule).unwrap(), count as usize);
        }
    }
}
