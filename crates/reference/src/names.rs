//! Company-name fragments.

pub const COMPANY_PREFIXES: [&str; 30] = [
    "Global",
    "International",
    "Worldwide",
    "European",
    "American",
    "Asian",
    "Pacific",
    "Atlantic",
    "Continental",
    "United",
    "Premier",
    "Elite",
    "Premium",
    "Advanced",
    "Modern",
    "Digital",
    "Tech",
    "Systems",
    "Solutions",
    "Industries",
    "Group",
    "Holdings",
    "Corporation",
    "Enterprises",
    "Trading",
    "Distribution",
    "Supply",
    "Commerce",
    "Business",
    "Partners",
];

/// Optional middle word of a three-part name.
pub const COMPANY_MIDDLES: [&str; 4] = ["Trading", "Supply", "Distribution", "Commerce"];

/// Legal-form suffixes. `Ltd` appears twice, which doubles its weight.
pub const COMPANY_SUFFIXES: [&str; 19] = [
    "GmbH", "Ltd", "Inc", "LLC", "SA", "SRL", "SARL", "AG", "Pty", "Ltd", "Co", "Corp", "LLP",
    "PLC", "BV", "NV", "KG", "Sdn Bhd", "Pvt Ltd",
];
