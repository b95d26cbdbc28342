use chrono::{NaiveDate, NaiveDateTime};

use erpseed_core::schedule::{format_date, format_timestamp};
use erpseed_core::{
    DomainResult, Entity, GenContext, GeneratorConfig, LoadSchedule, MaterialNumber, Measure,
    SeedRecord, VersionPolicy,
};
use erpseed_reference::{MATERIAL_GROUPS, MaterialType, UNITS};

/// Maintenance status of every generated material (`VPSTA`).
pub const MAINTENANCE_STATUS: &str = "KDEV";

/// Days between creation and the first load.
const CREATION_LAG_DAYS: (u64, u64) = (365, 1095);
/// Days between the last change and the load of a first version.
const CHANGE_LAG_DAYS: (u64, u64) = (1, 90);
/// Days between the last change and the load of a later version.
const UPDATE_CHANGE_LAG_DAYS: (u64, u64) = (1, 30);

/// One version of a material master record.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub number: MaterialNumber,
    pub group: String,
    pub material_type: MaterialType,
    pub unit: String,
    pub gross_weight: Measure,
    pub net_weight: Measure,
    pub volume: Measure,
    pub created_on: NaiveDate,
    pub changed_on: NaiveDate,
    pub status: String,
    pub record_source: String,
    pub load_date: NaiveDateTime,
}

impl Entity for Material {
    type Id = MaterialNumber;

    fn id(&self) -> &Self::Id {
        &self.number
    }

    fn load_date(&self) -> NaiveDateTime {
        self.load_date
    }
}

impl SeedRecord for Material {
    const TABLE: &'static str = "mara";
    const COLUMNS: &'static [&'static str] = &[
        "MATNR",
        "MATKL",
        "MTART",
        "MEINS",
        "BRGEW",
        "NTGEW",
        "VOLUM",
        "ERSDA",
        "LAEDA",
        "VPSTA",
        "RECORD_SOURCE",
        "LOAD_DATE",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.number.to_string(),
            self.group.clone(),
            self.material_type.to_string(),
            self.unit.clone(),
            self.gross_weight.to_string(),
            self.net_weight.to_string(),
            self.volume.to_string(),
            format_date(self.created_on),
            format_date(self.changed_on),
            self.status.clone(),
            self.record_source.clone(),
            format_timestamp(self.load_date),
        ]
    }
}

/// Distribution of weight and volume for a material type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalProfile {
    /// Gross weight range.
    pub gross_weight: (f64, f64),
    /// Net weight as a fraction of gross weight.
    pub net_ratio: f64,
    pub volume: (f64, f64),
}

impl PhysicalProfile {
    /// Profile for `material_type`; `None` for services, which weigh nothing.
    pub fn for_type(material_type: MaterialType) -> Option<Self> {
        let profile = match material_type {
            MaterialType::Roh => Self {
                gross_weight: (500.0, 5000.0),
                net_ratio: 0.95,
                volume: (5.0, 30.0),
            },
            MaterialType::Fert => Self {
                gross_weight: (50.0, 500.0),
                net_ratio: 0.93,
                volume: (0.5, 5.0),
            },
            MaterialType::Dien => return None,
            MaterialType::Hawa | MaterialType::Verp => Self {
                gross_weight: (1.0, 100.0),
                net_ratio: 0.92,
                volume: (0.01, 0.5),
            },
        };
        Some(profile)
    }

    /// Draw gross weight, net weight and volume.
    fn sample(&self, ctx: &mut GenContext) -> Dimensions {
        let gross = ctx.uniform(self.gross_weight.0, self.gross_weight.1);
        let volume = ctx.uniform(self.volume.0, self.volume.1);
        Dimensions {
            gross_weight: Measure::new(gross),
            net_weight: Measure::new(gross * self.net_ratio),
            volume: Measure::new(volume),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Dimensions {
    gross_weight: Measure,
    net_weight: Measure,
    volume: Measure,
}

impl Dimensions {
    const ZERO: Dimensions = Dimensions {
        gross_weight: Measure::ZERO,
        net_weight: Measure::ZERO,
        volume: Measure::ZERO,
    };

    fn sample(ctx: &mut GenContext, material_type: MaterialType) -> Self {
        PhysicalProfile::for_type(material_type).map_or(Self::ZERO, |p| p.sample(ctx))
    }

    /// Measurement correction: each attribute scaled independently by a factor
    /// in `[1 - jitter, 1 + jitter)`.
    fn corrected(&self, ctx: &mut GenContext, jitter: f64) -> Self {
        let mut factor = || ctx.uniform(1.0 - jitter, 1.0 + jitter);
        Self {
            gross_weight: self.gross_weight.scaled(factor()),
            net_weight: self.net_weight.scaled(factor()),
            volume: self.volume.scaled(factor()),
        }
    }
}

/// Generate `config.materials` materials, each followed directly by its
/// corrected version when it gets one.
pub fn generate_materials(
    ctx: &mut GenContext,
    config: &GeneratorConfig,
    schedule: &LoadSchedule,
) -> DomainResult<Vec<Material>> {
    let policy = VersionPolicy {
        initial_load_count: config.initial_load_count,
        update_probability: config.material_update_probability,
    };
    let mut materials = Vec::new();
    let mut updated = 0usize;

    for seq in 1..=config.materials {
        let number = MaterialNumber::from_sequence(seq)?;
        let material_type = ctx
            .pick(&MaterialType::ALL)
            .copied()
            .unwrap_or(MaterialType::Hawa);
        let group = ctx.pick(&MATERIAL_GROUPS).copied().unwrap_or_default();
        let unit = ctx.pick(&UNITS).copied().unwrap_or_default();
        let dimensions = Dimensions::sample(ctx, material_type);

        let (first_index, first_load) = policy.first_load(ctx, schedule);
        let created_on = ctx.date_before(first_load, CREATION_LAG_DAYS.0, CREATION_LAG_DAYS.1);
        let changed_on = ctx.date_before(first_load, CHANGE_LAG_DAYS.0, CHANGE_LAG_DAYS.1);

        let build = |dims: Dimensions, changed_on: NaiveDate, load_date: NaiveDateTime| Material {
            number,
            group: group.to_string(),
            material_type,
            unit: unit.to_string(),
            gross_weight: dims.gross_weight,
            net_weight: dims.net_weight,
            volume: dims.volume,
            created_on,
            changed_on,
            status: MAINTENANCE_STATUS.to_string(),
            record_source: config.record_source.clone(),
            load_date,
        };

        materials.push(build(dimensions, changed_on, first_load));

        if let Some(update_load) = policy.update_load(ctx, schedule, first_index) {
            let corrected = dimensions.corrected(ctx, config.weight_jitter);
            let changed_on = ctx.date_before(
                update_load,
                UPDATE_CHANGE_LAG_DAYS.0,
                UPDATE_CHANGE_LAG_DAYS.1,
            );
            materials.push(build(corrected, changed_on, update_load));
            updated += 1;
        }
    }

    tracing::debug!(
        materials = config.materials,
        updated,
        rows = materials.len(),
        "generated materials"
    );
    Ok(materials)
}
