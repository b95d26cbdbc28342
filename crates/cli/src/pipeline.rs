//! The generation run: build, check, write.

use std::fmt;
use std::path::PathBuf;

use anyhow::Context as _;
use uuid::Uuid;

use erpseed_core::{DomainResult, GenContext, GeneratorConfig, check_history};
use erpseed_infra::{
    CsvDirectorySink, InMemorySink, OutputConfig, RunManifest, TableSink, TableSummary, WriteError,
};
use erpseed_parties::{Customer, generate_customers};
use erpseed_products::{Material, generate_materials};
use erpseed_sales::{IntegrityReport, Transactions, check_integrity, generate_orders};

use crate::settings::Settings;

/// Every table of one run, checked and ready to write.
#[derive(Debug, Clone)]
pub struct DataSet {
    pub customers: Vec<Customer>,
    pub materials: Vec<Material>,
    pub transactions: Transactions,
    pub distinct_customers: usize,
    pub distinct_materials: usize,
    pub integrity: IntegrityReport,
}

/// Generate customers, then materials, then transactions from one random
/// stream, and verify version histories and referential integrity.
pub fn generate(config: &GeneratorConfig) -> DomainResult<DataSet> {
    let schedule = config.validate()?;
    let mut ctx = GenContext::from_seed(config.seed);

    let customers = generate_customers(&mut ctx, config, &schedule)?;
    let materials = generate_materials(&mut ctx, config, &schedule)?;
    let transactions = generate_orders(&mut ctx, config, &schedule, &customers, &materials)?;

    let distinct_customers = check_history(&customers, &schedule)?;
    let distinct_materials = check_history(&materials, &schedule)?;
    let integrity = check_integrity(
        &customers,
        &materials,
        &transactions,
        config.respect_load_order,
    )?;

    tracing::info!(
        seed = config.seed,
        customers = customers.len(),
        materials = materials.len(),
        orders = integrity.orders,
        items = integrity.items,
        "generated data set"
    );

    Ok(DataSet {
        customers,
        materials,
        transactions,
        distinct_customers,
        distinct_materials,
        integrity,
    })
}

/// Write the five tables in their fixed order.
pub fn write_tables<S: TableSink>(
    sink: &mut S,
    data: &DataSet,
) -> Result<Vec<TableSummary>, WriteError> {
    sink.write_table(&data.customers)?;
    sink.write_table(&data.materials)?;
    sink.write_table(&data.transactions.orders)?;
    sink.write_table(&data.transactions.items)?;
    sink.write_table(&data.transactions.partners)?;
    Ok(sink.written().to_vec())
}

/// Outcome of a run, printed by the binary.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub seed: u64,
    pub distinct_customers: usize,
    pub distinct_materials: usize,
    pub tables: Vec<TableSummary>,
    /// `None` on a dry run.
    pub output_dir: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
}

impl RunSummary {
    pub fn rows(&self, table: &str) -> usize {
        self.tables
            .iter()
            .find(|t| t.table == table)
            .map_or(0, |t| t.rows)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.output_dir {
            Some(dir) => writeln!(f, "Seed files written to {}", dir.display())?,
            None => writeln!(f, "Dry run, nothing written")?,
        }
        writeln!(f, "  run id:    {}", self.run_id)?;
        writeln!(f, "  seed:      {}", self.seed)?;
        writeln!(
            f,
            "  customers: {} ({} rows)",
            self.distinct_customers,
            self.rows("kna1")
        )?;
        writeln!(
            f,
            "  materials: {} ({} rows)",
            self.distinct_materials,
            self.rows("mara")
        )?;
        writeln!(f, "  orders:    {}", self.rows("vbak"))?;
        writeln!(f, "  items:     {}", self.rows("vbap"))?;
        write!(f, "  partners:  {}", self.rows("vbpa"))?;
        if let Some(manifest) = &self.manifest {
            write!(f, "\n  manifest:  {}", manifest.display())?;
        }
        Ok(())
    }
}

/// Run the whole job for `settings`. With `dry_run` the tables are rendered
/// in memory and the filesystem is left alone.
pub fn run(settings: &Settings, dry_run: bool) -> anyhow::Result<RunSummary> {
    let run_id = Uuid::now_v7();
    let _span = tracing::info_span!("run", %run_id).entered();

    let output = &settings.output;
    output.delimiter_byte().context("invalid output settings")?;
    let data = generate(&settings.generator).context("generation failed")?;

    let (tables, output_dir, manifest) = if dry_run {
        let mut sink = InMemorySink::open(output).context("invalid output settings")?;
        let tables = write_tables(&mut sink, &data).context("failed to render tables")?;
        (tables, None, None)
    } else {
        write_to_directory(output, &data, run_id, settings)?
    };

    let summary = RunSummary {
        run_id,
        seed: settings.generator.seed,
        distinct_customers: data.distinct_customers,
        distinct_materials: data.distinct_materials,
        tables,
        output_dir,
        manifest,
    };
    tracing::info!(dry_run, tables = summary.tables.len(), "run finished");
    Ok(summary)
}

type Written = (Vec<TableSummary>, Option<PathBuf>, Option<PathBuf>);

fn write_to_directory(
    output: &OutputConfig,
    data: &DataSet,
    run_id: Uuid,
    settings: &Settings,
) -> anyhow::Result<Written> {
    let mut sink = CsvDirectorySink::open(output.clone()).with_context(|| {
        format!(
            "failed to open output directory {}",
            output.output_dir.display()
        )
    })?;
    let tables = write_tables(&mut sink, data).context("failed to write seed tables")?;

    let manifest = if output.manifest {
        let manifest = RunManifest::new(
            run_id,
            settings.generator.seed,
            settings.generator.record_source.clone(),
            tables.clone(),
        );
        let path = manifest
            .write_to(sink.output_dir())
            .context("failed to write manifest")?;
        Some(path)
    } else {
        None
    };

    Ok((tables, Some(sink.output_dir().to_path_buf()), manifest))
}
