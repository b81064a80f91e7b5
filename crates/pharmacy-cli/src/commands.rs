use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

use pharmacy_core::batch::{clear_all, delete_multiple};
use pharmacy_core::export::{export_csv, export_json, ExportFile};
use pharmacy_core::query::{search, sort};
use pharmacy_core::sales::{record_sale, SaleOutcome};
use pharmacy_core::seed::initialize_sample_data;
use pharmacy_core::stats::{medicine_statistics_with_window, sales_in_range, sales_statistics};
use pharmacy_core::validation::{validate_medicine, validate_supplier, ValidationResult};
use pharmacy_core::{
    Database, Medicine, PharmacyError, Record, RecordStore, Sale, SortOrder, StorageKey, Supplier,
};

use crate::args::{Cli, Commands, MedicineArgs, SupplierArgs};
use crate::config::PharmacyConfig;
use crate::render;

/// Options for `list`.
struct ListOptions {
    search: Option<String>,
    fields: Vec<String>,
    sort: Option<String>,
    order: SortOrder,
    json: bool,
}

pub fn run(cli: Cli) -> Result<()> {
    let config = PharmacyConfig::load(cli.config.as_deref())?;
    let db_path = config.resolve_db_path(cli.db.as_deref())?;
    tracing::debug!("Using database {}", db_path.display());

    let db = Database::open(&db_path)
        .with_context(|| format!("opening database {}", db_path.display()))?;
    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    match cli.command {
        Commands::Seed => seed(&db, today),
        Commands::List {
            kind,
            search,
            fields,
            sort,
            desc,
            json,
        } => {
            let opts = ListOptions {
                search,
                fields,
                sort,
                order: if desc { SortOrder::Desc } else { SortOrder::Asc },
                json,
            };
            match kind {
                StorageKey::Medicines => list::<Medicine>(&db, kind, &opts),
                StorageKey::Suppliers => list::<Supplier>(&db, kind, &opts),
                StorageKey::Sales => list::<Sale>(&db, kind, &opts),
            }
        }
        Commands::Stats => stats(&db, today, config.expiry_window_days),
        Commands::SalesRange { start, end } => sales_range(&db, start, end),
        Commands::AddMedicine(args) => add_medicine(&db, args, today),
        Commands::AddSupplier(args) => add_supplier(&db, args),
        Commands::Sell {
            code,
            quantity,
            customer,
        } => sell(&db, &code, quantity, &customer, today),
        Commands::Delete { kind, positions } => delete(&db, kind, &positions),
        Commands::Clear { kind, yes } => clear(&db, kind, yes),
        Commands::ExportJson { kind, out } => {
            let dir = config.resolve_export_dir(out.as_deref());
            save_export(export_json(&db, kind, today), &dir)
        }
        Commands::ExportCsv {
            kind,
            out,
            filename,
        } => {
            let dir = config.resolve_export_dir(out.as_deref());
            let filename = filename.as_deref();
            let file = match kind {
                StorageKey::Medicines => export_csv::<Medicine, _>(&db, kind, filename),
                StorageKey::Suppliers => export_csv::<Supplier, _>(&db, kind, filename),
                StorageKey::Sales => export_csv::<Sale, _>(&db, kind, filename),
            };
            save_export(file, &dir)
        }
    }
}

fn seed(db: &Database, today: NaiveDate) -> Result<()> {
    let report = initialize_sample_data(db, today)?;
    if report.is_empty() {
        println!("Sample data already present.");
    } else {
        let keys: Vec<&str> = report.seeded.iter().map(StorageKey::as_str).collect();
        println!("Seeded {}.", keys.join(", "));
    }
    Ok(())
}

fn list<T>(db: &Database, key: StorageKey, opts: &ListOptions) -> Result<()>
where
    T: Record + DeserializeOwned + Serialize + Clone,
{
    let mut records: Vec<T> = db.get_records_or_empty(key)?;

    if let Some(term) = &opts.search {
        let fields: Vec<&str> = if opts.fields.is_empty() {
            T::FIELDS.to_vec()
        } else {
            opts.fields.iter().map(String::as_str).collect()
        };
        records = search(&records, term, &fields);
    }

    if let Some(field) = &opts.sort {
        if !T::FIELDS.contains(&field.as_str()) {
            bail!(
                "unknown field '{}' for {}; expected one of: {}",
                field,
                key,
                T::FIELDS.join(", ")
            );
        }
        records = sort(&records, field, opts.order);
    }

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else if records.is_empty() {
        println!("No {} found.", key);
    } else {
        println!("{}", render::records_table(&records));
    }
    Ok(())
}

fn stats(db: &Database, today: NaiveDate, window_days: i64) -> Result<()> {
    let med_stats = medicine_statistics_with_window(db, today, window_days)?;
    let sale_stats = sales_statistics(db)?;
    println!("{}", render::statistics(&med_stats, &sale_stats));
    Ok(())
}

fn sales_range(db: &Database, start: NaiveDate, end: NaiveDate) -> Result<()> {
    let in_range = sales_in_range(db, start, end)?;

    if in_range.is_empty() {
        println!("No sales between {} and {}.", start, end);
    } else {
        println!("{}", render::records_table(&in_range));
    }
    Ok(())
}

fn add_medicine(db: &Database, args: MedicineArgs, today: NaiveDate) -> Result<()> {
    let medicine = Medicine {
        name: args.name,
        code: args.code,
        category: args.category,
        quantity: args.quantity,
        min_stock: args.min_stock,
        price: args.price,
        expiry: args.expiry,
    };

    report_validation(&validate_medicine(&medicine, today))?;
    if args.dry_run {
        println!("Medicine is valid.");
        return Ok(());
    }

    let mut medicines: Vec<Medicine> = db.get_records_or_empty(StorageKey::Medicines)?;
    if medicines.iter().any(|m| m.code == medicine.code) {
        tracing::warn!("Medicine code {} is already in use", medicine.code);
    }
    println!("Added medicine {} ({}).", medicine.name, medicine.code);
    medicines.push(medicine);
    db.put_records(StorageKey::Medicines, &medicines)?;
    Ok(())
}

fn add_supplier(db: &Database, args: SupplierArgs) -> Result<()> {
    let supplier = Supplier {
        name: args.name,
        contact_person: args.contact_person,
        phone: args.phone,
        email: args.email,
        city: args.city,
        address: args.address,
    };

    report_validation(&validate_supplier(&supplier))?;
    if args.dry_run {
        println!("Supplier is valid.");
        return Ok(());
    }

    let mut suppliers: Vec<Supplier> = db.get_records_or_empty(StorageKey::Suppliers)?;
    println!("Added supplier {}.", supplier.name);
    suppliers.push(supplier);
    db.put_records(StorageKey::Suppliers, &suppliers)?;
    Ok(())
}

/// Print every validation error and fail if there were any.
fn report_validation(result: &ValidationResult) -> Result<()> {
    if result.valid {
        return Ok(());
    }
    for error in &result.errors {
        eprintln!("  - {}", error);
    }
    bail!("validation failed with {} error(s)", result.errors.len())
}

fn sell(db: &Database, code: &str, quantity: i64, customer: &str, today: NaiveDate) -> Result<()> {
    match record_sale(db, code, quantity, customer, today)? {
        SaleOutcome::Recorded(sale) => {
            println!(
                "Sold {} x {} to {} for {}.",
                sale.quantity,
                sale.medicine_name,
                sale.customer,
                pharmacy_core::ui::format_currency(sale.amount)
            );
            Ok(())
        }
        SaleOutcome::Rejected(result) => report_validation(&result),
    }
}

fn delete(db: &Database, key: StorageKey, positions: &[usize]) -> Result<()> {
    if positions.contains(&0) {
        bail!("positions start at 1");
    }
    let indices: Vec<usize> = positions.iter().map(|p| p - 1).collect();

    let removed = match key {
        StorageKey::Medicines => delete_multiple::<Medicine, _>(db, key, &indices)?,
        StorageKey::Suppliers => delete_multiple::<Supplier, _>(db, key, &indices)?,
        StorageKey::Sales => delete_multiple::<Sale, _>(db, key, &indices)?,
    };
    println!("Deleted {} {}.", removed, key);
    Ok(())
}

fn clear(db: &Database, key: StorageKey, yes: bool) -> Result<()> {
    if !yes && !confirm(&format!(
        "Are you sure you want to delete all {}? This action cannot be undone. [y/N] ",
        key
    ))? {
        println!("Cancelled.");
        return Ok(());
    }

    clear_all(db, key)?;
    println!("All {} have been deleted.", key);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Write a finished export, or explain why there was nothing to write.
fn save_export(file: pharmacy_core::Result<ExportFile>, dir: &Path) -> Result<()> {
    let file = match file {
        Ok(file) => file,
        Err(PharmacyError::MissingData(key)) => {
            eprintln!("No data to export for {}.", key);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let path = file
        .write_to_dir(dir)
        .with_context(|| format!("writing {} to {}", file.filename, dir.display()))?;
    println!("Exported to {}", path.display());
    Ok(())
}
