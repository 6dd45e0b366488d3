use std::collections::BTreeMap;
use std::fs;

use csv::ReaderBuilder;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::config::constant::SEED;
use crate::domain::types::Site;
use crate::error::{Error, Result};

/// Reads candidate sites from a CSV file and keeps at most `max_count`.
///
/// Expected layout: a header row with `name`, `x` and `y` columns; every
/// remaining column is treated as a numeric demand column.
pub fn read_sites_from_csv(csv_path: &str, max_count: usize) -> Result<Vec<Site>> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(csv_path)?;

    let headers = reader.headers()?.clone();
    let name_idx = header_index(&headers, "name")?;
    let x_idx = header_index(&headers, "x")?;
    let y_idx = header_index(&headers, "y")?;

    let mut sites = Vec::new();
    for row in reader.records() {
        let record = row?;
        let name = record
            .get(name_idx)
            .unwrap_or_default()
            .trim()
            .to_string();
        if name.is_empty() {
            continue;
        }

        let x = parse_float(&record, x_idx, "x", &name)?;
        let y = parse_float(&record, y_idx, "y", &name)?;

        let mut demands = BTreeMap::new();
        for (idx, header) in headers.iter().enumerate() {
            if idx == name_idx || idx == x_idx || idx == y_idx {
                continue;
            }
            demands.insert(header.to_string(), parse_float(&record, idx, header, &name)?);
        }

        sites.push(Site { name, x, y, demands });
        if sites.len() >= max_count {
            break;
        }
    }

    Ok(sites)
}

/// Reads candidate sites from a JSON file holding an array of `Site` objects.
pub fn read_sites_from_json(json_path: &str) -> Result<Vec<Site>> {
    let file_content = fs::read_to_string(json_path)?;
    let sites: Vec<Site> = serde_json::from_str(&file_content)?;
    Ok(sites)
}

/// Generates a reproducible random catalog: planar coordinates in a
/// 100 km x 100 km window, demand scores in [0, 100).
pub fn generate_random_sites(site_count: usize, seed: u64) -> Vec<Site> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut sites = Vec::with_capacity(site_count);

    for i in 0..site_count {
        let x = rng.gen_range(0.0..100_000.0);
        let y = rng.gen_range(0.0..100_000.0);
        let demand = rng.gen_range(0.0..100.0);
        sites.push(Site::new(format!("site-{:02}", i), x, y, demand));
    }

    sites
}

/// Loads a site catalog from file (CSV or JSON, by extension) with a seeded
/// random fallback when the file is missing or empty.
pub fn load_catalog(path: &str, site_count: usize) -> Vec<Site> {
    let loaded = if path.ends_with(".json") {
        read_sites_from_json(path)
    } else {
        read_sites_from_csv(path, site_count)
    };

    match loaded {
        Ok(sites) if !sites.is_empty() => {
            info!("Loaded {} sites from {}", sites.len(), path);
            sites
        }
        Ok(_) => {
            warn!("No sites in {}, falling back to random generation", path);
            generate_random_sites(site_count, SEED as u64)
        }
        Err(err) => {
            warn!(
                "Failed to read site catalog at {}: {}. Falling back to random generation.",
                path, err
            );
            generate_random_sites(site_count, SEED as u64)
        }
    }
}

fn header_index(headers: &csv::StringRecord, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(column))
        .ok_or_else(|| Error::invalid_input(format!("missing '{}' column in site CSV", column)))
}

fn parse_float(record: &csv::StringRecord, idx: usize, column: &str, site: &str) -> Result<f64> {
    record
        .get(idx)
        .unwrap_or_default()
        .trim()
        .parse::<f64>()
        .map_err(|_| {
            Error::invalid_input(format!(
                "site '{}' has a non-numeric value in column '{}'",
                site, column
            ))
        })
}
