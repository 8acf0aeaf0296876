//! Reference catalog lookups and regional sales ranking.

use std::{cmp::Reverse, collections::HashSet};

use super::{
    entities::{VehicleRecord, VehicleType},
    error::{CatalogError, ValuationError},
    region::RegionProfile,
};

/// Immutable table of vehicle records, in insertion order.
#[derive(Clone, Debug)]
pub struct Catalog {
    records: Vec<VehicleRecord>,
}

impl Catalog {
    pub fn new(records: Vec<VehicleRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.full_name.as_str()) {
                return Err(CatalogError::DuplicateName(record.full_name.clone()));
            }
            let zero_field = if record.national_sales == 0 {
                Some("national_sales")
            } else if record.base_price == 0 {
                Some("base_price")
            } else if record.base_days_to_sell == 0 {
                Some("base_days_to_sell")
            } else {
                None
            };
            if let Some(field) = zero_field {
                return Err(CatalogError::NonPositiveField {
                    name: record.full_name.clone(),
                    field,
                });
            }
        }

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn get_record(&self, full_name: &str) -> Result<&VehicleRecord, ValuationError> {
        self.records
            .iter()
            .find(|record| record.full_name == full_name)
            .ok_or_else(|| ValuationError::RecordNotFound(full_name.to_string()))
    }

    /// Records in catalog order, optionally restricted to one body style.
    pub fn list_records(&self, filter: Option<VehicleType>) -> Vec<&VehicleRecord> {
        self.records
            .iter()
            .filter(|record| filter.map_or(true, |kind| record.vehicle_type == kind))
            .collect()
    }

    fn position(&self, full_name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.full_name == full_name)
    }

    /// Scales national sales by the region and ranks the result.
    ///
    /// Sorted by estimated sales, highest first; ties keep catalog order.
    pub fn apply_region<'a>(
        &self,
        records: &[&'a VehicleRecord],
        profile: &RegionProfile,
    ) -> Vec<RegionalSales<'a>> {
        let mut rows: Vec<(usize, RegionalSales<'a>)> = records
            .iter()
            .map(|&record| {
                let position = self.position(&record.full_name).unwrap_or(usize::MAX);
                let multiplier = profile.multiplier(position);
                let estimated_sales = (f64::from(record.national_sales) * multiplier).round() as u64;
                (
                    position,
                    RegionalSales {
                        record,
                        estimated_sales,
                    },
                )
            })
            .collect();

        rows.sort_by_key(|(position, row)| (Reverse(row.estimated_sales), *position));
        rows.into_iter().map(|(_, row)| row).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionalSales<'a> {
    pub record: &'a VehicleRecord,
    pub estimated_sales: u64,
}

/// Ranked sales table for one region and body-style filter.
#[derive(Clone, Debug)]
pub struct MarketOverview<'a> {
    pub region_name: String,
    pub filter: Option<VehicleType>,
    pub rows: Vec<RegionalSales<'a>>,
}

impl<'a> MarketOverview<'a> {
    /// Leading rows; the sales chart shows the top ten.
    pub fn top(&self, n: usize) -> &[RegionalSales<'a>] {
        &self.rows[..n.min(self.rows.len())]
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.rows.iter().any(|row| row.record.full_name == full_name)
    }
}

pub fn market_overview<'a>(
    catalog: &'a Catalog,
    profile: &RegionProfile,
    filter: Option<VehicleType>,
) -> MarketOverview<'a> {
    let records = catalog.list_records(filter);
    MarketOverview {
        region_name: profile.name.clone(),
        filter,
        rows: catalog.apply_region(&records, profile),
    }
}
