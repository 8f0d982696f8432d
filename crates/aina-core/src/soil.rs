//! Soil component table: column layout, allow-list and lookups

use std::path::Path;

use crate::error::Result;
use crate::formats::{ColumnSpec, TabularReader, TabularSchema};
use crate::models::SoilRecord;

/// Soil series recognized for the Waimanalo area
pub const SOIL_SERIES_ALLOW_LIST: [&str; 5] =
    ["Kawaihapai", "Pohakupu", "Lolekaa", "Haleiwa", "Hanalei"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilField {
    Series,
    SlopeLow,
    SlopeHigh,
    Depth,
    ErosionFactor,
    OrganicMatter,
    Ph,
    DrainageClass,
    HydrologicGroup,
    TaxOrder,
    TaxSuborder,
    TaxGreatGroup,
    TaxSubgroup,
    Texture,
}

const SOIL_COLUMNS: &[ColumnSpec<SoilField>] = &[
    ColumnSpec { field: SoilField::Series, index: 3, header: "compname" },
    ColumnSpec { field: SoilField::SlopeLow, index: 9, header: "slope_l" },
    ColumnSpec { field: SoilField::SlopeHigh, index: 10, header: "slope_h" },
    ColumnSpec { field: SoilField::Depth, index: 11, header: "depth" },
    ColumnSpec { field: SoilField::ErosionFactor, index: 13, header: "kffact" },
    ColumnSpec { field: SoilField::OrganicMatter, index: 14, header: "om_r" },
    ColumnSpec { field: SoilField::Ph, index: 15, header: "ph1to1h2o_r" },
    ColumnSpec { field: SoilField::DrainageClass, index: 20, header: "drainagecl" },
    ColumnSpec { field: SoilField::HydrologicGroup, index: 82, header: "hydgrp" },
    ColumnSpec { field: SoilField::TaxOrder, index: 84, header: "taxorder" },
    ColumnSpec { field: SoilField::TaxSuborder, index: 85, header: "taxsuborder" },
    ColumnSpec { field: SoilField::TaxGreatGroup, index: 86, header: "taxgrtgroup" },
    ColumnSpec { field: SoilField::TaxSubgroup, index: 87, header: "taxsubgrp" },
    ColumnSpec { field: SoilField::Texture, index: 88, header: "texture" },
];

/// Column table of the component file (`comp.txt`)
pub const SOIL_SCHEMA: TabularSchema<SoilField> =
    TabularSchema { source_name: "comp.txt", columns: SOIL_COLUMNS };

pub fn is_allowed_series(series: &str) -> bool {
    SOIL_SERIES_ALLOW_LIST.contains(&series)
}

/// All component records of one soil survey export
#[derive(Debug, Clone, Default)]
pub struct SoilCatalog {
    records: Vec<SoilRecord>,
    /// Series names of every row, including rows too short to become records
    series: Vec<String>,
}

impl SoilCatalog {
    pub async fn from_path(path: &Path) -> Result<Self> {
        let reader = TabularReader::from_path(path).await?;
        Self::from_reader(reader)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Self::from_reader(TabularReader::parse(SOIL_SCHEMA.source_name, content)?)
    }

    /// Check only the header of a component file
    pub async fn verify_header(path: &Path) -> Result<()> {
        let reader = TabularReader::from_path(path).await?;
        SOIL_SCHEMA.validate_header(&reader.header)
    }

    fn from_reader(reader: TabularReader) -> Result<Self> {
        let mut series: Vec<String> = Vec::new();
        for row in &reader.records {
            let name = SOIL_SCHEMA.field(row, SoilField::Series);
            if !name.is_empty() && !series.iter().any(|s| s == name) {
                series.push(name.to_string());
            }
        }

        let records = reader
            .conform(&SOIL_SCHEMA)?
            .iter()
            .map(|row| to_record(row))
            .collect();
        Ok(Self { records, series })
    }

    pub fn records(&self) -> &[SoilRecord] {
        &self.records
    }

    /// First record whose series is allow-listed
    pub fn first_allowed(&self) -> Option<&SoilRecord> {
        self.records.iter().find(|r| is_allowed_series(&r.soil_series))
    }

    /// Non-empty series names present in the file, first-seen order
    pub fn distinct_series(&self) -> Vec<String> {
        self.series.clone()
    }
}

fn to_record(row: &[String]) -> SoilRecord {
    let field = |f: SoilField| SOIL_SCHEMA.field(row, f).to_string();
    SoilRecord {
        soil_series: field(SoilField::Series),
        drainage_class: field(SoilField::DrainageClass),
        hydrologic_group: field(SoilField::HydrologicGroup),
        erosion_factor: field(SoilField::ErosionFactor),
        organic_matter: field(SoilField::OrganicMatter),
        ph_level: field(SoilField::Ph),
        tax_order: field(SoilField::TaxOrder),
        tax_suborder: field(SoilField::TaxSuborder),
        tax_great_group: field(SoilField::TaxGreatGroup),
        tax_subgroup: field(SoilField::TaxSubgroup),
        texture: field(SoilField::Texture),
        slope_low: field(SoilField::SlopeLow),
        slope_high: field(SoilField::SlopeHigh),
        depth: field(SoilField::Depth),
    }
}

/// Build a pipe-delimited line with the given fields placed at their mapped
/// columns. Used to produce fixtures matching the component layout.
pub fn layout_line(values: &[(SoilField, &str)]) -> String {
    let mut cells = vec![String::new(); SOIL_SCHEMA.min_width()];
    for (field, value) in values {
        if let Some(i) = SOIL_SCHEMA.index_of(*field) {
            cells[i] = format!("\"{}\"", value);
        }
    }
    cells.join("|")
}

/// Header line matching the component layout
pub fn layout_header() -> String {
    let mut cells: Vec<String> =
        (0..SOIL_SCHEMA.min_width()).map(|i| format!("col{}", i)).collect();
    for column in SOIL_SCHEMA.columns {
        cells[column.index] = column.header.to_string();
    }
    cells.join("|")
}
