use aina_core::models::LatLon;
use aina_core::soil::{is_allowed_series, SoilCatalog};

use crate::dto::{
    Location, PhysicalProperties, SoilMetadata, SoilResponse, SoilSuitability, SoilTaxonomy,
};
use crate::error::ApiError;
use crate::state::AppState;

/// Soil properties of the first allow-listed series in the component file
pub struct SoilService;

impl SoilService {
    pub async fn lookup(state: &AppState, point: LatLon) -> Result<SoilResponse, ApiError> {
        let area = &state.config.area.value;
        let path = state.config.soil_path();
        let catalog = SoilCatalog::from_path(&path)
            .await
            .map_err(|e| ApiError::source("Failed to fetch soil health data", e))?;

        let Some(soil) = catalog.first_allowed() else {
            let available = catalog.distinct_series();
            tracing::warn!(records = catalog.records().len(), "No allow-listed soil series found");
            return Err(ApiError::not_found(format!(
                "Soil health data not available for {} area",
                area.name
            ))
            .with_context("availableSeries", available));
        };

        tracing::debug!(series = %soil.soil_series, "Using soil series");

        let matched = catalog
            .records()
            .iter()
            .filter(|r| is_allowed_series(&r.soil_series))
            .count();

        Ok(SoilResponse {
            location: Location::new(point),
            soil_series: soil.soil_series.clone(),
            drainage_class: soil.drainage_class.clone(),
            hydrologic_group: soil.hydrologic_group.clone(),
            erosion_factor: soil.erosion_factor.clone(),
            organic_matter: soil.organic_matter.clone(),
            ph_level: soil.ph_level.clone(),
            soil_taxonomy: SoilTaxonomy {
                order: soil.tax_order.clone(),
                suborder: soil.tax_suborder.clone(),
                great_group: soil.tax_great_group.clone(),
                subgroup: soil.tax_subgroup.clone(),
            },
            suitability: SoilSuitability {
                agricultural: soil.agricultural_suitability(),
                drainage: soil.drainage_class.clone(),
                erosion: soil.erosion_factor.clone(),
            },
            physical_properties: PhysicalProperties {
                texture: soil.texture.clone(),
                slope: soil.slope(),
                depth: soil.depth_or_unknown(),
            },
            metadata: SoilMetadata {
                source: "USDA NRCS Soil Survey Geographic Database (SSURGO)".to_string(),
                description: format!("Soil component properties for the {} area", area.name),
                last_updated: "2025".to_string(),
                matched_records: matched,
            },
        })
    }
}
