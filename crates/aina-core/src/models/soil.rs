use serde::{Deserialize, Serialize};

/// One soil map unit component, read positionally from the component table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoilRecord {
    pub soil_series: String,
    pub drainage_class: String,
    pub hydrologic_group: String,
    pub erosion_factor: String,
    pub organic_matter: String,
    pub ph_level: String,
    pub tax_order: String,
    pub tax_suborder: String,
    pub tax_great_group: String,
    pub tax_subgroup: String,
    pub texture: String,
    pub slope_low: String,
    pub slope_high: String,
    pub depth: String,
}

impl SoilRecord {
    /// Slope range as `"{low}-{high}%"`, or `"Unknown"` when either end is missing
    pub fn slope(&self) -> String {
        if self.slope_low.is_empty() || self.slope_high.is_empty() {
            "Unknown".to_string()
        } else {
            format!("{}-{}%", self.slope_low, self.slope_high)
        }
    }

    pub fn depth_or_unknown(&self) -> String {
        if self.depth.is_empty() {
            "Unknown".to_string()
        } else {
            self.depth.clone()
        }
    }

    pub fn agricultural_suitability(&self) -> Suitability {
        Suitability::from_drainage(&self.drainage_class)
    }
}

/// Agricultural suitability rating derived from drainage class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suitability {
    Good,
    Moderate,
    Poor,
}

impl Suitability {
    pub fn from_drainage(drainage_class: &str) -> Self {
        match drainage_class {
            "Well drained" => Suitability::Good,
            "Moderately well drained" => Suitability::Moderate,
            _ => Suitability::Poor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slope_formatting() {
        let mut record =
            SoilRecord { slope_low: "2".into(), slope_high: "6".into(), ..Default::default() };
        assert_eq!(record.slope(), "2-6%");

        record.slope_high.clear();
        assert_eq!(record.slope(), "Unknown");
    }

    #[test]
    fn test_depth_default() {
        assert_eq!(SoilRecord::default().depth_or_unknown(), "Unknown");
    }

    #[test]
    fn test_suitability_from_drainage() {
        assert_eq!(Suitability::from_drainage("Well drained"), Suitability::Good);
        assert_eq!(Suitability::from_drainage("Moderately well drained"), Suitability::Moderate);
        assert_eq!(Suitability::from_drainage("Poorly drained"), Suitability::Poor);
        assert_eq!(Suitability::from_drainage(""), Suitability::Poor);
    }
}
