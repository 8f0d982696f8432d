//! Partition of geographic features into named buckets by feature class

use aina_core::models::GeographicFeature;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureCategory {
    PopulatedPlaces,
    Streams,
    Bays,
    Valleys,
    Mountains,
    Beaches,
    Other,
}

/// Class names per named bucket, tested in order
const CATEGORY_RULES: &[(FeatureCategory, &[&str])] = &[
    (FeatureCategory::PopulatedPlaces, &["Populated Place", "Census", "Civil"]),
    (FeatureCategory::Streams, &["Stream", "Canal"]),
    (FeatureCategory::Bays, &["Bay"]),
    (FeatureCategory::Valleys, &["Valley"]),
    (FeatureCategory::Mountains, &["Summit", "Ridge"]),
    (FeatureCategory::Beaches, &["Beach"]),
];

impl FeatureCategory {
    /// First matching rule wins; unknown classes fall into `Other`
    pub fn from_class(feature_class: &str) -> Self {
        CATEGORY_RULES
            .iter()
            .find(|(_, classes)| classes.contains(&feature_class))
            .map(|(category, _)| *category)
            .unwrap_or(FeatureCategory::Other)
    }
}

/// Features grouped by category. Every input feature is in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorizedFeatures {
    pub populated_places: Vec<GeographicFeature>,
    pub streams: Vec<GeographicFeature>,
    pub bays: Vec<GeographicFeature>,
    pub valleys: Vec<GeographicFeature>,
    pub mountains: Vec<GeographicFeature>,
    pub beaches: Vec<GeographicFeature>,
    pub other: Vec<GeographicFeature>,
}

impl CategorizedFeatures {
    pub fn bucket(&self, category: FeatureCategory) -> &[GeographicFeature] {
        match category {
            FeatureCategory::PopulatedPlaces => &self.populated_places,
            FeatureCategory::Streams => &self.streams,
            FeatureCategory::Bays => &self.bays,
            FeatureCategory::Valleys => &self.valleys,
            FeatureCategory::Mountains => &self.mountains,
            FeatureCategory::Beaches => &self.beaches,
            FeatureCategory::Other => &self.other,
        }
    }

    fn bucket_mut(&mut self, category: FeatureCategory) -> &mut Vec<GeographicFeature> {
        match category {
            FeatureCategory::PopulatedPlaces => &mut self.populated_places,
            FeatureCategory::Streams => &mut self.streams,
            FeatureCategory::Bays => &mut self.bays,
            FeatureCategory::Valleys => &mut self.valleys,
            FeatureCategory::Mountains => &mut self.mountains,
            FeatureCategory::Beaches => &mut self.beaches,
            FeatureCategory::Other => &mut self.other,
        }
    }

    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts {
            populated_places: self.populated_places.len(),
            streams: self.streams.len(),
            bays: self.bays.len(),
            valleys: self.valleys.len(),
            mountains: self.mountains.len(),
            beaches: self.beaches.len(),
            other: self.other.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.counts().total()
    }
}

/// Number of features per bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub populated_places: usize,
    pub streams: usize,
    pub bays: usize,
    pub valleys: usize,
    pub mountains: usize,
    pub beaches: usize,
    pub other: usize,
}

impl CategoryCounts {
    pub fn total(&self) -> usize {
        self.populated_places
            + self.streams
            + self.bays
            + self.valleys
            + self.mountains
            + self.beaches
            + self.other
    }
}

/// Partition features by class, keeping input order inside each bucket
pub fn categorize<I>(features: I) -> CategorizedFeatures
where
    I: IntoIterator<Item = GeographicFeature>,
{
    let mut out = CategorizedFeatures::default();
    for feature in features {
        let category = FeatureCategory::from_class(&feature.feature_class);
        out.bucket_mut(category).push(feature);
    }
    out
}
