use serde::{Deserialize, Serialize};

/// Placeholder image used when a restaurant has no photograph on file
const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.it/800x400";

/// Geographic position of a restaurant, consumed by map-rendering consumers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A single restaurant record as served by the directory backend.
///
/// Records are owned by the backend response: the cache stores verbatim
/// copies keyed by `id` and no field is ever mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    pub neighborhood: String,
    #[serde(rename = "cuisine_type")]
    pub cuisine: String,
    pub address: String,
    #[serde(default)]
    pub photograph: Option<String>,
    pub latlng: LatLng,
}

impl Restaurant {
    /// URL of the restaurant's photograph, falling back to a placeholder
    /// when none is on file.
    pub fn image_url(&self) -> String {
        match self.photograph {
            Some(ref photo) => format!("/img/{}.jpg", photo),
            None => PLACEHOLDER_IMAGE_URL.to_string(),
        }
    }

    /// Relative URL of the restaurant's detail page.
    pub fn page_url(&self) -> String {
        format!("./restaurant.html?id={}", self.id)
    }
}
