use serde::{Deserialize, Serialize};

/// Sales channel an order came through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "SHEIN")]
    Shein,
    #[serde(rename = "Mercado Livre")]
    MercadoLivre,
    #[serde(rename = "Shopee")]
    Shopee,
    #[serde(rename = "Amazon")]
    Amazon,
    #[serde(rename = "Site Próprio")]
    SiteProprio,
}

impl Platform {
    /// Human readable label, also used as the wire value
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Shein => "SHEIN",
            Platform::MercadoLivre => "Mercado Livre",
            Platform::Shopee => "Shopee",
            Platform::Amazon => "Amazon",
            Platform::SiteProprio => "Site Próprio",
        }
    }

    /// All platforms in draw order
    pub fn all() -> [Platform; 5] {
        [
            Platform::Shein,
            Platform::MercadoLivre,
            Platform::Shopee,
            Platform::Amazon,
            Platform::SiteProprio,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.label() == label)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for platform in Platform::all() {
            assert_eq!(Platform::from_label(platform.label()), Some(platform));
        }
        assert_eq!(Platform::from_label("Magalu"), None);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Platform::SiteProprio).unwrap();
        assert_eq!(json, "\"Site Próprio\"");
    }
}
