use serde::{Deserialize, Serialize};

/// Product catalogue of the demo store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Product {
    #[serde(rename = "Smartphone Galaxy")]
    SmartphoneGalaxy,
    #[serde(rename = "Fone Bluetooth")]
    FoneBluetooth,
    #[serde(rename = "Carregador Wireless")]
    CarregadorWireless,
    #[serde(rename = "Capa de Celular")]
    CapaDeCelular,
    #[serde(rename = "Película Protetora")]
    PeliculaProtetora,
    #[serde(rename = "Power Bank")]
    PowerBank,
    #[serde(rename = "Cabo USB-C")]
    CaboUsbC,
    #[serde(rename = "Suporte Veicular")]
    SuporteVeicular,
    #[serde(rename = "Fone de Ouvido")]
    FoneDeOuvido,
    #[serde(rename = "Smartwatch")]
    Smartwatch,
}

impl Product {
    pub fn label(&self) -> &'static str {
        match self {
            Product::SmartphoneGalaxy => "Smartphone Galaxy",
            Product::FoneBluetooth => "Fone Bluetooth",
            Product::CarregadorWireless => "Carregador Wireless",
            Product::CapaDeCelular => "Capa de Celular",
            Product::PeliculaProtetora => "Película Protetora",
            Product::PowerBank => "Power Bank",
            Product::CaboUsbC => "Cabo USB-C",
            Product::SuporteVeicular => "Suporte Veicular",
            Product::FoneDeOuvido => "Fone de Ouvido",
            Product::Smartwatch => "Smartwatch",
        }
    }

    pub fn all() -> [Product; 10] {
        [
            Product::SmartphoneGalaxy,
            Product::FoneBluetooth,
            Product::CarregadorWireless,
            Product::CapaDeCelular,
            Product::PeliculaProtetora,
            Product::PowerBank,
            Product::CaboUsbC,
            Product::SuporteVeicular,
            Product::FoneDeOuvido,
            Product::Smartwatch,
        ]
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
