use serde::{Deserialize, Serialize};

/// Store (branch) that registered the order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Store {
    #[serde(rename = "Loja Principal")]
    LojaPrincipal,
    #[serde(rename = "Filial SP")]
    FilialSp,
    #[serde(rename = "Filial RJ")]
    FilialRj,
    #[serde(rename = "Online Store")]
    OnlineStore,
}

impl Store {
    pub fn label(&self) -> &'static str {
        match self {
            Store::LojaPrincipal => "Loja Principal",
            Store::FilialSp => "Filial SP",
            Store::FilialRj => "Filial RJ",
            Store::OnlineStore => "Online Store",
        }
    }

    pub fn all() -> [Store; 4] {
        [
            Store::LojaPrincipal,
            Store::FilialSp,
            Store::FilialRj,
            Store::OnlineStore,
        ]
    }
}

impl std::fmt::Display for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
