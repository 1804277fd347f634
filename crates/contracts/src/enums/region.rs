use serde::{Deserialize, Serialize};

/// Customer city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum City {
    #[serde(rename = "São Paulo")]
    SaoPaulo,
    #[serde(rename = "Rio de Janeiro")]
    RioDeJaneiro,
    #[serde(rename = "Belo Horizonte")]
    BeloHorizonte,
    #[serde(rename = "Brasília")]
    Brasilia,
    #[serde(rename = "Salvador")]
    Salvador,
}

impl City {
    pub fn label(&self) -> &'static str {
        match self {
            City::SaoPaulo => "São Paulo",
            City::RioDeJaneiro => "Rio de Janeiro",
            City::BeloHorizonte => "Belo Horizonte",
            City::Brasilia => "Brasília",
            City::Salvador => "Salvador",
        }
    }

    pub fn all() -> [City; 5] {
        [
            City::SaoPaulo,
            City::RioDeJaneiro,
            City::BeloHorizonte,
            City::Brasilia,
            City::Salvador,
        ]
    }

    /// State the city actually belongs to
    pub fn home_state(&self) -> State {
        match self {
            City::SaoPaulo => State::Sp,
            City::RioDeJaneiro => State::Rj,
            City::BeloHorizonte => State::Mg,
            City::Brasilia => State::Df,
            City::Salvador => State::Ba,
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Brazilian federative unit code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum State {
    #[serde(rename = "SP")]
    Sp,
    #[serde(rename = "RJ")]
    Rj,
    #[serde(rename = "MG")]
    Mg,
    #[serde(rename = "DF")]
    Df,
    #[serde(rename = "BA")]
    Ba,
}

impl State {
    pub fn code(&self) -> &'static str {
        match self {
            State::Sp => "SP",
            State::Rj => "RJ",
            State::Mg => "MG",
            State::Df => "DF",
            State::Ba => "BA",
        }
    }

    pub fn all() -> [State; 5] {
        [State::Sp, State::Rj, State::Mg, State::Df, State::Ba]
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_state_has_one_city() {
        for state in State::all() {
            let cities: Vec<City> = City::all()
                .into_iter()
                .filter(|c| c.home_state() == state)
                .collect();
            assert_eq!(cities.len(), 1, "state {}", state);
        }
    }
}
