use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Work area a candidate can be qualified for.
///
/// Sector tags are stored as their string code so the store can keep codes this
/// build does not know about; [`SectorCode`] is only the recognized subset used
/// for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectorCode {
    /// Housekeeping
    Etages,
    /// Kitchen
    Cuisine,
    /// Dining room
    Salle,
    /// Dishwashing
    Plonge,
    Reception,
}

impl SectorCode {
    pub const ALL: [SectorCode; 5] = [
        SectorCode::Etages,
        SectorCode::Cuisine,
        SectorCode::Salle,
        SectorCode::Plonge,
        SectorCode::Reception,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            SectorCode::Etages => "etages",
            SectorCode::Cuisine => "cuisine",
            SectorCode::Salle => "salle",
            SectorCode::Plonge => "plonge",
            SectorCode::Reception => "reception",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectorCode::Etages => "Étages",
            SectorCode::Cuisine => "Cuisine",
            SectorCode::Salle => "Salle",
            SectorCode::Plonge => "Plonge",
            SectorCode::Reception => "Réception",
        }
    }
}

impl From<SectorCode> for &str {
    fn from(val: SectorCode) -> Self {
        val.code()
    }
}

impl fmt::Display for SectorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SectorCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "etages" => Ok(SectorCode::Etages),
            "cuisine" => Ok(SectorCode::Cuisine),
            "salle" => Ok(SectorCode::Salle),
            "plonge" => Ok(SectorCode::Plonge),
            "reception" => Ok(SectorCode::Reception),
            _ => Err(format!("Unknown sector code: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_parse_back() {
        for sector in SectorCode::ALL {
            assert_eq!(sector.code().parse::<SectorCode>(), Ok(sector));
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert!("bar".parse::<SectorCode>().is_err());
        assert!("Cuisine".parse::<SectorCode>().is_err());
    }
}
