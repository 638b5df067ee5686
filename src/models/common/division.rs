use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Organizational division. Parsed once at the request boundary; everything
/// past the boundary works with this closed enum.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "division.ts")]
pub enum Division {
    Marketing,
    HostLive,
    Produksi,
    Admin,
}

impl Division {
    pub const ALL: [Division; 4] = [
        Division::Marketing,
        Division::HostLive,
        Division::Produksi,
        Division::Admin,
    ];

    /// Value stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Division::Marketing => "MARKETING",
            Division::HostLive => "HOST_LIVE",
            Division::Produksi => "PRODUKSI",
            Division::Admin => "ADMIN",
        }
    }
}

impl<'de> Deserialize<'de> for Division {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Division>().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Division {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Division {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MARKETING" => Ok(Division::Marketing),
            "HOST_LIVE" => Ok(Division::HostLive),
            "PRODUKSI" => Ok(Division::Produksi),
            "ADMIN" => Ok(Division::Admin),
            _ => Err(format!(
                "Invalid division: {s}. Expected one of MARKETING, HOST_LIVE, PRODUKSI, ADMIN"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("host_live".parse::<Division>(), Ok(Division::HostLive));
        assert_eq!(" PRODUKSI ".parse::<Division>(), Ok(Division::Produksi));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("FINANCE".parse::<Division>().is_err());
        assert!("".parse::<Division>().is_err());
    }

    #[test]
    fn test_serde_uses_stored_form() {
        let json = serde_json::to_string(&Division::HostLive).unwrap();
        assert_eq!(json, "\"HOST_LIVE\"");
        let parsed: Division = serde_json::from_str("\"marketing\"").unwrap();
        assert_eq!(parsed, Division::Marketing);
        assert!(serde_json::from_str::<Division>("\"SALES\"").is_err());
    }

    #[test]
    fn test_display_matches_storage() {
        for division in Division::ALL {
            assert_eq!(division.to_string().parse::<Division>(), Ok(division));
        }
    }
}
