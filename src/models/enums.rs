//! Shared domain enums, stored as text columns

use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, Postgres};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// MaterialType
// ---------------------------------------------------------------------------

/// Kind of safety material a template describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaterialType {
    /// Auxiliary-pressure extinguisher ("Pression Auxiliaire")
    Pa,
    /// Permanent-pressure extinguisher ("Pression Permanente")
    Pp,
    /// Fire alarm
    Alarm,
    /// CO2 extinguisher
    Co2,
}

impl MaterialType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialType::Pa => "PA",
            MaterialType::Pp => "PP",
            MaterialType::Alarm => "ALARM",
            MaterialType::Co2 => "CO2",
        }
    }

    /// French display label, as shown by the front-end
    pub fn label(&self) -> &'static str {
        match self {
            MaterialType::Pa => "Pression Auxiliaire",
            MaterialType::Pp => "Pression Permanente",
            MaterialType::Alarm => "Alarme",
            MaterialType::Co2 => "CO2",
        }
    }
}

impl std::fmt::Display for MaterialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MaterialType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PA" => Ok(MaterialType::Pa),
            "PP" => Ok(MaterialType::Pp),
            "ALARM" => Ok(MaterialType::Alarm),
            "CO2" => Ok(MaterialType::Co2),
            _ => Err(format!("Invalid material type: {}", s)),
        }
    }
}

// SQLx conversion: material types are stored as text
impl sqlx::Type<Postgres> for MaterialType {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for MaterialType {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for MaterialType {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

// ---------------------------------------------------------------------------
// RechargeType
// ---------------------------------------------------------------------------

/// Recharge method used on an extinguisher (descriptive only, no effect on
/// the compliance date math)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RechargeType {
    WaterAdd,
    Powder,
    Co2,
    Foam,
}

impl RechargeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RechargeType::WaterAdd => "WATER_ADD",
            RechargeType::Powder => "POWDER",
            RechargeType::Co2 => "CO2",
            RechargeType::Foam => "FOAM",
        }
    }

    /// French display label
    pub fn label(&self) -> &'static str {
        match self {
            RechargeType::WaterAdd => "Eau + Additif",
            RechargeType::Powder => "Poudre",
            RechargeType::Co2 => "CO2",
            RechargeType::Foam => "Mousse",
        }
    }
}

impl std::fmt::Display for RechargeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RechargeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "WATER_ADD" => Ok(RechargeType::WaterAdd),
            "POWDER" => Ok(RechargeType::Powder),
            "CO2" => Ok(RechargeType::Co2),
            "FOAM" => Ok(RechargeType::Foam),
            _ => Err(format!("Invalid recharge type: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for RechargeType {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for RechargeType {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for RechargeType {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_type_round_trip() {
        for t in [MaterialType::Pa, MaterialType::Pp, MaterialType::Alarm, MaterialType::Co2] {
            assert_eq!(t.as_str().parse::<MaterialType>().unwrap(), t);
        }
    }

    #[test]
    fn test_material_type_rejects_unknown() {
        assert!("HALON".parse::<MaterialType>().is_err());
    }

    #[test]
    fn test_recharge_type_round_trip() {
        for t in [RechargeType::WaterAdd, RechargeType::Powder, RechargeType::Co2, RechargeType::Foam] {
            assert_eq!(t.as_str().parse::<RechargeType>().unwrap(), t);
        }
    }
}
