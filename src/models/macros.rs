use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};

/// One of the three macro percentage fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MacroField {
    Protein,
    Carbs,
    Fat,
}

impl MacroField {
    /// Fixed order used to pick the field that absorbs a rebalance residual.
    pub const ORDER: [MacroField; 3] = [MacroField::Protein, MacroField::Carbs, MacroField::Fat];

    /// Atwater factor in kcal per gram.
    pub fn kcal_per_gram(self) -> f64 {
        match self {
            MacroField::Protein | MacroField::Carbs => 4.0,
            MacroField::Fat => 9.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MacroField::Protein => "protein",
            MacroField::Carbs => "carbs",
            MacroField::Fat => "fat",
        }
    }
}

/// Macro split in whole percentages. The three fields always sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMacroDistribution", rename_all = "camelCase")]
pub struct MacroDistribution {
    protein_pct: u32,
    carbs_pct: u32,
    fat_pct: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMacroDistribution {
    protein_pct: u32,
    carbs_pct: u32,
    fat_pct: u32,
}

impl TryFrom<RawMacroDistribution> for MacroDistribution {
    type Error = NutriError;

    fn try_from(raw: RawMacroDistribution) -> Result<Self> {
        MacroDistribution::new(raw.protein_pct, raw.carbs_pct, raw.fat_pct)
    }
}

impl MacroDistribution {
    pub const TOTAL_PCT: u32 = 100;

    pub fn new(protein_pct: u32, carbs_pct: u32, fat_pct: u32) -> Result<Self> {
        let sum = u64::from(protein_pct) + u64::from(carbs_pct) + u64::from(fat_pct);
        if sum != u64::from(Self::TOTAL_PCT) {
            return Err(NutriError::InvalidInput(format!(
                "macro percentages must sum to 100, got {}/{}/{} = {}",
                protein_pct, carbs_pct, fat_pct, sum
            )));
        }
        Ok(Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        })
    }

    pub fn protein_pct(&self) -> u32 {
        self.protein_pct
    }

    pub fn carbs_pct(&self) -> u32 {
        self.carbs_pct
    }

    pub fn fat_pct(&self) -> u32 {
        self.fat_pct
    }

    pub fn get(&self, field: MacroField) -> u32 {
        match field {
            MacroField::Protein => self.protein_pct,
            MacroField::Carbs => self.carbs_pct,
            MacroField::Fat => self.fat_pct,
        }
    }

    /// Build from three percentages already known to sum to 100.
    pub(crate) fn from_balanced(values: [u32; 3]) -> Self {
        debug_assert_eq!(values.iter().sum::<u32>(), Self::TOTAL_PCT);
        Self {
            protein_pct: values[0],
            carbs_pct: values[1],
            fat_pct: values[2],
        }
    }

    pub(crate) fn as_array(&self) -> [u32; 3] {
        [self.protein_pct, self.carbs_pct, self.fat_pct]
    }
}

impl Default for MacroDistribution {
    fn default() -> Self {
        Self {
            protein_pct: 30,
            carbs_pct: 40,
            fat_pct: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_sum() {
        assert!(MacroDistribution::new(30, 40, 30).is_ok());
        assert!(matches!(
            MacroDistribution::new(30, 40, 40),
            Err(NutriError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_deserialize_enforces_sum() {
        let ok: MacroDistribution =
            serde_json::from_str(r#"{"proteinPct": 25, "carbsPct": 50, "fatPct": 25}"#).unwrap();
        assert_eq!(ok.carbs_pct(), 50);

        let bad = serde_json::from_str::<MacroDistribution>(
            r#"{"proteinPct": 25, "carbsPct": 50, "fatPct": 30}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_huge_percentages_rejected() {
        // u32 addition would wrap this to exactly 100.
        assert!(matches!(
            MacroDistribution::new(u32::MAX, 101, 0),
            Err(NutriError::InvalidInput(_))
        ));

        let wrapped = serde_json::from_str::<MacroDistribution>(
            r#"{"proteinPct": 4294967295, "carbsPct": 101, "fatPct": 0}"#,
        );
        assert!(wrapped.is_err());
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_string(&MacroDistribution::default()).unwrap();
        assert_eq!(json, r#"{"proteinPct":30,"carbsPct":40,"fatPct":30}"#);
    }
}
