use crate::models::{MacroDistribution, MacroField};

/// Set one macro percentage and restore the sum of 100.
///
/// The edited field takes `new_value` clamped to `0..=100`. The residual
/// `100 - sum` goes to the first non-edited field in `MacroField::ORDER`
/// (protein, carbs, fat). If that field would drop below zero it stops at
/// zero and the rest of the residual moves on to the next non-edited field.
pub fn rebalance_macros(
    current: &MacroDistribution,
    edited: MacroField,
    new_value: i64,
) -> MacroDistribution {
    let total = MacroDistribution::TOTAL_PCT as i64;
    let mut values = current.as_array().map(i64::from);
    let edited_idx = field_index(edited);
    values[edited_idx] = new_value.clamp(0, total);

    let mut residual = total - values.iter().sum::<i64>();
    for field in MacroField::ORDER {
        if residual == 0 {
            break;
        }
        let idx = field_index(field);
        if idx == edited_idx {
            continue;
        }
        let adjusted = (values[idx] + residual).max(0);
        residual -= adjusted - values[idx];
        values[idx] = adjusted;
    }

    // Edited value is in range and the other two absorb a residual bounded by
    // their own sum, so every field ends within 0..=100.
    MacroDistribution::from_balanced(values.map(|v| v as u32))
}

fn field_index(field: MacroField) -> usize {
    match field {
        MacroField::Protein => 0,
        MacroField::Carbs => 1,
        MacroField::Fat => 2,
    }
}
