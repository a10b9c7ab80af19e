/// Energy stored in one kilogram of body fat (kcal).
pub const KCAL_PER_KG_BODY_FAT: f64 = 7700.0;

/// Month length used to spread a monthly weight goal over days.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Mifflin-St Jeor coefficients.
pub const BMR_WEIGHT_COEFF: f64 = 10.0;
pub const BMR_HEIGHT_COEFF: f64 = 6.25;
pub const BMR_AGE_COEFF: f64 = 5.0;

/// Sex-specific Mifflin-St Jeor offsets.
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;
