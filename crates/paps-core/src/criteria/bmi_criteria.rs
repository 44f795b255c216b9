/// Upper BMI bounds of the first four categories for one cohort.
///
/// Each bound is inclusive: a BMI equal to `normal_max` is still normal.
/// Anything above `obese_max` is severe obesity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiCriteria {
    pub thin_max: f64,
    pub normal_max: f64,
    pub over_max: f64,
    pub obese_max: f64,
}

impl BmiCriteria {
    pub const fn new(thin_max: f64, normal_max: f64, over_max: f64, obese_max: f64) -> Self {
        Self {
            thin_max,
            normal_max,
            over_max,
            obese_max,
        }
    }

    /// Bounds are ascending and none is NaN.
    pub fn is_ordered(&self) -> bool {
        // NaN fails every comparison, so it is rejected here as well.
        self.thin_max <= self.normal_max
            && self.normal_max <= self.over_max
            && self.over_max <= self.obese_max
    }
}
