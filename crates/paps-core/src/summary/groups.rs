use crate::bmi::round_to_tenth;
use crate::domain::{FitnessGroup, Grade};

/// Mean points (1.0 to 5.0) per fitness group; 0.0 where nothing contributed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FitnessGroups {
    pub cardio: f64,
    pub flexibility: f64,
    pub strength_endurance: f64,
    pub power: f64,
    pub obesity: f64,
}

impl FitnessGroups {
    pub fn get(&self, group: FitnessGroup) -> f64 {
        match group {
            FitnessGroup::Cardio => self.cardio,
            FitnessGroup::Flexibility => self.flexibility,
            FitnessGroup::StrengthEndurance => self.strength_endurance,
            FitnessGroup::Power => self.power,
            FitnessGroup::Obesity => self.obesity,
        }
    }

    fn set(&mut self, group: FitnessGroup, value: f64) {
        match group {
            FitnessGroup::Cardio => self.cardio = value,
            FitnessGroup::Flexibility => self.flexibility = value,
            FitnessGroup::StrengthEndurance => self.strength_endurance = value,
            FitnessGroup::Power => self.power = value,
            FitnessGroup::Obesity => self.obesity = value,
        }
    }

    /// Groups paired with their scores, in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FitnessGroup, f64)> + '_ {
        FitnessGroup::ALL.into_iter().map(|group| (group, self.get(group)))
    }

    /// Lowest-scoring populated group; the first one in field order on ties.
    pub fn weakest(&self) -> Option<(FitnessGroup, f64)> {
        self.iter()
            .filter(|&(_, score)| score > 0.0)
            .fold(None, |lowest, (group, score)| match lowest {
                Some((_, low)) if low <= score => lowest,
                _ => Some((group, score)),
            })
    }
}

/// Running sums and sample counts per group.
#[derive(Debug, Default)]
pub(crate) struct GroupAccumulator {
    sums: [f64; 5],
    counts: [u32; 5],
}

impl GroupAccumulator {
    pub(crate) fn add(&mut self, group: FitnessGroup, grade: Grade) {
        let i = group.index();
        self.sums[i] += f64::from(grade.points());
        self.counts[i] += 1;
    }

    /// Averages each group, then folds the BMI points into obesity as one
    /// more sample.
    pub(crate) fn finish(self, bmi_grade: Grade) -> FitnessGroups {
        let mut groups = FitnessGroups::default();
        let counts = self.counts;

        for group in FitnessGroup::ALL {
            let i = group.index();
            if counts[i] > 0 {
                groups.set(group, round_to_tenth(self.sums[i] / f64::from(counts[i])));
            }
        }

        let bmi_points = f64::from(bmi_grade.points());
        let i = FitnessGroup::Obesity.index();
        if counts[i] == 0 {
            groups.obesity = bmi_points;
        } else {
            let n = f64::from(counts[i]);
            groups.obesity = round_to_tenth((groups.obesity * n + bmi_points) / (n + 1.0));
        }

        groups
    }
}
