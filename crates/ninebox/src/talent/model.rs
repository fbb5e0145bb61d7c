use super::domain::TalentBox;
use super::features::FeatureVector;
use thiserror::Error;

/// The nine calibration points the whole grid assignment is defined by.
/// Feature order matches [`FeatureVector::as_array`]: education level,
/// experience years, grade score, skills count. Changing any row changes
/// classification behavior for every input.
const REFERENCE_ROWS: [([f64; 4], TalentBox); 9] = [
    ([1.0, 2.0, 1.0, 3.0], TalentBox::Underperformer),
    ([1.0, 3.0, 1.0, 4.0], TalentBox::Risk),
    ([1.0, 4.0, 2.0, 5.0], TalentBox::Enigma),
    ([2.0, 3.0, 2.0, 4.0], TalentBox::Inconsistent),
    ([2.0, 4.0, 2.0, 5.0], TalentBox::CorePlayer),
    ([2.0, 5.0, 3.0, 6.0], TalentBox::HighPotential),
    ([3.0, 4.0, 3.0, 5.0], TalentBox::SolidProfessional),
    ([3.0, 5.0, 3.0, 6.0], TalentBox::HighPerformer),
    ([3.0, 6.0, 4.0, 7.0], TalentBox::StarTopTalent),
];

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("feature vector has a non-finite component: {0:?}")]
    NonFiniteFeature([f64; 4]),
}

/// Per-dimension standardization fit once over the reference rows and
/// applied unchanged to every incoming vector afterwards.
#[derive(Debug, Clone)]
pub struct ScalingTransform {
    mean: [f64; 4],
    deviation: [f64; 4],
}

impl ScalingTransform {
    fn fit(rows: &[[f64; 4]]) -> Self {
        let count = rows.len() as f64;

        let mut mean = [0.0; 4];
        for row in rows {
            for (sum, value) in mean.iter_mut().zip(row) {
                *sum += value;
            }
        }
        for sum in &mut mean {
            *sum /= count;
        }

        let mut deviation = [0.0; 4];
        for row in rows {
            for (dim, (variance, value)) in deviation.iter_mut().zip(row).enumerate() {
                let delta = value - mean[dim];
                *variance += delta * delta;
            }
        }
        for variance in &mut deviation {
            let spread = (*variance / count).sqrt();
            // A dimension the references never vary on scales as identity.
            *variance = if spread == 0.0 { 1.0 } else { spread };
        }

        Self { mean, deviation }
    }

    pub fn apply(&self, features: [f64; 4]) -> [f64; 4] {
        let mut scaled = [0.0; 4];
        for dim in 0..4 {
            scaled[dim] = (features[dim] - self.mean[dim]) / self.deviation[dim];
        }
        scaled
    }
}

/// Relative slack under which two squared distances count as equal. Exact
/// geometric ties dissolve into rounding noise after scaling; without the
/// band, the lowest-index rule would be decided by the last few bits.
const TIE_RELATIVE_TOLERANCE: f64 = 1e-9;

fn meaningfully_closer(candidate: f64, incumbent: f64) -> bool {
    let scale = incumbent.max(candidate).max(1.0);
    candidate < incumbent - TIE_RELATIVE_TOLERANCE * scale
}

/// Nearest-reference classifier over the nine scaled calibration points.
///
/// Fit exactly once; immutable and freely shareable afterwards. With one
/// label per calibration point this is a plain nearest-neighbor rule in
/// scaled feature space, ties (up to rounding) resolved toward the lowest
/// grid index.
#[derive(Debug, Clone)]
pub struct ReferenceModel {
    transform: ScalingTransform,
    scaled_rows: [([f64; 4], TalentBox); 9],
}

impl ReferenceModel {
    pub fn fit() -> Self {
        let raw: Vec<[f64; 4]> = REFERENCE_ROWS.iter().map(|(row, _)| *row).collect();
        let transform = ScalingTransform::fit(&raw);

        let mut scaled_rows = REFERENCE_ROWS;
        for (row, _) in &mut scaled_rows {
            *row = transform.apply(*row);
        }

        Self {
            transform,
            scaled_rows,
        }
    }

    pub fn transform(&self) -> &ScalingTransform {
        &self.transform
    }

    /// Assigns the grid cell of the nearest scaled reference row.
    ///
    /// The only failure is a non-finite component, which would poison the
    /// distance comparison; the caller decides what a safe answer is.
    pub fn predict(&self, features: &FeatureVector) -> Result<TalentBox, ModelError> {
        let raw = features.as_array();
        if raw.iter().any(|value| !value.is_finite()) {
            return Err(ModelError::NonFiniteFeature(raw));
        }

        let scaled = self.transform.apply(raw);

        let mut nearest = self.scaled_rows[0].1;
        let mut nearest_distance = squared_distance(&scaled, &self.scaled_rows[0].0);
        for (row, label) in &self.scaled_rows[1..] {
            let distance = squared_distance(&scaled, row);
            // Scanning in index order, a later row must win by more than the
            // tolerance band; rounding-level differences stay on the lower cell.
            if meaningfully_closer(distance, nearest_distance) {
                nearest = *label;
                nearest_distance = distance;
            }
        }

        Ok(nearest)
    }
}

fn squared_distance(left: &[f64; 4], right: &[f64; 4]) -> f64 {
    left.iter()
        .zip(right)
        .map(|(a, b)| (a - b) * (a - b))
        .sum()
}

/// Reference feature vectors exposed for calibration tests.
#[cfg(test)]
pub(crate) fn reference_rows() -> [([f64; 4], TalentBox); 9] {
    REFERENCE_ROWS
}
