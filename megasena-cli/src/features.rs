use megasena_db::models::{Draw, MAX_NUMBER};

use crate::analysis::{compute_frequencies, compute_gap};

pub const FEATURE_NAMES: [&str; 5] = [
    "frequence",
    "retard",
    "parite",
    "superieur_30",
    "terminaison",
];

#[derive(Debug, Clone)]
pub struct FeatureRow {
    pub number: u8,
    pub features: Vec<f64>,
    pub label: f64,
}

/// Construit une ligne de features par numéro candidat (1 à MAX_NUMBER).
/// draws[0] = le plus récent. Le label vaut 1.0 si le numéro est dans le
/// dernier concours, 0.0 sinon. Pas de normalisation : mêmes entrées,
/// mêmes features.
pub fn extract_feature_rows(draws: &[Draw]) -> Vec<FeatureRow> {
    let freq = compute_frequencies(draws);
    let last_numbers: &[u8] = draws.first().map(|d| d.numbers.as_slice()).unwrap_or(&[]);

    (1..=MAX_NUMBER)
        .map(|number| {
            let features = vec![
                freq[(number - 1) as usize] as f64,
                compute_gap(draws, number) as f64,
                (number % 2) as f64,
                if number > 30 { 1.0 } else { 0.0 },
                (number % 10) as f64,
            ];
            let label = if last_numbers.contains(&number) { 1.0 } else { 0.0 };
            FeatureRow {
                number,
                features,
                label,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use megasena_db::dataset::load_draws_2025;

    #[test]
    fn test_feature_count() {
        let draws = load_draws_2025().unwrap();
        let rows = extract_feature_rows(&draws);
        assert_eq!(rows.len(), 60);
        for row in &rows {
            assert_eq!(row.features.len(), FEATURE_NAMES.len());
        }
    }

    #[test]
    fn test_labels_from_most_recent_draw() {
        let draws = load_draws_2025().unwrap();
        let rows = extract_feature_rows(&draws);
        for n in [7u8, 22, 31, 42, 50, 60] {
            assert_eq!(rows[(n - 1) as usize].label, 1.0, "numéro {}", n);
        }
        assert_eq!(rows[7].label, 0.0); // numéro 8
    }

    #[test]
    fn test_labels_sum_to_pick_count() {
        let draws = load_draws_2025().unwrap();
        let rows = extract_feature_rows(&draws);
        let sum: f64 = rows.iter().map(|r| r.label).sum();
        assert_eq!(sum, 6.0);
    }

    #[test]
    fn test_feature_values_for_number_7() {
        let draws = load_draws_2025().unwrap();
        let rows = extract_feature_rows(&draws);
        let row = &rows[6];
        assert_eq!(row.number, 7);
        assert_eq!(row.features[0], 1.0); // une seule apparition
        assert_eq!(row.features[1], 0.0); // présent au dernier concours
        assert_eq!(row.features[2], 1.0); // impair
        assert_eq!(row.features[3], 0.0); // pas > 30
        assert_eq!(row.features[4], 7.0); // terminaison
    }

    #[test]
    fn test_feature_values_for_number_60() {
        let draws = load_draws_2025().unwrap();
        let rows = extract_feature_rows(&draws);
        let row = &rows[59];
        assert_eq!(row.features, vec![2.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_features_no_nan() {
        let draws = load_draws_2025().unwrap();
        for row in extract_feature_rows(&draws) {
            for &f in &row.features {
                assert!(f.is_finite(), "feature non finie pour {}", row.number);
            }
        }
    }
}
