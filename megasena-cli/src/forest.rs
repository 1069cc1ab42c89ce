use anyhow::{bail, Result};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Forêt aléatoire binaire : échantillonnage bootstrap, splits par impureté
/// de Gini, sqrt(n_features) features candidates par split. Entraînée en une
/// passe sur la matrice complète ; même seed + mêmes entrées = même forêt.
pub struct RandomForest {
    trees: Vec<TreeNode>,
}

impl RandomForest {
    pub fn fit(
        features: &[Vec<f64>],
        labels: &[f64],
        n_trees: usize,
        max_depth: usize,
        seed: u64,
    ) -> Result<Self> {
        if features.is_empty() {
            bail!("Matrice de features vide, ajustement impossible");
        }
        if features.len() != labels.len() {
            bail!(
                "Dimensions incohérentes : {} lignes de features, {} labels",
                features.len(),
                labels.len()
            );
        }
        if n_trees == 0 {
            bail!("La forêt doit contenir au moins un arbre");
        }
        let first = labels[0];
        if labels.iter().all(|&l| (l - first).abs() < 1e-10) {
            bail!("Labels dégénérés : une seule classe présente, ajustement impossible");
        }

        let n_features = features[0].len();
        let features_per_split = (n_features as f64).sqrt().ceil() as usize;

        let mut rng = StdRng::seed_from_u64(seed);
        let mut trees = Vec::with_capacity(n_trees);

        for _ in 0..n_trees {
            // Échantillonnage bootstrap
            let n_samples = features.len();
            let indices: Vec<usize> = (0..n_samples)
                .map(|_| rng.random_range(0..n_samples))
                .collect();

            let boot_features: Vec<&Vec<f64>> = indices.iter().map(|&i| &features[i]).collect();
            let boot_labels: Vec<f64> = indices.iter().map(|&i| labels[i]).collect();

            trees.push(build_tree(
                &boot_features,
                &boot_labels,
                max_depth,
                features_per_split,
                &mut rng,
            ));
        }

        Ok(Self { trees })
    }

    /// Probabilité estimée de la classe 1 : moyenne des feuilles atteintes.
    pub fn predict_proba(&self, features: &[f64]) -> f64 {
        let sum: f64 = self.trees.iter().map(|t| predict_tree(t, features)).sum();
        sum / self.trees.len() as f64
    }
}

#[derive(Debug)]
enum TreeNode {
    Leaf {
        value: f64,
    },
    Split {
        feature_idx: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

fn build_tree(
    features: &[&Vec<f64>],
    labels: &[f64],
    max_depth: usize,
    features_per_split: usize,
    rng: &mut StdRng,
) -> TreeNode {
    if max_depth == 0 || labels.len() < 4 {
        return TreeNode::Leaf {
            value: labels.iter().sum::<f64>() / labels.len().max(1) as f64,
        };
    }

    // Feuille pure : toutes les étiquettes identiques
    let first = labels[0];
    if labels.iter().all(|&l| (l - first).abs() < 1e-10) {
        return TreeNode::Leaf { value: first };
    }

    let n_features = features[0].len();
    let mut feature_indices: Vec<usize> = (0..n_features).collect();
    feature_indices.shuffle(rng);
    feature_indices.truncate(features_per_split);

    let mut best_gini = f64::MAX;
    let mut best_feature = 0;
    let mut best_threshold = 0.0;

    for &feat_idx in &feature_indices {
        let mut values: Vec<f64> = features.iter().map(|f| f[feat_idx]).collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        values.dedup();

        if values.len() < 2 {
            continue;
        }

        // Seuils à mi-chemin entre valeurs consécutives
        for i in 0..values.len() - 1 {
            let threshold = (values[i] + values[i + 1]) / 2.0;
            let gini = split_gini(features, labels, feat_idx, threshold);

            if gini < best_gini {
                best_gini = gini;
                best_feature = feat_idx;
                best_threshold = threshold;
            }
        }
    }

    if best_gini >= gini_impurity(labels) {
        return TreeNode::Leaf {
            value: labels.iter().sum::<f64>() / labels.len() as f64,
        };
    }

    let mut left_features = Vec::new();
    let mut left_labels = Vec::new();
    let mut right_features = Vec::new();
    let mut right_labels = Vec::new();

    for (i, feat) in features.iter().enumerate() {
        if feat[best_feature] <= best_threshold {
            left_features.push(*feat);
            left_labels.push(labels[i]);
        } else {
            right_features.push(*feat);
            right_labels.push(labels[i]);
        }
    }

    if left_features.is_empty() || right_features.is_empty() {
        return TreeNode::Leaf {
            value: labels.iter().sum::<f64>() / labels.len() as f64,
        };
    }

    TreeNode::Split {
        feature_idx: best_feature,
        threshold: best_threshold,
        left: Box::new(build_tree(
            &left_features,
            &left_labels,
            max_depth - 1,
            features_per_split,
            rng,
        )),
        right: Box::new(build_tree(
            &right_features,
            &right_labels,
            max_depth - 1,
            features_per_split,
            rng,
        )),
    }
}

fn gini_impurity(labels: &[f64]) -> f64 {
    if labels.is_empty() {
        return 0.0;
    }
    let n = labels.len() as f64;
    let p = labels.iter().sum::<f64>() / n;
    2.0 * p * (1.0 - p)
}

fn split_gini(features: &[&Vec<f64>], labels: &[f64], feature_idx: usize, threshold: f64) -> f64 {
    let mut left_labels = Vec::new();
    let mut right_labels = Vec::new();

    for (i, feat) in features.iter().enumerate() {
        if feat[feature_idx] <= threshold {
            left_labels.push(labels[i]);
        } else {
            right_labels.push(labels[i]);
        }
    }

    let n = labels.len() as f64;
    let n_left = left_labels.len() as f64;
    let n_right = right_labels.len() as f64;

    if n_left == 0.0 || n_right == 0.0 {
        return f64::MAX;
    }

    (n_left / n) * gini_impurity(&left_labels) + (n_right / n) * gini_impurity(&right_labels)
}

fn predict_tree(node: &TreeNode, features: &[f64]) -> f64 {
    match node {
        TreeNode::Leaf { value } => *value,
        TreeNode::Split {
            feature_idx,
            threshold,
            left,
            right,
        } => {
            if features[*feature_idx] <= *threshold {
                predict_tree(left, features)
            } else {
                predict_tree(right, features)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separable_data() -> (Vec<Vec<f64>>, Vec<f64>) {
        // Classe 1 si la première feature vaut 1.0
        let mut features = Vec::new();
        let mut labels = Vec::new();
        for i in 0..30 {
            let positive = i % 3 == 0;
            let x0 = if positive { 1.0 } else { 0.0 };
            features.push(vec![x0, (i % 5) as f64, (i % 2) as f64]);
            labels.push(if positive { 1.0 } else { 0.0 });
        }
        (features, labels)
    }

    #[test]
    fn test_fit_rejects_empty_matrix() {
        assert!(RandomForest::fit(&[], &[], 10, 3, 42).is_err());
    }

    #[test]
    fn test_fit_rejects_single_class() {
        let features = vec![vec![1.0], vec![2.0], vec![3.0]];
        let labels = vec![0.0, 0.0, 0.0];
        assert!(RandomForest::fit(&features, &labels, 10, 3, 42).is_err());
    }

    #[test]
    fn test_fit_rejects_mismatched_lengths() {
        let features = vec![vec![1.0], vec![2.0]];
        let labels = vec![0.0, 1.0, 0.0];
        assert!(RandomForest::fit(&features, &labels, 10, 3, 42).is_err());
    }

    #[test]
    fn test_probabilities_in_unit_interval() {
        let (features, labels) = separable_data();
        let forest = RandomForest::fit(&features, &labels, 50, 5, 42).unwrap();
        for row in &features {
            let p = forest.predict_proba(row);
            assert!((0.0..=1.0).contains(&p), "p = {}", p);
        }
    }

    #[test]
    fn test_learns_separable_pattern() {
        let (features, labels) = separable_data();
        let forest = RandomForest::fit(&features, &labels, 100, 5, 42).unwrap();
        for (row, &label) in features.iter().zip(&labels) {
            let p = forest.predict_proba(row);
            if label > 0.5 {
                assert!(p > 0.5, "positif mal classé : p = {}", p);
            } else {
                assert!(p < 0.5, "négatif mal classé : p = {}", p);
            }
        }
    }

    #[test]
    fn test_same_seed_same_probabilities() {
        let (features, labels) = separable_data();
        let a = RandomForest::fit(&features, &labels, 50, 5, 42).unwrap();
        let b = RandomForest::fit(&features, &labels, 50, 5, 42).unwrap();
        for row in &features {
            assert_eq!(a.predict_proba(row), b.predict_proba(row));
        }
    }
}
