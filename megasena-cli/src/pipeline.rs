use anyhow::{bail, Result};

use megasena_db::models::{Draw, NumberStats, MAX_NUMBER, PICK_COUNT};

use crate::analysis::compute_stats;
use crate::features::extract_feature_rows;
use crate::forest::RandomForest;

/// Configuration du pipeline. Les valeurs par défaut reproduisent le
/// comportement historique du script (100 arbres, seed 42).
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    pub seed: u64,
    pub trees: usize,
    pub depth: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            trees: 100,
            depth: 8,
        }
    }
}

/// Résultat structuré du pipeline : le calcul est séparé de l'affichage.
#[derive(Debug, Clone)]
pub struct Prediction {
    /// Les six numéros recommandés, triés par ordre croissant.
    pub grid: [u8; PICK_COUNT],
    /// Probabilité estimée par numéro, indexée par numéro - 1.
    pub probabilities: Vec<f64>,
    /// Fréquence et retard par numéro, indexés par numéro - 1.
    pub stats: Vec<NumberStats>,
}

/// Exécute toute la chaîne : statistiques, features, entraînement de la
/// forêt, scoring et sélection. Attention : la forêt est entraînée et évaluée
/// sur les mêmes 60 lignes, les probabilités mesurent donc la qualité
/// d'ajustement et non une capacité de généralisation.
pub fn run_pipeline(draws: &[Draw], config: &PipelineConfig) -> Result<Prediction> {
    if draws.is_empty() {
        bail!("Historique vide : fréquences et retards indéfinis");
    }

    let stats = compute_stats(draws);
    let rows = extract_feature_rows(draws);

    let features: Vec<Vec<f64>> = rows.iter().map(|r| r.features.clone()).collect();
    let labels: Vec<f64> = rows.iter().map(|r| r.label).collect();

    let forest = RandomForest::fit(&features, &labels, config.trees, config.depth, config.seed)?;

    let probabilities: Vec<f64> = rows.iter().map(|r| forest.predict_proba(&r.features)).collect();

    let grid = select_grid(&probabilities, &stats);

    Ok(Prediction {
        grid,
        probabilities,
        stats,
    })
}

/// Trie les candidats par (probabilité décroissante, fréquence décroissante,
/// numéro croissant) — ordre total strict — puis garde les six premiers,
/// rendus par ordre croissant.
fn select_grid(probabilities: &[f64], stats: &[NumberStats]) -> [u8; PICK_COUNT] {
    let mut order: Vec<u8> = (1..=MAX_NUMBER).collect();
    order.sort_by(|&a, &b| {
        let pa = probabilities[(a - 1) as usize];
        let pb = probabilities[(b - 1) as usize];
        pb.partial_cmp(&pa)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                let fa = stats[(a - 1) as usize].frequency;
                let fb = stats[(b - 1) as usize].frequency;
                fb.cmp(&fa)
            })
            .then_with(|| a.cmp(&b))
    });

    let mut grid = [0u8; PICK_COUNT];
    grid.copy_from_slice(&order[..PICK_COUNT]);
    grid.sort();
    grid
}
