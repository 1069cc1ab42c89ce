use megasena_db::models::{Draw, NumberStats, MAX_NUMBER, PICK_COUNT};

/// Fréquence de chaque numéro sur tout l'historique.
/// Retourne un vecteur dense de taille MAX_NUMBER, indexé par numéro - 1 ;
/// un numéro jamais sorti compte 0.
pub fn compute_frequencies(draws: &[Draw]) -> Vec<u32> {
    let mut freq = vec![0u32; MAX_NUMBER as usize];
    for draw in draws {
        for &n in &draw.numbers {
            freq[(n - 1) as usize] += 1;
        }
    }
    freq
}

/// Retard d'un numéro : index (base 0) du concours le plus récent qui le
/// contient, en parcourant depuis draws[0]. Un numéro jamais sorti a un
/// retard de draws.len() (sentinelle « au moins aussi ancien »).
pub fn compute_gap(draws: &[Draw], number: u8) -> usize {
    for (i, draw) in draws.iter().enumerate() {
        if draw.numbers.contains(&number) {
            return i;
        }
    }
    draws.len()
}

/// Fréquence et retard pour chaque numéro de 1 à MAX_NUMBER.
pub fn compute_stats(draws: &[Draw]) -> Vec<NumberStats> {
    let freq = compute_frequencies(draws);
    (1..=MAX_NUMBER)
        .map(|n| NumberStats {
            number: n,
            frequency: freq[(n - 1) as usize],
            gap: compute_gap(draws, n) as u32,
        })
        .collect()
}

/// Répartition bas/haut et pair/impair d'une grille.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSummary {
    pub low: usize,
    pub high: usize,
    pub even: usize,
    pub odd: usize,
}

pub fn grid_summary(numbers: &[u8; PICK_COUNT]) -> GridSummary {
    let low = numbers.iter().filter(|&&n| n <= 30).count();
    let even = numbers.iter().filter(|&&n| n % 2 == 0).count();
    GridSummary {
        low,
        high: PICK_COUNT - low,
        even,
        odd: PICK_COUNT - even,
    }
}
