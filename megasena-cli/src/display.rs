use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use megasena_db::models::{Draw, NumberStats};

use crate::analysis::grid_summary;
use crate::pipeline::Prediction;

pub fn display_draws(draws: &[Draw]) {
    if draws.is_empty() {
        println!("Aucun concours à afficher.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Concours", "Date", "Numéros"]);

    for draw in draws {
        let mut sorted = draw.numbers;
        sorted.sort();
        let numbers_str = sorted
            .iter()
            .map(|n| format!("{:2}", n))
            .collect::<Vec<_>>()
            .join(" - ");

        table.add_row(vec![&draw.draw_id.to_string(), &draw.date, &numbers_str]);
    }

    println!("{table}");
}

pub fn display_stats(stats: &[NumberStats], draw_count: usize) {
    println!("\n📊 Statistiques sur les {} derniers concours\n", draw_count);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Numéro", "Fréquence", "Retard"]);

    let mut sorted = stats.to_vec();
    sorted.sort_by(|a, b| b.frequency.cmp(&a.frequency));

    for stat in &sorted {
        table.add_row(vec![
            &format!("{:2}", stat.number),
            &stat.frequency.to_string(),
            &stat.gap.to_string(),
        ]);
    }
    println!("{table}");
}

/// Rapport complet : derniers concours, grille recommandée, statistiques,
/// avertissement sur la nature simulée des données.
pub fn display_prediction(draws: &[Draw], prediction: &Prediction) {
    println!("\n=== Derniers concours 2025 ===");
    display_draws(&draws[..draws.len().min(3)]);

    println!("\n=== Recommandation pour le prochain concours ===");
    let grid_str = prediction
        .grid
        .iter()
        .map(|n| format!("{:2}", n))
        .collect::<Vec<_>>()
        .join(" - ");
    println!("Grille : {}", grid_str);

    let hottest = prediction
        .stats
        .iter()
        .fold(&prediction.stats[0], |best, s| {
            if s.frequency > best.frequency {
                s
            } else {
                best
            }
        });
    let most_overdue = prediction
        .stats
        .iter()
        .fold(&prediction.stats[0], |best, s| {
            if s.gap > best.gap {
                s
            } else {
                best
            }
        });
    let summary = grid_summary(&prediction.grid);

    println!("\n=== Statistiques ===");
    println!(
        "Numéro le plus fréquent : {} ({} sorties)",
        hottest.number, hottest.frequency
    );
    println!(
        "Numéro le plus en retard : {} ({} concours)",
        most_overdue.number, most_overdue.gap
    );
    println!(
        "Répartition : {} bas (≤ 30) et {} hauts (> 30)",
        summary.low, summary.high
    );
    println!(
        "Pairs/Impairs : {} pairs et {} impairs",
        summary.even, summary.odd
    );

    println!("\nObservation : données simulées pour un exercice académique.");
    println!("Pour les données réelles, téléchargez l'historique sur le site de la Caixa.");
}
