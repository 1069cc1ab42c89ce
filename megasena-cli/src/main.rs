use anyhow::Result;
use clap::{Parser, Subcommand};

use megasena_cli::analysis::compute_stats;
use megasena_cli::display::{display_draws, display_prediction, display_stats};
use megasena_cli::pipeline::{run_pipeline, PipelineConfig};
use megasena_db::dataset::load_draws_2025;

#[derive(Parser)]
#[command(name = "megasena", about = "Analyseur de probabilités Mega-Sena")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Prédire la prochaine grille (fréquences + forêt aléatoire)
    Predict {
        /// Nombre d'arbres de la forêt
        #[arg(long, default_value_t = 100)]
        trees: usize,

        /// Profondeur maximale des arbres
        #[arg(long, default_value_t = 8)]
        depth: usize,

        /// Seed pour la reproductibilité
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Lister les derniers concours
    History {
        /// Nombre de concours à afficher
        #[arg(short, long, default_value_t = 10)]
        last: usize,
    },

    /// Afficher les statistiques (fréquences et retards)
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Sans sous-commande, on prédit avec les paramètres historiques du script
    match cli.command.unwrap_or(Command::Predict {
        trees: 100,
        depth: 8,
        seed: 42,
    }) {
        Command::Predict { trees, depth, seed } => cmd_predict(trees, depth, seed),
        Command::History { last } => cmd_history(last),
        Command::Stats => cmd_stats(),
    }
}

fn cmd_predict(trees: usize, depth: usize, seed: u64) -> Result<()> {
    println!("Chargement des données 2025...");
    let draws = load_draws_2025()?;

    let config = PipelineConfig { seed, trees, depth };
    let prediction = run_pipeline(&draws, &config)?;

    display_prediction(&draws, &prediction);
    Ok(())
}

fn cmd_history(last: usize) -> Result<()> {
    let draws = load_draws_2025()?;
    display_draws(&draws[..draws.len().min(last)]);
    Ok(())
}

fn cmd_stats() -> Result<()> {
    let draws = load_draws_2025()?;
    let stats = compute_stats(&draws);
    display_stats(&stats, draws.len());
    Ok(())
}
