use anyhow::{bail, Result};

/// Plus grand numéro jouable à la Mega-Sena.
pub const MAX_NUMBER: u8 = 60;
/// Nombre de numéros tirés par concours.
pub const PICK_COUNT: usize = 6;

#[derive(Debug, Clone)]
pub struct Draw {
    pub draw_id: u32,
    pub date: String,
    pub numbers: [u8; PICK_COUNT],
}

impl Draw {
    /// Construit un tirage validé. Rejette un nombre de numéros différent
    /// de six, un numéro hors de 1-60 ou un doublon dans le même tirage.
    pub fn new(draw_id: u32, date: &str, numbers: &[u8]) -> Result<Self> {
        if numbers.len() != PICK_COUNT {
            bail!(
                "Concours {} : attendu {} numéros, reçu {}",
                draw_id,
                PICK_COUNT,
                numbers.len()
            );
        }
        let mut arr = [0u8; PICK_COUNT];
        arr.copy_from_slice(numbers);
        validate_numbers(&arr)?;
        Ok(Self {
            draw_id,
            date: date.to_string(),
            numbers: arr,
        })
    }
}

pub fn validate_numbers(numbers: &[u8; PICK_COUNT]) -> Result<()> {
    for &n in numbers {
        if n < 1 || n > MAX_NUMBER {
            bail!("Numéro {} hors limites (1-{})", n, MAX_NUMBER);
        }
    }
    for i in 0..numbers.len() {
        for j in (i + 1)..numbers.len() {
            if numbers[i] == numbers[j] {
                bail!("Numéro en double : {}", numbers[i]);
            }
        }
    }
    Ok(())
}

/// Fréquence et retard d'un numéro sur l'historique analysé.
#[derive(Debug, Clone)]
pub struct NumberStats {
    pub number: u8,
    pub frequency: u32,
    /// Nombre de concours écoulés depuis la dernière apparition
    /// (0 = présent au dernier concours, len(historique) = jamais sorti).
    pub gap: u32,
}
