use serde::{Deserialize, Serialize};

/// Experience level derived from accumulated points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "Novato Financiero")]
    NovatoFinanciero,
    #[serde(rename = "Aprendiz Financiero")]
    AprendizFinanciero,
    #[serde(rename = "Planificador Consciente")]
    PlanificadorConsciente,
    #[serde(rename = "Estratega del Ahorro")]
    EstrategaDelAhorro,
    #[serde(rename = "Maestro del Crédito")]
    MaestroDelCredito,
}

/// Levels ordered by strictly increasing threshold; the first starts at 0.
pub const LEVELS: [Level; 5] = [
    Level::NovatoFinanciero,
    Level::AprendizFinanciero,
    Level::PlanificadorConsciente,
    Level::EstrategaDelAhorro,
    Level::MaestroDelCredito,
];

impl Level {
    pub fn name(&self) -> &'static str {
        match self {
            Level::NovatoFinanciero => "Novato Financiero",
            Level::AprendizFinanciero => "Aprendiz Financiero",
            Level::PlanificadorConsciente => "Planificador Consciente",
            Level::EstrategaDelAhorro => "Estratega del Ahorro",
            Level::MaestroDelCredito => "Maestro del Crédito",
        }
    }

    pub fn min_points(&self) -> u32 {
        match self {
            Level::NovatoFinanciero => 0,
            Level::AprendizFinanciero => 50,
            Level::PlanificadorConsciente => 120,
            Level::EstrategaDelAhorro => 250,
            Level::MaestroDelCredito => 500,
        }
    }

    /// The following level, if any.
    pub fn next(&self) -> Option<Level> {
        LEVELS
            .iter()
            .skip_while(|level| *level != self)
            .nth(1)
            .copied()
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the highest level whose threshold is at most `points`.
pub fn calculate_level(points: u32) -> Level {
    let mut current = LEVELS[0];
    for level in LEVELS {
        if points >= level.min_points() {
            current = level;
        } else {
            break;
        }
    }
    current
}

/// Points still missing to reach the next level, `None` at the top level.
pub fn points_to_next_level(points: u32) -> Option<u32> {
    calculate_level(points)
        .next()
        .map(|next| next.min_points().saturating_sub(points))
}
