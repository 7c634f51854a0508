//! Command-line interface for hexagonal board generation

use crate::algorithm::{AutoFill, StepOutcome, assign_tile_combos, quotas_from_percents};
use crate::io::configuration::{
    COLOR_COUNT, DEFAULT_COLOR_PCT, DEFAULT_RADIUS, DEFAULT_SEED, DEFAULT_TYPES_PCT, GameConfig,
    UNITS_PER_TILE,
};
use crate::io::error::{EngineError, Result, invalid_input, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::math::Xorshift32;
use crate::spatial::Board;
use clap::Parser;
use rand::seq::SliceRandom;

/// Hex size used for junction coordinates; placement logic ignores it
const HEX_SIZE: f64 = 40.0;

#[derive(Parser)]
#[command(name = "pairleroy")]
#[command(
    author,
    version,
    about = "Generate edge-matched hexagonal tile boards from seeded quotas"
)]
/// Command-line arguments for the board generation tool
pub struct Cli {
    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u32,

    /// Board radius in hexes
    #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
    pub radius: i32,

    /// Tile-type percentages as mono,bi,tri (must sum to 100)
    #[arg(long, value_delimiter = ',', num_args = 3, default_values_t = DEFAULT_TYPES_PCT)]
    pub types_pct: Vec<u32>,

    /// Color percentages, one per color slot (must sum to 100)
    #[arg(long, value_delimiter = ',', num_args = 4, default_values_t = DEFAULT_COLOR_PCT)]
    pub colors_pct: Vec<u32>,

    /// Assign the whole board from quotas instead of stepping the edge-matched fill
    #[arg(short, long)]
    pub bulk: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    #[must_use]
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build and validate the generation configuration
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] when a percentage table has the
    /// wrong width or does not sum to 100, and
    /// [`EngineError::InvalidParameter`] for a negative radius.
    pub fn config(&self) -> Result<GameConfig> {
        if self.radius < 0 {
            return Err(invalid_parameter(
                "radius",
                &self.radius.to_string(),
                "must be zero or positive",
            ));
        }
        let Ok(types_pct) = <[u32; 3]>::try_from(self.types_pct.as_slice()) else {
            return Err(invalid_input("expected exactly 3 tile type percentages"));
        };
        let Ok(color_pct) = <[u32; COLOR_COUNT]>::try_from(self.colors_pct.as_slice()) else {
            return Err(invalid_input("expected exactly 4 color percentages"));
        };
        let config = GameConfig {
            types_pct,
            color_pct,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Runs one seeded generation according to CLI arguments
pub struct GenerationProcessor {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl GenerationProcessor {
    /// Create a processor with the given CLI arguments
    #[must_use]
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Generate the board and print the summary
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the bulk
    /// assignment engine cannot satisfy its quotas.
    pub fn run(&mut self) -> Result<()> {
        let config = self.cli.config()?;
        let mut rng = Xorshift32::new(self.cli.seed);
        let mut board = Board::new(self.cli.radius, HEX_SIZE);
        if let Some(ref mut pm) = self.progress {
            pm.initialize(board.tile_count());
        }
        let closing = if self.cli.bulk {
            self.fill_bulk(&mut board, &config, &mut rng)?
        } else {
            self.fill_incremental(&mut board, &config, &mut rng)
        };
        if let Some(ref pm) = self.progress {
            pm.finish(&closing);
        }
        Self::print_summary(&board);
        Ok(())
    }

    /// Quota-conformant assignment of every tile at once
    ///
    /// Tile types come from the type percentages over the tile count, color
    /// unit targets from the color percentages over the unit count, then
    /// the phased engine distributes combos and the board takes them
    /// without adjacency checks.
    fn fill_bulk(
        &self,
        board: &mut Board,
        config: &GameConfig,
        rng: &mut Xorshift32,
    ) -> Result<String> {
        let tile_count = board.tile_count();
        let type_counts = quotas_from_percents(tile_count, &config.types_pct_usize())?;
        let mut types: Vec<usize> = type_counts
            .iter()
            .enumerate()
            .flat_map(|(arity_idx, &count)| std::iter::repeat_n(arity_idx + 1, count))
            .collect();
        types.shuffle(rng);
        let unit_quota =
            quotas_from_percents(tile_count * UNITS_PER_TILE, &config.color_pct_usize())?;
        let Ok(unit_targets) = <[usize; COLOR_COUNT]>::try_from(unit_quota.as_slice()) else {
            return Err(EngineError::InvariantViolation {
                check: "quota width",
                details: format!("expected {COLOR_COUNT} color quotas, found {}", unit_quota.len()),
            });
        };
        let combos = assign_tile_combos(&types, &unit_targets, rng)?;
        for (tile_idx, combo) in combos.iter().enumerate() {
            board.force_place(tile_idx, *combo);
            if let Some(ref pm) = self.progress {
                pm.update(board.placed_count());
            }
        }
        Ok(format!("{} tiles assigned", board.placed_count()))
    }

    /// Edge-matched incremental fill, one placement per step
    fn fill_incremental(
        &self,
        board: &mut Board,
        config: &GameConfig,
        rng: &mut Xorshift32,
    ) -> String {
        let mut fill = AutoFill::new();
        loop {
            match fill.step(board, config, rng) {
                StepOutcome::Placed => {
                    if let Some(ref pm) = self.progress {
                        pm.update(board.placed_count());
                    }
                }
                StepOutcome::Done => {
                    if let Some(ref pm) = self.progress {
                        pm.update(board.placed_count());
                    }
                    return "board filled".to_string();
                }
                StepOutcome::Halt => {
                    return format!("halted with {} empty cells", board.empty_count());
                }
            }
        }
    }

    // Allow print for the final summary report
    #[allow(clippy::print_stdout)]
    fn print_summary(board: &Board) {
        let total = board.tile_count();
        let placed = board.placed_count();
        let mut arity_counts = [0usize; 3];
        let mut color_units = [0usize; COLOR_COUNT];
        for tile_idx in 0..total {
            let Some(placement) = board.placement(tile_idx) else {
                continue;
            };
            let arity = placement.combo.pattern.arity();
            if let Some(slot) = arity_counts.get_mut(arity.saturating_sub(1)) {
                *slot += 1;
            }
            for (acc, units) in color_units
                .iter_mut()
                .zip(placement.combo.pattern.units_by_color())
            {
                *acc += units;
            }
        }
        println!("Board radius {}: {placed}/{total} tiles placed", board.radius());
        let placed_f64 = if placed == 0 { 1.0 } else { placed as f64 };
        for (label, count) in ["mono", "bi", "tri"].iter().zip(arity_counts) {
            let pct = count as f64 * 100.0 / placed_f64;
            println!("  {label:<4} {count:>4} ({pct:5.1}%)");
        }
        for (color, units) in color_units.iter().enumerate() {
            println!("  color {color}: {units} units");
        }
        let ready = board.ready_junctions();
        println!("  junctions ready: {}/{}", ready.len(), board.junctions().len());
    }
}
