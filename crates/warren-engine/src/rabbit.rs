//! Rabbit lifecycle rules for one phase.

use warren_core::{Cell, Generation, Rabbit, WorldConfig};
use warren_grid::CellBuffer;

use crate::select::choose_move;
use crate::stats::PhaseStats;

/// Run the rabbit phase: scan `source` in row-major order and write the
/// post-phase rabbit placements into `scratch`.
///
/// `source` is the immutable pre-phase snapshot; newborns written to
/// `scratch` are never revisited, so no rabbit acts in its birth
/// generation. Destination conflicts keep the strictly older rabbit; on
/// equal age the earlier writer (lower scan index) is retained.
pub fn run(
    source: &CellBuffer,
    scratch: &mut CellBuffer,
    config: &WorldConfig,
    generation: Generation,
) -> PhaseStats {
    let mut stats = PhaseStats::default();

    for origin in source.positions() {
        let Cell::Rabbit(mut rabbit) = source.get(origin) else {
            continue;
        };
        stats.processed += 1;

        rabbit.age += 1;
        let can_procreate = rabbit.age > config.gen_proc_rabbits;

        let Some(target) = choose_move(source, generation, origin, Cell::is_empty) else {
            // Boxed in: keep the aged rabbit in place.
            scratch.set(origin, Cell::Rabbit(rabbit));
            stats.stayed += 1;
            continue;
        };
        stats.moved += 1;

        // The counter resets before the move is recorded, so a
        // procreating mover enters any conflict with age 0.
        if can_procreate {
            rabbit.age = 0;
        }

        match scratch.get(target) {
            Cell::Rabbit(earlier) => {
                // Two movers converged; one of them disappears.
                stats.deaths += 1;
                if rabbit.age > earlier.age {
                    scratch.set(target, Cell::Rabbit(rabbit));
                }
            }
            _ => scratch.set(target, Cell::Rabbit(rabbit)),
        }

        if can_procreate {
            scratch.set(origin, Cell::Rabbit(Rabbit::newborn()));
            stats.births += 1;
        } else {
            scratch.set(origin, Cell::Empty);
        }
    }

    stats
}
