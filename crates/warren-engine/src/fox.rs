//! Fox lifecycle rules for one phase.

use warren_core::{Cell, Fox, Generation, WorldConfig};
use warren_grid::CellBuffer;

use crate::select::choose_move;
use crate::stats::PhaseStats;

/// Run the fox phase: scan `source` (the post-rabbit-phase grid) in
/// row-major order and write the post-phase fox placements into
/// `scratch`.
///
/// Each fox tries, in order: hunt an adjacent rabbit (hunger resets,
/// prey cell overwritten unconditionally — the later hunter wins a
/// shared prey cell); otherwise go hungry and die at the starvation
/// threshold before any move; otherwise relocate to an empty cell with
/// older-age-wins conflict resolution, ties going to the less hungry
/// fox.
pub fn run(
    source: &CellBuffer,
    scratch: &mut CellBuffer,
    config: &WorldConfig,
    generation: Generation,
) -> PhaseStats {
    let mut stats = PhaseStats::default();

    for origin in source.positions() {
        let Cell::Fox(mut fox) = source.get(origin) else {
            continue;
        };
        stats.processed += 1;

        fox.age += 1;
        let can_procreate = fox.age > config.gen_proc_foxes;

        // Hunting comes first and, when it succeeds, settles the fox's
        // whole turn.
        if let Some(target) = choose_move(source, generation, origin, Cell::is_rabbit) {
            stats.moved += 1;
            if can_procreate {
                fox.age = 0;
            }
            fox.hunger = 0;
            if scratch.get(target).is_rabbit() {
                stats.prey_taken += 1;
            } else {
                // An earlier hunter already took this rabbit; it is
                // displaced by the later write.
                stats.deaths += 1;
            }
            scratch.set(target, Cell::Fox(fox));
            if can_procreate {
                scratch.set(origin, Cell::Fox(Fox::newborn()));
                stats.births += 1;
            } else {
                scratch.set(origin, Cell::Empty);
            }
            continue;
        }

        // Starvation precedes movement: a fox that hits the threshold
        // this generation neither moves nor procreates.
        fox.hunger += 1;
        if fox.hunger >= config.gen_food_foxes {
            scratch.set(origin, Cell::Empty);
            stats.deaths += 1;
            continue;
        }

        let Some(target) = choose_move(source, generation, origin, Cell::is_empty) else {
            scratch.set(origin, Cell::Fox(fox));
            stats.stayed += 1;
            continue;
        };
        stats.moved += 1;

        if can_procreate {
            fox.age = 0;
        }

        match scratch.get(target) {
            Cell::Fox(earlier) => {
                stats.deaths += 1;
                let wins = fox.age > earlier.age
                    || (fox.age == earlier.age && fox.hunger < earlier.hunger);
                if wins {
                    scratch.set(target, Cell::Fox(fox));
                }
            }
            _ => scratch.set(target, Cell::Fox(fox)),
        }

        if can_procreate {
            scratch.set(origin, Cell::Fox(Fox::newborn()));
            stats.births += 1;
        } else {
            scratch.set(origin, Cell::Empty);
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use warren_core::{Pos, Rabbit};
    use warren_grid::GridPair;

    fn config(gen_proc_foxes: u32, gen_food_foxes: u32, rows: u32, cols: u32) -> WorldConfig {
        WorldConfig {
            gen_proc_rabbits: 99,
            gen_proc_foxes,
            gen_food_foxes,
            n_gen: 1,
            n_rows: rows,
            n_cols: cols,
        }
    }

    fn phase(initial: CellBuffer, cfg: &WorldConfig, gen: u64) -> (CellBuffer, PhaseStats) {
        let mut pair = GridPair::new(initial);
        let guard = pair.begin_phase().unwrap();
        let stats = run(guard.source, guard.scratch, cfg, Generation(gen));
        pair.commit().unwrap();
        (pair.current().clone(), stats)
    }

    // ── Hunting ─────────────────────────────────────────────────

    #[test]
    fn fox_eats_adjacent_rabbit_and_resets_hunger() {
        let cfg = config(99, 10, 1, 3);
        let mut grid = CellBuffer::new(1, 3).unwrap();
        grid.set(Pos::new(0, 0), Cell::Fox(Fox { age: 1, hunger: 8 }));
        grid.set(Pos::new(0, 1), Cell::Rabbit(Rabbit { age: 2 }));

        let (after, stats) = phase(grid, &cfg, 0);

        assert_eq!(
            after.get(Pos::new(0, 1)),
            Cell::Fox(Fox { age: 2, hunger: 0 })
        );
        assert!(after.get(Pos::new(0, 0)).is_empty());
        assert_eq!(stats.prey_taken, 1);
        assert_eq!(after.census().rabbits, 0);
    }

    #[test]
    fn hunting_beats_plain_movement() {
        // Empty cells on three sides, rabbit on the fourth: the hunt
        // predicate runs first and wins regardless of the empty mask.
        let cfg = config(99, 10, 3, 3);
        let mut grid = CellBuffer::new(3, 3).unwrap();
        grid.set(Pos::new(1, 1), Cell::Fox(Fox::newborn()));
        grid.set(Pos::new(2, 1), Cell::Rabbit(Rabbit::newborn()));

        let (after, _) = phase(grid, &cfg, 3);

        assert!(after.get(Pos::new(2, 1)).is_fox());
        assert_eq!(after.census().rabbits, 0);
    }

    #[test]
    fn later_hunter_wins_shared_prey() {
        // F(young) R F(old): both foxes hunt the middle rabbit. The
        // later-scanned fox overwrites unconditionally — no age contest.
        let cfg = config(99, 10, 1, 3);
        let mut grid = CellBuffer::new(1, 3).unwrap();
        grid.set(Pos::new(0, 0), Cell::Fox(Fox { age: 1, hunger: 0 }));
        grid.set(Pos::new(0, 1), Cell::Rabbit(Rabbit::newborn()));
        grid.set(Pos::new(0, 2), Cell::Fox(Fox { age: 7, hunger: 3 }));

        let (after, stats) = phase(grid, &cfg, 0);

        assert_eq!(
            after.get(Pos::new(0, 1)),
            Cell::Fox(Fox { age: 8, hunger: 0 })
        );
        assert_eq!(stats.prey_taken, 1);
        assert_eq!(stats.deaths, 1);
        assert_eq!(after.census().foxes, 1);
    }

    #[test]
    fn hunt_procreation_leaves_newborn() {
        let cfg = config(2, 10, 1, 3);
        let mut grid = CellBuffer::new(1, 3).unwrap();
        grid.set(Pos::new(0, 0), Cell::Fox(Fox { age: 2, hunger: 1 }));
        grid.set(Pos::new(0, 1), Cell::Rabbit(Rabbit::newborn()));

        let (after, stats) = phase(grid, &cfg, 0);

        // Age 3 > 2: parent resets and a newborn stays behind.
        assert_eq!(
            after.get(Pos::new(0, 1)),
            Cell::Fox(Fox { age: 0, hunger: 0 })
        );
        assert_eq!(
            after.get(Pos::new(0, 0)),
            Cell::Fox(Fox { age: 0, hunger: 0 })
        );
        assert_eq!(stats.births, 1);
    }

    // ── Starvation ──────────────────────────────────────────────

    #[test]
    fn fox_starves_at_threshold() {
        let cfg = config(99, 3, 1, 1);
        let mut grid = CellBuffer::new(1, 1).unwrap();
        grid.set(Pos::new(0, 0), Cell::Fox(Fox { age: 0, hunger: 2 }));

        let (after, stats) = phase(grid, &cfg, 0);

        // hunger 2 + 1 = 3 >= 3: removed before any movement attempt.
        assert!(after.get(Pos::new(0, 0)).is_empty());
        assert_eq!(stats.deaths, 1);
    }

    #[test]
    fn starvation_preempts_procreation() {
        // Eligible to procreate and free to move, but the hunger
        // threshold hits first: no move, no newborn.
        let cfg = config(1, 2, 1, 3);
        let mut grid = CellBuffer::new(1, 3).unwrap();
        grid.set(Pos::new(0, 0), Cell::Fox(Fox { age: 5, hunger: 1 }));

        let (after, stats) = phase(grid, &cfg, 0);

        assert_eq!(after.census().foxes, 0);
        assert_eq!(stats.births, 0);
        assert_eq!(stats.deaths, 1);
    }

    #[test]
    fn hungry_fox_survives_below_threshold() {
        let cfg = config(99, 3, 1, 1);
        let mut grid = CellBuffer::new(1, 1).unwrap();
        grid.set(Pos::new(0, 0), Cell::Fox(Fox { age: 0, hunger: 1 }));

        let (after, stats) = phase(grid, &cfg, 0);

        assert_eq!(
            after.get(Pos::new(0, 0)),
            Cell::Fox(Fox { age: 1, hunger: 2 })
        );
        assert_eq!(stats.stayed, 1);
    }

    #[test]
    fn eating_outruns_starvation() {
        // One generation from death, but a rabbit is adjacent: the hunt
        // resets hunger before the starvation check would run.
        let cfg = config(99, 3, 1, 2);
        let mut grid = CellBuffer::new(1, 2).unwrap();
        grid.set(Pos::new(0, 0), Cell::Fox(Fox { age: 0, hunger: 2 }));
        grid.set(Pos::new(0, 1), Cell::Rabbit(Rabbit::newborn()));

        let (after, stats) = phase(grid, &cfg, 0);

        assert_eq!(
            after.get(Pos::new(0, 1)),
            Cell::Fox(Fox { age: 1, hunger: 0 })
        );
        assert_eq!(stats.deaths, 0);
    }

    // ── Plain movement ──────────────────────────────────────────

    #[test]
    fn plain_move_conflict_older_wins() {
        let cfg = config(99, 10, 1, 3);
        let mut grid = CellBuffer::new(1, 3).unwrap();
        grid.set(Pos::new(0, 0), Cell::Fox(Fox { age: 1, hunger: 0 }));
        grid.set(Pos::new(0, 2), Cell::Fox(Fox { age: 6, hunger: 4 }));

        let (after, stats) = phase(grid, &cfg, 0);

        assert_eq!(
            after.get(Pos::new(0, 1)),
            Cell::Fox(Fox { age: 7, hunger: 5 })
        );
        assert_eq!(after.census().foxes, 1);
        assert_eq!(stats.deaths, 1);
    }

    #[test]
    fn plain_move_tie_keeps_less_hungry() {
        let cfg = config(99, 10, 1, 3);
        let mut grid = CellBuffer::new(1, 3).unwrap();
        grid.set(Pos::new(0, 0), Cell::Fox(Fox { age: 3, hunger: 4 }));
        grid.set(Pos::new(0, 2), Cell::Fox(Fox { age: 3, hunger: 1 }));

        let (after, _) = phase(grid, &cfg, 0);

        // Equal ages after increment; the later mover is less hungry and
        // takes the cell.
        assert_eq!(
            after.get(Pos::new(0, 1)),
            Cell::Fox(Fox { age: 4, hunger: 2 })
        );
        assert_eq!(after.census().foxes, 1);
    }

    #[test]
    fn newborn_fox_never_inherits_hunger() {
        let cfg = config(1, 10, 1, 3);
        let mut grid = CellBuffer::new(1, 3).unwrap();
        grid.set(Pos::new(0, 0), Cell::Fox(Fox { age: 3, hunger: 5 }));

        let (after, stats) = phase(grid, &cfg, 0);

        // Parent moves east carrying hunger 6; the newborn starts clean.
        assert_eq!(
            after.get(Pos::new(0, 1)),
            Cell::Fox(Fox { age: 0, hunger: 6 })
        );
        assert_eq!(
            after.get(Pos::new(0, 0)),
            Cell::Fox(Fox { age: 0, hunger: 0 })
        );
        assert_eq!(stats.births, 1);
    }

    // ── Accounting ──────────────────────────────────────────────

    #[test]
    fn population_identity_holds() {
        let cfg = config(2, 3, 5, 5);
        let mut grid = CellBuffer::new(5, 5).unwrap();
        grid.set(Pos::new(0, 0), Cell::Fox(Fox { age: 2, hunger: 2 }));
        grid.set(Pos::new(1, 3), Cell::Fox(Fox { age: 0, hunger: 2 }));
        grid.set(Pos::new(2, 2), Cell::Fox(Fox { age: 4, hunger: 0 }));
        grid.set(Pos::new(4, 4), Cell::Fox(Fox { age: 1, hunger: 1 }));
        grid.set(Pos::new(2, 3), Cell::Rabbit(Rabbit { age: 1 }));
        grid.set(Pos::new(4, 0), Cell::Rabbit(Rabbit { age: 1 }));
        let before = grid.census();

        let (after, stats) = phase(grid, &cfg, 1);

        let census = after.census();
        assert_eq!(
            census.foxes,
            before.foxes + stats.births - stats.deaths
        );
        assert_eq!(census.rabbits, before.rabbits - stats.prey_taken);
        assert_eq!(stats.processed, before.foxes);
    }
}
