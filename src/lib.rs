pub mod backfill;
pub mod corrections;
pub mod dates;
pub mod prior_seed;
pub mod roster;
pub mod sqlgen;
