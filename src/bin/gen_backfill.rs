use anyhow::Context;
use std::path::Path;

use psgmx_seedgen::backfill;

// Run from the repo root.
const INPUT_PATH: &str = "scripts/users_master.json";
const OUTPUT_PATH: &str = "scripts/update_users_data.sql";

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let users = backfill::load_master_users(Path::new(INPUT_PATH))?;
    println!("found {} users in {}", users.len(), INPUT_PATH);

    let mut rng = rand::thread_rng();
    let sql = backfill::build_backfill_script(&users, &mut rng)?;
    let statements = sql.lines().count().saturating_sub(1);

    std::fs::write(OUTPUT_PATH, &sql)
        .with_context(|| format!("failed to write {}", OUTPUT_PATH))?;
    println!("wrote {} update statements to {}", statements, OUTPUT_PATH);
    Ok(())
}
