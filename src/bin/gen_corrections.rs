use anyhow::Context;

use psgmx_seedgen::corrections;

// Run from the repo root.
const INPUT_PATH: &str = "scripts/correct_users_data.txt";
const OUTPUT_PATH: &str = "scripts/update_users_data.sql";

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let text = std::fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("failed to read {}", INPUT_PATH))?;

    let sql = corrections::build_corrections_script(&text);
    let statements = sql.lines().count().saturating_sub(1);

    std::fs::write(OUTPUT_PATH, &sql)
        .with_context(|| format!("failed to write {}", OUTPUT_PATH))?;
    println!("wrote {} update statements to {}", statements, OUTPUT_PATH);
    Ok(())
}
