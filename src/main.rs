//! CLI entry point for hilsen
//!
//! Composes the engine from the fixed default configuration and runs it once.
//! Command-line arguments are ignored.

fn main() -> anyhow::Result<()> {
    let engine = hilsen::build_engine()?;
    engine.run()?;
    Ok(())
}
