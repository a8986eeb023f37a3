use crate::output::print_json;
use anyhow::Context;
use std::path::Path;
use tariq_core::analysis::{analyze_session, HttpAnalyzer};
use tariq_core::config::Config;

pub fn run(root: &Path, summary: &str, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let analyzer = HttpAnalyzer::from_config(&config.analysis)?;
    let outcome = analyze_session(&analyzer, &config.analysis, summary)?;

    if json {
        print_json(&outcome)?;
    } else {
        println!("{}", outcome.text());
    }
    Ok(())
}
