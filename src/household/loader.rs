//! Load scenario definitions from JSON files

use super::Scenario;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load all scenarios from a JSON file (an array of scenario objects).
///
/// Applies the input contract on the way in: expected returns are clamped to
/// the risk profile's range and every scenario is validated, so callers only
/// ever see well-formed parameter sets.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, Box<dyn Error>> {
    let file = File::open(path)?;
    load_scenarios_from_reader(BufReader::new(file))
}

/// Load scenarios from any reader (e.g., string buffer)
pub fn load_scenarios_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<Scenario>, Box<dyn Error>> {
    let mut scenarios: Vec<Scenario> = serde_json::from_reader(reader)?;
    for scenario in &mut scenarios {
        scenario.clamp_return_to_profile();
        scenario.validate()?;
    }
    Ok(scenarios)
}
