//! `revertnet network`: build and display the revert network.

use anyhow::Result;
use std::path::Path;

use crate::cli::display::edge_table;
use crate::services::NetworkBuilder;

pub fn execute(log: &Path, json: bool) -> Result<()> {
    let records = super::load_records(log)?;
    let network = NetworkBuilder::new().build(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&network)?);
    } else {
        if network.edge_count == 0 {
            println!("No revert edges found.");
        } else {
            println!("{}", edge_table(&network.edges));
        }
        println!("{}", network.summary());
    }
    Ok(())
}
