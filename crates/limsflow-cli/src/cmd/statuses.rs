use crate::output::{print_json, print_table};
use anyhow::Context;
use limsflow_core::{registry, EntityType};
use std::str::FromStr;

pub fn run(entity: &str, json: bool) -> anyhow::Result<i32> {
    let entity = EntityType::from_str(entity).context("unrecognized entity type")?;
    let statuses = registry::statuses(entity);

    if json {
        print_json(&statuses)?;
        return Ok(0);
    }

    let rows: Vec<Vec<String>> = statuses
        .iter()
        .map(|i| {
            vec![
                i.value.to_string(),
                i.label.to_string(),
                if i.is_final { "yes".to_string() } else { String::new() },
                i.color.to_string(),
                i.description.to_string(),
            ]
        })
        .collect();
    print_table(&["VALUE", "LABEL", "FINAL", "COLOR", "DESCRIPTION"], &rows);
    Ok(0)
}
