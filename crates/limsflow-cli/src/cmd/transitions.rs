use crate::output::print_json;
use anyhow::Context;
use limsflow_core::{registry, transition, EntityType};
use std::str::FromStr;

pub fn run(entity: &str, status: &str, json: bool) -> anyhow::Result<i32> {
    let entity = EntityType::from_str(entity).context("unrecognized entity type")?;
    // Surface a typo as an error here; the raw validator would silently say
    // "nothing permitted".
    registry::info_for(entity, status).context("unrecognized status")?;

    let next = transition::available_transitions(entity, status);

    if json {
        #[derive(serde::Serialize)]
        struct TransitionsOutput<'a> {
            entity: &'static str,
            from: &'a str,
            next: Vec<&'static str>,
        }
        print_json(&TransitionsOutput {
            entity: entity.as_str(),
            from: status,
            next,
        })?;
        return Ok(0);
    }

    if next.is_empty() {
        println!("{status} is terminal; no transitions available");
    } else {
        for n in next {
            println!("{status} -> {n}");
        }
    }
    Ok(0)
}
