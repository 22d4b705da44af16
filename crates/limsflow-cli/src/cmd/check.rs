use crate::output::print_json;
use anyhow::Context;
use limsflow_core::{transition, EntityType};
use std::str::FromStr;

pub fn run(
    entity: &str,
    from: &str,
    to: &str,
    role: Option<&str>,
    json: bool,
) -> anyhow::Result<i32> {
    let entity = EntityType::from_str(entity).context("unrecognized entity type")?;

    let allowed = match role {
        Some(role) => transition::is_valid_transition_as(entity, from, to, role),
        None => transition::is_valid_transition(entity, from, to),
    };
    let required = transition::required_role(entity, from, to);

    if json {
        #[derive(serde::Serialize)]
        struct CheckOutput<'a> {
            entity: &'static str,
            from: &'a str,
            to: &'a str,
            actor_role: Option<&'a str>,
            required_role: Option<&'static str>,
            allowed: bool,
        }
        print_json(&CheckOutput {
            entity: entity.as_str(),
            from,
            to,
            actor_role: role,
            required_role: required.map(|r| r.as_str()),
            allowed,
        })?;
    } else if allowed {
        println!("allowed: {from} -> {to}");
    } else {
        match required {
            Some(r) if role.is_some() => {
                println!("denied: {from} -> {to} (requires at least {r})")
            }
            _ => println!("denied: {from} -> {to}"),
        }
    }

    Ok(if allowed { 0 } else { 1 })
}
