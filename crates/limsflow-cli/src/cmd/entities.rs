use crate::output::{print_json, print_table};
use limsflow_core::{registry, EntityType};

pub fn run(json: bool) -> anyhow::Result<i32> {
    if json {
        #[derive(serde::Serialize)]
        struct EntityRow {
            entity: &'static str,
            statuses: Vec<&'static str>,
        }

        let rows: Vec<EntityRow> = EntityType::all()
            .iter()
            .map(|&e| EntityRow {
                entity: e.as_str(),
                statuses: registry::statuses(e).into_iter().map(|i| i.value).collect(),
            })
            .collect();
        print_json(&rows)?;
        return Ok(0);
    }

    let rows: Vec<Vec<String>> = EntityType::all()
        .iter()
        .map(|&e| {
            let chain: Vec<&str> = registry::statuses(e).into_iter().map(|i| i.value).collect();
            vec![e.as_str().to_string(), chain.join(" -> ")]
        })
        .collect();
    print_table(&["ENTITY", "CHAIN"], &rows);
    Ok(0)
}
