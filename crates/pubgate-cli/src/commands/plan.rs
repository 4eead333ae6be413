//! Handler for `pubgate plan`.

use miette::Result;

use pubgate_core::config::Environment;
use pubgate_core::workspace::Workspace;
use pubgate_ops::ops_plan::{plan, Plan};

use crate::cli::PlanFormat;

pub fn exec(workspace: &Workspace, format: PlanFormat) -> Result<()> {
    let env = Environment::from_process();
    let plan = plan(workspace, &env)?;
    match format {
        PlanFormat::Json => println!("{}", plan.to_json()?),
        PlanFormat::Text => print_text(&plan),
    }
    Ok(())
}

fn print_text(plan: &Plan) {
    println!("Repository {} ({})", plan.repository.name, plan.repository.url);
    for project in &plan.projects {
        println!();
        println!("{} [{}]", project.name, project.shape);
        if project.deferred {
            println!("  publications configured by its own plugin");
            continue;
        }
        for publication in &project.publications {
            let coords = publication
                .coordinates
                .as_deref()
                .unwrap_or("<GROUP or VERSION_NAME not set>");
            println!("  {} -> {}", publication.task, coords);
            if let Some(component) = &publication.component {
                println!("    component: {component}");
            }
            for artifact in &publication.artifacts {
                println!("    artifact:  {artifact}");
            }
        }
    }
}
