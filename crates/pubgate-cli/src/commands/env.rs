use miette::Result;

use pubgate_core::config::{Credentials, Environment};
use pubgate_core::workspace::Workspace;

pub fn exec(workspace: &Workspace, reveal: bool) -> Result<()> {
    let env = Environment::from_process();
    let repository = &workspace.manifest.repository;
    println!("Repository {} ({})", repository.name, repository.base_url()?);

    for project in &workspace.members {
        let credentials = Credentials::resolve(&project.properties, &env);
        let username = credentials.username.as_deref().unwrap_or("<not set>");
        let token = credentials
            .password
            .as_ref()
            .map(|s| s.display(reveal))
            .unwrap_or("<not set>");
        println!("  {}: username = {username}, token = {token}", project.name);
    }
    Ok(())
}
