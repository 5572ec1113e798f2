//! Basic example demonstrating the ProjectManager API client.
//!
//! Run with:
//! ```
//! PM_API_KEY=your-key cargo run --example basic
//! ```

use pmapi::{PmClient, QueryOptions};

#[tokio::main]
async fn main() -> pmapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating ProjectManager client...");
    let client = PmClient::from_env()?;

    // Who are we?
    let me = client.workspaces().me().await?.into_result()?;
    println!(
        "Signed in as {} ({})",
        me.full_name.as_deref().unwrap_or("unknown"),
        me.email.as_deref().unwrap_or("no email")
    );

    // List the first ten projects
    println!("\n--- Listing Projects ---");
    let projects = client
        .projects()
        .list(&QueryOptions::window(0, 10).order_by("name asc"))
        .await?;

    let Some(projects) = projects.data() else {
        println!("Request failed: {:?}", projects.error());
        return Ok(());
    };
    println!("Found {} projects", projects.len());

    for project in projects {
        println!(
            "  - {} ({}% complete)",
            project.name.as_deref().unwrap_or("<unnamed>"),
            project.percent_complete.unwrap_or(0)
        );
    }

    // Show open tasks in the first project
    if let Some(first) = projects.first().and_then(|p| p.id.as_deref()) {
        println!("\n--- Open Tasks ---");
        let query = QueryOptions::window(0, 20)
            .filter(format!("projectId eq {first} and percentComplete lt 100"));
        let tasks = client.tasks().list(&query).await?.into_result()?;

        for task in &tasks {
            println!(
                "  - {} [{}]",
                task.name.as_deref().unwrap_or("<unnamed>"),
                task.assignee_names().join(", ")
            );
        }
    }

    // Unread notifications
    let unread = client.notifications().count().await?.into_result()?;
    println!("\nUnread notifications: {}", unread.count.unwrap_or(0));

    Ok(())
}
