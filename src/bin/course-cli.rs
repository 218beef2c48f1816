use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "course-cli")]
#[command(about = "Management CLI for the course service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all courses
    List,
    /// Fetch a single course by id
    Get { id: u64 },
    /// Create a new course
    Create { name: String },
    /// Rename an existing course
    Update { id: u64, name: String },
    /// Delete a course by id
    Delete { id: u64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::List => {
            let res = client
                .get(format!("{}/api/courses", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Get { id } => {
            let res = client
                .get(format!("{}/api/courses/{}", cli.url, id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Create { name } => {
            let res = client
                .post(format!("{}/api/courses", cli.url))
                .json(&json!({ "name": name }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Update { id, name } => {
            let res = client
                .put(format!("{}/api/courses/{}", cli.url, id))
                .json(&json!({ "name": name }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Delete { id } => {
            let res = client
                .delete(format!("{}/api/courses/{}", cli.url, id))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
