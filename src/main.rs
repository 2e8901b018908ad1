use anyhow::Result;
use dotenv::dotenv;
use tutordesk::commands::Cli;

fn main() -> Result<()> {
    dotenv().ok();
    Cli::menu()
}
