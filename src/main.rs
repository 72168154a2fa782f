mod cli;
mod config;
mod jira;
mod logging;
mod model;
mod tui;
mod util;
mod view;

use anyhow::Result;

use cli::Command;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match cli::parse_args(&args)? {
        Command::Help => {
            cli::print_help();
            Ok(())
        }
        Command::List(list) => {
            logging::init(list.debug);
            cli::handle_list(list).await
        }
    }
}
