use crate::cli::parser::Commands;
use crate::config::Config;
use crate::context::AppContext;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            println!("📄 Configuration ({}):\n", Config::config_file().display());
            print!("{}", serde_yaml::to_string(&ctx.config)?);
        } else {
            println!("Use --print to show the configuration.");
        }
    }

    Ok(())
}
