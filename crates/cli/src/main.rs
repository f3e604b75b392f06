use clap::Parser;

use skuforge_cli::Cli;
use skuforge_cli::config::Settings;

fn main() {
    skuforge_observability::init();

    let cli = Cli::parse();
    let settings = Settings::from_env();

    match cli.run(&settings) {
        Ok(output) => {
            println!("{}", output.body);
            if !output.success {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
