use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use diagram::template;
use posture_core::catalog;
use posture_core::config::AppConfig;
use posture_core::model::Tier;
use std::path::PathBuf;
use workbench::Workbench;

#[derive(Parser, Debug)]
#[command(name = "posture", version, about = "Security architecture posture workbench")]
struct Cli {
    /// Directory holding default.toml and the RUN_MODE overlay
    #[arg(long, global = true, env = "POSTURE_CONFIG_DIR", default_value = "config")]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the component catalog by tier
    Components,
    /// List the built-in templates
    Templates,
    /// Load a template and print its risk assessment as JSON
    Assess { template: String },
    /// Load a template and write the export document
    Export {
        template: String,
        /// Output directory
        #[arg(long, short = 'o', default_value = ".")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_from(&cli.config_dir)
        .with_context(|| format!("loading config from {}", cli.config_dir.display()))?;
    posture_core::init_tracing(&config.log);

    match cli.command {
        Commands::Components => {
            for tier in Tier::ALL {
                println!("{}", tier);
                for component in catalog::by_tier(tier) {
                    println!("  {:<16} {} ({})", component.id, component.name, component.short_name);
                }
            }
        }
        Commands::Templates => {
            for template in template::all() {
                println!("{:<16} {}: {}", template.id, template.name, template.description);
            }
        }
        Commands::Assess { template } => {
            let mut bench = Workbench::new(config);
            bench.load_template(&template)?;
            println!("{}", serde_json::to_string_pretty(&bench.assess())?);
        }
        Commands::Export { template, out } => {
            let mut bench = Workbench::new(config);
            bench.load_template(&template)?;
            let path = bench.write_export(&out)?;
            println!("{}", path.display());
        }
    }

    Ok(())
}
