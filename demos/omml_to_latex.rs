//! CLI tool for translating the equations of an OMML-bearing XML part to LaTeX.
//!
//! Input is any XML containing `m:oMath` elements, typically `word/document.xml`
//! extracted from a .docx archive, or a bare `<m:oMath>` fragment.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example omml_to_latex -- document.xml
//! ```
//!
//! With custom lookup tables and logging:
//! ```sh
//! RUST_LOG=debug cargo run --example omml_to_latex -- document.xml --tables tables.yaml
//! ```
//!
//! Print the default tables as a starting point for customization:
//! ```sh
//! cargo run --example omml_to_latex -- --dump-tables
//! ```

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use omml_latex::{LatexTables, load_with_tables};
use std::fs;
use std::path::PathBuf;

/// Translate OMML equations to LaTeX
#[derive(Parser, Debug)]
#[command(
    name = "omml_to_latex",
    about = "Translate Office Math (OMML) equations to LaTeX",
    version
)]
struct Args {
    /// XML file containing m:oMath elements
    #[arg(value_name = "INPUT", required_unless_present = "dump_tables")]
    input: Option<PathBuf>,

    /// YAML file overriding the default lookup tables
    #[arg(short, long, value_name = "TABLES")]
    tables: Option<PathBuf>,

    /// Wrap each expression in $...$
    #[arg(long)]
    inline: bool,

    /// Stop at the first expression that cannot be translated
    #[arg(long)]
    strict: bool,

    /// Print the default lookup tables as YAML and exit
    #[arg(long)]
    dump_tables: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if args.dump_tables {
        print!("{}", LatexTables::default().to_yaml()?);
        return Ok(());
    }

    let tables = match &args.tables {
        Some(path) => LatexTables::from_yaml(&fs::read_to_string(path)?)?,
        None => LatexTables::default(),
    };

    let Some(input) = args.input else {
        return Ok(());
    };
    info!("Reading {}", input.display());
    let xml = fs::read_to_string(&input)?;

    let mut failures = 0;
    for (index, result) in load_with_tables(&xml, &tables)?.into_iter().enumerate() {
        match result {
            Ok(latex) if args.inline => println!("${}$", latex),
            Ok(latex) => println!("{}", latex),
            Err(e) if args.strict => return Err(e.into()),
            Err(e) => {
                error!("Expression #{}: {}", index + 1, e);
                failures += 1;
            },
        }
    }

    if failures > 0 {
        info!("{} expression(s) skipped", failures);
    }
    Ok(())
}
