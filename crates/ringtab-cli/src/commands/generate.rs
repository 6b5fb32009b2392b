//! Generate command - emit a CSV table template.

use std::path::PathBuf;

use colored::Colorize;
use ringtab::{codec, generate};

pub fn run(
    modulus: Option<usize>,
    elements: Option<String>,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = match (modulus, elements) {
        (Some(n), _) => generate::from_modulus(n)?,
        (None, Some(spec)) => generate::from_element_list(&spec)?,
        (None, None) => {
            return Err("Provide --modulus N or --elements \"a,b,c\".".into());
        }
    };

    if verbose {
        eprintln!(
            "{} {} elements: {}",
            "Generated".green().bold(),
            doc.elements().len(),
            doc.elements().as_slice().join(", ")
        );
    }

    match output {
        Some(path) => {
            codec::write_file(&doc, &path)?;
            eprintln!("{} {}", "Wrote".green().bold(), path.display());
        }
        None => {
            print!("{}", codec::to_csv_string(&doc)?);
        }
    }

    Ok(())
}
