//! Check command - validate a table file's structure and completeness.

use std::path::PathBuf;

use colored::Colorize;
use ringtab::{codec, validate};

pub fn run(file: PathBuf, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (doc, metadata) = codec::from_file(&file)?;

    println!(
        "{} {} ({} elements: {})",
        "Structure OK".green().bold(),
        metadata.file.white(),
        doc.elements().len(),
        doc.elements().as_slice().join(", ")
    );

    if verbose {
        println!("  path:  {}", metadata.path.display());
        println!("  hash:  {}", metadata.hash);
        println!("  size:  {} bytes", metadata.size_bytes);
        println!("  rows:  {}", metadata.row_count);
    }

    match validate::check_complete(&doc) {
        Ok(()) => {
            println!("{} both tables are fully populated", "Complete".green().bold());
            Ok(())
        }
        Err(e) => Err(e.to_string().into()),
    }
}
