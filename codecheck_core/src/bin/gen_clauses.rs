//! Generate CLAUSES.md from the clause catalog.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-clauses              # print to stdout
//! cargo run --bin gen-clauses -- CLAUSES.md
//! ```

use std::fs;
use std::path::Path;

use codecheck_core::clauses::generate_clauses_markdown;

fn main() {
    let markdown = generate_clauses_markdown();

    let Some(target) = std::env::args().nth(1) else {
        print!("{}", markdown);
        return;
    };

    let output_path = Path::new(&target);
    match fs::write(output_path, &markdown) {
        Ok(()) => {
            println!("Wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            std::process::exit(1);
        }
    }
}
