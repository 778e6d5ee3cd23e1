use std::env;
use std::fs;
use std::io::{self, BufWriter, Read, Write};

use taxcolors_rs::{audit_tables, style_taxa};

/// Reads taxon labels (one per line) from the file given as the first
/// argument, or from stdin when no argument is given, and prints
/// `label<TAB>canonical<TAB>color` for each.
fn main() {
    env_logger::init();

    audit_tables().expect("Color tables failed their consistency audit");

    let input = match env::args().nth(1) {
        Some(path) => fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Cannot read label file '{path}': {e}")),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .expect("Cannot read labels from stdin");
            buf
        }
    };

    let labels: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    log::info!("Styling {} taxon label(s)", labels.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for style in style_taxa(&labels) {
        writeln!(out, "{}\t{}\t{}", style.label, style.canonical, style.color)
            .expect("Could not write to stdout");
    }
    out.flush().expect("Could not flush stdout");
}
