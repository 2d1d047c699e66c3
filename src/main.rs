mod extractor;
mod pdf;

use clap::Parser;
use std::path::PathBuf;

/// pdf_textify — extract the plain text of a PDF document into a text file.
///
/// Reads every page of the given PDF in order and writes the concatenated
/// text, one trailing newline per page, to the output file.
#[derive(Parser)]
#[command(name = "pdf_textify")]
#[command(version = "0.1.0")]
#[command(about = "Extract plain text from a PDF document", long_about = None)]
struct Cli {
    /// Path to the PDF file to extract
    #[arg(value_name = "PDF_PATH")]
    pdf_path: String,

    /// Output text file, overwritten on each run
    #[arg(short, long, value_name = "FILE", default_value = "pdf_text.txt")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = extractor::run(&cli.pdf_path, &cli.output) {
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }
}
