//! CLI filter that appends an instrumental magnitude column to detection
//! records.
//!
//! Usage:
//!   add-mag < detections.txt > detections-with-mag.txt
//!
//! Reads six-column records from stdin, writes seven fixed-width columns
//! to stdout. No arguments are accepted.

use add_mag::{check_invocation, run};
use std::env;
use std::io::{self, BufWriter};
use std::process;

fn main() {
    if check_invocation(env::args().len()).is_err() {
        // The usage notice goes to stdout; historical behavior of this
        // filter, kept for pipeline compatibility.
        println!("usage: add-mag");
        println!();
        println!("Reads whitespace-separated detection records (x y flux area");
        println!("flux_max elongation) from stdin and writes each record plus its");
        println!("instrumental magnitude to stdout. No arguments are accepted.");
        process::exit(1);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();

    match run(stdin.lock(), BufWriter::new(stdout.lock())) {
        Ok(count) => {
            eprintln!("Processed {} records", count);
        }
        Err(e) => {
            eprintln!("Error processing record stream: {}", e);
            process::exit(1);
        }
    }
}
