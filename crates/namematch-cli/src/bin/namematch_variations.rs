// namematch-variations: Print the query variations for names.
//
// Usage:
//   namematch-variations [OPTIONS] [NAME...]
//
// With no NAME arguments, reads names from stdin (one per line).

use std::io::{self, BufRead, Write};

use namematch_engine::NameMatcher;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (opts, args) = namematch_cli::parse_common_flags(&args)
        .unwrap_or_else(|e| namematch_cli::fatal(&e));

    if namematch_cli::wants_help(&args) {
        println!("namematch-variations: Print the variations a query name expands to.");
        println!();
        println!("Usage: namematch-variations [OPTIONS] [NAME...]");
        println!();
        println!("If NAME arguments are given, prints variations for each.");
        println!("Otherwise reads names from stdin (one per line).");
        println!();
        println!("Options:");
        println!("{}", namematch_cli::COMMON_OPTIONS_HELP);
        return;
    }

    namematch_cli::init_logging(opts.verbose);

    let names: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let matcher = namematch_cli::load_matcher(&opts).unwrap_or_else(|e| namematch_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if names.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let name = line.trim();
            if name.is_empty() {
                continue;
            }
            print_variations(name, &matcher, &mut out);
        }
    } else {
        for name in &names {
            print_variations(name, &matcher, &mut out);
        }
    }
}

fn print_variations(name: &str, matcher: &NameMatcher, out: &mut impl Write) {
    let _ = writeln!(out, "{name}:");
    for variation in matcher.variations(name) {
        let _ = writeln!(out, "  {variation}");
    }
}
