// namematch-normalize: Print normalized and core forms of names.
//
// Usage:
//   namematch-normalize [OPTIONS] [NAME...]
//
// Output is tab-separated: input, normalized form, core name. With no NAME
// arguments, reads names from stdin (one per line).

use std::io::{self, BufRead, Write};

use namematch_engine::NameMatcher;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (opts, args) = namematch_cli::parse_common_flags(&args)
        .unwrap_or_else(|e| namematch_cli::fatal(&e));

    if namematch_cli::wants_help(&args) {
        println!("namematch-normalize: Print normalized and core forms of business names.");
        println!();
        println!("Usage: namematch-normalize [OPTIONS] [NAME...]");
        println!();
        println!("Prints NAME<TAB>normalized<TAB>core for each name.");
        println!("Without NAME arguments reads names from stdin (one per line).");
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
            let name = line.trim_end();
            if name.trim().is_empty() {
                continue;
            }
            print_forms(name, &matcher, &mut out);
        }
    } else {
        for name in &names {
            print_forms(name, &matcher, &mut out);
        }
    }
}

fn print_forms(name: &str, matcher: &NameMatcher, out: &mut impl Write) {
    let _ = writeln!(out, "{name}\t{}\t{}", matcher.normalize(name), matcher.core_name(name));
}
