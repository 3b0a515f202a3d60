// namematch-score: Score one name against another.
//
// Usage:
//   namematch-score [OPTIONS] A B [--explain]
//
// Prints the score and match type of query-side name A against
// candidate-side name B. With --explain, prints the intermediate forms and
// every rule's verdict.

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (opts, args) = namematch_cli::parse_common_flags(&args)
        .unwrap_or_else(|e| namematch_cli::fatal(&e));

    if namematch_cli::wants_help(&args) {
        println!("namematch-score: Score query-side name A against candidate-side name B.");
        println!();
        println!("Usage: namematch-score [OPTIONS] A B [--explain]");
        println!();
        println!("Options:");
        println!("      --explain            Show normalized/core forms and each rule's verdict");
        println!("      --json               Print the result as JSON");
        println!("{}", namematch_cli::COMMON_OPTIONS_HELP);
        return;
    }

    namematch_cli::init_logging(opts.verbose);

    let explain = args.iter().any(|a| a == "--explain");
    let json = args.iter().any(|a| a == "--json");
    let names: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();
    let [a, b] = names.as_slice() else {
        namematch_cli::fatal("expected exactly two names (see --help)");
    };

    let matcher = namematch_cli::load_matcher(&opts).unwrap_or_else(|e| namematch_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if !explain {
        let result = matcher.score(a, b);
        if json {
            match serde_json::to_string(&result) {
                Ok(s) => {
                    let _ = writeln!(out, "{s}");
                }
                Err(e) => namematch_cli::fatal(&format!("failed to serialize score: {e}")),
            }
        } else {
            let _ = writeln!(out, "{:.4}\t{}", result.score, result.match_type);
        }
        return;
    }

    let trace = matcher.explain(a, b);
    if json {
        match serde_json::to_string_pretty(&trace) {
            Ok(s) => {
                let _ = writeln!(out, "{s}");
            }
            Err(e) => namematch_cli::fatal(&format!("failed to serialize trace: {e}")),
        }
        return;
    }

    let _ = writeln!(out, "normalized: {:?} vs {:?}", trace.normalized_a, trace.normalized_b);
    let _ = writeln!(out, "core:       {:?} vs {:?}", trace.core_a, trace.core_b);
    let _ = writeln!(out, "similarity: {:.4}", trace.similarity);
    let _ = writeln!(out);
    for verdict in &trace.verdicts {
        let marker = if verdict.match_type == trace.result.match_type { "*" } else { " " };
        match verdict.score {
            Some(score) => {
                let _ = writeln!(out, "{marker} {:<20} {:.4}", verdict.match_type.as_str(), score);
            }
            None => {
                let _ = writeln!(out, "{marker} {:<20} -", verdict.match_type.as_str());
            }
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{:.4}\t{}", trace.result.score, trace.result.match_type);
}
