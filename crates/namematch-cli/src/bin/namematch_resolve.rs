// namematch-resolve: Pick the listing that names the same business.
//
// Reads candidate listings from a file or stdin and prints the resolution
// outcome for QUERY.
//
// Usage:
//   namematch-resolve [OPTIONS] QUERY [-f FILE]
//
// Options:
//   -f, --file PATH     Candidates file (default: stdin)
//       --lines         One display name per line instead of JSON
//       --pretty        Pretty-print the JSON outcome
//       --table         Print a text table instead of JSON
//   -n, --top N         Only print the N best rows

use std::io::{self, Write};

use namematch_core::{CandidateRecord, ResolutionOutcome};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (opts, args) = namematch_cli::parse_common_flags(&args)
        .unwrap_or_else(|e| namematch_cli::fatal(&e));

    if namematch_cli::wants_help(&args) {
        println!("namematch-resolve: Find which candidate listing names the queried business.");
        println!();
        println!("Usage: namematch-resolve [OPTIONS] QUERY [-f FILE]");
        println!();
        println!("Candidates are read from FILE (or stdin) as a JSON array of");
        println!("{{\"id\", \"displayName\", \"metadata\"}} objects, or with --lines as one");
        println!("display name per line.");
        println!();
        println!("Options:");
        println!("  -f, --file PATH          Candidates file (default: stdin)");
        println!("      --lines              One display name per line instead of JSON");
        println!("      --pretty             Pretty-print the JSON outcome");
        println!("      --table              Print a text table instead of JSON");
        println!("  -n, --top N              Only print the N best rows");
        println!("{}", namematch_cli::COMMON_OPTIONS_HELP);
        return;
    }

    namematch_cli::init_logging(opts.verbose);

    let mut file: Option<String> = None;
    let mut lines = false;
    let mut pretty = false;
    let mut table = false;
    let mut top: Option<usize> = None;
    let mut positional: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "-f" | "--file" => {
                if i + 1 < args.len() {
                    file = Some(args[i + 1].clone());
                    skip_next = true;
                } else {
                    namematch_cli::fatal("--file requires a value");
                }
            }
            "-n" | "--top" => {
                if i + 1 < args.len() {
                    top = Some(
                        args[i + 1]
                            .parse()
                            .unwrap_or_else(|_| namematch_cli::fatal("invalid number for --top")),
                    );
                    skip_next = true;
                } else {
                    namematch_cli::fatal("--top requires a value");
                }
            }
            "--lines" => lines = true,
            "--pretty" => pretty = true,
            "--table" => table = true,
            a if a.starts_with('-') && a != "-" => {
                namematch_cli::fatal(&format!("unknown option {a}"));
            }
            _ => positional.push(arg.clone()),
        }
    }

    let query = match positional.as_slice() {
        [q] => q.clone(),
        [] => namematch_cli::fatal("missing QUERY (see --help)"),
        _ => positional.join(" "),
    };

    let matcher = namematch_cli::load_matcher(&opts).unwrap_or_else(|e| namematch_cli::fatal(&e));

    let input =
        namematch_cli::read_input(file.as_deref()).unwrap_or_else(|e| namematch_cli::fatal(&e));
    let candidates = if lines {
        parse_lines(&input)
    } else {
        serde_json::from_str::<Vec<CandidateRecord>>(&input)
            .unwrap_or_else(|e| namematch_cli::fatal(&format!("invalid candidates JSON: {e}")))
    };

    let mut outcome = matcher.resolve(&query, &candidates);
    if let Some(n) = top {
        outcome.all_results.truncate(n);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if table {
        write_table(&mut out, &query, &outcome);
    } else {
        let json = if pretty {
            serde_json::to_string_pretty(&outcome)
        } else {
            serde_json::to_string(&outcome)
        };
        match json {
            Ok(json) => {
                let _ = writeln!(out, "{json}");
            }
            Err(e) => namematch_cli::fatal(&format!("failed to serialize outcome: {e}")),
        }
    }
}

/// One candidate per non-blank line; the id is the 1-based line number.
fn parse_lines(input: &str) -> Vec<CandidateRecord> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| CandidateRecord::new((i + 1).to_string(), line.trim()))
        .collect()
}

fn write_table(
    out: &mut impl Write,
    query: &str,
    outcome: &ResolutionOutcome<'_, CandidateRecord>,
) {
    let _ = writeln!(out, "query: {query}");
    match &outcome.best_match {
        Some(best) => {
            let _ = writeln!(
                out,
                "match: {} ({:.3} {})",
                best.candidate.display_name, best.score, best.match_type
            );
        }
        None => {
            let _ = writeln!(out, "match: none (min score {:.2})", outcome.min_score);
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:>5}  {:<6}  {:<18}  {:<32}  VARIATION",
        "INDEX", "SCORE", "TYPE", "NAME"
    );
    for row in &outcome.all_results {
        let _ = writeln!(
            out,
            "{:>5}  {:<6.3}  {:<18}  {:<32}  {}",
            row.index,
            row.score,
            row.match_type.as_str(),
            row.candidate.display_name,
            row.variation.as_deref().unwrap_or("-")
        );
    }
}
