//! Linecol CLI
//!
//! Streaming byte-offset and line/column queries over files.

use linecol::commands::{parse_options, run_locate, run_offset, run_summary, CommandError};

fn main() {
    linecol::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "locate" | "offset" | "summary" => {
            let (options, positional) = match parse_options(&args[2..]) {
                Ok(parsed) => parsed,
                Err(err) => fail(&err),
            };

            let Some((path, queries)) = positional.split_first() else {
                eprintln!("error: missing file path");
                print_command_usage(command);
                std::process::exit(1);
            };

            let failures = match command.as_str() {
                "summary" => {
                    if !queries.is_empty() {
                        eprintln!("error: summary takes no queries");
                        print_command_usage(command);
                        std::process::exit(1);
                    }
                    run_summary(path, &options).map(|()| 0)
                }
                _ if queries.is_empty() => {
                    eprintln!("error: missing queries");
                    print_command_usage(command);
                    std::process::exit(1);
                }
                "locate" => run_locate(path, queries, &options),
                _ => run_offset(path, queries, &options),
            };

            match failures {
                Ok(0) => {}
                Ok(_) => std::process::exit(1),
                Err(err) => fail(&err),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("linecol {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn fail(err: &CommandError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}

fn print_command_usage(command: &str) {
    match command {
        "locate" => eprintln!("Usage: linecol locate <file> <offset>... [options]"),
        "offset" => eprintln!("Usage: linecol offset <file> <line>:<column>... [options]"),
        _ => eprintln!("Usage: linecol summary <file> [options]"),
    }
}

fn print_usage() {
    println!("linecol - byte offset and line/column queries over files");
    println!();
    println!("Usage: linecol <command> [options]");
    println!();
    println!("Commands:");
    println!("  locate <file> <offset>...            Print the line:column of each byte offset");
    println!("  offset <file> <line>:<column>...     Print the byte offset of each position");
    println!("  summary <file>                       Print byte count, lines, and last position");
    println!("  help                                 Show this help message");
    println!("  version                              Show version information");
    println!();
    println!("Options:");
    println!("  --chunk-size=<n>    Bytes read per chunk (default: 8192)");
    println!("  --one-based         Count lines and columns from 1");
    println!();
    println!("Lines and columns count from 0 unless --one-based is given.");
    println!("Columns count bytes. Set RUST_LOG=debug for tracing output.");
}
