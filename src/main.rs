use clap::Parser;
use std::process;
use worldbirds_converter::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_summary) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("WorldBirds Converter - eBird Import File Generator");
    println!("==================================================");
    println!();
    println!("Convert bird observation records exported from WorldBirds into the");
    println!("comma-separated import format accepted by eBird.");
    println!();
    println!("USAGE:");
    println!("    worldbirds-converter <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert exports to eBird import files (main command)");
    println!("    tables      Report on the species and location reference tables");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert one export:");
    println!("    worldbirds-converter convert --input visits.csv --output ebird.csv");
    println!();
    println!("    # Convert a directory of exports, skipping bad records:");
    println!("    worldbirds-converter convert --input exports/ --output converted/ \\");
    println!("                                 --best-effort");
    println!();
    println!("    # Inspect the reference tables:");
    println!("    worldbirds-converter tables --detailed");
    println!();
    println!("For detailed help on any command, use:");
    println!("    worldbirds-converter <COMMAND> --help");
}
