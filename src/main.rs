use clap::Parser;
use igra2_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("IGRA2 Processor - Radiosonde Sounding Reader");
    println!("============================================");
    println!();
    println!("Read IGRA2 observation and derived-parameter files and convert their");
    println!("scaled integer values to SI units.");
    println!();
    println!("USAGE:");
    println!("    igra2 <COMMAND> <FILE> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    show        Print one sounding from the raw or converted data");
    println!("    summary     List dates, hours and level counts of a file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Print a converted sounding from a derived-parameter file:");
    println!("    igra2 show SWM00002527-drvd.txt --date 2020-05-26 --hour 00");
    println!();
    println!("    # Print the raw slices of a sounding without a reported hour:");
    println!(
        "    igra2 show SWM00002527-data.txt --date 2018-01-01 --hour 99_0 --source raw"
    );
    println!();
    println!("    # Summarize a file as JSON:");
    println!("    igra2 summary SWM00002527-data.txt --dialect observations --json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    igra2 <COMMAND> --help");
}
