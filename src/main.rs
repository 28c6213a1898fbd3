use clap::Parser;
use gstore_organizer::cli::{args::Args, commands};
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
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("gSTORE Organizer - gPROMS Result File Converter");
    println!("===============================================");
    println!();
    println!("Convert gPROMS gSTORE-4 simulation result files into a hierarchical");
    println!("directory of variables.csv tables, and reconstruct flat files from");
    println!("such a hierarchy with full round-trip fidelity.");
    println!();
    println!("USAGE:");
    println!("    gstore-organizer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    organize       Organize a flat result file into a directory hierarchy");
    println!("    reconstruct    Reconstruct a flat result file from an organized hierarchy");
    println!("    batch          Organize every flat result file found under a directory");
    println!("    query          Look up variables in a flat result file by path prefix");
    println!("    help           Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Organize one result file next to itself:");
    println!("    gstore-organizer organize --input run_1.txt");
    println!();
    println!("    # Reconstruct, pinning line order to the original file:");
    println!("    gstore-organizer reconstruct --input organized_output \\");
    println!("                                 --order-file run_1.txt --output run_1_rebuilt.txt");
    println!();
    println!("    # Organize every run under a trials directory:");
    println!("    gstore-organizer batch --input trials/");
    println!();
    println!("    # Look up a variable by path prefix:");
    println!("    gstore-organizer query --input run_1.txt Plant.Absorber.Stage(1)");
    println!();
    println!("For detailed help on any command, use:");
    println!("    gstore-organizer <COMMAND> --help");
}
