use clap::Parser;
use goods_importer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Goods Importer - Partner Catalog Bulk Import Tool");
    println!("=================================================");
    println!();
    println!("Import pipe-delimited goods files into a partner product catalog");
    println!("via its bulk-creation HTTP endpoint.");
    println!();
    println!("USAGE:");
    println!("    goods-importer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    upload      Parse a goods file and submit the valid records (main command)");
    println!("    check       Validate a goods file without submitting anything");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Validate a goods file locally:");
    println!("    goods-importer check goods.txt");
    println!();
    println!("    # Import with the API key from the environment:");
    println!("    export GOODS_IMPORTER_API_KEY=...");
    println!("    goods-importer upload goods.txt");
    println!();
    println!("    # Preview an import without sending the request:");
    println!("    goods-importer upload goods.txt --dry-run");
    println!();
    println!("    # Machine-readable validation report:");
    println!("    goods-importer check goods.txt --output-format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    goods-importer <COMMAND> --help");
}
