#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;
mod logging;

#[derive(Parser)]
#[command(name = "hcldecode", about = "Decode HCL documents into typed and dynamic values")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode a document against an output shape.
	Decode(cmd::decode::Args),
	/// Print the parsed syntax tree.
	Tree(cmd::tree::Args),
}

fn main() {
	logging::init_logging();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> hcldecode::hcl::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Tree(args) => cmd::tree::run(args),
	}
}
