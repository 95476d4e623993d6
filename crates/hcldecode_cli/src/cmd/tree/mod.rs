use std::path::PathBuf;

use crate::cmd::print::{PrintOptions, render_node};
use crate::cmd::util::{emit_json, node_to_json, read_tree};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Parse a file and print its syntax tree.
pub fn run(args: Args) -> hcldecode::hcl::Result<()> {
	let Args { file: path, json } = args;
	let root = read_tree(&path)?;

	if json {
		emit_json(&node_to_json(&root));
		return Ok(());
	}

	println!("path: {}", path.display());
	print!("{}", render_node(&root, 0, PrintOptions::default()));
	Ok(())
}
