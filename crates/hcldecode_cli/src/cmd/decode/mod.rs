use std::path::PathBuf;

use hcldecode::hcl::{DecodeOptions, Shape, decode_value};
use tracing::debug;

use crate::cmd::print::{PrintOptions, render_value};
use crate::cmd::util::{emit_json, read_tree, sequence_mode_label, value_to_json};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	/// Output shape, e.g. `any`, `map<string, list<int>>`.
	#[arg(long, default_value = "any")]
	pub shape: String,
	/// Decode list elements instead of committing empty sequences.
	#[arg(long)]
	pub elements: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long)]
	pub json: bool,
}

/// Parse a file and decode it against a runtime output shape.
pub fn run(args: Args) -> hcldecode::hcl::Result<()> {
	let Args {
		file: path,
		shape,
		elements,
		max_depth,
		json,
	} = args;

	let shape = Shape::parse(&shape)?;
	let mut options = if elements { DecodeOptions::strict_elements() } else { DecodeOptions::default() };
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}

	let root = read_tree(&path)?;
	debug!(path = %path.display(), %shape, max_depth = options.max_depth, "decode file");
	let mut value = shape.zero_value();
	decode_value(&shape, &mut value, &root, &options)?;

	if json {
		emit_json(&DecodeJson {
			path: path.display().to_string(),
			shape: shape.to_string(),
			sequence_mode: sequence_mode_label(options.sequence_mode),
			value: value_to_json(&value),
		});
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("shape: {shape}");
	println!("sequence_mode: {}", sequence_mode_label(options.sequence_mode));
	println!("decoded:");
	print!("{}", render_value(&value, 2, PrintOptions::default()));

	Ok(())
}

#[derive(serde::Serialize)]
struct DecodeJson {
	path: String,
	shape: String,
	sequence_mode: &'static str,
	value: serde_json::Value,
}

#[cfg(test)]
mod tests;
