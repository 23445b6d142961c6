#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]
#![deny(unused_must_use)]

mod command_line_interface;
mod extraction;
mod helpers;
mod map_record;
mod palette;
mod poi;
mod render;
mod scan;

use std::process::ExitCode;

fn main() -> ExitCode {
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();

	match command_line_interface::handle_arguments() {
		Ok(()) => ExitCode::SUCCESS,
		Err(error) => {
			eprintln!("Error: {error:#}");
			ExitCode::FAILURE
		}
	}
}
