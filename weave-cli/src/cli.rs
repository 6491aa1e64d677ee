// Command definition shared between the binary and the completion
// generator in build.rs (which pulls this file in with include!).

use clap::{Arg, ArgAction, Command};

/// Build the `weave` command-line surface.
pub fn build_cli() -> Command {
    Command::new("weave")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A beginner-friendly language for creating websites")
        .subcommand(
            Command::new("compile")
                .about("Compile a .ws file to HTML")
                .arg(
                    Arg::new("file")
                        .help("Path to the weave source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("save")
                        .long("save")
                        .help("Save HTML without opening the browser")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output directory (default from config: output)"),
                ),
        )
        .subcommand(
            Command::new("serve")
                .about("Serve the compiled pages over HTTP")
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Directory to serve (default from config: output)"),
                )
                .arg(
                    Arg::new("port")
                        .long("port")
                        .short('p')
                        .help("Port to listen on (default from config: 5000)")
                        .value_parser(clap::value_parser!(u16)),
                ),
        )
}
