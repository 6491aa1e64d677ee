use std::env;
use std::io::Error;

use clap_complete::generate_to;
use clap_complete::shells::{Bash, Fish, Zsh};

include!("src/cli.rs");

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();
    generate_to(Bash, &mut cmd, "weave", &outdir)?;
    generate_to(Zsh, &mut cmd, "weave", &outdir)?;
    generate_to(Fish, &mut cmd, "weave", &outdir)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    Ok(())
}
