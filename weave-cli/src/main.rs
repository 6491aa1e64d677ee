//! Command-line interface for weave
//!
//! Usage:
//!   weave compile `<file.ws>` [--save] [--output `<dir>`]  - Compile a page, write it to the
//!                                                            output directory and open it
//!   weave serve [--output `<dir>`] [--port `<port>`]       - Serve the compiled pages
//!
//! Bare `weave` prints a short usage banner. Defaults for the output
//! directory, browser behavior and server bind address come from the
//! configuration layer (weave.toml / WEAVE_* environment variables).

mod cli;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use weave_compiler::weave::Compiler;
use weave_config::{ConfigError, Loader, WeaveConfig};

fn main() {
    let matches = cli::build_cli().get_matches();

    match matches.subcommand() {
        Some(("compile", compile_matches)) => {
            let file = compile_matches.get_one::<String>("file").unwrap();
            let save = compile_matches.get_flag("save");
            let output = compile_matches.get_one::<String>("output");
            handle_compile_command(file, save, output);
        }
        Some(("serve", serve_matches)) => {
            let output = serve_matches.get_one::<String>("output");
            let port = serve_matches.get_one::<u16>("port").copied();
            handle_serve_command(output, port);
        }
        _ => print_banner(),
    }
}

fn print_banner() {
    println!("Weave - create websites with ease");
    println!();
    println!("Usage: weave compile <filename.ws>");
    println!();
    println!("Examples:");
    println!("  weave compile mypage.ws          Compile and open in browser");
    println!("  weave compile mypage.ws --save   Compile and save without opening");
    println!("  weave serve                      Serve the compiled pages");
    println!();
    println!("For more help: weave --help");
}

/// Layer the configuration sources, with command-line flags winning.
fn load_config(output: Option<&String>, port: Option<u16>) -> WeaveConfig {
    let mut loader = Loader::new().with_optional_file("weave.toml").with_env();
    if let Some(dir) = output {
        loader = loader
            .set_override("output.dir", dir.as_str())
            .unwrap_or_else(|err| config_error(err));
    }
    if let Some(port) = port {
        loader = loader
            .set_override("serve.port", i64::from(port))
            .unwrap_or_else(|err| config_error(err));
    }
    loader.build().unwrap_or_else(|err| config_error(err))
}

fn config_error(err: ConfigError) -> ! {
    eprintln!("Configuration error: {}", err);
    std::process::exit(1);
}

/// Handle the compile command
fn handle_compile_command(file: &str, save: bool, output: Option<&String>) {
    let config = load_config(output, None);
    let compiler = Compiler::with_library_dirs(config.libraries.search_dirs());

    println!("Compiling {}...", file);
    let html = compiler
        .compile_file(Path::new(file))
        .unwrap_or_else(|report| {
            eprintln!("{}", report);
            std::process::exit(1);
        });

    let output_dir = PathBuf::from(&config.output.dir);
    fs::create_dir_all(&output_dir).unwrap_or_else(|err| {
        eprintln!("Error creating {}: {}", output_dir.display(), err);
        std::process::exit(1);
    });

    let stem = Path::new(file)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "page".to_string());
    let output_path = output_dir.join(format!("{}.html", stem));
    fs::write(&output_path, &html).unwrap_or_else(|err| {
        eprintln!("Error writing {}: {}", output_path.display(), err);
        std::process::exit(1);
    });

    println!("Successfully compiled to {}", output_path.display());

    if save || !config.output.open_browser {
        println!("Saved to {}", output_path.display());
        return;
    }

    println!("Opening in browser...");
    if let Err(err) = open_in_browser(&output_path) {
        eprintln!("Could not open browser: {}", err);
    }
}

/// Handle the serve command
fn handle_serve_command(output: Option<&String>, port: Option<u16>) {
    let config = load_config(output, port);
    let dir = PathBuf::from(&config.output.dir);
    if !dir.is_dir() {
        eprintln!(
            "Output directory {} does not exist. Compile a page first.",
            dir.display()
        );
        std::process::exit(1);
    }

    let addr = config.serve.bind_addr();
    println!("Serving compiled weave pages at http://{}", addr);
    println!("Directory: {}", dir.display());

    let pages = list_html_pages(&dir);
    if !pages.is_empty() {
        println!();
        println!("Available pages:");
        for page in &pages {
            println!("  - http://{}/{}", addr, page);
        }
    }
    println!();
    println!("Press Ctrl+C to stop");

    rouille::start_server(addr, move |request| {
        let response = rouille::match_assets(request, &dir);
        if response.is_success() {
            response
        } else {
            rouille::Response::empty_404()
        }
    });
}

/// Sorted names of the `.html` files in the output directory.
fn list_html_pages(dir: &Path) -> Vec<String> {
    let mut pages: Vec<String> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".html"))
            .collect(),
        Err(_) => Vec::new(),
    };
    pages.sort();
    pages
}

/// Open a compiled page in the platform's default browser.
fn open_in_browser(path: &Path) -> std::io::Result<()> {
    let target = path
        .canonicalize()
        .map(|p| format!("file://{}", p.display()))
        .unwrap_or_else(|_| path.display().to_string());

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(&target).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", &target]).spawn()?;
    }

    #[cfg(all(not(target_os = "macos"), not(target_os = "windows")))]
    {
        Command::new("xdg-open").arg(&target).spawn()?;
    }

    Ok(())
}
