use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use geocodec_core::prelude::*;
use std::result::Result;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let Some(cmd) = args.next() else {
        print_usage();
        return Err("missing command".to_string());
    };

    match cmd.as_str() {
        "precommit" => {
            let mut full = false;
            for arg in args {
                match arg.as_str() {
                    "--full" => full = true,
                    "--ci" => {}
                    _ => return Err(format!("unknown precommit flag: {arg}")),
                }
            }
            precommit(full)
        }
        "install-hooks" => install_hooks(),
        "inspect" => {
            let input = args
                .next()
                .ok_or_else(|| "inspect needs a WKT string or WKB hex".to_string())?;
            inspect(&input)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            print_usage();
            Err(format!("unknown command: {cmd}"))
        }
    }
}

fn print_usage() {
    eprintln!("xtask commands:");
    eprintln!("  precommit [--full] [--ci]");
    eprintln!("  install-hooks");
    eprintln!("  inspect <wkt | wkb-hex>");
}

fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("xtask must live inside workspace")
        .to_path_buf()
}

fn precommit(full: bool) -> Result<(), String> {
    let root = repo_root();
    let mut steps: Vec<Vec<&str>> = vec![
        vec!["cargo", "fmt", "--all", "--", "--check"],
        vec![
            "cargo",
            "clippy",
            "-p",
            "geocodec-core",
            "-p",
            "xtask",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ],
        vec!["cargo", "test", "--workspace"],
        vec!["cargo", "test", "-p", "geocodec-core", "--doc"],
    ];

    if full {
        steps.push(vec!["cargo", "bench", "-p", "geocodec-core", "--no-run"]);
    }

    for step in steps {
        run_step(&root, &step)?;
    }
    Ok(())
}

fn run_step(cwd: &Path, args: &[&str]) -> Result<(), String> {
    let (bin, rest) = args
        .split_first()
        .ok_or_else(|| "empty command step".to_string())?;
    eprintln!("+ {}", args.join(" "));

    let status = Command::new(bin)
        .args(rest)
        .current_dir(cwd)
        .status()
        .map_err(io_err)?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("command failed: {}", args.join(" ")))
    }
}

fn install_hooks() -> Result<(), String> {
    let root = repo_root();
    let hook_path = root.join(".git/hooks/pre-commit");
    let script = format!(
        "#!/usr/bin/env sh\nset -eu\ncd \"{}\"\ncargo run --quiet -p xtask -- precommit\n",
        root.display()
    );

    if let Some(parent) = hook_path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(&hook_path, script).map_err(io_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&hook_path).map_err(io_err)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms).map_err(io_err)?;
    }

    println!("installed pre-commit hook at {}", hook_path.display());
    Ok(())
}

/// Decode the input (hex means WKB/EWKB, anything else WKT/EWKT) and print
/// it in every output format.
fn inspect(input: &str) -> Result<(), String> {
    let trimmed = input.trim();
    let geom = match decode_hex(trimmed) {
        Some(bytes) => Geometry::parse(&bytes),
        None => Geometry::parse(trimmed),
    }
    .map_err(|e| e.to_string())?;

    println!("kind:    {:?} ({:?})", geom.kind(), geom.dimensions());
    println!("srid:    {}", geom.srid());
    println!("wkt:     {}", geom.to_wkt());
    println!("ewkt:    {}", geom.to_ewkt());
    println!("wkb:     {}", encode_hex(&geom.to_wkb().map_err(|e| e.to_string())?));
    println!("ewkb:    {}", encode_hex(&geom.to_ewkb().map_err(|e| e.to_string())?));
    match geom.to_twkb() {
        Ok(bytes) => println!("twkb:    {}", encode_hex(&bytes)),
        Err(e) => println!("twkb:    ({e})"),
    }
    println!(
        "geojson: {}",
        geom.to_geojson_string(&GeoJsonOptions::short_crs())
    );
    Ok(())
}

fn decode_hex(text: &str) -> Option<Vec<u8>> {
    if text.is_empty() || text.len() % 2 != 0 || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    (0..text.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&text[i..i + 2], 16).ok())
        .collect()
}

fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn io_err(e: io::Error) -> String {
    e.to_string()
}
