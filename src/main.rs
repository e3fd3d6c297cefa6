//! Interactive driver for the `zmh` codec.
//!
//! Presents a small menu on stdin/stdout: compress a file into a `.zmh`
//! container next to it, or decompress a `.zmh` container back into the
//! original name. Logs go to stderr so they never mix into the prompts;
//! set `ZMH_LOG=trace` to watch the codec stages.

use std::fs;
use std::io::{self, Write};

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use zmh::{Error, Result};

/// Extension appended to compressed files.
const SUFFIX: &str = ".zmh";

fn init_logging() {
    let level = match std::env::var("ZMH_LOG").as_deref() {
        Ok("trace") => Level::TRACE,
        Ok("debug") => Level::DEBUG,
        Ok("warn") => Level::WARN,
        Ok("error") => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("failed to set up the global logger");
}

/// Print a prompt and read one trimmed line. `None` means stdin closed.
fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn compress_file(name: &str) -> Result<()> {
    let input = fs::read(name)?;
    let container = zmh::compress(&input)?;

    let out_name = format!("{name}{SUFFIX}");
    fs::write(&out_name, &container)?;
    println!(
        "wrote {out_name}: {} bytes in, {} bytes out",
        input.len(),
        container.len()
    );
    Ok(())
}

fn decompress_file(name: &str) -> Result<()> {
    let out_name = match name.strip_suffix(SUFFIX) {
        Some(stem) if !stem.is_empty() => stem,
        _ => {
            println!("expected a {SUFFIX} file, got {name:?}");
            return Ok(());
        }
    };

    let container = fs::read(name)?;
    let restored = zmh::decompress(&container)?;

    fs::write(out_name, &restored)?;
    println!("wrote {out_name}: {} bytes restored", restored.len());
    Ok(())
}

/// Report the outcome of one menu action without ending the session.
fn report(name: &str, outcome: Result<()>) {
    match outcome {
        Ok(()) => {}
        Err(Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            println!("couldn't open {name}: no such file");
        }
        Err(err) => println!("error: {err}"),
    }
}

fn main() {
    init_logging();

    loop {
        println!();
        println!("1) compress a file");
        println!("2) decompress a {SUFFIX} file");
        println!("3) quit");
        let Some(choice) = prompt("> ") else { break };

        match choice.as_str() {
            "1" => {
                let Some(name) = prompt("file to compress: ") else {
                    break;
                };
                report(&name, compress_file(&name));
            }
            "2" => {
                let Some(name) = prompt("file to decompress: ") else {
                    break;
                };
                report(&name, decompress_file(&name));
            }
            "3" => break,
            "" => {}
            other => println!("unrecognized choice {other:?}"),
        }
    }
}
