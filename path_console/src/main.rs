use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use path_console::ConsoleHost;
use services_path_store::{DirectorySink, FileStore};
use services_settings::{load_settings_file, EditorSettings};

#[derive(Parser)]
#[command(
    name = "path-console",
    about = "Author named geographic paths from the command line"
)]
struct Cli {
    /// Directory holding durable editor storage
    #[arg(long, default_value = ".path-editor")]
    data_dir: PathBuf,
    /// Directory receiving paths.json / paths.csv exports
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Optional JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => load_settings_file(path).unwrap_or_else(|e| {
            eprintln!("warning: {}; using default settings", e);
            EditorSettings::default()
        }),
        None => EditorSettings::default(),
    };

    let store = FileStore::open(&cli.data_dir)
        .with_context(|| format!("opening storage in {}", cli.data_dir.display()))?;
    let sink = DirectorySink::new(&cli.out_dir);

    let (mut host, reply) = ConsoleHost::open(settings, Box::new(store), Box::new(sink));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in reply.lines {
        writeln!(out, "{}", line)?;
    }

    let stdin = io::stdin();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let reply = host.execute(&line);
        for line in reply.lines {
            writeln!(out, "{}", line)?;
        }
        if reply.quit {
            break;
        }
    }

    Ok(())
}
