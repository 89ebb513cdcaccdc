use crate::config::{IconMode, load_options};
use crate::graph::DotGraph;
use crate::resource::Manifest;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "k8sdot",
    version,
    about = "Render a namespace resource manifest as Graphviz DOT"
)]
pub struct Args {
    /// Manifest JSON file or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output .dot file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Options JSON file (icons_dir, icon_mode)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Directory holding the icons/ assets
    #[arg(long = "icons-dir")]
    pub icons_dir: Option<PathBuf>,

    /// Inline icons as base64 data URIs instead of referencing files
    #[arg(long = "embed-icons", default_value_t = false)]
    pub embed_icons: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut options = load_options(args.config.as_deref())?;
    if let Some(dir) = args.icons_dir {
        options.icons_dir = dir;
    }
    if args.embed_icons {
        options.icon_mode = IconMode::Embedded;
    }

    let input = read_input(args.input.as_deref())?;
    let manifest: Manifest =
        serde_json::from_str(&input).context("invalid resource manifest JSON")?;

    let mut graph = DotGraph::new(manifest, &options);
    let dot = graph.to_dot()?;
    write_output(&dot, args.output.as_deref())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        return Ok(content);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_output(dot: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, dot)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{dot}"),
    }
    Ok(())
}
