use crate::config::{Config, load_config};
use crate::demo::{demo_topology, smb_demo_topology};
use crate::ir::{Overrides, Topology};
use crate::layout::compute_layout;
use crate::layout_dump::write_layout_dump;
use crate::render::{render_svg, write_output_png, write_output_svg};
use crate::summary::render_topology_text;
use crate::theme::Theme;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ngr", version, about = "Network topology diagram renderer")]
pub struct Args {
    /// Input topology (.json, or .md with ```topology blocks) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png/txt). Defaults to stdout for SVG and text if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON5 file (theme, themeVariables, layout, preset, zoom, width, height)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Width (overrides the config file)
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Height (overrides the config file)
    #[arg(short = 'H', long = "height")]
    pub height: Option<f32>,

    /// JSON file mapping node id to a {dx, dy} drag offset
    #[arg(long = "overrides")]
    pub overrides: Option<PathBuf>,

    /// Write the computed layout as JSON
    #[arg(long = "dumpLayout")]
    pub dump_layout: Option<PathBuf>,

    /// Render a built-in demo topology instead of reading input
    #[arg(long = "demo", value_enum, num_args = 0..=1, default_missing_value = "bank")]
    pub demo: Option<Demo>,

    /// Use the dark theme
    #[arg(long = "dark")]
    pub dark: bool,

    /// Debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
    Text,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    /// Retail-bank SD-WAN
    Bank,
    /// AI startup hybrid WAN
    Smb,
}

impl Demo {
    fn topology(self) -> Topology {
        match self {
            Demo::Bank => demo_topology(),
            Demo::Smb => smb_demo_topology(),
        }
    }
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.render.width = width;
    }
    if let Some(height) = args.height {
        config.render.height = height;
    }
    if args.dark {
        config.theme = Theme::dark();
        config.render.background = config.theme.background.clone();
    }
    let overrides = match args.overrides.as_deref() {
        Some(path) => read_overrides(path)?,
        None => Overrides::new(),
    };

    let topologies = if let Some(demo) = args.demo {
        vec![demo.topology()]
    } else {
        let (input, is_markdown) = read_input(args.input.as_deref())?;
        let sources = if is_markdown {
            extract_topology_blocks(&input)
        } else {
            vec![input]
        };
        if sources.is_empty() {
            return Err(anyhow::anyhow!("No topology blocks found in input"));
        }
        sources
            .iter()
            .enumerate()
            .map(|(idx, source)| {
                Topology::from_json(source).with_context(|| format!("topology #{}", idx + 1))
            })
            .collect::<Result<Vec<_>>>()?
    };

    if topologies.len() == 1 {
        return emit(
            &topologies[0],
            &config,
            &overrides,
            &args,
            args.output.as_deref(),
            args.dump_layout.as_deref(),
        );
    }

    // Multiple topologies (Markdown input)
    let outputs = resolve_multi_outputs(args.output.as_deref(), args.output_format, topologies.len())?;
    for (idx, topology) in topologies.iter().enumerate() {
        let dump = args
            .dump_layout
            .as_deref()
            .map(|path| numbered_path(path, idx + 1, "json"));
        emit(topology, &config, &overrides, &args, Some(&outputs[idx]), dump.as_deref())?;
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .try_init();
}

fn emit(
    topology: &Topology,
    config: &Config,
    overrides: &Overrides,
    args: &Args,
    output: Option<&Path>,
    dump_layout: Option<&Path>,
) -> Result<()> {
    let layout_config = config.effective_layout();
    let layout = compute_layout(topology, config.render.width, config.render.height, &layout_config)
        .with_overrides(overrides);
    if let Some(path) = dump_layout {
        write_layout_dump(path, &layout, topology, &layout_config)?;
    }
    tracing::debug!(
        title = %topology.solution_title,
        nodes = topology.node_count(),
        edges = topology.connections.len(),
        "rendering topology"
    );

    match args.output_format {
        OutputFormat::Text => {
            let text = render_topology_text(topology);
            match output {
                Some(path) => std::fs::write(path, text)?,
                None => println!("{text}"),
            }
        }
        OutputFormat::Svg => {
            let svg = render_svg(topology, &layout, &config.theme, &layout_config);
            write_output_svg(&svg, output)?;
        }
        OutputFormat::Png => {
            let svg = render_svg(topology, &layout, &config.theme, &layout_config);
            let output = output.ok_or_else(|| anyhow::anyhow!("Output path required for png output"))?;
            write_output_png(&svg, output, &config.render)?;
        }
    }
    Ok(())
}

fn read_overrides(path: &Path) -> Result<Overrides> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).with_context(|| format!("invalid overrides file {}", path.display()))
}

fn read_input(path: Option<&Path>) -> Result<(String, bool)> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok((buf, false));
        }
        let content = std::fs::read_to_string(path)?;
        let is_md = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| matches!(ext, "md" | "markdown"))
            .unwrap_or(false);
        return Ok((content, is_md));
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok((buf, false))
}

fn extract_topology_blocks(input: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut in_block = false;
    let mut current = Vec::new();
    let mut fence = String::new();

    for line in input.lines() {
        let trimmed = line.trim();
        if !in_block {
            if let Some(start_fence) = detect_topology_fence(trimmed) {
                in_block = true;
                fence = start_fence;
                continue;
            }
        } else if is_fence_end(trimmed, &fence) {
            in_block = false;
            blocks.push(current.join("\n"));
            current.clear();
            continue;
        }

        if in_block {
            current.push(line.to_string());
        }
    }

    blocks
}

fn detect_topology_fence(line: &str) -> Option<String> {
    for fence in ["```", "~~~"] {
        if let Some(rest) = line.strip_prefix(fence) {
            let info = rest.trim_start_matches(&fence[..1]).trim();
            let lang = info.split_whitespace().next().unwrap_or("");
            if matches!(lang, "topology" | "json") {
                return Some(fence.to_string());
            }
        }
    }
    None
}

fn is_fence_end(line: &str, fence: &str) -> bool {
    if !line.starts_with(fence) {
        return false;
    }
    line[fence.len()..].trim().is_empty()
}

fn numbered_path(base: &Path, idx: usize, ext: &str) -> PathBuf {
    let stem = base.file_stem().and_then(|s| s.to_str()).unwrap_or("topology");
    let parent = base.parent().unwrap_or_else(|| Path::new("."));
    parent.join(format!("{}-{}.{}", stem, idx, ext))
}

fn resolve_multi_outputs(
    output: Option<&Path>,
    format: OutputFormat,
    count: usize,
) -> Result<Vec<PathBuf>> {
    let ext = format.extension();
    let base = output.ok_or_else(|| anyhow::anyhow!("Output path required for markdown input"))?;
    if base.is_dir() {
        return Ok((1..=count)
            .map(|idx| base.join(format!("topology-{}.{}", idx, ext)))
            .collect());
    }
    Ok((1..=count).map(|idx| numbered_path(base, idx, ext)).collect())
}
