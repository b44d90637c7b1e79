use clap::Parser;
use mdsite::config::Config;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(
    name = "mdsite",
    about = "Static site compiler: build HTML pages from Markdown content"
)]
struct Cli {
    /// Project root directory
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Content directory with markdown sources
    #[arg(long)]
    content: Option<String>,

    /// HTML template file
    #[arg(long)]
    template: Option<String>,

    /// Static asset directory
    #[arg(long)]
    static_dir: Option<String>,

    /// Output directory
    #[arg(short, long)]
    output: Option<String>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(path: &PathBuf) -> Config {
    let text =
        fs::read_to_string(path).unwrap_or_else(|e| die(&format!("cannot read config: {}", e)));
    serde_json::from_str(&text).unwrap_or_else(|e| die(&format!("invalid config JSON: {}", e)))
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let mut config = if let Some(ref config_path) = cli.config {
        load_config(config_path)
    } else {
        let defaults = ["mdsite.config.json", "config/mdsite.config.json"];
        let mut loaded = None;
        for p in &defaults {
            let path = cli.root.join(p);
            if path.is_file() {
                loaded = Some(load_config(&path));
                break;
            }
        }
        loaded.unwrap_or_default()
    };

    // CLI overrides
    if let Some(content) = cli.content {
        config.content = content;
    }
    if let Some(template) = cli.template {
        config.template = template;
    }
    if let Some(static_dir) = cli.static_dir {
        config.static_dir = static_dir;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }

    let content = cli.root.join(&config.content);
    let template = cli.root.join(&config.template);
    let static_dir = cli.root.join(&config.static_dir);
    let output = cli.root.join(&config.output);

    if !content.is_dir() {
        die(&format!("content directory not found: {}", content.display()));
    }
    if !template.is_file() {
        die(&format!("template not found: {}", template.display()));
    }

    let assets = if static_dir.is_dir() {
        mdsite::assets::copy_static(&static_dir, &output)
            .unwrap_or_else(|e| die(&format!("cannot copy static assets: {}", e)))
    } else {
        0
    };

    let pages = mdsite::page::generate_pages(&content, &template, &output)
        .unwrap_or_else(|e| die(&format!("{}", e)));
    if pages == 0 {
        die(&format!("no markdown files found in {}", content.display()));
    }

    eprintln!(
        "generated {} page(s), copied {} asset(s) -> {}",
        pages,
        assets,
        output.display()
    );
}
