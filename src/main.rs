// Anchorhead CLI
//
// Runs the heading-anchor pipeline over HTML fragments on disk, and exposes
// the option defaults and validation the settings screen uses.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokio::task::JoinSet;

use kodegen_tools_anchorhead::{
    FloatPosition, HeadingAnchors, PageContext, Presentation, StoredOptions, default_options,
    headings::scan_headings, validate_options,
};

#[derive(Parser)]
#[command(name = "kodegen-anchorhead", author, version, about)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add anchors, back-to-top links and a menu to HTML fragments
    Render {
        /// HTML fragment files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Page id for a single file (default: the file's position, from 1)
        #[arg(long)]
        page_id: Option<u64>,

        /// Stored options document (options + presentation)
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Menu float position
        #[arg(long)]
        float: Option<FloatPosition>,

        /// Menu title
        #[arg(long)]
        title: Option<String>,

        /// Append the smooth-scroll initialisation script
        #[arg(long)]
        script: bool,

        /// Write results here instead of printing them
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Print the activation-time option map
    Defaults,

    /// Clean a submitted option map and print the resulting settings
    Validate {
        /// JSON object of options
        json: String,
    },

    /// Print the headings found in an HTML fragment
    Scan { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Render {
            files,
            page_id,
            settings,
            float,
            title,
            script,
            out_dir,
        } => {
            let stored = match settings {
                Some(path) => StoredOptions::load(&path)
                    .with_context(|| format!("Failed to load settings from {}", path.display()))?,
                None => StoredOptions::default(),
            };
            let presentation = Presentation::new(
                float.unwrap_or(stored.presentation.float_picker()),
                title.unwrap_or_else(|| stored.presentation.toc_title().to_string()),
            );

            let anchors = HeadingAnchors::new(stored.options, presentation);
            render_files(&anchors, files, page_id, script, out_dir.as_deref()).await?;
        }
        Command::Defaults => {
            let defaults = default_options().context("Failed to build default options")?;
            println!("{}", serde_json::to_string_pretty(&defaults)?);
        }
        Command::Validate { json } => {
            let submitted: serde_json::Value =
                serde_json::from_str(&json).context("Submitted options are not valid JSON")?;
            let settings = validate_options(&submitted).context("Failed to validate options")?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        Command::Scan { file } => {
            let content = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            println!("{}", serde_json::to_string_pretty(&scan_headings(&content))?);
        }
    }

    Ok(())
}

async fn render_files(
    anchors: &HeadingAnchors,
    files: Vec<PathBuf>,
    page_id: Option<u64>,
    script: bool,
    out_dir: Option<&Path>,
) -> Result<()> {
    if page_id.is_some() && files.len() > 1 {
        anyhow::bail!("--page-id can only be used with a single file");
    }

    if let Some(dir) = out_dir {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let mut tasks = JoinSet::new();
    for (position, file) in files.iter().enumerate() {
        let anchors = anchors.clone();
        let file = file.clone();
        let id = page_id.unwrap_or(position as u64 + 1);

        tasks.spawn(async move {
            let content = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let rendered = anchors
                .render_async(content, PageContext::new(id))
                .await
                .with_context(|| format!("Failed to render {}", file.display()))?;
            anyhow::Ok((position, rendered))
        });
    }

    let mut rendered = vec![String::new(); files.len()];
    while let Some(joined) = tasks.join_next().await {
        let (position, html) = joined.context("Render task failed")??;
        rendered[position] = html;
    }

    let footer = script.then(|| anchors.smooth_scroll_script());
    for (file, mut html) in files.iter().zip(rendered) {
        if let Some(footer) = &footer {
            html.push_str(footer);
        }

        match out_dir {
            Some(dir) => {
                let name = file
                    .file_name()
                    .with_context(|| format!("{} has no file name", file.display()))?;
                let target = dir.join(name);
                tokio::fs::write(&target, html)
                    .await
                    .with_context(|| format!("Failed to write {}", target.display()))?;
                log::info!("Wrote {}", target.display());
            }
            None => println!("{html}"),
        }
    }

    Ok(())
}
