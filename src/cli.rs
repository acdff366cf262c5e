// src/cli.rs
use crate::config::RenderSettings;
use crate::layout;
use crate::loader;
use crate::render;
use anyhow::Result;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "cvpress")]
#[command(about = "Render structured resume and cover letter JSON into PDF")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file (font directory, family, margins)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a resume JSON into a PDF
    Resume(RenderArgs),
    /// Render a cover letter JSON into a PDF
    CoverLetter(RenderArgs),
}

#[derive(Args)]
pub struct RenderArgs {
    /// Path to the input JSON document
    #[arg(long)]
    pub json: PathBuf,

    /// Output PDF path; parent directories are created
    #[arg(long)]
    pub out: PathBuf,

    /// Override the configured font directory
    #[arg(long)]
    pub fonts: Option<PathBuf>,
}

pub fn handle_command(cli: Cli) -> Result<()> {
    let mut settings = RenderSettings::load(cli.config.as_deref())?;

    match cli.command {
        Command::Resume(args) => {
            if let Some(dir) = args.fonts {
                settings.font_dir = dir;
            }
            let resume = loader::load_resume(&args.json)?;
            let story = layout::resume::build_story(&resume);
            info!("built {} resume blocks", story.len());

            let title = resume
                .basics
                .name
                .clone()
                .unwrap_or_else(|| "Resume".to_string());
            render::render_pdf(
                &story,
                &settings,
                settings.resume_margins,
                &title,
                &args.out,
            )?;
            println!("✔ Generated: {}", args.out.display());
        }
        Command::CoverLetter(args) => {
            if let Some(dir) = args.fonts {
                settings.font_dir = dir;
            }
            let letter = loader::load_cover_letter(&args.json)?;
            let story = layout::cover_letter::build_story(&letter, Local::now().date_naive());
            info!("built {} cover letter blocks", story.len());

            render::render_pdf(
                &story,
                &settings,
                settings.letter_margins,
                "Cover Letter",
                &args.out,
            )?;
            println!("✔ Generated: {}", args.out.display());
        }
    }

    Ok(())
}
