use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use markdown_folio_config::{Config, DEFAULT_EXCERPT_LEN};
use markdown_folio_engine::{
    PageMeta, io, markdown_to_html,
    page::{extract_page_date, inject_page_date, render_template, strip_comments},
    parse_inline, segment,
};
use relative_path::{RelativePath, RelativePathBuf};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(name = "markdown-folio", version, about = "Render markdown pages to HTML")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the blocks a markdown file segments into
    Blocks { file: PathBuf },
    /// Print the inline spans of a piece of text
    Inline { text: String },
    /// Render one markdown file to an HTML fragment on stdout
    Render { file: PathBuf },
    /// Render every markdown file under the content directory to a page
    Build(BuildArgs),
}

#[derive(clap::Args)]
struct BuildArgs {
    /// Content directory (overrides the config file)
    #[arg(long)]
    content: Option<PathBuf>,
    /// Output directory (overrides the config file)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Page template (overrides the config file)
    #[arg(long)]
    template: Option<PathBuf>,
    /// Date (YYYY-MM-DD) stamped into sources that have neither a page-date
    /// comment nor a dated file name [default: today]
    #[arg(long, value_parser = parse_page_date)]
    date: Option<NaiveDate>,
}

/// Settings for one build after merging CLI arguments over the config file.
struct BuildSettings {
    content_path: PathBuf,
    output_path: PathBuf,
    template: Option<String>,
    excerpt_len: usize,
    /// Stamp for undated pages, always `YYYY-MM-DD`.
    date: String,
}

/// Stamps are written as `YYYY-MM-DD` so the page-date comment reads back.
const PAGE_DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_page_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, PAGE_DATE_FORMAT)
        .map_err(|e| format!("expected a YYYY-MM-DD date: {e}"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Blocks { file } => print_blocks(&file),
        Command::Inline { text } => print_inline(&text),
        Command::Render { file } => {
            let markdown = read_source(&file)?;
            let html = markdown_to_html(&strip_comments(&markdown))
                .with_context(|| format!("Failed to render {}", file.display()))?;
            println!("{html}");
            Ok(())
        }
        Command::Build(args) => build(resolve_settings(args)?),
    }
}

fn read_source(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}

fn print_blocks(file: &Path) -> Result<()> {
    let markdown = read_source(file)?;
    for (i, block) in segment(&strip_comments(&markdown)).iter().enumerate() {
        println!("[{i}] {:?}", block.kind);
        println!("{}", block.as_str());
        println!();
    }
    Ok(())
}

fn print_inline(text: &str) -> Result<()> {
    for span in parse_inline(text)? {
        match &span.url {
            Some(url) => println!("{:?}\t{:?}\t{url}", span.kind, span.text),
            None => println!("{:?}\t{:?}", span.kind, span.text),
        }
    }
    Ok(())
}

fn resolve_settings(args: BuildArgs) -> Result<BuildSettings> {
    let config = Config::load().context("Failed to load config file")?;
    let config_path = Config::config_path();

    let (content_path, output_path, template_path, excerpt_len) =
        match (config, args.content, args.output) {
            (Some(config), content, output) => (
                content.unwrap_or(config.content_path),
                output.unwrap_or(config.output_path),
                config.template_path,
                config.excerpt_len,
            ),
            (None, Some(content), Some(output)) => (content, output, None, DEFAULT_EXCERPT_LEN),
            (None, _, _) => bail!(
                "No content/output paths provided and no config file found; \
                 pass --content and --output or create {}",
                config_path.display()
            ),
        };

    io::validate_content_dir(&content_path)
        .with_context(|| format!("Content path '{}' is invalid", content_path.display()))?;

    let template = args
        .template
        .or(template_path)
        .map(|path| {
            fs::read_to_string(&path)
                .with_context(|| format!("Failed to read template {}", path.display()))
        })
        .transpose()?;

    Ok(BuildSettings {
        content_path,
        output_path,
        template,
        excerpt_len,
        date: args
            .date
            .unwrap_or_else(|| Local::now().date_naive())
            .format(PAGE_DATE_FORMAT)
            .to_string(),
    })
}

fn build(settings: BuildSettings) -> Result<()> {
    let files = io::scan_markdown_files(&settings.content_path)?;
    log::info!(
        "Building {} page(s) from {} into {}",
        files.len(),
        settings.content_path.display(),
        settings.output_path.display()
    );

    let mut failed = 0;
    for file in &files {
        let relative = file
            .strip_prefix(&settings.content_path)
            .context("Scanned file outside content directory")
            .and_then(|p| RelativePathBuf::from_path(p).context("Non-relative content path"))?;

        if let Err(e) = build_page(&relative, &settings) {
            log::error!("{relative}: {e:#}");
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{failed} of {} page(s) failed to render", files.len());
    }
    log::info!("Built {} page(s)", files.len());
    Ok(())
}

fn build_page(relative: &RelativePath, settings: &BuildSettings) -> Result<()> {
    let mut markdown = io::read_file(relative, &settings.content_path)?;
    let file_name = relative.file_name().unwrap_or_default();

    let meta = PageMeta::from_markdown(&markdown, file_name, settings.excerpt_len);
    let date = meta.date.clone().unwrap_or_else(|| settings.date.clone());
    if extract_page_date(&markdown).is_none() {
        // Persist the stamp so the page keeps its date on later builds
        markdown = inject_page_date(&markdown, &date);
        io::write_file(relative, &settings.content_path, &markdown)?;
        log::info!("Added page-date {date} to {relative}");
    }
    let meta = PageMeta {
        date: Some(date),
        ..meta
    };

    let body = markdown_to_html(&strip_comments(&markdown))?;
    let html = match &settings.template {
        Some(template) => render_template(template, &meta, &body),
        None => body,
    };

    let dest = relative.with_extension("html");
    io::write_file(&dest, &settings.output_path, &html)?;
    log::debug!("Wrote {dest} ({})", meta.title);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn settings(content: &TempDir, output: &TempDir, template: Option<&str>) -> BuildSettings {
        BuildSettings {
            content_path: content.path().to_path_buf(),
            output_path: output.path().to_path_buf(),
            template: template.map(str::to_string),
            excerpt_len: DEFAULT_EXCERPT_LEN,
            date: "2024-06-01".to_string(),
        }
    }

    #[test]
    fn build_renders_pages_into_template() {
        let content = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::create_dir_all(content.path().join("blog")).unwrap();
        fs::write(
            content.path().join("blog/2023-02-03-first.md"),
            "# First *post*\n\nHello there.\n",
        )
        .unwrap();

        build(settings(
            &content,
            &output,
            Some("<title>{{ Title }}</title><time>{{ PageDate }}</time>{{ Content }}"),
        ))
        .unwrap();

        let html = fs::read_to_string(output.path().join("blog/2023-02-03-first.html")).unwrap();
        assert_eq!(
            html,
            "<title>First *post*</title><time>2023-02-03</time><div><h1>First <i>post</i></h1><p>Hello there.</p></div>"
        );
    }

    #[test]
    fn build_stamps_undated_sources() {
        let content = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(content.path().join("about.md"), "# About\n\nMe.\n").unwrap();

        build(settings(&content, &output, None)).unwrap();

        let source = fs::read_to_string(content.path().join("about.md")).unwrap();
        assert_eq!(source, "<!-- page-date: 2024-06-01 -->\n# About\n\nMe.\n");
        let html = fs::read_to_string(output.path().join("about.html")).unwrap();
        assert_eq!(html, "<div><h1>About</h1><p>Me.</p></div>");
    }

    #[test]
    fn rebuilding_keeps_a_single_stamp() {
        let content = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(content.path().join("about.md"), "# About\n\nMe.\n").unwrap();

        build(settings(&content, &output, None)).unwrap();
        build(settings(&content, &output, None)).unwrap();

        let source = fs::read_to_string(content.path().join("about.md")).unwrap();
        assert_eq!(source.matches("page-date:").count(), 1);
    }

    #[test]
    fn date_flag_is_parsed_and_normalised() {
        let cli = Cli::try_parse_from(["markdown-folio", "build", "--date", "2024-6-1"]).unwrap();
        let Command::Build(args) = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(
            args.date.map(|d| d.format(PAGE_DATE_FORMAT).to_string()),
            Some("2024-06-01".to_string())
        );
    }

    #[test]
    fn malformed_date_flag_is_rejected() {
        assert!(Cli::try_parse_from(["markdown-folio", "build", "--date", "June 1st"]).is_err());
        assert!(Cli::try_parse_from(["markdown-folio", "build", "--date", "2024-13-01"]).is_err());
    }

    #[test]
    fn build_reports_unbalanced_pages() {
        let content = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(content.path().join("good.md"), "# Good\n").unwrap();
        fs::write(content.path().join("bad.md"), "# Bad\n\nbroken **bold\n").unwrap();

        let err = build(settings(&content, &output, None)).unwrap_err();

        assert!(err.to_string().contains("1 of 2"));
        assert!(output.path().join("good.html").exists());
        assert!(!output.path().join("bad.html").exists());
    }
}
