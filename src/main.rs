//! # numblog
//! Renders the NumPy primer page to the terminal, or to an html page.

#[macro_use]
extern crate log;

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use rust_embed::RustEmbed;

use numblog_lib::config::{Config, Format, DEFAULT_CONFIG_FILE};
use numblog_lib::content::numpy_blog;
use numblog_lib::{render, Error, Highlighter, HtmlSurface, TextSurface};

#[derive(RustEmbed)]
#[folder = "resources/"]
struct Resources;

const ABOUT: &str = "
numblog, a NumPy primer.

Without arguments the page is printed to the terminal. Settings are read from
'Numblog.toml' when present; flags take precedence over the file.
";

fn cli() -> Command {
    Command::new("numblog")
        .version(env!("CARGO_PKG_VERSION"))
        .about(ABOUT)
        .arg(Arg::new("config")
             .short('c')
             .long("config")
             .value_name("NUMBLOGFILE")
             .help("Conf file to use (default is \"Numblog.toml\", if present)"))
        .arg(Arg::new("output")
             .short('o')
             .long("output")
             .value_name("FILE")
             .help("Write the page to FILE instead of stdout"))
        .arg(Arg::new("format")
             .short('f')
             .long("format")
             .value_name("FORMAT")
             .value_parser(["text", "html"])
             .help("Output format (default is \"text\")"))
        .arg(Arg::new("theme")
             .short('t')
             .long("theme")
             .value_name("THEME")
             .help("Syntax highlighting theme (default is \"base16-ocean.dark\")"))
        .arg(Arg::new("no-color")
             .long("no-color")
             .action(ArgAction::SetTrue)
             .help("Do not color code samples in text output"))
}

/// Conf file first, then flags on top of it.
fn load_config(matches: &ArgMatches) -> Result<Config, Error> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => Config::load(Path::new(path))?,
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    };
    Ok(apply_flags(config, matches))
}

fn apply_flags(mut config: Config, matches: &ArgMatches) -> Config {
    if let Some(output) = matches.get_one::<String>("output") {
        config.output = Some(PathBuf::from(output));
    }
    if let Some(format) = matches.get_one::<String>("format").and_then(|f| Format::parse(f)) {
        config.format = format;
    }
    if let Some(theme) = matches.get_one::<String>("theme") {
        config.theme = theme.clone();
    }
    if matches.get_flag("no-color") {
        config.color = false;
    }
    config
}

/// Colors only go to an interactive stdout.
fn use_color(config: &Config, stdout_is_terminal: bool) -> bool {
    config.color && config.output.is_none() && stdout_is_terminal
}

/// Drops the embedded stylesheet next to an html page, unless the href
/// points elsewhere.
fn write_stylesheet(page: &Path, href: &str) -> Result<(), Error> {
    if href.contains("://") || href.starts_with('/') {
        debug!("stylesheet {} is external, not writing it", href);
        return Ok(());
    }
    let css = match Resources::get("classic.css") {
        Some(file) => file,
        None => {
            warn!("no embedded stylesheet");
            return Ok(());
        }
    };
    let target = page.parent().unwrap_or_else(|| Path::new("")).join(href);
    if let Some(dir) = target.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    fs::write(&target, css.data.as_ref())?;
    info!("wrote {}", target.display());
    Ok(())
}

/// Renders the whole page in memory; nothing is written on failure.
fn render_page(config: &Config, color: bool) -> Result<Vec<u8>, Error> {
    let document = numpy_blog();
    match config.format {
        Format::Text => {
            let mut surface = if color {
                TextSurface::colored(Vec::new(), Highlighter::new(&config.theme))
            } else {
                TextSurface::new(Vec::new())
            };
            render(&document, &mut surface)?;
            Ok(surface.into_inner())
        }
        Format::Html => {
            let mut surface =
                HtmlSurface::new(Vec::new(), Highlighter::new(&config.theme), &config.stylesheet);
            render(&document, &mut surface)?;
            surface.finish()
        }
    }
}

fn write_page(config: &Config, page: &[u8]) -> Result<(), Error> {
    match config.output {
        Some(ref path) => {
            if let Some(dir) = path.parent() {
                if !dir.as_os_str().is_empty() {
                    fs::create_dir_all(dir)?;
                }
            }
            fs::write(path, page)?;
            info!("wrote {}", path.display());
            if config.format == Format::Html {
                write_stylesheet(path, &config.stylesheet)?;
            }
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(page)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn run(config: &Config) -> Result<(), Error> {
    let page = render_page(config, use_color(config, io::stdout().is_terminal()))?;
    write_page(config, &page)
}

fn main() {
    env_logger::init();
    let matches = cli().get_matches();
    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };
    debug!("{:?}", config);
    if let Err(e) = run(&config) {
        error!("{}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config() -> Config {
        Config::from_toml(
            r#"
format = "text"
theme = "InspiredGitHub"
stylesheet = "style/page.css"
"#,
        )
        .unwrap()
    }

    #[test]
    fn flags_override_conf_file() {
        let matches = cli().get_matches_from([
            "numblog", "-f", "html", "--no-color", "-o", "out/index.html",
        ]);
        let config = apply_flags(file_config(), &matches);
        assert_eq!(config.format, Format::Html);
        assert!(!config.color);
        assert_eq!(config.output, Some(PathBuf::from("out/index.html")));
        assert_eq!(config.theme, "InspiredGitHub");
        assert_eq!(config.stylesheet, "style/page.css");
    }

    #[test]
    fn no_flags_keep_conf_file() {
        let matches = cli().get_matches_from(["numblog"]);
        assert_eq!(apply_flags(file_config(), &matches), file_config());
    }

    #[test]
    fn colors_need_a_terminal() {
        let config = Config::default();
        assert!(use_color(&config, true));
        assert!(!use_color(&config, false));
        let mut to_file = Config::default();
        to_file.output = Some(PathBuf::from("page.txt"));
        assert!(!use_color(&to_file, true));
    }

    #[test]
    fn external_stylesheet_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("index.html");
        write_stylesheet(&page, "https://x/c.css").unwrap();
        write_stylesheet(&page, "/abs/c.css").unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn relative_stylesheet_lands_next_to_page() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("index.html");
        write_stylesheet(&page, "style/classic.css").unwrap();
        let css = fs::read_to_string(dir.path().join("style/classic.css")).unwrap();
        assert!(css.contains("ul.sections"));
    }

    #[test]
    fn page_is_rendered_before_output_is_touched() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.format = Format::Html;
        config.output = Some(dir.path().join("index.html"));
        let page = render_page(&config, false).unwrap();
        assert!(!dir.path().join("index.html").exists());
        assert!(String::from_utf8(page).unwrap().contains("<title>Numpy Blog</title>"));

        write_page(&config, b"<html></html>").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("index.html")).unwrap(), "<html></html>");
        assert!(dir.path().join("classic.css").exists());
    }

    #[test]
    fn text_page_without_colors() {
        let page = render_page(&Config::default(), false).unwrap();
        let text = String::from_utf8(page).unwrap();
        assert!(text.starts_with("Numpy Blog\n"));
        assert!(!text.contains('\x1b'));
    }
}
