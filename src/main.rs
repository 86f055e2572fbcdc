use std::{env, path::PathBuf, process, time::Instant};

use codeblock::{
    errors::errors::{Error, ErrorImpl, ErrorTip},
    highlight::{
        codeblock::Codeblock,
        palette::{Palette, Rgb},
        render::render_ansi,
    },
    init_tracing, language_for_path, read_source,
};
use tracing::debug;

struct Options {
    file: PathBuf,
    language: Option<String>,
    title: Option<String>,
    line_numbers: bool,
    light: bool,
    background: Option<String>,
    foreground: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Options, Error> {
    let mut file = None;
    let mut language = None;
    let mut title = None;
    let mut line_numbers = false;
    let mut light = false;
    let mut background = None;
    let mut foreground = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--language" | "-l" => language = Some(value_for(arg, iter.next())?),
            "--title" | "-t" => title = Some(value_for(arg, iter.next())?),
            "--line-numbers" | "-n" => line_numbers = true,
            "--light" => light = true,
            "--background" | "-b" => background = Some(value_for(arg, iter.next())?),
            "--foreground" | "-f" => foreground = Some(value_for(arg, iter.next())?),
            flag if flag.starts_with('-') => {
                return Err(Error::new(ErrorImpl::UnknownFlag {
                    flag: String::from(flag),
                }))
            }
            path => file = Some(PathBuf::from(path)),
        }
    }

    let file = file.ok_or_else(|| {
        Error::new(ErrorImpl::MissingArgument {
            name: String::from("<file>"),
        })
    })?;

    Ok(Options {
        file,
        language,
        title,
        line_numbers,
        light,
        background,
        foreground,
    })
}

fn value_for(flag: &str, value: Option<&String>) -> Result<String, Error> {
    value.cloned().ok_or_else(|| {
        Error::new(ErrorImpl::MissingArgument {
            name: String::from(flag),
        })
    })
}

/// Theme colors given on the command line go through background
/// detection; otherwise `--light` picks between the built-in variants.
fn select_palette(options: &Options) -> Result<Palette, Error> {
    if options.background.is_none() && options.foreground.is_none() {
        return Ok(if options.light {
            Palette::light(Rgb(0x1F, 0x29, 0x37))
        } else {
            Palette::dark(Rgb(0xEE, 0xFF, 0xFF))
        });
    }

    let (background, foreground) = if options.light {
        ("#FFFFFF", "#1F2937")
    } else {
        ("#292D3E", "#EEFFFF")
    };

    Palette::from_theme(
        options.background.as_deref().unwrap_or(background),
        options.foreground.as_deref().unwrap_or(foreground),
    )
}

fn run(args: &[String]) -> Result<(), Error> {
    let options = parse_args(args)?;
    let palette = select_palette(&options)?;
    let source = read_source(&options.file)?;

    let start = Instant::now();

    let language = options
        .language
        .unwrap_or_else(|| language_for_path(&options.file));
    let title = options
        .title
        .unwrap_or_else(|| options.file.to_string_lossy().into_owned());

    let codeblock = Codeblock::new(source)
        .language(language)
        .title(title)
        .show_line_numbers(options.line_numbers);

    print!("{}", render_ansi(&codeblock, &palette));

    debug!(elapsed = ?start.elapsed(), lines = codeblock.line_count(), "highlighted");
    Ok(())
}

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();

    if let Err(error) = run(&args) {
        display_error(&error);
        process::exit(1);
    }
}

fn display_error(error: &Error) {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {} ({})", error.get_error_name(), error);
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("usage: codeblock <file> [--language <id>] [--title <text>] [--line-numbers] [--light] [--background <color>] [--foreground <#RRGGBB>]");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_parse_theme_flags() {
        let options = parse_args(&args(&[
            "App.tsx",
            "--background",
            "#FAFAFA",
            "--foreground",
            "#222222",
        ]))
        .unwrap();

        assert_eq!(options.file, PathBuf::from("App.tsx"));
        assert_eq!(options.background.as_deref(), Some("#FAFAFA"));
        assert_eq!(options.foreground.as_deref(), Some("#222222"));
    }

    #[test]
    fn test_theme_flags_pick_palette() {
        let options = parse_args(&args(&["App.tsx", "-b", "#FAFAFA", "-f", "#222222"])).unwrap();
        let palette = select_palette(&options).unwrap();

        assert_eq!(palette, Palette::light(Rgb(0x22, 0x22, 0x22)));

        let options = parse_args(&args(&["App.tsx", "--background", "darkslategray"])).unwrap();
        let palette = select_palette(&options).unwrap();

        assert_eq!(palette, Palette::dark(Rgb(0xEE, 0xFF, 0xFF)));
    }

    #[test]
    fn test_invalid_foreground_is_reported() {
        let error = run(&args(&["does-not-exist.tsx", "--foreground", "blue"])).unwrap_err();

        assert_eq!(error.get_error_name(), "InvalidHexColor");
        match error.get_tip() {
            ErrorTip::Suggestion(tip) => assert!(tip.contains("blue")),
            ErrorTip::None => panic!("Expected suggestion tip"),
        }
    }

    #[test]
    fn test_invalid_background_hex_is_reported() {
        let error = run(&args(&["does-not-exist.tsx", "--background", "#12"])).unwrap_err();

        assert_eq!(error.get_error_name(), "InvalidHexColor");
    }

    #[test]
    fn test_missing_flag_value() {
        let error = parse_args(&args(&["App.tsx", "--foreground"])).err().unwrap();

        assert_eq!(error.get_error_name(), "MissingArgument");
    }
}
