use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use gradient::config::GradientConfig;
use gradient::gradient::{Corners, GradientParams, Interpolation};
use gradient::hexgrid;

mod render_png;

const GENERATE_EXAMPLES: &str = "\
Color values are packed RGB565 words, given as hex or decimal.

Examples:
  rgb565-gradient generate 16 16 0x0 0xf 0x0 0xf ./file.txt
  rgb565-gradient generate 32 32 3000 6000 9000 12000 ./file.txt";

/// RGB565 four-corner gradient generator
#[derive(Parser)]
#[command(name = "rgb565-gradient", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a gradient and write it as a hex grid
    #[command(after_help = GENERATE_EXAMPLES)]
    Generate {
        /// Image width in pixels
        #[arg(value_parser = parse_dimension)]
        width: u16,
        /// Image height in pixels
        #[arg(value_parser = parse_dimension)]
        height: u16,
        /// Top-left pixel color
        #[arg(value_parser = parse_u16)]
        tl: u16,
        /// Top-right pixel color
        #[arg(value_parser = parse_u16)]
        tr: u16,
        /// Bottom-left pixel color
        #[arg(value_parser = parse_u16)]
        bl: u16,
        /// Bottom-right pixel color
        #[arg(value_parser = parse_u16)]
        br: u16,
        /// Output file path
        output: PathBuf,
    },
    /// Generate a gradient from a TOML parameter file
    FromConfig {
        /// Path to a .toml file with width, height and the four corners
        config: PathBuf,
        /// Output file path
        output: PathBuf,
    },
    /// Render a hex grid file as a PNG preview
    Render {
        /// Hex grid file written by `generate`
        input: PathBuf,
        /// Output PNG path
        output: PathBuf,
        /// Pixels per grid cell
        #[arg(long, default_value = "16")]
        scale: usize,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            eprintln!();
            let _ = Cli::command().print_help();
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate {
            width,
            height,
            tl,
            tr,
            bl,
            br,
            output,
        } => {
            let corners = Corners {
                top_left: tl,
                top_right: tr,
                bottom_left: bl,
                bottom_right: br,
            };
            let params = GradientParams::new(width, height, corners)?;
            cmd_generate(&params, &output)
        }
        Command::FromConfig { config, output } => {
            let params = load_config(&config)?;
            cmd_generate(&params, &output)
        }
        Command::Render {
            input,
            output,
            scale,
        } => cmd_render(&input, &output, scale),
    }
}

/// Parse a 16-bit unsigned value given in decimal or `0x`-prefixed hex.
fn parse_u16(arg: &str) -> Result<u16, String> {
    if arg.contains('.') {
        return Err(format!("floating-point values are not allowed: {arg}"));
    }
    let (digits, radix) = match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (arg, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(format!("incorrect argument value: {arg}, it should be a number"));
    }
    u16::from_str_radix(digits, radix)
        .map_err(|_| format!("argument out of range for a 16-bit value: {arg}"))
}

/// Like [`parse_u16`], but rejects zero.
fn parse_dimension(arg: &str) -> Result<u16, String> {
    match parse_u16(arg)? {
        0 => Err(format!("invalid image dimension: {arg}, it must be at least 1")),
        v => Ok(v),
    }
}

fn load_config(path: &Path) -> Result<GradientParams> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config = GradientConfig::from_toml(&toml_str)
        .with_context(|| format!("parsing gradient config from {}", path.display()))?;
    config
        .params()
        .with_context(|| format!("invalid parameters in {}", path.display()))
}

fn cmd_generate(params: &GradientParams, output: &Path) -> Result<()> {
    let file = std::fs::File::create(output)
        .with_context(|| format!("could not open output file {}", output.display()))?;
    let mut w = std::io::BufWriter::new(file);

    let grid = Interpolation::Bilinear.generate(params);
    hexgrid::write_grid(&grid, &mut w)
        .and_then(|()| w.flush())
        .with_context(|| format!("writing {}", output.display()))?;

    log::info!(
        "wrote {}x{} gradient to {}",
        params.width(),
        params.height(),
        output.display()
    );
    Ok(())
}

fn cmd_render(input: &Path, output: &Path, scale: usize) -> Result<()> {
    anyhow::ensure!(scale >= 1, "--scale must be at least 1");

    let text = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let grid = hexgrid::parse_grid(&text)
        .with_context(|| format!("parsing hex grid from {}", input.display()))?;
    anyhow::ensure!(
        render_png::scaled_size(&grid, scale).is_some(),
        "--scale {} too large for a {}x{} grid",
        scale,
        grid.width(),
        grid.height()
    );

    render_png::write_grid_png(&grid, scale, output)?;
    println!("wrote {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_u16_accepts_decimal_and_hex() {
        assert_eq!(parse_u16("0"), Ok(0));
        assert_eq!(parse_u16("12000"), Ok(12000));
        assert_eq!(parse_u16("0xf"), Ok(15));
        assert_eq!(parse_u16("0XFFFF"), Ok(0xffff));
        assert_eq!(parse_u16("65535"), Ok(u16::MAX));
    }

    #[test]
    fn parse_u16_rejects_bad_values() {
        assert!(parse_u16("1.5").unwrap_err().contains("floating-point"));
        assert!(parse_u16("abc").unwrap_err().contains("should be a number"));
        assert!(parse_u16("0x").is_err());
        assert!(parse_u16("-1").is_err());
        assert!(parse_u16("+1").is_err());
        assert!(parse_u16("12abc").is_err());
        assert!(parse_u16("65536").unwrap_err().contains("out of range"));
        assert!(parse_u16("0x10000").unwrap_err().contains("out of range"));
    }

    #[test]
    fn dimension_must_be_positive() {
        assert!(parse_dimension("0").is_err());
        assert!(parse_dimension("0x0").is_err());
        assert_eq!(parse_dimension("1"), Ok(1));
    }

    #[test]
    fn generate_requires_all_positionals() {
        assert!(Cli::try_parse_from(["rgb565-gradient", "generate", "2", "2", "0", "0", "0", "0"]).is_err());
        let cli = Cli::try_parse_from([
            "rgb565-gradient",
            "generate",
            "16",
            "0x10",
            "0x0",
            "0xf",
            "0x0",
            "0xf",
            "out.txt",
        ])
        .unwrap();
        match cli.command {
            Command::Generate {
                width, height, tr, output, ..
            } => {
                assert_eq!((width, height, tr), (16, 16, 15));
                assert_eq!(output, PathBuf::from("out.txt"));
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn generate_rejects_zero_width() {
        assert!(Cli::try_parse_from([
            "rgb565-gradient", "generate", "0", "2", "0", "0", "0", "0", "out.txt"
        ])
        .is_err());
    }

    #[test]
    fn generate_then_render_through_files() {
        let dir = std::env::temp_dir();
        let id = std::process::id();
        let txt = dir.join(format!("gradient-cli-{id}.txt"));
        let png = dir.join(format!("gradient-cli-{id}.png"));

        let params = GradientParams::new(2, 2, Corners::uniform(0)).unwrap();
        cmd_generate(&params, &txt).unwrap();
        assert_eq!(
            std::fs::read_to_string(&txt).unwrap(),
            "0x0000 0x0000\n0x0000 0x0000\n"
        );

        cmd_render(&txt, &png, 2).unwrap();
        assert!(std::fs::metadata(&png).unwrap().len() > 8);

        std::fs::remove_file(&txt).unwrap();
        std::fs::remove_file(&png).unwrap();
    }

    #[test]
    fn oversized_scale_is_an_error() {
        let dir = std::env::temp_dir();
        let id = std::process::id();
        let txt = dir.join(format!("gradient-cli-scale-{id}.txt"));
        let png = dir.join(format!("gradient-cli-scale-{id}.png"));
        std::fs::write(&txt, "0x0000 0x0000\n").unwrap();

        let err = cmd_render(&txt, &png, usize::MAX / 2).unwrap_err();
        std::fs::remove_file(&txt).unwrap();

        assert!(err.to_string().contains("too large for a 2x1 grid"), "{err:#}");
        assert!(!png.exists());
    }

    #[test]
    fn missing_output_dir_fails_before_generating() {
        // The largest grid the CLI accepts: generating it first would take
        // far longer than the failed open.
        let params = GradientParams::new(u16::MAX, u16::MAX, Corners::default()).unwrap();
        let missing = std::env::temp_dir()
            .join("gradient-cli-no-such-dir")
            .join("big.txt");
        let start = std::time::Instant::now();
        assert!(cmd_generate(&params, &missing).is_err());
        assert!(start.elapsed() < std::time::Duration::from_secs(5));
    }

    #[test]
    fn unwritable_output_is_an_error() {
        let params = GradientParams::new(1, 1, Corners::default()).unwrap();
        let missing = std::env::temp_dir()
            .join("gradient-cli-no-such-dir")
            .join("out.txt");
        let err = cmd_generate(&params, &missing).unwrap_err();
        assert!(format!("{err:#}").contains("could not open output file"));
    }

    #[test]
    fn config_file_drives_generation() {
        let path = std::env::temp_dir().join(format!("gradient-cli-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "width = 3\nheight = 2\ntop_left = 0xffff\ntop_right = 0xffff\n\
             bottom_left = 0\nbottom_right = 0\n",
        )
        .unwrap();
        let params = load_config(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!((params.width(), params.height()), (3, 2));
        assert_eq!(params.corners().top_left, 0xffff);
    }
}
