mod cli;

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Context;
use askyart::{image_info, process_image};
use clap::Parser;
use cli::Cli;
use log::info;

fn main() -> anyhow::Result<()> {
    // Configure logging
    env_logger::init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let image = image::open(&cli.file)
        .with_context(|| format!("could not open image \"{}\"", cli.file.display()))?;

    if cli.info {
        println!("Info, ignoring all other flags");
        println!("{}", image_info(&image));
        return Ok(());
    }

    let config = cli.to_config();
    let art = process_image(&image, &config)
        .with_context(|| format!("could not convert \"{}\"", cli.file.display()))?;

    let file = File::create(&cli.destination)
        .with_context(|| format!("could not open file: \"{}\"", cli.destination.display()))?;
    let mut out = BufWriter::new(file);
    art.write_to(&mut out)?;
    out.flush()
        .with_context(|| format!("could not write \"{}\"", cli.destination.display()))?;
    info!(
        "wrote {}x{} glyphs to {}",
        art.width,
        art.height,
        cli.destination.display()
    );

    if cli.show {
        println!("Result:");
        print!("{}", art);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    fn cli_for(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("askyart").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_run_writes_destination() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.txt");
        RgbImage::from_pixel(20, 10, Rgb([255, 0, 0])).save(&input).unwrap();

        let cli = cli_for(&[
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "--width",
            "4",
        ]);
        run(&cli).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("\x1b[38;2;255;0;0mQ"));
    }

    #[test]
    fn test_run_grayscale() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.txt");
        RgbImage::from_pixel(6, 3, Rgb([0, 0, 0])).save(&input).unwrap();

        let cli = cli_for(&[
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "--grayscale",
            "--scale",
            "1",
        ]);
        run(&cli).unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), "$$$$$$\n$$$$$$\n$$$$$$\n");
    }

    #[test]
    fn test_run_info_skips_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.txt");
        RgbImage::new(8, 8).save(&input).unwrap();

        let cli = cli_for(&[input.to_str().unwrap(), output.to_str().unwrap(), "--info"]);
        run(&cli).unwrap();
        assert!(!output.exists());
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempdir().unwrap();
        let cli = cli_for(&[
            dir.path().join("missing.png").to_str().unwrap(),
            dir.path().join("out.txt").to_str().unwrap(),
        ]);
        assert!(run(&cli).is_err());
    }
}
