//! Compare command implementation

use std::fmt::Write as _;
use std::path::Path;

use colored::Colorize;

use shot_core::{Comparison, MaskConfig, MaskRect, compare_images};

use crate::error::Result;

/// Run the compare command
///
/// Prints the verdict sync would reach for this pair. Exits successfully
/// whether or not the images are equivalent.
pub fn run_compare(old: &Path, new: &Path, mask: &MaskConfig, json: bool) -> Result<()> {
    let comparison = compare_images(old, new, mask)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    print!("{}", render_comparison(old, new, mask, &comparison));
    Ok(())
}

fn render_comparison(old: &Path, new: &Path, mask: &MaskConfig, comparison: &Comparison) -> String {
    let (ow, oh) = comparison.old_dimensions;
    let (nw, nh) = comparison.new_dimensions;
    let mut out = format!(
        "old: {} ({}x{})\nnew: {} ({}x{})\n",
        old.display(),
        ow,
        oh,
        new.display(),
        nw,
        nh
    );

    match comparison.hashes {
        Some((a, b)) => {
            let rect = MaskRect::for_size(ow, oh, mask);
            let _ = writeln!(out, "mask: x {}..{}, y {}..{}", rect.x0, rect.x1, rect.y0, rect.y1);
            let _ = writeln!(out, "hashes: {} {} (distance {})", a, b, a.distance(&b));
        }
        None => out.push_str("dimensions differ, hashes not computed\n"),
    }

    let verdict = if comparison.equivalent {
        "EQUIVALENT".green().bold()
    } else {
        "DIFFERENT".red().bold()
    };
    let _ = writeln!(out, "{} {}", "=>".blue().bold(), verdict);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shot_core::PerceptualHash;

    #[test]
    fn render_size_mismatch() {
        colored::control::set_override(false);
        let comparison = Comparison {
            old_dimensions: (10, 20),
            new_dimensions: (10, 21),
            hashes: None,
            equivalent: false,
        };

        let text = render_comparison(
            Path::new("a.png"),
            Path::new("b.png"),
            &MaskConfig::default(),
            &comparison,
        );

        assert!(text.contains("old: a.png (10x20)"));
        assert!(text.contains("dimensions differ"));
        assert!(text.ends_with("=> DIFFERENT\n"));
    }

    #[test]
    fn render_hashes_and_distance() {
        colored::control::set_override(false);
        let comparison = Comparison {
            old_dimensions: (1000, 2000),
            new_dimensions: (1000, 2000),
            hashes: Some((PerceptualHash::from_bits(1), PerceptualHash::from_bits(3))),
            equivalent: false,
        };

        let text = render_comparison(
            Path::new("a.png"),
            Path::new("b.png"),
            &MaskConfig::default(),
            &comparison,
        );

        assert!(text.contains("mask: x 100..260, y 40..120"));
        assert!(text.contains("0000000000000001 0000000000000003 (distance 1)"));
    }
}
