use clap::Parser;

use spline_core::units::UnitSystem;
use spline_core::OutputSettings;

#[derive(Parser)]
#[command(name = "splines")]
#[command(author, version, about = "Involute spline drawing data (ISO 4156, ANSI B92.1)")]
pub struct Cli {
    /// Spline designations, e.g. "INT 25z x 1,0m x 30P x 5H - ISO 4156".
    /// Read from stdin, one per line, when none are given.
    pub designations: Vec<String>,

    /// Present lengths in this unit system (metric or imperial)
    #[arg(short, long, env = "SPLINES_UNITS")]
    pub units: Option<UnitSystem>,

    /// Print the full result as JSON instead of drawing data
    #[arg(long)]
    pub json: bool,

    /// Spline length in mm used by the ISO helix deviation (default: half the pitch diameter)
    #[arg(short, long)]
    pub length: Option<f64>,

    /// Leave the designation line out of the drawing data
    #[arg(long)]
    pub no_spec_line: bool,

    /// Log derivation steps to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Presentation settings selected by the flags
    pub fn output_settings(&self) -> OutputSettings {
        OutputSettings {
            units: self.units,
            include_spec_line: !self.no_spec_line,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_to_settings() {
        let cli = Cli::parse_from([
            "splines",
            "--units",
            "imperial",
            "--no-spec-line",
            "EXT 25z 1m 30P 5h",
        ]);
        let settings = cli.output_settings();
        assert_eq!(settings.units, Some(UnitSystem::Imperial));
        assert!(!settings.include_spec_line);
        assert_eq!(cli.designations, vec!["EXT 25z 1m 30P 5h".to_string()]);
    }

    #[test]
    fn test_bad_unit_is_rejected() {
        assert!(Cli::try_parse_from(["splines", "--units", "furlong"]).is_err());
    }
}
