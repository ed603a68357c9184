use clap::Parser;
use std::path::PathBuf;

pub const USAGE: &str = "\nlowcov requires the following arguments:\n-i <input_file>\n-o <output_file>\n";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    #[arg(short = 'i', required = true, value_name = "INPUT", help = "Sambamba coverage report (tab separated).")]
    pub input: PathBuf,

    #[arg(short = 'o', required = true, value_name = "OUTPUT", help = "Path to write the low coverage report to.")]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_in_any_order() {
        let args = Args::try_parse_from(["lowcov", "-o", "out.txt", "-i", "in.tsv"]).unwrap();
        assert_eq!(args.input, PathBuf::from("in.tsv"));
        assert_eq!(args.output, PathBuf::from("out.txt"));
    }

    #[test]
    fn test_missing_flag() {
        assert!(Args::try_parse_from(["lowcov", "-i", "in.tsv"]).is_err());
    }

    #[test]
    fn test_unknown_flag() {
        assert!(Args::try_parse_from(["lowcov", "-i", "in.tsv", "-o", "out.txt", "-x", "1"]).is_err());
    }

    #[test]
    fn test_help_and_version_are_not_flags() {
        assert!(Args::try_parse_from(["lowcov", "-h"]).is_err());
        assert!(Args::try_parse_from(["lowcov", "--help"]).is_err());
        assert!(Args::try_parse_from(["lowcov", "-V"]).is_err());
        assert!(Args::try_parse_from(["lowcov", "-i", "in.tsv", "-o", "out.txt", "-h"]).is_err());
    }

    #[test]
    fn test_repeated_flag() {
        assert!(Args::try_parse_from(["lowcov", "-i", "a.tsv", "-i", "b.tsv", "-o", "out.txt"]).is_err());
    }
}
