//! Usage-block option rendering.

/// A documented command-line option: flag text and help text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOption {
    pub flag: String,
    pub help: String,
}

impl CliOption {
    pub fn new(flag: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            flag: flag.into(),
            help: help.into(),
        }
    }

    /// Split an option line on whitespace: first token is the flag, the rest
    /// (single-space joined) is the help text. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let flag = words.next()?;
        let help = words.collect::<Vec<_>>().join(" ");
        Some(Self::new(flag, help))
    }
}

/// Options every generated setup script understands, after the user's own.
pub fn builtin_options() -> Vec<CliOption> {
    vec![
        CliOption::new(
            "--type=<TYPE>",
            "Set the CMake build type (debug, release, or relwithdeb) [default: release].",
        ),
        CliOption::new(
            "--generator=<STRING>",
            "Set the CMake build system generator [default: Unix Makefiles].",
        ),
        CliOption::new("--show", "Show CMake command and exit."),
        CliOption::new(
            "--cmake-executable=<CMAKE_EXECUTABLE>",
            "Set the CMake executable [default: cmake].",
        ),
        CliOption::new(
            "--cmake-options=<STRING>",
            "Define options to CMake [default: ''].",
        ),
        CliOption::new("--prefix=<PATH>", "Set the install path for make install."),
        CliOption::new("<builddir>", "Build directory."),
        CliOption::new("-h --help", "Show this screen."),
    ]
}

/// Indent flags by two spaces and start every help text in the same column.
pub fn align_options(options: &[CliOption]) -> String {
    let width = options
        .iter()
        .map(|opt| opt.flag.chars().count())
        .max()
        .unwrap_or(0);

    options
        .iter()
        .map(|opt| {
            let pad = width - opt.flag.chars().count();
            format!("  {}{}  {}", opt.flag, " ".repeat(pad), opt.help)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_option_line() {
        let opt = CliOption::parse("  --omp   Enable OpenMP\tparallelization [default: False].")
            .unwrap();
        assert_eq!(opt.flag, "--omp");
        assert_eq!(opt.help, "Enable OpenMP parallelization [default: False].");
    }

    #[test]
    fn test_parse_flag_only_and_blank() {
        assert_eq!(CliOption::parse("--quiet"), Some(CliOption::new("--quiet", "")));
        assert_eq!(CliOption::parse("   "), None);
        assert_eq!(CliOption::parse(""), None);
    }

    #[test]
    fn test_help_texts_share_a_column() {
        let options = vec![
            CliOption::new("-a", "short"),
            CliOption::new("--longer-flag=<X>", "long"),
            CliOption::new("--mid", "mid"),
        ];
        let rendered = align_options(&options);
        let width = "--longer-flag=<X>".len();

        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        for (line, opt) in lines.iter().zip(&options) {
            assert!(line.starts_with(&format!("  {}", opt.flag)));
            assert_eq!(&line[2 + width + 2..], opt.help);
            assert_eq!(&line[2 + width..2 + width + 2], "  ");
        }
    }

    #[test]
    fn test_align_exact_rendering() {
        let options = vec![CliOption::new("--ab", "x"), CliOption::new("-c", "y")];
        assert_eq!(align_options(&options), "  --ab  x\n  -c    y");
    }

    #[test]
    fn test_align_empty() {
        assert_eq!(align_options(&[]), "");
    }

    #[test]
    fn test_align_counts_characters() {
        let options = vec![CliOption::new("--größe", "a"), CliOption::new("--abcdefg", "b")];
        let rendered = align_options(&options);
        let columns: Vec<usize> = rendered
            .lines()
            .map(|l| l.chars().count() - 1)
            .collect();
        assert_eq!(columns[0], columns[1]);
    }

    #[test]
    fn test_builtin_options_order() {
        let flags: Vec<_> = builtin_options().into_iter().map(|o| o.flag).collect();
        assert_eq!(flags.first().map(String::as_str), Some("--type=<TYPE>"));
        assert_eq!(flags.last().map(String::as_str), Some("-h --help"));
        assert!(flags.contains(&"--prefix=<PATH>".to_string()));
    }
}
