use crate::clock::Clock;

/// First year of the copyright range in generated files.
pub const FIRST_YEAR: i32 = 2015;

/// Header prefixes identifying notice lines, used when comparing files.
pub const NOTICE_PREFIXES: [&str; 2] = ["# This file is autogenerated by", "# Copyright (c)"];

/// Two-line comment placed at the top of every generated file.
pub fn autogenerated_notice(clock: &impl Clock) -> String {
    format!(
        "# This file is autogenerated by cmkgen v{}\n\
         # Copyright (c) {}-{} by the cmkgen contributors.",
        env!("CARGO_PKG_VERSION"),
        FIRST_YEAR,
        clock.year()
    )
}

/// True when `line` belongs to the autogenerated notice.
pub fn is_notice_line(line: &str) -> bool {
    NOTICE_PREFIXES.iter().any(|p| line.starts_with(p))
}
