//! Usage text of `example-function`.

/// Name of the program, as printed in diagnostics.
pub const PROGRAM: &str = "example-function";

/// Five-line usage block: the synopsis followed by one line per option.
pub const USAGE: &str = "\
Usage: example-function [-f|--first] [-s|--second] [--param=VALUE | --param VALUE]... [POSITIONAL1 [POSITIONAL2]]
  -f, --first          enable the first switch
  -s, --second         enable the second switch
      --param VALUE    append VALUE to the parameter list (repeatable)
  -h, --help           print this help and exit
";

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[test]
    fn it_should_have_five_lines() {
        assert_that!(USAGE.lines().count(), eq(5));
    }

    #[test]
    fn it_should_start_with_program_synopsis() {
        assert_that!(USAGE.starts_with("Usage: example-function "), eq(true));
        assert_that!(USAGE.contains(PROGRAM), eq(true));
    }
}
