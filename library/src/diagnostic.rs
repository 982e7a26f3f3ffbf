//! Development aid: print a message tagged with the line it came from.
//!
//! Output is always `"%5d: %s"`, one line per call, on stdout.

use std::{
    fmt::Display,
    io::{self, Write},
    panic::Location,
};

/// Prints `message` prefixed with the caller's line number.
#[track_caller]
pub fn lineno(message: impl Display) {
    report_at(Location::caller().line(), message);
}

/// Like [`lineno`], but writes to `writer`.
#[track_caller]
pub fn lineno_to<W: Write>(writer: &mut W, message: impl Display) -> io::Result<()> {
    write_line(writer, Location::caller().line(), message)
}

pub fn report_at(line: u32, message: impl Display) {
    let mut stdout = io::stdout().lock();

    write_line(&mut stdout, line, message)
        .and_then(|_| stdout.flush())
        .expect("Failed to write diagnostic line to stdout");
}

pub fn write_line<W: Write>(writer: &mut W, line: u32, message: impl Display) -> io::Result<()> {
    writeln!(writer, "{:>5}: {}", line, message)
}

/// Prints a `format!`-style message prefixed with the invocation's line.
#[macro_export]
macro_rules! lineno {
    ($($arg:tt)+) => {
        $crate::diagnostic::report_at(line!(), format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(line: u32, message: impl Display) -> String {
        let mut out = Vec::new();
        write_line(&mut out, line, message).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn pads_line_to_five_columns() {
        assert_eq!(render(42, "hello"), "   42: hello\n");
        assert_eq!(render(7, ""), "    7: \n");
        assert_eq!(render(12345, "x"), "12345: x\n");
        assert_eq!(render(123456, "wide"), "123456: wide\n");
    }

    #[test]
    fn accepts_any_display_value() {
        assert_eq!(render(3, 2.5), "    3: 2.5\n");
        assert_eq!(render(3, format_args!("{}-{}", 1, 2)), "    3: 1-2\n");
    }

    #[test]
    fn reports_caller_line() {
        let mut out = Vec::new();
        let expected = line!() + 1;
        lineno_to(&mut out, "from here").unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{expected:>5}: from here\n")
        );
    }

    #[test]
    fn tracked_caller_propagates_through_helpers() {
        #[track_caller]
        fn helper(out: &mut Vec<u8>) {
            lineno_to(out, "nested").unwrap();
        }

        let mut out = Vec::new();
        let expected = line!() + 1;
        helper(&mut out);

        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{expected:>5}: nested\n")
        );
    }
}
