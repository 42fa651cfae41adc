//! Presentation helpers: viewport breakpoints and aspect ratio parsing.

/// Minimum viewport width for the `sm` breakpoint, in CSS pixels.
pub const BREAKPOINT_SM: u32 = 640;
/// Minimum viewport width for the `md` breakpoint.
pub const BREAKPOINT_MD: u32 = 768;
/// Minimum viewport width for the `lg` breakpoint.
pub const BREAKPOINT_LG: u32 = 1024;
/// Minimum viewport width for the `xl` breakpoint.
pub const BREAKPOINT_XL: u32 = 1280;

/// Which responsive breakpoints a viewport width has reached.
///
/// Minima are inclusive, so a width of exactly 640 sets `sm`. Breakpoints
/// are cumulative: any width that sets `xl` also sets the three below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Breakpoints {
    pub sm: bool,
    pub md: bool,
    pub lg: bool,
    pub xl: bool,
}

/// Classifies a viewport width against the standard breakpoints.
pub fn parse_breakpoints(width: u32) -> Breakpoints {
    Breakpoints {
        sm: width >= BREAKPOINT_SM,
        md: width >= BREAKPOINT_MD,
        lg: width >= BREAKPOINT_LG,
        xl: width >= BREAKPOINT_XL,
    }
}

/// Parses an aspect ratio string into a width/height quotient.
///
/// Three forms are accepted:
///
/// * `"w/h"` divides the parts, so `"4/5"` is `0.8`
/// * `"w:h"` keeps only the width part, so `"3:1"` is `3.0`
/// * a bare number parses as-is
///
/// Anything else yields `NaN`, which callers treat as "no ratio".
pub fn parse_ratio(input: &str) -> f64 {
    if let Some((width, _)) = input.split_once(':') {
        return parse_part(width);
    }
    if let Some((width, height)) = input.split_once('/') {
        return parse_part(width) / parse_part(height);
    }
    parse_part(input)
}

fn parse_part(part: &str) -> f64 {
    part.trim().parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_below_sm_reach_no_breakpoints() {
        assert_eq!(parse_breakpoints(0), Breakpoints::default());
        assert_eq!(parse_breakpoints(639), Breakpoints::default());
    }

    #[test]
    fn breakpoint_minima_are_inclusive() {
        assert!(parse_breakpoints(640).sm);
        assert!(parse_breakpoints(768).md);
        assert!(parse_breakpoints(1024).lg);
        assert!(parse_breakpoints(1280).xl);
    }

    #[test]
    fn breakpoints_accumulate_with_width() {
        assert_eq!(
            parse_breakpoints(641),
            Breakpoints {
                sm: true,
                ..Breakpoints::default()
            }
        );
        assert_eq!(
            parse_breakpoints(800),
            Breakpoints {
                sm: true,
                md: true,
                ..Breakpoints::default()
            }
        );
        assert_eq!(
            parse_breakpoints(1025),
            Breakpoints {
                sm: true,
                md: true,
                lg: true,
                xl: false,
            }
        );
        assert_eq!(
            parse_breakpoints(1281),
            Breakpoints {
                sm: true,
                md: true,
                lg: true,
                xl: true,
            }
        );
    }

    #[test]
    fn slash_ratios_divide() {
        assert_eq!(parse_ratio("4/5"), 0.8);
        assert_eq!(parse_ratio("9/4"), 2.25);
        assert_eq!(parse_ratio("16/9"), 16.0 / 9.0);
    }

    #[test]
    fn colon_ratios_keep_the_width() {
        assert_eq!(parse_ratio("1:1"), 1.0);
        assert_eq!(parse_ratio("3:1"), 3.0);
    }

    #[test]
    fn bare_numbers_parse_directly() {
        assert_eq!(parse_ratio("1.5"), 1.5);
        assert_eq!(parse_ratio(" 2 "), 2.0);
    }

    #[test]
    fn malformed_ratios_are_nan() {
        assert!(parse_ratio("test").is_nan());
        assert!(parse_ratio("").is_nan());
        assert!(parse_ratio("a/b").is_nan());
    }
}
