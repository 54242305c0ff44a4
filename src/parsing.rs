use pest::{Parser, iterators::Pairs};

use crate::period::{Period, Unit};
use crate::period_error::{PError, PResult};

#[derive(Parser)]
#[grammar = "period.pest"]
pub(crate) struct PeriodParser;

/// Parse `s` into `period`, resetting all of its fields first.
///
/// On error the fields are left at zero or partially filled; callers must not
/// rely on them.
pub(crate) fn parse_into(period: &mut Period, s: &str) -> PResult<()> {
    scan(period, s).map_err(|e| {
        tracing::debug!(input = s, error = %e, "rejected period");
        e
    })
}

fn scan(period: &mut Period, s: &str) -> PResult<()> {
    if s.len() < 2 || !s.starts_with('P') {
        return Err(PError::MissingPrefix);
    }

    *period = Period::ZERO;

    let date_part = match s.find('T') {
        Some(idx) => &s[..idx],
        None => s,
    };
    if date_part == "P0D" {
        return Ok(());
    }

    match PeriodParser::parse(Rule::period, s) {
        Ok(tree) => assign(period, tree),
        Err(e) => {
            let err = PError::from_pest(e, s);

            // Numbers before the bad character are converted first, so a malformed
            // number ahead of it is the error reported.
            if let PError::InvalidCharacter { pos, .. } = err {
                if let Some(Ok(tree)) = s.get(..pos).map(|head| PeriodParser::parse(Rule::period, head)) {
                    assign(period, tree)?;
                }
            }
            Err(err)
        }
    }
}

fn assign(period: &mut Period, tree: Pairs<Rule>) -> PResult<()> {
    // The sign flag is sticky until a designator consumes it, so "P1-2Y" is -12 years.
    let mut num = String::new();
    let mut negative = false;

    for pair in tree.flatten() {
        match pair.as_rule() {
            Rule::sign => negative = pair.as_str() == "-",
            Rule::numeral => num.push_str(pair.as_str()),
            Rule::unit => {
                if num.is_empty() {
                    continue;
                }

                let val = match num.parse::<f64>() {
                    Ok(v) if v.is_finite() => v,
                    _ => return Err(PError::InvalidNumber(num)),
                };
                let val = if negative { -val } else { val };

                let unit = match pair.as_str() {
                    "Y" => Unit::Years,
                    "M" => Unit::Months,
                    "W" => Unit::Weeks,
                    "D" => Unit::Days,
                    // The grammar only lets the four designators through
                    _ => unreachable!(),
                };
                tracing::trace!(?unit, value = val, "assigned period unit");
                period.set(unit, val);

                num.clear();
                negative = false;
            },
            // The enclosing period rule and EOI carry nothing
            _ => continue,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> PResult<Period> {
        let mut p = Period::ZERO;
        parse_into(&mut p, s)?;
        Ok(p)
    }

    #[test]
    fn test_basic() -> PResult<()> {
        let p = parse("P1Y2M3W4D")?;
        assert_eq!(p, Period::new(1.0, 2.0, 3.0, 4.0), "Parsing 'P1Y2M3W4D' failed");
        Ok(())
    }

    #[test]
    fn test_zero() -> PResult<()> {
        assert_eq!(parse("P0D")?, Period::ZERO, "Parsing 'P0D' did not give a zero period");
        assert_eq!(parse("P0DT5H")?, Period::ZERO, "Parsing 'P0DT5H' did not give a zero period");
        assert_eq!(parse("PT")?, Period::ZERO, "Parsing 'PT' did not give a zero period");
        Ok(())
    }

    #[test]
    fn test_decimals() -> PResult<()> {
        let p = parse("P1.5Y2.5M")?;
        assert_eq!(p, Period::new(1.5, 2.5, 0.0, 0.0), "Parsing 'P1.5Y2.5M' failed");

        let p = parse("P.5W1.D")?;
        assert_eq!(p, Period::new(0.0, 0.0, 0.5, 1.0), "Parsing 'P.5W1.D' failed");
        Ok(())
    }

    #[test]
    fn test_signs() -> PResult<()> {
        let p = parse("P-1Y-2M-3W-4D")?;
        assert_eq!(p, Period::new(-1.0, -2.0, -3.0, -4.0), "Parsing 'P-1Y-2M-3W-4D' failed");

        let p = parse("P-+1Y+2D")?;
        assert_eq!(p, Period::new(1.0, 0.0, 0.0, 2.0), "A later '+' did not cancel an earlier '-'");

        // The sign does not have to precede the digits
        let p = parse("P1-2Y")?;
        assert_eq!(p.years, -12.0, "Parsing 'P1-2Y' failed");

        // Nor does it leak past the designator that consumes it
        let p = parse("P-1Y2M")?;
        assert_eq!(p, Period::new(-1.0, 2.0, 0.0, 0.0), "Sign carried over to the next number");
        Ok(())
    }

    #[test]
    fn test_order_and_repeats() -> PResult<()> {
        let p = parse("P4D3W2M1Y")?;
        assert_eq!(p, Period::new(1.0, 2.0, 3.0, 4.0), "Parsing 'P4D3W2M1Y' failed");

        let p = parse("P1Y2Y")?;
        assert_eq!(p.years, 2.0, "The last repeated designator did not win");
        Ok(())
    }

    #[test]
    fn test_empty_designators() -> PResult<()> {
        let p = parse("PY1MM")?;
        assert_eq!(p, Period::new(0.0, 1.0, 0.0, 0.0), "Designators without a number were not ignored");

        // A dangling sign with no designator after it changes nothing
        let p = parse("P3D-")?;
        assert_eq!(p, Period::new(0.0, 0.0, 0.0, 3.0), "Parsing 'P3D-' failed");
        Ok(())
    }

    #[test]
    fn test_time_suffix() -> PResult<()> {
        let p = parse("P1YT2H")?;
        assert_eq!(p, Period::new(1.0, 0.0, 0.0, 0.0), "Parsing 'P1YT2H' failed");

        let p = parse("P2WT??")?;
        assert_eq!(p.weeks, 2.0, "Characters after T were validated");
        Ok(())
    }

    #[test]
    fn test_unterminated_number() -> PResult<()> {
        let p = parse("P1Y2")?;
        assert_eq!(p, Period::new(1.0, 0.0, 0.0, 0.0), "A trailing number without a designator was stored");
        Ok(())
    }

    #[test]
    fn test_resets_fields() -> PResult<()> {
        let mut p = Period::new(9.0, 9.0, 9.0, 9.0);
        parse_into(&mut p, "P1D")?;
        assert_eq!(p, Period::new(0.0, 0.0, 0.0, 1.0), "Old fields survived a parse");
        Ok(())
    }

    #[test]
    fn test_missing_prefix() {
        assert_eq!(parse("1Y2M"), Err(PError::MissingPrefix));
        assert_eq!(parse("P"), Err(PError::MissingPrefix));
        assert_eq!(parse(""), Err(PError::MissingPrefix));
        assert_eq!(parse("p1D"), Err(PError::MissingPrefix));
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(parse("P1Y2X"), Err(PError::InvalidCharacter { ch: 'X', pos: 4 }));
        assert_eq!(parse("P 1D"), Err(PError::InvalidCharacter { ch: ' ', pos: 1 }));
        assert_eq!(parse("P1Hé"), Err(PError::InvalidCharacter { ch: 'H', pos: 2 }));
        assert_eq!(parse("P1dT"), Err(PError::InvalidCharacter { ch: 'd', pos: 2 }));
    }

    #[test]
    fn test_invalid_number() {
        assert_eq!(parse("P1.2.3Y"), Err(PError::InvalidNumber("1.2.3".to_string())));
        assert_eq!(parse("P.D"), Err(PError::InvalidNumber(".".to_string())));
    }

    #[test]
    fn test_overflowing_number() {
        let s = format!("P{}Y", "9".repeat(400));
        assert_eq!(parse(&s), Err(PError::InvalidNumber("9".repeat(400))), "An overflowing number was accepted");

        let s = format!("P1D-{}W", "9".repeat(400));
        assert!(matches!(parse(&s), Err(PError::InvalidNumber(_))), "A negative overflowing number was accepted");
    }

    #[test]
    fn test_number_error_before_character_error() {
        assert_eq!(parse("P1.2.3YX"), Err(PError::InvalidNumber("1.2.3".to_string())));

        // Without a designator the bad number is never converted
        assert_eq!(parse("P1.2.3X"), Err(PError::InvalidCharacter { ch: 'X', pos: 6 }));
        assert_eq!(parse("P1Y2.3.4X"), Err(PError::InvalidCharacter { ch: 'X', pos: 8 }));
    }
}
