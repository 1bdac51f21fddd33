//! `ranges`: views over a vector with `[start, end)` bounds

use std::io::Write;

use primer_core::{append, slice, PrimerResult};

#[allow(clippy::needless_range_loop)]
pub fn run(out: &mut dyn Write) -> PrimerResult<()> {
    let mut places = vec![""; 5];
    places[0] = "New York City";
    places[1] = "Los Angeles";
    places[2] = "Chicago";
    places[3] = "Toronto";
    places[4] = "Victoria";

    places = append(places, "Seattle");

    writeln!(out, "## Print all the places:")?;
    for i in 0..places.len() {
        writeln!(out, "{}", places[i])?;
    }

    let canadian_places = slice(&places, 3..5);
    writeln!(out, "## Print Canadian places:")?;
    for i in 0..canadian_places.len() {
        writeln!(out, "{}", canadian_places[i])?;
    }

    writeln!(out, "## Print big U.S. cities:")?;
    for (i, place) in slice(&places, ..3).iter().enumerate() {
        writeln!(out, "{} {}", i + 1, place)?;
    }

    // Everything after index 4
    let other_places = slice(&places, 5..);
    writeln!(out, "## Print other cities:")?;
    for place in other_places {
        writeln!(out, "{}", place)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lessons::capture;

    #[test]
    fn test_output() {
        let expected = "\
## Print all the places:
New York City
Los Angeles
Chicago
Toronto
Victoria
Seattle
## Print Canadian places:
Toronto
Victoria
## Print big U.S. cities:
1 New York City
2 Los Angeles
3 Chicago
## Print other cities:
Seattle
";
        assert_eq!(capture(run), expected);
    }
}
