//! `interfaces`: call two different types through one trait

use std::io::Write;

use primer_core::{transform_data, PrimerResult, Reverser, Uppercaser};

pub fn run(out: &mut dyn Write) -> PrimerResult<()> {
    let reverser = Reverser::new("John");
    let uppercaser = Uppercaser::new("Dinah");

    transform_data(out, &reverser)?;
    transform_data(out, &uppercaser)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lessons::capture;

    #[test]
    fn test_output() {
        assert_eq!(capture(run), "nhoJ\nDINAH\n");
    }
}
