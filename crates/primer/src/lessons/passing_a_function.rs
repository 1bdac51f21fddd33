//! `passing-a-function`: the same caller with two interchangeable callees

use std::io::Write;

use primer_core::{create_greeting, exclaimed_greeting, plain_greeting, PrimerResult};

pub fn run(out: &mut dyn Write) -> PrimerResult<()> {
    let greeting1 = create_greeting("Andy", exclaimed_greeting);
    writeln!(out, "{}", greeting1)?;

    let greeting2 = create_greeting("Andy", plain_greeting);
    writeln!(out, "{}", greeting2)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lessons::capture;

    #[test]
    fn test_output() {
        assert_eq!(capture(run), "Greetings, Andy!\nHello, Andy\n");
    }
}
