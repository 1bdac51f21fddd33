//! `loops`: index over a fixed-size array, then a growable vector

use std::io::Write;

use primer_core::{append, kdebug, PrimerResult};

#[allow(clippy::needless_range_loop)]
pub fn run(out: &mut dyn Write) -> PrimerResult<()> {
    writeln!(out, "Names:")?;

    let names: [&str; 3] = ["John", "Mary", "Susan"];
    for i in 0..names.len() {
        writeln!(out, "{}", names[i])?;
    }

    writeln!(out, " ")?;
    writeln!(out, "Places:")?;

    let mut places = vec![""; 3];
    places[0] = "New York City";
    places[1] = "Los Angeles";
    places[2] = "Chicago";
    places = append(places, "Seattle");
    kdebug!("places: len={} cap={}", places.len(), places.capacity());

    for i in 0..places.len() {
        writeln!(out, "{}", places[i])?;
    }
    Ok(())
}
