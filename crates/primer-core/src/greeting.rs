//! Greeting builders
//!
//! Three calling conventions over the same kind of output:
//! a function returning two values, a function taking a function, and a
//! function taking any number of trailing messages.

use std::io::Write;

use crate::ktrace;

/// Build the primary and alternate greeting in one call
pub fn create_greetings(name: &str) -> (String, String) {
    let primary = format!("Hello, {}", name);
    let alternate = format!("Greetings, {}", name);
    (primary, alternate)
}

/// Greet `name` with whichever generator the caller passes in
///
/// The generator's result is returned unchanged.
pub fn create_greeting<F>(name: &str, generator: F) -> String
where
    F: Fn(&str) -> String,
{
    generator(name)
}

/// `Greetings, <name>!`
pub fn exclaimed_greeting(name: &str) -> String {
    format!("Greetings, {}!", name)
}

/// `Hello, <name>`
pub fn plain_greeting(name: &str) -> String {
    format!("Hello, {}", name)
}

/// Write `<message> <name>` for each message, in call order
///
/// An empty `messages` writes nothing.
pub fn greet_each<W: Write + ?Sized>(out: &mut W, name: &str, messages: &[&str]) -> std::io::Result<()> {
    ktrace!("greet_each: {} message(s) for {}", messages.len(), name);
    for message in messages {
        writeln!(out, "{} {}", message, name)?;
    }
    Ok(())
}

/// Variadic front end for [`greet_each`]
///
/// ```ignore
/// greet!(&mut out, "Andy", "Hello", "Greetings", "Salutations")?;
/// greet!(&mut out, "Andy")?; // writes nothing
/// ```
#[macro_export]
macro_rules! greet {
    ($out:expr, $name:expr $(, $message:expr)* $(,)?) => {
        $crate::greeting::greet_each($out, $name, &[$($message),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_greetings_destructures() {
        let (greeting, alternate) = create_greetings("Andy");
        assert_eq!(greeting, "Hello, Andy");
        assert_eq!(alternate, "Greetings, Andy");
    }

    #[test]
    fn test_generators_are_interchangeable() {
        assert_eq!(create_greeting("Andy", exclaimed_greeting), "Greetings, Andy!");
        assert_eq!(create_greeting("Andy", plain_greeting), "Hello, Andy");
    }

    #[test]
    fn test_closure_generator_result_unchanged() {
        let suffix = String::from("?");
        let out = create_greeting("Andy", |n| format!("{}{}", n, suffix));
        assert_eq!(out, "Andy?");
    }

    #[test]
    fn test_greet_each_in_call_order() {
        let mut out = Vec::new();
        greet_each(&mut out, "Andy", &["Hello", "Greetings", "Salutations"]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Hello Andy\nGreetings Andy\nSalutations Andy\n"
        );
    }

    #[test]
    fn test_greet_each_zero_messages() {
        let mut out = Vec::new();
        greet_each(&mut out, "Andy", &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_greet_macro() {
        let mut out = Vec::new();
        crate::greet!(&mut out, "Andy", "Hi", "Yo").unwrap();
        crate::greet!(&mut out, "Andy").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hi Andy\nYo Andy\n");
    }
}
