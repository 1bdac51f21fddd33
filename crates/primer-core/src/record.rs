//! A plain two-field record
//!
//! Renders as `{<name> <age>}` no matter how it was built.

use core::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Record {
    pub name: String,
    pub age: i32,
}

impl Record {
    /// Positional constructor, fields in declaration order
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self { name: name.into(), age }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_is_zero_valued() {
        let r = Record::default();
        assert_eq!(r.name, "");
        assert_eq!(r.age, 0);
        assert_eq!(r.to_string(), "{ 0}");
    }

    #[test]
    fn test_display() {
        assert_eq!(Record::new("Sandra", 55).to_string(), "{Sandra 55}");
    }

    #[test]
    fn test_named_fields_any_order() {
        let maria = Record {
            age: 65,
            name: "Maria".into(),
        };
        assert_eq!(maria.to_string(), "{Maria 65}");

        let unnamed = Record { age: 3, ..Default::default() };
        assert_eq!(unnamed.to_string(), "{ 3}");
    }

    proptest! {
        #[test]
        fn test_three_routes_agree(name in "[A-Za-z]{0,12}", age in any::<i32>()) {
            let mut assigned = Record::default();
            assigned.name = name.clone();
            assigned.age = age;

            let positional = Record::new(name.clone(), age);
            let named = Record { age, name };

            prop_assert_eq!(&assigned, &positional);
            prop_assert_eq!(&positional, &named);
            prop_assert_eq!(assigned.to_string(), named.to_string());
        }
    }
}
