use crate::matcher::{Capturable, OptionEntry};
use crate::model::ScalarKind;

/// The registered flags, partitioned by scalar kind.
///
/// Each kind keeps its own insertion-ordered collection. Lookups visit the collections in
/// [`ScalarKind::ALL`] order; the order carries no semantics of its own, but it is fixed so that
/// lookups are deterministic.
pub(crate) struct TypedRegistry<'a> {
    collections: [Vec<Box<dyn Capturable + 'a>>; ScalarKind::ALL.len()],
}

impl<'a> Default for TypedRegistry<'a> {
    fn default() -> Self {
        Self {
            collections: std::array::from_fn(|_| Vec::default()),
        }
    }
}

impl<'a> TypedRegistry<'a> {
    /// Append to the kind's collection, preserving insertion order.
    pub(crate) fn insert(&mut self, kind: ScalarKind, option: Box<dyn Capturable + 'a>) {
        self.collections[kind as usize].push(option);
    }

    /// Find the flag matching `flag_part`.
    ///
    /// The first match within a kind wins. A spelling registered under multiple kinds resolves to
    /// the kind scanned later; that is a caller error and deliberately not validated.
    pub(crate) fn find(&mut self, flag_part: &str) -> Option<&mut (dyn Capturable + 'a)> {
        let mut found = None;

        for collection in self.collections.iter_mut() {
            if let Some(option) = collection
                .iter_mut()
                .find(|option| option.matches(flag_part))
            {
                found = Some(option.as_mut());
            }
        }

        found
    }

    /// Snapshot every flag for help rendering, in scan order.
    pub(crate) fn entries(&self) -> Vec<OptionEntry> {
        self.collections
            .iter()
            .flatten()
            .map(|option| option.entry())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Destination;
    use crate::matcher::FlagOption;

    fn boxed<'a, T: Destination + 'a>(
        short: Option<&str>,
        long: Option<&str>,
        destination: &'a mut T,
    ) -> Box<dyn Capturable + 'a> {
        Box::new(FlagOption::new(
            short.map(str::to_string),
            long.map(str::to_string),
            None,
            destination,
        ))
    }

    #[test]
    fn scan_order_matches_declaration() {
        for (index, kind) in ScalarKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, index);
        }
    }

    #[test]
    fn find_first_within_kind() {
        let mut first: u32 = 0;
        let mut second: u32 = 0;
        let mut registry = TypedRegistry::default();
        registry.insert(ScalarKind::U32, boxed(Some("-x"), None, &mut first));
        registry.insert(ScalarKind::U32, boxed(Some("-x"), None, &mut second));

        registry.find("-x").unwrap().capture("7").unwrap();

        drop(registry);
        assert_eq!(first, 7);
        assert_eq!(second, 0);
    }

    #[test]
    fn find_later_kind_wins() {
        let mut number: i32 = 0;
        let mut toggle: bool = false;
        let mut registry = TypedRegistry::default();
        registry.insert(ScalarKind::I32, boxed(Some("-x"), None, &mut number));
        registry.insert(ScalarKind::Bool, boxed(Some("-x"), None, &mut toggle));

        registry.find("-x").unwrap().capture("1").unwrap();

        drop(registry);
        assert_eq!(number, 0);
        assert!(toggle);
    }

    #[test]
    fn find_either_spelling() {
        let mut value: u32 = 0;
        let mut registry = TypedRegistry::default();
        registry.insert(ScalarKind::U32, boxed(Some("-v"), Some("--value"), &mut value));

        assert!(registry.find("-v").is_some());
        assert!(registry.find("--value").is_some());
        assert!(registry.find("--other").is_none());
    }

    #[test]
    fn find_empty() {
        let mut registry = TypedRegistry::default();
        assert!(registry.find("-x").is_none());
    }

    #[test]
    fn entries_in_scan_order() {
        let mut toggle: bool = false;
        let mut number: i32 = 0;
        let mut registry = TypedRegistry::default();
        // Registered bool first, but i32 precedes bool in scan order.
        registry.insert(ScalarKind::Bool, boxed(None, Some("--go"), &mut toggle));
        registry.insert(ScalarKind::I32, boxed(Some("-n"), Some("--num"), &mut number));

        let names: Vec<String> = registry.entries().iter().map(OptionEntry::names).collect();

        assert_eq!(names, vec!["--num|-n".to_string(), "--go".to_string()]);
    }
}
