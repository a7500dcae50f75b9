use std::collections::BTreeMap;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::defs::InterfaceDef;

type Snapshot = BTreeMap<String, Arc<InterfaceDef>>;

/// Shared read-only view of published interface definitions.
///
/// Definitions are fully built on one thread, then handed over through
/// `publish`, which swaps in a new snapshot with release semantics. Readers
/// load the current snapshot without locking and keep `Arc` handles into
/// it, so a published definition is immutable from then on.
pub struct InterfaceRegistry {
    inner: ArcSwap<Snapshot>,
}

impl InterfaceRegistry {
    pub fn new() -> Self {
        InterfaceRegistry {
            inner: ArcSwap::from_pointee(Snapshot::new()),
        }
    }

    /// Publishes `def`, replacing any previously published interface with
    /// the same name (re-announcement).
    pub fn publish(&self, def: InterfaceDef) -> Arc<InterfaceDef> {
        let def = Arc::new(def);
        let name = def.name().to_owned();

        self.inner.rcu(|current| {
            let mut next = Snapshot::clone(current);
            next.insert(name.clone(), Arc::clone(&def));
            next
        });

        log::debug!("published interface {}", name);
        def
    }

    /// The published interface with the given name, if any.
    pub fn get(&self, name: &str) -> Option<Arc<InterfaceDef>> {
        self.inner.load().get(name).cloned()
    }

    /// Names of all published interfaces, sorted.
    pub fn names(&self) -> Vec<String> {
        self.inner.load().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.load().is_empty()
    }
}

impl Default for InterfaceRegistry {
    fn default() -> Self {
        InterfaceRegistry::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::InterfaceRegistry;
    use crate::defs::{InterfaceDef, SignalDef};

    const IFACE: &str = "com.example.Iface";

    fn iface_with_signal() -> InterfaceDef {
        let mut iface = InterfaceDef::new(IFACE.to_owned()).unwrap();
        iface.add_signal(
            SignalDef::new("Notify".to_owned(), "s".to_owned(), IFACE.to_owned()).unwrap(),
        );
        iface
    }

    #[test]
    fn test_publish_then_get() {
        let registry = InterfaceRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get(IFACE).is_none());

        registry.publish(iface_with_signal());
        let published = registry.get(IFACE).unwrap();
        assert_eq!(published.signals().len(), 1);
        assert_eq!(registry.names(), vec![IFACE.to_owned()]);
    }

    #[test]
    fn test_republish_replaces() {
        let registry = InterfaceRegistry::new();
        registry.publish(iface_with_signal());
        registry.publish(InterfaceDef::new(IFACE.to_owned()).unwrap());

        assert_eq!(registry.len(), 1);
        assert!(registry.get(IFACE).unwrap().signals().is_empty());
    }

    #[test]
    fn test_read_from_other_thread() {
        let registry = Arc::new(InterfaceRegistry::new());
        registry.publish(iface_with_signal());

        let reader = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                registry
                    .get(IFACE)
                    .map(|iface| iface.signal("Notify").unwrap().signature().to_owned())
            })
        };

        assert_eq!(reader.join().unwrap(), Some("s".to_owned()));
    }
}
