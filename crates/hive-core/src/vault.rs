//! ResourceVault — the shared honey and nectar store.
//!
//! The colony never looks inside the vault. Bees pay for their shifts with
//! honey, collectors add nectar, manufacturers turn nectar into honey, and
//! the queen reads a status line for her report. That is the whole contract.

/// Shared store of honey and nectar that bees draw on and refill.
///
/// Only one shift may run against a vault at a time. In-process callers get
/// this from the `&mut` borrow; hosts sharing a vault across threads must
/// serialize shifts themselves.
pub trait ResourceVault {
    /// Take `amount` honey if there is enough.
    ///
    /// Returns `false` and leaves the vault untouched otherwise.
    fn consume(&mut self, amount: f64) -> bool;

    /// Process up to `amount` nectar into honey.
    fn convert_nectar_to_honey(&mut self, amount: f64);

    /// Add `amount` nectar to the store.
    fn collect_nectar(&mut self, amount: f64);

    /// Human-readable stock levels.
    fn status_text(&self) -> String;
}

impl<V: ResourceVault + ?Sized> ResourceVault for Box<V> {
    fn consume(&mut self, amount: f64) -> bool {
        (**self).consume(amount)
    }

    fn convert_nectar_to_honey(&mut self, amount: f64) {
        (**self).convert_nectar_to_honey(amount)
    }

    fn collect_nectar(&mut self, amount: f64) {
        (**self).collect_nectar(amount)
    }

    fn status_text(&self) -> String {
        (**self).status_text()
    }
}
