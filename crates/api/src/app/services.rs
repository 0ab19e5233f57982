//! Store wiring.
//!
//! The ledger is the only stateful service: an explicitly owned store with
//! process lifetime, handed to handlers via `Extension<Arc<Ledger>>`.

use royalty_ledger::{Catalog, Ledger};

pub fn build_ledger() -> Ledger {
    Ledger::new(Catalog::seed())
}
