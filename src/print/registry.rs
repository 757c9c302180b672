// Printer registry: maps each node kind to its printer.
//
// Built once and treated as immutable afterwards, so concurrent print calls
// can share one registry without observing cross-call interference. Callers
// extend or override behavior through the builder, never in place.

use std::collections::HashMap;

use crate::ast::{Node, NodeKind};
use crate::error::PrintError;
use crate::print::{printers, PrintContext};

/// Decision returned by [`NodePrinter::enter`] about the node's subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Let the traversal visit the node's child fragments normally.
    Descend,
    /// Suppress the subtree entirely.
    Skip,
    /// The printer already recursed into the children it owns; do not
    /// visit them again.
    Handled,
}

/// The enter/leave handler pair responsible for one node kind's textual
/// form. Both methods may only append to the context's sink and request
/// recursion; they must not reach outside the node/parent/context triple.
pub trait NodePrinter: Send + Sync {
    /// Emit opening syntax and decide how the subtree is visited.
    fn enter(
        &self,
        node: &Node,
        parent: Option<&Node>,
        context: &mut PrintContext,
    ) -> Result<Visit, PrintError>;

    /// Emit closing syntax, if any. Runs for every visited node.
    fn leave(
        &self,
        _node: &Node,
        _parent: Option<&Node>,
        _context: &mut PrintContext,
    ) -> Result<(), PrintError> {
        Ok(())
    }
}

type BoxedPrinter = Box<dyn NodePrinter>;

/// Immutable node-kind → printer mapping.
pub struct PrinterRegistry {
    printers: HashMap<NodeKind, BoxedPrinter>,
}

impl PrinterRegistry {
    /// The standard registry, covering every [`NodeKind`].
    pub fn standard() -> Self {
        PrinterRegistryBuilder::standard().build()
    }

    /// A builder seeded with the standard printers, ready for overrides.
    pub fn builder() -> PrinterRegistryBuilder {
        PrinterRegistryBuilder::standard()
    }

    /// Look up the printer for a node kind.
    pub fn lookup(&self, kind: NodeKind) -> Option<&dyn NodePrinter> {
        self.printers.get(&kind).map(|printer| printer.as_ref())
    }

    /// The node kinds this registry has printers for.
    pub fn kinds(&self) -> impl Iterator<Item = NodeKind> + '_ {
        self.printers.keys().copied()
    }
}

impl Default for PrinterRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builder for composing a [`PrinterRegistry`] from the standard printers
/// plus caller overrides.
pub struct PrinterRegistryBuilder {
    printers: HashMap<NodeKind, BoxedPrinter>,
}

impl PrinterRegistryBuilder {
    /// Seeded with the standard printer for every node kind.
    pub fn standard() -> Self {
        let mut builder = Self::empty();
        for kind in NodeKind::ALL {
            builder = builder.with(kind, printers::standard_printer(kind));
        }
        builder
    }

    /// No printers registered; lookups fail until kinds are added.
    pub fn empty() -> Self {
        Self {
            printers: HashMap::new(),
        }
    }

    /// Register or replace the printer for a node kind.
    pub fn with(mut self, kind: NodeKind, printer: BoxedPrinter) -> Self {
        self.printers.insert(kind, printer);
        self
    }

    pub fn build(self) -> PrinterRegistry {
        PrinterRegistry {
            printers: self.printers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_covers_every_kind() {
        let registry = PrinterRegistry::standard();
        for kind in NodeKind::ALL {
            assert!(registry.lookup(kind).is_some(), "missing printer for {:?}", kind);
        }
    }

    #[test]
    fn test_empty_builder_has_no_printers() {
        let registry = PrinterRegistryBuilder::empty().build();
        assert!(registry.lookup(NodeKind::Text).is_none());
        assert_eq!(registry.kinds().count(), 0);
    }

    #[test]
    fn test_kinds_accessor_reports_registrations() {
        let registry = PrinterRegistryBuilder::empty()
            .with(NodeKind::Text, printers::standard_printer(NodeKind::Text))
            .build();
        assert_eq!(registry.kinds().collect::<Vec<_>>(), vec![NodeKind::Text]);
    }
}
