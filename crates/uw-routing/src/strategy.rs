//! `RoutingStrategy` — the built-in selectors behind one type.

use uw_core::Protocol;
use uw_field::{Field, Node};

use crate::{Dbr, Eedbr, Flood, ForwarderSelector, Hhvbf, Olsr, Vbf};

/// Closed set of built-in selectors, chosen once per run.
#[derive(Copy, Clone, Debug)]
pub enum RoutingStrategy {
    Vbf(Vbf),
    Hhvbf(Hhvbf),
    Dbr(Dbr),
    Eedbr(Eedbr),
    Olsr(Olsr),
    Flood(Flood),
}

impl RoutingStrategy {
    pub fn from_protocol(protocol: Protocol) -> Self {
        match protocol {
            Protocol::Vbf   => RoutingStrategy::Vbf(Vbf),
            Protocol::Hhvbf => RoutingStrategy::Hhvbf(Hhvbf),
            Protocol::Dbr   => RoutingStrategy::Dbr(Dbr),
            Protocol::Eedbr => RoutingStrategy::Eedbr(Eedbr),
            Protocol::Olsr  => RoutingStrategy::Olsr(Olsr),
            Protocol::Basic => RoutingStrategy::Flood(Flood),
        }
    }

    pub fn protocol(&self) -> Protocol {
        match self {
            RoutingStrategy::Vbf(_)   => Protocol::Vbf,
            RoutingStrategy::Hhvbf(_) => Protocol::Hhvbf,
            RoutingStrategy::Dbr(_)   => Protocol::Dbr,
            RoutingStrategy::Eedbr(_) => Protocol::Eedbr,
            RoutingStrategy::Olsr(_)  => Protocol::Olsr,
            RoutingStrategy::Flood(_) => Protocol::Basic,
        }
    }

    fn inner(&self) -> &dyn ForwarderSelector {
        match self {
            RoutingStrategy::Vbf(s)   => s,
            RoutingStrategy::Hhvbf(s) => s,
            RoutingStrategy::Dbr(s)   => s,
            RoutingStrategy::Eedbr(s) => s,
            RoutingStrategy::Olsr(s)  => s,
            RoutingStrategy::Flood(s) => s,
        }
    }
}

impl From<Protocol> for RoutingStrategy {
    fn from(protocol: Protocol) -> Self {
        Self::from_protocol(protocol)
    }
}

impl ForwarderSelector for RoutingStrategy {
    fn select_forwarders<'f>(&self, source: &Node, field: &'f Field) -> Vec<&'f Node> {
        self.inner().select_forwarders(source, field)
    }

    fn is_ranked(&self) -> bool {
        self.inner().is_ranked()
    }
}
