// File: crates/plotline-core/src/node.rs
// Summary: Child entities that plots and axes accept through their generic insert path.

use crate::point::DataPoint;
use crate::tick::Tick;

/// A child entity handed to a keyed collection without knowing its owner's kind.
#[derive(Clone, Debug)]
pub enum ChartNode<X, Y> {
    DataPoint(DataPoint<X, Y>),
    Tick(Tick<X>),
}

impl<X, Y> ChartNode<X, Y> {
    pub fn kind(&self) -> &'static str {
        match self {
            ChartNode::DataPoint(_) => "data point",
            ChartNode::Tick(_) => "tick",
        }
    }
}
