// Reduction Domains
//
// `rdomain` accepts a single range, a single `(min, max)` pair, or a list of
// either. Which of those the caller meant is decided by looking only at the
// outer value and its first element:
//
//   rdomain(r)                   -> [r]
//   rdomain((0, 10))             -> [Range(0, 10)]
//   rdomain([(0, 10), (0, 5)])   -> [Range(0, 10), Range(0, 5)]
//   rdomain([r, (0, 5)])         -> [r, Range(0, 5)]

use crate::error::{IrError, Result};
use crate::ir::builder::IrBuilder;
use crate::ir::factory::NodeFactory;
use crate::ir::node::{NodeId, NodeKind};
use crate::ir::value::Value;

impl<F: NodeFactory> IrBuilder<F> {
    /// Construct an interval. Endpoints are converted and must be
    /// expressions; `min <= max` is not checked.
    pub fn range(&mut self, min: impl Into<Value>, max: impl Into<Value>) -> Result<NodeId> {
        let (min, max) = (min.into(), max.into());
        self.atomic(|b| b.make_range(min, max))
    }

    fn make_range(&mut self, min: Value, max: Value) -> Result<NodeId> {
        let (min, _) = self.convert_expr(min, "range bound")?;
        let (max, _) = self.convert_expr(max, "range bound")?;
        let id = self.factory.allocate(NodeKind::Range { min, max }, None)?;
        log::debug!("range [{}, {}) -> {}", min, max, id);
        Ok(id)
    }

    /// Construct a reduction domain from one or more ranges
    pub fn rdomain(&mut self, dom: impl Into<Value>) -> Result<NodeId> {
        let dom = dom.into();
        self.atomic(|b| {
            let elements = b.normalize_domain(dom)?;
            let count = elements.len();
            let ranges = elements
                .into_iter()
                .map(|element| b.range_element(element).map(Value::Node))
                .collect::<Result<Vec<_>>>()?;
            let ranges = b.convert_value(Value::Seq(ranges))?;
            let id = b.factory.allocate(NodeKind::RDomain { ranges }, None)?;
            log::debug!("rdomain of {} ranges -> {}", count, id);
            Ok(id)
        })
    }

    /// Range nodes of a reduction domain, in order
    pub fn domain_ranges(&self, dom: NodeId) -> Result<&[NodeId]> {
        let node = self.factory.get(dom)?;
        let ranges = match &node.kind {
            NodeKind::RDomain { ranges } => *ranges,
            other => return Err(IrError::type_mismatch("domain ranges", "RDomain", other.tag())),
        };
        match &self.factory.get(ranges)?.kind {
            NodeKind::Array { elements } => Ok(elements),
            other => Err(IrError::type_mismatch("domain ranges", "Array", other.tag())),
        }
    }

    /// Bring `dom` into list-of-range-like form
    fn normalize_domain(&self, dom: Value) -> Result<Vec<Value>> {
        let items = match dom {
            Value::Seq(items) => items,
            single => return Ok(vec![single]),
        };
        let listed = match items.first() {
            None => {
                return Err(IrError::MalformedRange {
                    found: "empty domain".to_string(),
                })
            }
            Some(Value::Seq(_)) => true,
            Some(Value::Node(id)) => self.factory.is_range(*id),
            Some(_) => false,
        };
        if listed {
            Ok(items)
        } else {
            Ok(vec![Value::Seq(items)])
        }
    }

    fn range_element(&mut self, element: Value) -> Result<NodeId> {
        match element {
            Value::Node(id) if self.factory.is_range(id) => Ok(id),
            Value::Seq(pair) => match <[Value; 2]>::try_from(pair) {
                Ok([min, max]) => self.make_range(min, max),
                Err(rest) => Err(IrError::MalformedRange {
                    found: format!("range of {} components", rest.len()),
                }),
            },
            other => Err(IrError::MalformedRange {
                found: other.describe(),
            }),
        }
    }
}
