// Text form of IR nodes, one line per node:
//
//   %4 = range [%2, %3)
//   %7 = reduce.add %6 over %5 : float32

use crate::ir::graph::IRGraph;
use crate::ir::node::{IRNode, NodeId, NodeKind};
use std::fmt;

fn write_list(f: &mut fmt::Formatter, ids: &[NodeId]) -> fmt::Result {
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", id)?;
    }
    Ok(())
}

impl fmt::Display for IRNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = ", self.id)?;
        match &self.kind {
            NodeKind::Var { name } => write!(f, "var {:?}", name)?,
            NodeKind::Const { value } => write!(f, "const {}", value)?,
            NodeKind::Binary { op, lhs, rhs } => write!(f, "{} {}, {}", op, lhs, rhs)?,
            NodeKind::Access { tensor, indices } => {
                write!(f, "access {}[", tensor)?;
                write_list(f, indices)?;
                write!(f, "]")?;
            }
            NodeKind::Reduce { op, source, domain } => {
                write!(f, "reduce.{} {} over {}", op, source, domain)?
            }
            NodeKind::Array { elements } => {
                write!(f, "array [")?;
                write_list(f, elements)?;
                write!(f, "]")?;
            }
            NodeKind::Range { min, max } => write!(f, "range [{}, {})", min, max)?,
            NodeKind::RDomain { ranges } => write!(f, "rdomain {}", ranges)?,
            NodeKind::Tensor {
                name,
                shape,
                compute,
            } => {
                write!(f, "tensor {:?} (", name)?;
                write_list(f, shape)?;
                write!(f, ")")?;
                if let Some(compute) = compute {
                    write!(f, " compute(")?;
                    write_list(f, &compute.axes)?;
                    write!(f, ") -> {}", compute.body)?;
                }
            }
        }
        if let Some(dtype) = self.dtype {
            write!(f, " : {}", dtype)?;
        }
        Ok(())
    }
}

impl fmt::Display for IRGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for node in self.nodes() {
            writeln!(f, "{}", node)?;
        }
        Ok(())
    }
}
