//! Shape of stored items.
use std::fmt;

/// Shape of a single stored item.
///
/// An item is a record of one or more fields, each a fixed-shape numeric
/// array or a scalar. The shape lists the dimensions of every field in
/// order; a scalar field contributes an empty dimension list. The shape of
/// a buffer is fixed at creation from a prototype item and every later
/// write is validated against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemShape {
    fields: Vec<Vec<usize>>,
}

impl ItemShape {
    /// Shape of an item with a single scalar field.
    pub fn scalar() -> Self {
        Self {
            fields: vec![vec![]],
        }
    }

    /// Shape of an item with a single array field of the given dimensions.
    pub fn of_dims(dims: &[usize]) -> Self {
        Self {
            fields: vec![dims.to_vec()],
        }
    }

    /// Concatenates the fields of `shapes` into the shape of a composite item.
    pub fn concat(shapes: &[ItemShape]) -> Self {
        Self {
            fields: shapes
                .iter()
                .flat_map(|shape| shape.fields.iter().cloned())
                .collect(),
        }
    }

    /// Dimension lists of the fields, in order.
    pub fn fields(&self) -> &[Vec<usize>] {
        &self.fields
    }
}

impl fmt::Display for ItemShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self
            .fields
            .iter()
            .map(|dims| {
                if dims.is_empty() {
                    "scalar".to_string()
                } else {
                    dims.iter()
                        .map(|d| d.to_string())
                        .collect::<Vec<_>>()
                        .join("x")
                }
            })
            .collect::<Vec<_>>();
        write!(f, "({})", fields.join(", "))
    }
}
