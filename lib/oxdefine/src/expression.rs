//! Class expressions over which definitions are generated.

use crate::entity::{ObjectProperty, OwlClass};

/// A class expression.
///
/// Only the constructs the definition grammar consumes are represented:
/// named classes, intersections and existential object restrictions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassExpression {
    /// A named class (atomic class)
    Class(OwlClass),

    /// ObjectIntersectionOf(C1, ..., Cn) - intersection of classes
    ObjectIntersectionOf(Vec<ClassExpression>),

    /// ObjectSomeValuesFrom(P, C) - existential restriction
    ObjectSomeValuesFrom {
        property: ObjectProperty,
        filler: Box<ClassExpression>,
    },
}

impl ClassExpression {
    /// Creates a named class expression.
    pub fn class(c: impl Into<OwlClass>) -> Self {
        Self::Class(c.into())
    }

    /// Creates an intersection of classes.
    pub fn intersection(operands: Vec<ClassExpression>) -> Self {
        Self::ObjectIntersectionOf(operands)
    }

    /// Creates an existential restriction.
    pub fn some_values_from(property: impl Into<ObjectProperty>, filler: ClassExpression) -> Self {
        Self::ObjectSomeValuesFrom {
            property: property.into(),
            filler: Box::new(filler),
        }
    }

    /// Returns true if this is a named class.
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    /// Returns the named class if this is one.
    pub fn as_class(&self) -> Option<&OwlClass> {
        match self {
            Self::Class(c) => Some(c),
            _ => None,
        }
    }

    /// Returns true if this expression contains at least one object
    /// restriction anywhere in its tree.
    ///
    /// A bare named class or a conjunction of named classes only does not
    /// qualify as a logical definition worth verbalizing.
    pub fn has_restriction(&self) -> bool {
        match self {
            Self::Class(_) => false,
            Self::ObjectIntersectionOf(operands) => operands.iter().any(Self::has_restriction),
            Self::ObjectSomeValuesFrom { .. } => true,
        }
    }
}

impl From<OwlClass> for ClassExpression {
    fn from(c: OwlClass) -> Self {
        Self::Class(c)
    }
}
