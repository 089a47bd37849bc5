//! Descriptor requests.

use rtti_ir::{Name, Span};
use rtti_types::{Idx, Pool, TypeExprArena, TypeExprId};

/// Where a request was made, for diagnostics.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Location {
    pub span: Span,
    /// 1-based line; 0 when unknown.
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub const fn new(span: Span, line: u32, column: u32) -> Self {
        Location { span, line, column }
    }

    /// Location with no line information; sorts by byte offset.
    pub const fn from_span(span: Span) -> Self {
        Location {
            span,
            line: 0,
            column: span.start,
        }
    }
}

/// The type a descriptor is requested for.
#[derive(Copy, Clone)]
pub enum TypeRef<'a> {
    /// Already canonical.
    Canonical(Idx),
    /// As written; canonicalized on request and remembered as an alias.
    Written {
        arena: &'a TypeExprArena,
        expr: TypeExprId,
    },
}

impl TypeRef<'_> {
    pub(crate) fn canonicalize(&self, pool: &mut Pool) -> Idx {
        match *self {
            TypeRef::Canonical(idx) => idx,
            TypeRef::Written { arena, expr } => arena.canonicalize(pool, expr),
        }
    }

    pub(crate) fn expr(&self) -> Option<TypeExprId> {
        match *self {
            TypeRef::Canonical(_) => None,
            TypeRef::Written { expr, .. } => Some(expr),
        }
    }
}

/// One call into the coordinator.
#[derive(Copy, Clone)]
pub struct Request<'a> {
    pub loc: Location,
    pub ty: TypeRef<'a>,
    /// The construct needing the descriptor, named in diagnostics.
    pub origin: Option<Name>,
}

impl<'a> Request<'a> {
    pub fn new(loc: Location, ty: TypeRef<'a>) -> Self {
        Request {
            loc,
            ty,
            origin: None,
        }
    }

    /// Request for a canonical type.
    pub fn canonical(loc: Location, ty: Idx) -> Self {
        Self::new(loc, TypeRef::Canonical(ty))
    }

    /// Request for an as-written expression, located at the expression.
    pub fn written(arena: &'a TypeExprArena, expr: TypeExprId) -> Self {
        Self::new(
            Location::from_span(arena.span(expr)),
            TypeRef::Written { arena, expr },
        )
    }

    #[must_use]
    pub fn with_origin(mut self, origin: Name) -> Self {
        self.origin = Some(origin);
        self
    }
}
