//! As-written type expressions.
//!
//! The semantic analyzer records the type a program *wrote* at each
//! type-info request site. Several expressions may denote the same
//! canonical type (`string`, `immutable(char)[]`, an alias of either), and
//! descriptor generation remembers which descriptor each expression was
//! resolved to. [`TypeExprArena::canonicalize`] folds an expression into
//! the [`Pool`].

use rtti_ir::{Name, Span};

use crate::{ensure_sufficient_stack, Idx, Mods, Pool};

/// Index of a type expression in a [`TypeExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeExprId(u32);

impl TypeExprId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TypeExprId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A type as written in source.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TypeExpr {
    /// Already resolved to a pool type (keywords, aggregate names).
    Resolved(Idx),
    /// A named alias of another expression.
    Alias { name: Name, target: TypeExprId },
    /// `const(T)`, `shared(T)`, ...
    Qualified { mods: Mods, inner: TypeExprId },
    /// `T*`
    Pointer(TypeExprId),
    /// `T[]`
    Slice(TypeExprId),
    /// `T[N]`
    StaticArray { elem: TypeExprId, len: u32 },
    /// `V[K]`
    Map { key: TypeExprId, value: TypeExprId },
    /// `(T, U, ...)`
    Tuple(Vec<TypeExprId>),
}

/// Storage for the type expressions of one compilation.
#[derive(Default)]
pub struct TypeExprArena {
    exprs: Vec<TypeExpr>,
    spans: Vec<Span>,
}

impl TypeExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an expression written at `span`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "expression ids are 32-bit by layout"
    )]
    pub fn alloc(&mut self, expr: TypeExpr, span: Span) -> TypeExprId {
        let id = TypeExprId(self.exprs.len() as u32);
        self.exprs.push(expr);
        self.spans.push(span);
        id
    }

    #[inline]
    pub fn get(&self, id: TypeExprId) -> &TypeExpr {
        &self.exprs[id.index()]
    }

    /// Source location of an expression.
    #[inline]
    pub fn span(&self, id: TypeExprId) -> Span {
        self.spans[id.index()]
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Resolve an expression to its canonical pool type.
    ///
    /// Aliases are transparent and nested qualifiers merge, so
    /// `const(const(int))` and `alias CI = const(int)` both yield the same
    /// `Idx` as `const(int)`.
    pub fn canonicalize(&self, pool: &mut Pool, id: TypeExprId) -> Idx {
        ensure_sufficient_stack(|| match self.get(id) {
            TypeExpr::Resolved(idx) => *idx,
            TypeExpr::Alias { target, .. } => self.canonicalize(pool, *target),
            TypeExpr::Qualified { mods, inner } => {
                let inner = self.canonicalize(pool, *inner);
                pool.qualified(inner, *mods)
            }
            TypeExpr::Pointer(inner) => {
                let inner = self.canonicalize(pool, *inner);
                pool.pointer(inner)
            }
            TypeExpr::Slice(elem) => {
                let elem = self.canonicalize(pool, *elem);
                pool.slice(elem)
            }
            TypeExpr::StaticArray { elem, len } => {
                let elem = self.canonicalize(pool, *elem);
                pool.static_array(elem, *len)
            }
            TypeExpr::Map { key, value } => {
                let key = self.canonicalize(pool, *key);
                let value = self.canonicalize(pool, *value);
                pool.map(key, value)
            }
            TypeExpr::Tuple(elems) => {
                let elems: Vec<Idx> = elems.iter().map(|&e| self.canonicalize(pool, e)).collect();
                pool.tuple(&elems)
            }
        })
    }
}
