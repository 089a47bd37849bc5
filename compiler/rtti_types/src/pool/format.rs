//! Human-readable rendering of pool types for diagnostics and traces.

use std::fmt::Write;

use rtti_ir::StringInterner;

use crate::{ensure_sufficient_stack, Idx, Mods, Pool, Tag};

impl Pool {
    /// Render `idx` in source syntax, e.g. `shared(const(int))[]`.
    pub fn display(&self, idx: Idx, interner: &StringInterner) -> String {
        let mut out = String::new();
        self.write_type(&mut out, idx, interner);
        out
    }

    fn write_type(&self, out: &mut String, idx: Idx, interner: &StringInterner) {
        ensure_sufficient_stack(|| {
            let mods = self.mods(idx);
            if mods.is_empty() {
                self.write_unqualified(out, idx, interner);
                return;
            }

            let wrappers = qualifier_wrappers(mods);
            for w in &wrappers {
                out.push_str(w);
                out.push('(');
            }
            self.write_unqualified(out, self.unqualified(idx), interner);
            for _ in &wrappers {
                out.push(')');
            }
        });
    }

    fn write_unqualified(&self, out: &mut String, idx: Idx, interner: &StringInterner) {
        let tag = self.tag(idx);
        match tag {
            _ if tag.is_primitive() => out.push_str(tag.name()),
            Tag::Null => out.push_str("typeof(null)"),
            Tag::Pointer => {
                self.write_next(out, idx, interner);
                out.push('*');
            }
            Tag::Slice => {
                self.write_next(out, idx, interner);
                out.push_str("[]");
            }
            Tag::StaticArray => {
                self.write_next(out, idx, interner);
                let _ = write!(out, "[{}]", self.static_array_len(idx));
            }
            Tag::Vector => {
                out.push_str("__vector(");
                self.write_next(out, idx, interner);
                let _ = write!(out, "[{}])", self.vector_lanes(idx));
            }
            Tag::Map => {
                self.write_type(out, self.map_value(idx), interner);
                out.push('[');
                self.write_type(out, self.map_key(idx), interner);
                out.push(']');
            }
            Tag::Function => self.write_signature(out, idx, "function", interner),
            Tag::Delegate => {
                if let Some(func) = self.next(idx) {
                    self.write_signature(out, func, "delegate", interner);
                }
            }
            Tag::Tuple => {
                out.push('(');
                self.write_list(out, &self.tuple_elems(idx), interner);
                out.push(')');
            }
            Tag::Struct | Tag::Class => {
                let agg = self.aggregate(self.aggregate_of(idx));
                out.push_str(interner.lookup(agg.name));
            }
            Tag::Enum => out.push_str(interner.lookup(self.enum_name(idx))),
            // Primitive tags are handled by the guard above.
            _ => out.push_str(tag.name()),
        }
    }

    fn write_next(&self, out: &mut String, idx: Idx, interner: &StringInterner) {
        if let Some(next) = self.next(idx) {
            self.write_type(out, next, interner);
        }
    }

    fn write_signature(&self, out: &mut String, func: Idx, keyword: &str, interner: &StringInterner) {
        self.write_next(out, func, interner);
        out.push(' ');
        out.push_str(keyword);
        out.push('(');
        self.write_list(out, &self.function_params(func), interner);
        out.push(')');
    }

    fn write_list(&self, out: &mut String, items: &[Idx], interner: &StringInterner) {
        for (i, &item) in items.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_type(out, item, interner);
        }
    }
}

/// Qualifier keywords, outermost first.
fn qualifier_wrappers(mods: Mods) -> Vec<&'static str> {
    if mods.is_immutable() {
        return vec!["immutable"];
    }
    let mut wrappers = Vec::with_capacity(3);
    if mods.is_shared() {
        wrappers.push("shared");
    }
    if mods.is_const() {
        wrappers.push("const");
    }
    if mods.is_wild() {
        wrappers.push("inout");
    }
    wrappers
}
