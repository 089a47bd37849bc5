//! Compilation-mode settings and the runtime declarations descriptors
//! instantiate.

use rtti_ir::{Name, StringInterner};
use rtti_types::Idx;

use crate::RuntimeClass;

/// Name of the foundational descriptor class in the `object` module.
pub const BASE_DECL_NAME: &str = "TypeInfo";

/// Descriptor-generation settings for one compilation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeInfoConfig {
    /// Runtime type information may be generated. Off in reduced-runtime
    /// builds, where only compile-time evaluation may ask for descriptors.
    pub use_type_info: bool,
    /// Write each directly-serialized descriptor to its own object file.
    pub multi_object: bool,
}

impl Default for TypeInfoConfig {
    fn default() -> Self {
        TypeInfoConfig {
            use_type_info: true,
            multi_object: false,
        }
    }
}

impl TypeInfoConfig {
    /// Config for a build without runtime type information.
    pub fn reduced_runtime() -> Self {
        TypeInfoConfig {
            use_type_info: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_type_info(mut self, enabled: bool) -> Self {
        self.use_type_info = enabled;
        self
    }

    #[must_use]
    pub fn with_multi_object(mut self, enabled: bool) -> Self {
        self.multi_object = enabled;
        self
    }
}

/// Runtime classes found in the standard environment.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct RuntimeDecls {
    base: Option<Idx>,
    classes: [Option<Idx>; RuntimeClass::COUNT],
}

impl RuntimeDecls {
    /// An environment with nothing declared.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up the base class and every kind-specific class by name.
    pub fn resolve(interner: &StringInterner, mut lookup: impl FnMut(Name) -> Option<Idx>) -> Self {
        let mut decls = RuntimeDecls {
            base: lookup(interner.intern(BASE_DECL_NAME)),
            ..Self::default()
        };
        for class in RuntimeClass::ALL {
            decls.classes[class.index()] = lookup(interner.intern(class.decl_name()));
        }
        decls
    }

    #[must_use]
    pub fn with_base(mut self, ty: Idx) -> Self {
        self.base = Some(ty);
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: RuntimeClass, ty: Idx) -> Self {
        self.classes[class.index()] = Some(ty);
        self
    }

    /// The foundational descriptor class.
    #[inline]
    pub fn base(&self) -> Option<Idx> {
        self.base
    }

    #[inline]
    pub fn class(&self, class: RuntimeClass) -> Option<Idx> {
        self.classes[class.index()]
    }

    /// The class a descriptor of `class` is typed as: the kind-specific
    /// class when declared, otherwise the base class.
    pub fn class_or_base(&self, class: Option<RuntimeClass>) -> Option<Idx> {
        class.and_then(|c| self.class(c)).or(self.base)
    }
}
