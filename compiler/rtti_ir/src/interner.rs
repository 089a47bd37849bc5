//! Sharded string interner for identifiers.
//!
//! Aggregate names, alias names and runtime class names all go through
//! here. Lookups are O(1); each shard has its own lock so concurrent
//! front-end threads can intern without contending on one map.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::Name;

/// Names of the runtime declarations every compilation looks up.
///
/// Pre-interned so the standard environment can be probed without
/// allocating.
const RUNTIME_NAMES: &[&str] = &[
    "object",
    "TypeInfo",
    "TypeInfo_Pointer",
    "TypeInfo_Array",
    "TypeInfo_StaticArray",
    "TypeInfo_AssociativeArray",
    "TypeInfo_Struct",
    "TypeInfo_Vector",
    "TypeInfo_Enum",
    "TypeInfo_Function",
    "TypeInfo_Delegate",
    "TypeInfo_Tuple",
    "TypeInfo_Interface",
    "TypeInfo_Class",
    "TypeInfo_Shared",
    "TypeInfo_Const",
    "TypeInfo_Invariant",
    "TypeInfo_Inout",
];

/// Per-shard storage for interned strings.
struct InternShard {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

impl InternShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        }
    }

    fn with_empty() -> Self {
        let mut shard = Self::new();
        shard.map.insert("", 0);
        shard.strings.push("");
        shard
    }
}

/// Sharded string interner.
///
/// Strings are leaked on insertion, so looked-up strings live for the
/// rest of the process.
pub struct StringInterner {
    shards: [RwLock<InternShard>; Name::NUM_SHARDS],
}

impl StringInterner {
    /// Create a new interner with the runtime declaration names pre-interned.
    pub fn new() -> Self {
        let shards = std::array::from_fn(|i| {
            if i == 0 {
                RwLock::new(InternShard::with_empty())
            } else {
                RwLock::new(InternShard::new())
            }
        });

        let interner = Self { shards };
        for name in RUNTIME_NAMES {
            interner.intern(name);
        }
        interner
    }

    #[inline]
    fn shard_for(s: &str) -> usize {
        let mut hash = 0u32;
        for byte in s.bytes().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        (hash as usize) % Name::NUM_SHARDS
    }

    /// Intern a string, returning its `Name`.
    ///
    /// # Panics
    /// Panics if a shard runs out of local indices.
    pub fn intern(&self, s: &str) -> Name {
        let shard_idx = Self::shard_for(s);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "shard_idx is bounded by NUM_SHARDS (16)"
        )]
        let shard_idx_u32 = shard_idx as u32;
        let shard = &self.shards[shard_idx];

        if let Some(&local) = shard.read().map.get(s) {
            return Name::new(shard_idx_u32, local);
        }

        let mut guard = shard.write();

        // Another thread may have inserted between the two locks.
        if let Some(&local) = guard.map.get(s) {
            return Name::new(shard_idx_u32, local);
        }

        let count = guard.strings.len();
        let Some(local) = u32::try_from(count)
            .ok()
            .filter(|&local| local <= Name::MAX_LOCAL)
        else {
            panic!(
                "interner shard {shard_idx} exceeded capacity: {count} names, max is {}",
                Name::MAX_LOCAL
            );
        };

        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, local);
        Name::new(shard_idx_u32, local)
    }

    /// Look up the string for a `Name`.
    pub fn lookup(&self, name: Name) -> &'static str {
        let guard = self.shards[name.shard()].read();
        guard.strings[name.local()]
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
